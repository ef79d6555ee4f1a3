//! Named destinations and route parsing.
//!
//! The home page is a single document with one anchor per [`Section`]. Each section also
//! has a route segment of its own (`/about-me`, `/works`, ...) that points back at the
//! anchor. Detail pages live under `/works/{id}` and `/projects/{id}`.

use crate::content::ContentKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    About,
    Education,
    Works,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections in menu order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Works,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Welcome",
            Section::About => "About me",
            Section::Education => "Educations",
            Section::Works => "Works",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Element id of the section on the home page.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "hero",
            Section::About => "about-me",
            Section::Education => "educations",
            Section::Works => "works",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Site-absolute route of the section. Home is the entry point itself.
    pub fn route(self) -> String {
        match self {
            Section::Home => crate::constants::ENTRY_POINT.to_string(),
            other => format!("/{}", other.anchor()),
        }
    }

    /// In-page link target on the home document.
    pub fn href(self) -> String {
        format!("{}#{}", crate::constants::ENTRY_POINT, self.anchor())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// What a request path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Section(Section),
    /// A detail page. `id` is the raw path segment and may be empty.
    Detail { kind: ContentKind, id: String },
    Unknown,
}

impl Route {
    /// Parse a site-absolute path.
    ///
    /// Query strings and fragments are ignored. The detail id is taken verbatim so the
    /// resolver sees exactly what the link carried.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let Some(rest) = path.strip_prefix('/') else {
            return Route::Unknown;
        };
        if rest.is_empty() {
            return Route::Home;
        }

        match rest.split_once('/') {
            None => Section::from_anchor(rest)
                .filter(|s| *s != Section::Home)
                .map_or(Route::Unknown, Route::Section),
            Some((segment, id)) => match ContentKind::from_route_segment(segment) {
                Some(kind) if !id.contains('/') => Route::Detail {
                    kind,
                    id: id.to_string(),
                },
                _ => Route::Unknown,
            },
        }
    }

    /// Inverse of [`Route::parse`] for the known variants.
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some(crate::constants::ENTRY_POINT.to_string()),
            Route::Section(section) => Some(section.route()),
            Route::Detail { kind, id } => Some(format!("/{}/{}", kind.route_segment(), id)),
            Route::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_and_sections() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about-me"), Route::Section(Section::About));
        assert_eq!(Route::parse("/works"), Route::Section(Section::Works));
        assert_eq!(Route::parse("/educations?x=1"), Route::Section(Section::Education));
        assert_eq!(Route::parse("/hero"), Route::Unknown);
        assert_eq!(Route::parse("about-me"), Route::Unknown);
    }

    #[test]
    fn parses_detail_ids_verbatim() {
        assert_eq!(
            Route::parse("/works/osep-statistician"),
            Route::Detail {
                kind: ContentKind::Work,
                id: "osep-statistician".into()
            }
        );
        assert_eq!(
            Route::parse("/projects/CocoaGuard#top"),
            Route::Detail {
                kind: ContentKind::Project,
                id: "CocoaGuard".into()
            }
        );
        assert_eq!(
            Route::parse("/works/"),
            Route::Detail {
                kind: ContentKind::Work,
                id: String::new()
            }
        );
        assert_eq!(Route::parse("/works/a/b"), Route::Unknown);
        assert_eq!(Route::parse("/skills/x"), Route::Unknown);
    }

    #[test]
    fn path_round_trips_known_routes() {
        for path in ["/", "/contact", "/projects/foot-analyst"] {
            assert_eq!(Route::parse(path).path().as_deref(), Some(path));
        }
        assert_eq!(Route::Unknown.path(), None);
    }

    #[test]
    fn every_section_has_distinct_anchor() {
        let mut anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
        assert_eq!(Section::Home.route(), "/");
        assert_eq!(Section::Skills.href(), "/#skills");
    }
}
