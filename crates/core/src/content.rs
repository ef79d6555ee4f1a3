//! Content records: one displayable unit of portfolio content.

use crate::FolioResult;
use folio_types::{AssetPath, NonEmptyText, Slug};
use serde::Serialize;

/// Which detail route a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Work,
    Project,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Work, ContentKind::Project];

    /// Route segment the detail pages of this kind live under.
    pub fn route_segment(self) -> &'static str {
        match self {
            ContentKind::Work => crate::constants::WORKS_ROUTE,
            ContentKind::Project => crate::constants::PROJECTS_ROUTE,
        }
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == segment)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Work => f.pad("work"),
            ContentKind::Project => f.pad("project"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = crate::FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" | "works" => Ok(ContentKind::Work),
            "project" | "projects" => Ok(ContentKind::Project),
            other => Err(crate::FolioError::InvalidInput(format!(
                "unknown content kind {other:?}"
            ))),
        }
    }
}

/// Body of a labelled narrative block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NarrativeBody {
    Paragraph(String),
    Tasks(Vec<String>),
}

/// A labelled block of text such as "About OSEP" or "Tasks Performed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeField {
    pub label: NonEmptyText,
    pub body: NarrativeBody,
}

impl NarrativeField {
    pub fn paragraph(label: &str, text: impl Into<String>) -> FolioResult<Self> {
        Ok(Self {
            label: NonEmptyText::new(label)?,
            body: NarrativeBody::Paragraph(text.into()),
        })
    }

    pub fn tasks<I, S>(label: &str, tasks: I) -> FolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            label: NonEmptyText::new(label)?,
            body: NarrativeBody::Tasks(tasks.into_iter().map(Into::into).collect()),
        })
    }
}

/// One detail-page entry: a work experience or a project.
///
/// Records are assembled with the chained setters below and are never mutated once they
/// are handed to a [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub id: Slug,
    pub kind: ContentKind,
    pub title: NonEmptyText,
    pub subtitle: String,
    pub description: String,
    pub narrative_fields: Vec<NarrativeField>,
    pub tags: Vec<String>,
    pub images: Vec<AssetPath>,
    pub cover: Option<AssetPath>,
    pub link: Option<AssetPath>,
}

impl ContentRecord {
    pub fn new(kind: ContentKind, id: &str, title: &str) -> FolioResult<Self> {
        Ok(Self {
            id: Slug::new(id)?,
            kind,
            title: NonEmptyText::new(title)?,
            subtitle: String::new(),
            description: String::new(),
            narrative_fields: Vec::new(),
            tags: Vec::new(),
            images: Vec::new(),
            cover: None,
            link: None,
        })
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn narrative(mut self, field: NarrativeField) -> Self {
        self.narrative_fields.push(field);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn images<I, S>(mut self, images: I) -> FolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images
            .into_iter()
            .map(AssetPath::new)
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn cover(mut self, cover: impl Into<String>) -> FolioResult<Self> {
        self.cover = Some(AssetPath::new(cover)?);
        Ok(self)
    }

    pub fn link(mut self, link: impl Into<String>) -> FolioResult<Self> {
        self.link = Some(AssetPath::new(link)?);
        Ok(self)
    }

    /// Site-absolute path of this record's detail page.
    pub fn detail_path(&self) -> String {
        format!("/{}/{}", self.kind.route_segment(), self.id)
    }

    /// Image used on the summary card: the explicit cover, else the first image.
    pub fn card_image(&self) -> Option<&AssetPath> {
        self.cover.as_ref().or_else(|| self.images.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_uses_kind_segment() {
        let work = ContentRecord::new(ContentKind::Work, "osep-statistician", "OSEP").unwrap();
        let project = ContentRecord::new(ContentKind::Project, "foot-analyst", "Foot").unwrap();
        assert_eq!(work.detail_path(), "/works/osep-statistician");
        assert_eq!(project.detail_path(), "/projects/foot-analyst");
    }

    #[test]
    fn setters_keep_declared_order() {
        let record = ContentRecord::new(ContentKind::Project, "p", "P")
            .unwrap()
            .tags(["b", "a", "c"])
            .images(["/2.png", "/1.png"])
            .unwrap();
        assert_eq!(record.tags, vec!["b", "a", "c"]);
        let images: Vec<&str> = record.images.iter().map(|i| i.as_str()).collect();
        assert_eq!(images, vec!["/2.png", "/1.png"]);
    }

    #[test]
    fn card_image_prefers_cover() {
        let record = ContentRecord::new(ContentKind::Work, "w", "W")
            .unwrap()
            .images(["/a.png", "/b.png"])
            .unwrap();
        assert_eq!(record.card_image().map(|i| i.as_str()), Some("/a.png"));

        let record = record.cover("/b.png").unwrap();
        assert_eq!(record.card_image().map(|i| i.as_str()), Some("/b.png"));
    }

    #[test]
    fn new_rejects_bad_authoring() {
        assert!(ContentRecord::new(ContentKind::Work, "Bad Id", "T").is_err());
        assert!(ContentRecord::new(ContentKind::Work, "ok", "   ").is_err());
        assert!(ContentRecord::new(ContentKind::Work, "ok", "T")
            .unwrap()
            .images(["relative.png"])
            .is_err());
    }

    #[test]
    fn kind_display_pads_for_columns() {
        assert_eq!(format!("[{:<8}]", ContentKind::Work), "[work    ]");
        assert_eq!(format!("[{:<8}]", ContentKind::Project), "[project ]");
    }

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!("works".parse::<ContentKind>().unwrap(), ContentKind::Work);
        assert_eq!("project".parse::<ContentKind>().unwrap(), ContentKind::Project);
        assert!("Works".parse::<ContentKind>().is_err());
        assert_eq!(ContentKind::from_route_segment("projects"), Some(ContentKind::Project));
        assert_eq!(ContentKind::from_route_segment("work"), None);
    }
}
