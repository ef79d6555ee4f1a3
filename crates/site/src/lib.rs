//! # Folio Site
//!
//! HTML rendering for the portfolio: the home page, one detail page per registry record and
//! the not-found page.
//!
//! Detail pages follow a fixed contract:
//! - title and subtitle always render
//! - the image block renders only when the record has images
//! - narrative fields and tags render in declared order
//!
//! An id with no registry entry renders the not-found page, which offers exactly one way
//! out: a link back to the entry point.

pub mod export;
pub mod pages;
pub mod views;

use askama::Template;
use chrono::Datelike;
use folio_core::motion::{self, Timeline};
use folio_core::portfolio::{self, Profile};
use folio_core::{
    ContentKind, FolioError, FolioResult, Registry, Resolution, Route, Section, SiteConfig,
    ENTRY_POINT,
};
use pages::{DetailTemplate, HomeTemplate, NotFoundTemplate};
use views::{CardView, DetailView};

/// HTTP-level outcome of rendering a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: PageStatus,
    pub html: String,
}

impl Page {
    fn ok(html: String) -> Self {
        Self {
            status: PageStatus::Ok,
            html,
        }
    }

    fn not_found(html: String) -> Self {
        Self {
            status: PageStatus::NotFound,
            html,
        }
    }
}

/// Everything needed to render the site. Built once; rendering never mutates it.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    registry: Registry,
    profile: Profile,
    styles: String,
}

impl Site {
    pub fn new(config: SiteConfig, registry: Registry) -> Self {
        Self {
            config,
            registry,
            profile: portfolio::profile(),
            styles: motion::stylesheet(),
        }
    }

    /// The site with the built-in catalogue.
    pub fn builtin(config: SiteConfig) -> FolioResult<Self> {
        Ok(Self::new(config, folio_core::catalogue::registry()?))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn render_home(&self) -> FolioResult<String> {
        let card_timeline = preset("fade-in-up");
        let cards = |kind: ContentKind| -> Vec<CardView> {
            self.registry
                .records_of(kind)
                .enumerate()
                .map(|(index, record)| CardView::new(&self.config, record, index, &card_timeline))
                .collect()
        };

        let template = HomeTemplate {
            styles: self.styles.clone(),
            profile: self.profile.clone(),
            nav: views::nav_items(&self.config),
            home_href: self.config.href(ENTRY_POINT),
            projects_href: self.config.href(&Section::Projects.href()),
            contact_href: self.config.href(&Section::Contact.href()),
            cv_href: self.config.href(self.profile.hero.cv_path),
            portrait_href: self.config.href(self.profile.hero.portrait),
            works: cards(ContentKind::Work),
            projects: cards(ContentKind::Project),
            year: chrono::Utc::now().year(),
        };
        render("home", &template)
    }

    /// Render the detail page for `id` under `kind`, or the not-found page.
    pub fn render_detail(&self, kind: ContentKind, id: &str) -> FolioResult<Page> {
        match self.registry.resolve_in(kind, id) {
            Resolution::Found(record) => {
                let template = DetailTemplate {
                    styles: self.styles.clone(),
                    detail: DetailView::new(&self.config, record, &preset("slide-in-left")),
                    home_href: self.config.href(ENTRY_POINT),
                };
                Ok(Page::ok(render(record.id.as_str(), &template)?))
            }
            Resolution::NotFound => {
                let heading = match kind {
                    ContentKind::Work => "Work Not Found",
                    ContentKind::Project => "Project Not Found",
                };
                self.render_not_found(heading).map(Page::not_found)
            }
        }
    }

    pub fn render_not_found(&self, heading: &str) -> FolioResult<String> {
        let template = NotFoundTemplate {
            styles: self.styles.clone(),
            heading: heading.to_string(),
            home_href: self.config.href(ENTRY_POINT),
        };
        render("not-found", &template)
    }

    /// Render whatever `path` points at.
    ///
    /// Section routes render the home document; callers serving HTTP usually redirect them
    /// to the section anchor instead.
    pub fn render_route(&self, path: &str) -> FolioResult<Page> {
        match Route::parse(path) {
            Route::Home | Route::Section(_) => self.render_home().map(Page::ok),
            Route::Detail { kind, id } => self.render_detail(kind, &id),
            Route::Unknown => {
                tracing::debug!(path, "unknown route");
                self.render_not_found("Page Not Found").map(Page::not_found)
            }
        }
    }
}

fn preset(name: &str) -> Timeline {
    motion::presets()
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| Timeline::new("fade-in-up", 0.6))
}

fn render<T: Template>(page: &str, template: &T) -> FolioResult<String> {
    template.render().map_err(|e| {
        tracing::error!("Render error for {}: {}", page, e);
        FolioError::Render {
            page: page.to_string(),
            message: e.to_string(),
        }
    })
}
