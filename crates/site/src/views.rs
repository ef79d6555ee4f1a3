//! View models handed to the templates.
//!
//! Templates only see owned strings and vectors; every link is already prefixed with the
//! configured base URL.

use folio_core::motion::Timeline;
use folio_core::{ContentRecord, NarrativeBody, Section, SiteConfig};

/// Step between consecutive items of a staggered list, in seconds.
pub const STAGGER_STEP: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub fn nav_items(config: &SiteConfig) -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|section| NavItem {
            label: section.label().to_string(),
            href: config.href(&section.href()),
            active: *section == Section::Home,
        })
        .collect()
}

/// Summary card on the home page.
#[derive(Debug, Clone)]
pub struct CardView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub href: String,
    pub link: Option<String>,
    pub delay: f64,
}

impl CardView {
    pub fn new(config: &SiteConfig, record: &ContentRecord, index: usize, timeline: &Timeline) -> Self {
        Self {
            title: record.title.to_string(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            image: record.card_image().map(|i| asset_href(config, i.as_str())),
            href: config.href(&record.detail_path()),
            link: record.link.as_ref().map(ToString::to_string),
            delay: timeline.stagger_delay(index, STAGGER_STEP),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskView {
    pub text: String,
    pub delay: f64,
}

#[derive(Debug, Clone)]
pub struct NarrativeView {
    pub label: String,
    pub paragraph: Option<String>,
    pub tasks: Vec<TaskView>,
}

/// A resolved record laid out for its detail page.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub images: Vec<String>,
    pub narrative: Vec<NarrativeView>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

impl DetailView {
    pub fn new(config: &SiteConfig, record: &ContentRecord, task_timeline: &Timeline) -> Self {
        let narrative = record
            .narrative_fields
            .iter()
            .map(|field| match &field.body {
                NarrativeBody::Paragraph(text) => NarrativeView {
                    label: field.label.to_string(),
                    paragraph: Some(text.clone()),
                    tasks: Vec::new(),
                },
                NarrativeBody::Tasks(tasks) => NarrativeView {
                    label: field.label.to_string(),
                    paragraph: None,
                    tasks: tasks
                        .iter()
                        .enumerate()
                        .map(|(index, text)| TaskView {
                            text: text.clone(),
                            delay: task_timeline.stagger_delay(index, STAGGER_STEP),
                        })
                        .collect(),
                },
            })
            .collect();

        Self {
            title: record.title.to_string(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            images: record
                .images
                .iter()
                .map(|i| asset_href(config, i.as_str()))
                .collect(),
            narrative,
            tags: record.tags.clone(),
            link: record.link.as_ref().map(ToString::to_string),
        }
    }
}

/// Site-absolute asset paths get the base URL; absolute URLs are left alone.
fn asset_href(config: &SiteConfig, path: &str) -> String {
    if path.starts_with('/') {
        config.href(path)
    } else {
        path.to_string()
    }
}
