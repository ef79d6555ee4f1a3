//! # API Shared
//!
//! Wire types for the folio JSON API.
//!
//! Contains:
//! - response bodies with OpenAPI schemas (`utoipa::ToSchema`)
//! - conversions from core content records
//! - the shared `HealthService`

pub mod health;

pub use health::HealthService;

use folio_core::{ContentRecord, NarrativeBody};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    pub records: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NarrativeFieldRes {
    pub label: String,
    /// Paragraph text; empty when the block is a task list.
    pub text: String,
    /// Task entries; empty when the block is a paragraph.
    pub tasks: Vec<String>,
}

/// Full content record as served by `GET /api/content/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentRes {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub narrative_fields: Vec<NarrativeFieldRes>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub link: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentSummaryRes {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListContentRes {
    pub records: Vec<ContentSummaryRes>,
}

/// Body returned when an id has no registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotFoundRes {
    pub id: String,
    pub message: String,
    /// Where a client should send the user instead.
    pub entry_point: String,
}

impl NotFoundRes {
    pub fn for_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            message: "Content not found".into(),
            entry_point: folio_core::ENTRY_POINT.into(),
        }
    }
}

impl From<&ContentRecord> for ContentRes {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            kind: record.kind.to_string(),
            title: record.title.to_string(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            narrative_fields: record
                .narrative_fields
                .iter()
                .map(|field| match &field.body {
                    NarrativeBody::Paragraph(text) => NarrativeFieldRes {
                        label: field.label.to_string(),
                        text: text.clone(),
                        tasks: Vec::new(),
                    },
                    NarrativeBody::Tasks(tasks) => NarrativeFieldRes {
                        label: field.label.to_string(),
                        text: String::new(),
                        tasks: tasks.clone(),
                    },
                })
                .collect(),
            tags: record.tags.clone(),
            images: record.images.iter().map(ToString::to_string).collect(),
            link: record.link.as_ref().map(ToString::to_string),
            path: record.detail_path(),
        }
    }
}

impl From<&ContentRecord> for ContentSummaryRes {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            kind: record.kind.to_string(),
            title: record.title.to_string(),
            path: record.detail_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_res_flattens_narrative() {
        let registry = folio_core::catalogue::registry().unwrap();
        let record = registry.resolve("osep-statistician").record().unwrap();
        let res = ContentRes::from(record);
        assert_eq!(res.kind, "work");
        assert_eq!(res.path, "/works/osep-statistician");
        assert_eq!(res.narrative_fields[0].label, "About OSEP");
        assert!(res.narrative_fields[0].tasks.is_empty());
        assert_eq!(res.narrative_fields[1].tasks.len(), 4);
        assert_eq!(res.images, vec!["/works/osep1.png", "/works/osep2.png"]);
    }

    #[test]
    fn not_found_points_at_entry_point() {
        let json = serde_json::to_value(NotFoundRes::for_id("nope")).unwrap();
        assert_eq!(json["entry_point"], "/");
        assert_eq!(json["id"], "nope");
    }
}
