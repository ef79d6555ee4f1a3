//! The content registry and its resolver.
//!
//! A [`Registry`] is built once at startup from authored records and is read-only from then
//! on. [`Registry::resolve`] is an exact, byte-for-byte key lookup: callers must pass the
//! authored id, so `"OSEP-statistician"` or `" osep-statistician"` do not match.

use crate::content::{ContentKind, ContentRecord};
use crate::{FolioError, FolioResult};
use folio_types::Slug;
use std::collections::HashMap;

/// Outcome of a lookup.
///
/// `NotFound` is an expected branch with its own rendering, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a ContentRecord),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn record(self) -> Option<&'a ContentRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }
}

impl<'a> From<Option<&'a ContentRecord>> for Resolution<'a> {
    fn from(value: Option<&'a ContentRecord>) -> Self {
        value.map_or(Resolution::NotFound, Resolution::Found)
    }
}

/// Fixed mapping from content id to record, iterated in authoring order.
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<ContentRecord>,
    index: HashMap<Slug, usize>,
}

impl Registry {
    /// Build a registry from authored records.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::DuplicateId`] if two records share an id, whatever their kind.
    pub fn new(records: Vec<ContentRecord>) -> FolioResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(FolioError::DuplicateId(record.id.to_string()));
            }
        }

        tracing::debug!(records = records.len(), "content registry built");
        Ok(Self { records, index })
    }

    /// Look up `id` exactly as given.
    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        let resolution: Resolution<'_> = self
            .index
            .get(id)
            .map(|&position| &self.records[position])
            .into();
        if !resolution.is_found() {
            tracing::debug!(id, "content id not found");
        }
        resolution
    }

    /// Look up `id` within one detail route. A record of another kind is not found.
    pub fn resolve_in(&self, kind: ContentKind, id: &str) -> Resolution<'_> {
        match self.resolve(id) {
            Resolution::Found(record) if record.kind == kind => Resolution::Found(record),
            Resolution::Found(record) => {
                tracing::debug!(id, expected = %kind, actual = %record.kind, "content kind mismatch");
                Resolution::NotFound
            }
            Resolution::NotFound => Resolution::NotFound,
        }
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn records_of(&self, kind: ContentKind) -> impl Iterator<Item = &ContentRecord> + '_ {
        self.records.iter().filter(move |record| record.kind == kind)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue;

    fn builtin() -> Registry {
        catalogue::registry().expect("built-in catalogue is valid")
    }

    #[test]
    fn resolves_every_authored_record_to_itself() {
        let authored = catalogue::records().expect("catalogue");
        let registry = builtin();
        for record in &authored {
            assert_eq!(registry.resolve(record.id.as_str()), Resolution::Found(record));
        }
    }

    #[test]
    fn osep_record_matches_authored_content() {
        let registry = builtin();
        let record = registry
            .resolve("osep-statistician")
            .record()
            .expect("osep record exists");
        assert_eq!(record.title.as_str(), "Statistician / Data Analyst – OSEP");
        assert_eq!(
            record.tags,
            vec!["Survey Design", "Data Analysis", "R", "ENQSP"]
        );
        assert_eq!(record.images.len(), 2);
    }

    #[test]
    fn unknown_and_near_miss_ids_are_not_found() {
        let registry = builtin();
        for id in [
            "nonexistent-id",
            "",
            "OSEP-statistician",
            "Osep-Statistician",
            " osep-statistician",
            "osep-statistician ",
            "osep-statistician/",
        ] {
            assert_eq!(registry.resolve(id), Resolution::NotFound, "id {id:?}");
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let registry = builtin();
        let first = registry.resolve("cocoaguard");
        let second = registry.resolve("cocoaguard");
        assert_eq!(first, second);
        assert_eq!(registry.resolve("missing"), registry.resolve("missing"));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn resolve_in_respects_kind() {
        let registry = builtin();
        assert!(registry
            .resolve_in(ContentKind::Work, "osep-statistician")
            .is_found());
        assert_eq!(
            registry.resolve_in(ContentKind::Work, "cocoaguard"),
            Resolution::NotFound
        );
        assert!(registry
            .resolve_in(ContentKind::Project, "cocoaguard")
            .is_found());
    }

    #[test]
    fn records_of_keeps_authoring_order() {
        let registry = builtin();
        let projects: Vec<&str> = registry
            .records_of(ContentKind::Project)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(
            projects,
            vec![
                "banking-churn-analysis",
                "foot-analyst",
                "cocoaguard",
                "servicebot",
                "govinsights"
            ]
        );
        assert_eq!(registry.records_of(ContentKind::Work).count(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected_across_kinds() {
        let records = vec![
            ContentRecord::new(ContentKind::Work, "same", "A").unwrap(),
            ContentRecord::new(ContentKind::Project, "same", "B").unwrap(),
        ];
        let err = Registry::new(records).expect_err("duplicate must fail");
        assert!(matches!(err, FolioError::DuplicateId(id) if id == "same"));
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("anything"), Resolution::NotFound);
    }
}
