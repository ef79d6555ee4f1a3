//! Small validated text types shared by the folio crates.
//!
//! These types are used when content is *authored*. Lookups never go through them: a
//! resolver accepts any string and compares it byte-for-byte against authored keys.

/// Errors raised while constructing validated text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input was empty or whitespace only
    #[error("text cannot be empty")]
    Empty,
    /// A slug contained something other than `a-z`, `0-9` or `-`
    #[error("invalid slug {0:?}: only lowercase ascii letters, digits and '-' are allowed")]
    InvalidSlug(String),
    /// An asset reference was neither site-absolute nor an http(s) URL
    #[error("invalid asset path {0:?}: expected a path starting with '/' or an http(s) URL")]
    InvalidAssetPath(String),
}

/// Display text with at least one non-whitespace character.
///
/// Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// An authored identifier usable as a URL path segment.
///
/// Slugs are never normalised: `"OSEP"` is rejected rather than lower-cased, so the key
/// stored in a registry is exactly what a link must carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.is_empty() {
            return Err(TextError::Empty);
        }
        let valid = input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid || input.starts_with('-') || input.ends_with('-') {
            return Err(TextError::InvalidSlug(input));
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reference to an image or document served alongside the site.
///
/// Existence is not checked here; a missing file is a broken image, not a lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        let ok = (input.len() > 1 && input.starts_with('/'))
            || input.starts_with("https://")
            || input.starts_with("http://");
        if !ok {
            return Err(TextError::InvalidAssetPath(input));
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_rejects_blank() {
        assert_eq!(NonEmptyText::new("  R  ").unwrap().as_str(), "R");
        assert_eq!(NonEmptyText::new(" \t ").unwrap_err(), TextError::Empty);
    }

    #[test]
    fn display_honours_width() {
        let slug = Slug::new("osep").unwrap();
        assert_eq!(format!("[{:<6}]", slug), "[osep  ]");
        assert_eq!(format!("[{:>3}]", NonEmptyText::new("R").unwrap()), "[  R]");
    }

    #[test]
    fn slug_accepts_kebab_case() {
        let slug = Slug::new("osep-statistician").expect("valid slug");
        assert_eq!(slug.as_str(), "osep-statistician");
    }

    #[test]
    fn slug_rejects_upper_case_and_padding() {
        assert!(matches!(Slug::new("OSEP"), Err(TextError::InvalidSlug(_))));
        assert!(matches!(Slug::new(" foot"), Err(TextError::InvalidSlug(_))));
        assert!(matches!(Slug::new("-foot"), Err(TextError::InvalidSlug(_))));
        assert_eq!(Slug::new(""), Err(TextError::Empty));
    }

    #[test]
    fn asset_path_requires_absolute_or_url() {
        assert!(AssetPath::new("/works/osep1.png").is_ok());
        assert!(AssetPath::new("https://github.com/aboudiakiteaz12/cocoaguard").is_ok());
        assert!(AssetPath::new("osep1.png").is_err());
        assert!(AssetPath::new("/").is_err());
    }
}
