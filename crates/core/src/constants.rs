//! Constants used throughout the folio crates.

/// Default listen address for the web server.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Default directory holding images and documents served next to the pages.
pub const DEFAULT_ASSETS_DIR: &str = "public";

/// Entry point every "go back" action points at.
pub const ENTRY_POINT: &str = "/";

/// Route prefix for work experience detail pages.
pub const WORKS_ROUTE: &str = "works";

/// Route prefix for project detail pages.
pub const PROJECTS_ROUTE: &str = "projects";

/// Filename written for each page during static export.
pub const INDEX_HTML_FILENAME: &str = "index.html";

/// Filename of the not-found page written during static export.
pub const NOT_FOUND_HTML_FILENAME: &str = "404.html";
