//! # Folio Core
//!
//! Content and behaviour behind the portfolio site, free of any rendering or HTTP concerns:
//! - the content [`Registry`] and its resolver
//! - literal home page content ([`portfolio`])
//! - named destinations and route parsing ([`navigation`])
//! - declarative animation timelines ([`motion`])
//! - per-view ephemeral state ([`view_state`])
//!
//! Rendering lives in `folio-site`; serving lives in `folio-web`.

pub mod catalogue;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod motion;
pub mod navigation;
pub mod portfolio;
pub mod registry;
pub mod view_state;

pub use config::SiteConfig;
pub use constants::*;
pub use content::{ContentKind, ContentRecord, NarrativeBody, NarrativeField};
pub use error::{FolioError, FolioResult};
pub use navigation::{Route, Section};
pub use registry::{Registry, Resolution};

pub use folio_types::{AssetPath, NonEmptyText, Slug};
