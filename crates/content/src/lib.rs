//! Portfolio content: typed records, the CMS wire format, and the fetch seam.
//!
//! Sections are loaded once per page session through a [`ContentSource`]. A
//! failed or empty fetch is never an end-user error; loaders log it and fall
//! back to the static content baked into [`fallback`].

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod loader;
pub mod query;
pub mod records;
pub mod source;
pub mod wire;

pub use cache::CachedSource;
pub use config::{CmsConfig, FallbackPolicy};
pub use error::{ConfigError, DecodeError, FetchError};
pub use loader::{SiteContent, fetch_all, fetch_one};
pub use query::{ContentKind, EntriesQuery};
pub use records::*;
pub use source::{ContentSource, LocalBoxFuture, StaticSource, decode_http_response};
pub use wire::{AssetRef, EntriesResponse, Entry, FromEntry, Includes};
