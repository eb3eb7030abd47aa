//! Content store access for Folio.
//!
//! The site never talks to the hosted database directly: every section asks a
//! [`ContentStore`] for the rows of one [`Collection`]. Two implementations ship:
//! - [`RestContentStore`] – PostgREST-style hosted tables over HTTPS.
//! - [`StaticContentStore`] – rows from an embedded JSON document (offline/demo builds, tests).
//!
//! Rows are returned untouched (`serde_json` objects). Turning the per-language
//! columns into localized fields is the caller's job.

mod collection;
mod error;
mod rest;
mod seed;
mod store;

pub use collection::{Collection, Ordering};
pub use error::ContentFetchError;
pub use rest::RestContentStore;
pub use seed::StaticContentStore;
pub use store::{fetch_or_empty, ContentStore, Row};
