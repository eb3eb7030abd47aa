//! Platform-agnostic site logic: content records, projection, filtering, SEO.

pub mod config;
pub mod context;
pub mod filter;
pub mod format;
pub mod platform;
pub mod projector;
pub mod record;
pub mod seo;
