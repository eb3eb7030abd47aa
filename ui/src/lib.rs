//! Shared UI crate for Folio. Locale handling, content projection and every
//! view live here; the `web` and `desktop` crates only add routing and launch.

pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

use dioxus::prelude::*;

/// Shared theme stylesheet; the desktop launcher inlines the same file.
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

pub mod components {
    // Localized site navbar with the language picker (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::{blog_link, home_link, post_link};
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Per-page title, description and hreflang links (components/seo_head.rs)
    mod seo_head;
    pub use seo_head::SeoHead;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
