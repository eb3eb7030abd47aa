//! Writes `sitemap.xml`, `robots.txt` and the `_redirects` rules for the configured site.
//!
//! Usage: `cargo run -p folio-ui --bin folio-seo -- [out_dir]` (default `public/`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dioxus::logger::tracing::Level;
    use std::path::PathBuf;
    use time::OffsetDateTime;
    use ui::core::config::SiteConfig;
    use ui::core::seo;

    dioxus::logger::init(Level::INFO).ok();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public"));
    let config = SiteConfig::load();

    let today = OffsetDateTime::now_utc().date();
    if let Err(err) = seo::write_static_files(&out_dir, &config.base_url, today) {
        tracing::error!(error = %err, dir = %out_dir.display(), "could not write SEO files");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
