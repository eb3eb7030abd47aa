use dioxus::prelude::*;

use crate::core::context::{use_locale, use_site_config};
use crate::core::seo;
use crate::t;

/// Per-page `<head>` metadata: title, description, canonical URL and hreflang alternates.
#[component]
pub fn SeoHead(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(into, default = "/".to_string())] path: String,
) -> Element {
    let locale = use_locale().read().active();
    let config = use_site_config();

    let page_title = seo::page_title(title.as_deref(), &config.site_name, locale);
    let description = description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| t!(locale, "seo.default_description"));
    let canonical = seo::localized_url(&config.base_url, &path, locale);
    let alternates = seo::alternates(&config.base_url, &path);

    rsx! {
        document::Title { "{page_title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { property: "og:title", content: "{page_title}" }
        document::Meta { property: "og:description", content: "{description}" }
        document::Meta { property: "og:url", content: "{canonical}" }
        document::Meta { property: "og:locale", content: "{locale.hreflang()}" }
        document::Link { rel: "canonical", href: "{canonical}" }
        for alt in alternates {
            document::Link {
                key: "{alt.hreflang}",
                rel: "alternate",
                hreflang: "{alt.hreflang}",
                href: "{alt.href}",
            }
        }
    }
}
