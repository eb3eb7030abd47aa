use dioxus::prelude::*;

use crate::core::context::use_locale;
use crate::i18n::{self, Locale};
use crate::t;

/// Service cards as (catalog group, icon), in display order.
const SERVICES: &[(&str, &str)] = &[
    ("services.web_app", "💻"),
    ("services.ai_automation", "🤖"),
    ("services.media_buying", "📈"),
    ("services.saas", "☁️"),
];

fn cards(locale: Locale) -> Vec<(&'static str, String, String)> {
    let catalog = i18n::catalog();
    SERVICES
        .iter()
        .map(|(group, icon)| {
            (
                *icon,
                catalog.translate(&format!("{group}.title"), locale, &[]),
                catalog.translate(&format!("{group}.desc"), locale, &[]),
            )
        })
        .collect()
}

#[component]
pub fn Services() -> Element {
    let locale = use_locale().read().active();

    rsx! {
        section { id: "services", class: "section services",
            h2 { class: "section__title", {t!(locale, "services.title")} }
            p { class: "section__subtitle", {t!(locale, "services.subtitle")} }
            div { class: "services__grid",
                for (icon, title, desc) in cards(locale) {
                    article { key: "{title}", class: "card services__card",
                        span { class: "services__icon", aria_hidden: "true", "{icon}" }
                        h3 { "{title}" }
                        p { "{desc}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_is_translated() {
        let catalog = i18n::catalog();
        for locale in Locale::ALL {
            for (group, _) in SERVICES {
                for field in ["title", "desc"] {
                    let key = format!("{group}.{field}");
                    assert!(catalog.contains(&key, locale), "{key} missing for {locale}");
                }
            }
        }
    }

    #[test]
    fn cards_follow_active_locale() {
        let en = cards(Locale::En);
        let ar = cards(Locale::Ar);
        assert_eq!(en.len(), SERVICES.len());
        assert_ne!(en[1].1, ar[1].1);
    }
}
