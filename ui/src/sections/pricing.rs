use dioxus::prelude::*;

use crate::core::config::ContactConfig;
use crate::core::context::{use_locale, use_site_config};
use crate::i18n::{self, Locale};
use crate::t;

/// Packages as (catalog group, highlighted), cheapest first.
const PACKAGES: &[(&str, bool)] = &[
    ("pricing.starter", false),
    ("pricing.professional", true),
    ("pricing.enterprise", false),
];

/// One package card resolved for a language.
#[derive(Debug, Clone, PartialEq)]
struct PackageCard {
    name: String,
    description: String,
    price: String,
    duration: String,
    features: Vec<String>,
    popular: bool,
    cta_href: Option<String>,
}

impl PackageCard {
    fn class(&self) -> &'static str {
        if self.popular {
            "card pricing__card pricing__card--popular"
        } else {
            "card pricing__card"
        }
    }
}

fn package_cards(locale: Locale, contact: &ContactConfig) -> Vec<PackageCard> {
    let catalog = i18n::catalog();
    let text =
        |group: &str, field: &str| catalog.translate(&format!("{group}.{field}"), locale, &[]);

    PACKAGES
        .iter()
        .map(|&(group, popular)| {
            let name = text(group, "name");
            let message =
                catalog.translate("pricing.whatsapp_message", locale, &[("package", name.clone())]);
            PackageCard {
                description: text(group, "description"),
                price: text(group, "price"),
                duration: text(group, "duration"),
                features: catalog.translate_list(&format!("{group}.features"), locale),
                popular,
                cta_href: contact.whatsapp_url(&message),
                name,
            }
        })
        .collect()
}

#[component]
pub fn Pricing() -> Element {
    let locale = use_locale().read().active();
    let config = use_site_config();
    let cards = package_cards(locale, &config.contact);
    let popular_label = t!(locale, "pricing.popular");
    let cta = t!(locale, "pricing.cta");

    rsx! {
        section { id: "pricing", class: "section pricing",
            h2 { class: "section__title", {t!(locale, "pricing.title")} }
            p { class: "section__subtitle", {t!(locale, "pricing.subtitle")} }
            div { class: "pricing__grid",
                for card in cards {
                    article {
                        key: "{card.name}",
                        class: card.class(),
                        if card.popular {
                            span { class: "pricing__badge", "{popular_label}" }
                        }
                        h3 { class: "pricing__name", "{card.name}" }
                        p { class: "pricing__description", "{card.description}" }
                        p { class: "pricing__price",
                            span { class: "pricing__amount", dir: "ltr", "{card.price}" }
                            span { class: "pricing__duration", "{card.duration}" }
                        }
                        ul { class: "pricing__features",
                            for feature in card.features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                        if let Some(href) = card.cta_href.as_ref() {
                            a {
                                class: "button button--primary pricing__cta",
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{cta}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactConfig {
        ContactConfig {
            email: String::new(),
            whatsapp: "212703026422".to_string(),
        }
    }

    #[test]
    fn every_package_is_translated() {
        let catalog = i18n::catalog();
        for locale in Locale::ALL {
            for (group, _) in PACKAGES {
                for field in ["name", "description", "price", "duration", "features"] {
                    let key = format!("{group}.{field}");
                    assert!(catalog.contains(&key, locale), "{key} missing for {locale}");
                }
            }
        }
    }

    #[test]
    fn exactly_one_package_is_highlighted() {
        let cards = package_cards(Locale::En, &contact());
        assert_eq!(cards.iter().filter(|c| c.popular).count(), 1);
        assert_eq!(cards[1].name, "Professional");
    }

    #[test]
    fn feature_lists_keep_their_order() {
        let cards = package_cards(Locale::En, &contact());
        assert_eq!(cards[0].features.first().map(String::as_str), Some("Landing page design"));
        assert_eq!(cards[2].features.len(), 9);
    }

    #[test]
    fn call_to_action_names_the_package() {
        let cards = package_cards(Locale::En, &contact());
        let href = cards[0].cta_href.as_deref().unwrap();
        assert!(href.starts_with("https://wa.me/212703026422?text="));
        assert!(href.contains("Starter"));
    }

    #[test]
    fn no_call_to_action_without_a_number() {
        let cards = package_cards(Locale::Fr, &ContactConfig::default());
        assert!(cards.iter().all(|c| c.cta_href.is_none()));
    }
}
