use dioxus::prelude::*;

use crate::core::context::use_locale;
use crate::core::seo::faq_schema;
use crate::i18n::{self, Locale};
use crate::t;

/// FAQ entries as (question key, answer key), in display order.
pub const FAQ_KEYS: &[(&str, &str)] = &[
    ("faq.q1.question", "faq.q1.answer"),
    ("faq.q2.question", "faq.q2.answer"),
    ("faq.q3.question", "faq.q3.answer"),
    ("faq.q4.question", "faq.q4.answer"),
    ("faq.q5.question", "faq.q5.answer"),
    ("faq.q6.question", "faq.q6.answer"),
];

fn entries(locale: Locale) -> Vec<(String, String)> {
    let catalog = i18n::catalog();
    FAQ_KEYS
        .iter()
        .map(|(q, a)| (catalog.translate(q, locale, &[]), catalog.translate(a, locale, &[])))
        .collect()
}

#[component]
pub fn Faq() -> Element {
    let locale = use_locale().read().active();
    let items = entries(locale);
    let schema = faq_schema(items.iter().map(|(q, a)| (q.as_str(), a.as_str()))).to_string();

    rsx! {
        document::Script { r#type: "application/ld+json", "{schema}" }
        section { id: "faq", class: "section faq",
            h2 { class: "section__title", {t!(locale, "faq.title")} }
            p { class: "section__subtitle", {t!(locale, "faq.subtitle")} }
            div { class: "faq__list",
                for (question, answer) in items {
                    details { key: "{question}", class: "card faq__item",
                        summary { "{question}" }
                        p { "{answer}" }
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
    fn every_faq_key_exists_in_every_locale() {
        let catalog = i18n::catalog();
        for locale in Locale::ALL {
            for (q, a) in FAQ_KEYS {
                assert!(catalog.contains(q, locale), "{q} missing for {locale}");
                assert!(catalog.contains(a, locale), "{a} missing for {locale}");
            }
        }
    }

    #[test]
    fn entries_follow_active_locale() {
        let en = entries(Locale::En);
        let fr = entries(Locale::Fr);
        assert_eq!(en.len(), FAQ_KEYS.len());
        assert_ne!(en[0].0, fr[0].0);
    }
}
