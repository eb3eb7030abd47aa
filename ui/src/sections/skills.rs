use dioxus::prelude::*;

use crate::core::context::use_locale;
use crate::i18n;
use crate::t;

/// Skill groups as (title key, list key).
const SKILL_GROUPS: &[(&str, &str)] = &[
    ("skills.web.title", "skills.web.items"),
    ("skills.automation.title", "skills.automation.items"),
    ("skills.marketing.title", "skills.marketing.items"),
    ("skills.creative.title", "skills.creative.items"),
];

#[component]
pub fn Skills() -> Element {
    let locale = use_locale().read().active();
    let catalog = i18n::catalog();

    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section__title", {t!(locale, "skills.title")} }
            div { class: "skills__grid",
                for (title_key, items_key) in SKILL_GROUPS.iter() {
                    article { key: "{title_key}", class: "card skills__group",
                        h3 { {catalog.translate(title_key, locale, &[])} }
                        ul { class: "skills__items",
                            for item in catalog.translate_list(items_key, locale) {
                                li { key: "{item}", class: "chip", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
