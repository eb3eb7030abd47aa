use dioxus::prelude::*;

use crate::core::context::{use_locale, use_site_config};
use crate::t;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale().read().active();
    let config = use_site_config();

    rsx! {
        section { id: "home", class: "section hero",
            p { class: "hero__greeting", {t!(locale, "hero.greeting", name = config.site_name)} }
            h1 { class: "hero__title", {t!(locale, "hero.title")} }
            div { class: "hero__actions",
                a { class: "button button--primary", href: "/#apps", {t!(locale, "hero.cta_primary")} }
                a { class: "button button--ghost", href: "/blog", {t!(locale, "hero.cta_secondary")} }
            }
        }
    }
}
