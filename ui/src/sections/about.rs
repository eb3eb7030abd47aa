use dioxus::prelude::*;

use crate::core::context::use_locale;
use crate::t;

#[component]
pub fn About() -> Element {
    let locale = use_locale().read().active();

    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section__title", {t!(locale, "about.title")} }
            p { class: "about__body", {t!(locale, "about.body")} }
        }
    }
}
