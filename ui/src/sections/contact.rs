use dioxus::prelude::*;

use crate::core::context::{use_locale, use_site_config};
use crate::t;

#[component]
pub fn Contact() -> Element {
    let locale = use_locale().read().active();
    let contact = use_site_config().contact;
    let mailto = contact.mailto_url();
    let whatsapp = contact.whatsapp_url(&t!(locale, "contact.whatsapp_message"));

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section__title", {t!(locale, "contact.title")} }
            p { class: "section__subtitle", {t!(locale, "contact.subtitle")} }
            div { class: "contact__actions",
                if let Some(href) = mailto {
                    a { class: "button button--primary", href: "{href}", {t!(locale, "contact.email")} }
                }
                if let Some(href) = whatsapp {
                    a {
                        class: "button button--ghost",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!(locale, "contact.whatsapp")}
                    }
                }
            }
        }
    }
}
