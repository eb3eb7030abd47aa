use api::Collection;
use dioxus::prelude::*;

use crate::core::context::{use_locale, use_projected};
use crate::core::format::format_timestamp;
use crate::core::record::ProjectedRecord;
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn Certifications() -> Element {
    let locale = use_locale().read().active();
    let projected = use_projected(Collection::Certifications);

    let body = match projected.read().as_ref() {
        None => rsx! { p { class: "state state--loading", {t!(locale, "common.loading")} } },
        Some(records) if records.is_empty() => {
            rsx! { p { class: "state state--empty", {t!(locale, "certifications.empty")} } }
        }
        Some(records) => rsx! {
            div { class: "certifications__grid",
                for cert in records.iter() {
                    CertificationCard { key: "{cert.id}", cert: cert.clone(), locale }
                }
            }
        },
    };

    rsx! {
        section { id: "certifications", class: "section certifications",
            h2 { class: "section__title", {t!(locale, "certifications.title")} }
            {body}
        }
    }
}

#[component]
fn CertificationCard(cert: ProjectedRecord, locale: Locale) -> Element {
    let image = cert.attr("image_url");
    let title = cert.title();
    let description = cert.description();
    let issued = cert.attr("date");
    let issued_label = format_timestamp(issued, locale);

    rsx! {
        article { class: "card certification",
            if !image.is_empty() {
                img { class: "certification__badge", src: "{image}", alt: "{title}", loading: "lazy" }
            }
            h3 { "{title}" }
            p { class: "certification__issuer",
                {t!(locale, "certifications.issued_by", issuer = cert.text("issuer"))}
            }
            if !issued.is_empty() {
                time { datetime: "{issued}", "{issued_label}" }
            }
            if !description.is_empty() {
                p { "{description}" }
            }
        }
    }
}
