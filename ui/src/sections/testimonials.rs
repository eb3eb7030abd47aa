use api::Collection;
use dioxus::prelude::*;

use crate::core::context::{use_locale, use_projected};
use crate::core::record::ProjectedRecord;
use crate::t;

#[component]
pub fn Testimonials() -> Element {
    let locale = use_locale().read().active();
    let projected = use_projected(Collection::Testimonials);

    let body = match projected.read().as_ref() {
        None => rsx! { p { class: "state state--loading", {t!(locale, "common.loading")} } },
        Some(records) if records.is_empty() => {
            rsx! { p { class: "state state--empty", {t!(locale, "testimonials.empty")} } }
        }
        Some(records) => rsx! {
            div { class: "testimonials__grid",
                for item in records.iter() {
                    TestimonialCard { key: "{item.id}", item: item.clone() }
                }
            }
        },
    };

    rsx! {
        section { id: "testimonials", class: "section testimonials",
            h2 { class: "section__title", {t!(locale, "testimonials.title")} }
            {body}
        }
    }
}

#[component]
fn TestimonialCard(item: ProjectedRecord) -> Element {
    let quote = item.text("quote");
    let author = item.text("author");
    let role = item.text("role");

    rsx! {
        figure { class: "card testimonial",
            blockquote { class: "testimonial__quote", "{quote}" }
            figcaption {
                strong { "{author}" }
                span { class: "testimonial__role", "{role}" }
            }
        }
    }
}
