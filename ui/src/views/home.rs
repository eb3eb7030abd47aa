use dioxus::prelude::*;

use crate::components::SeoHead;
use crate::sections::{
    About, AppsPortfolio, Certifications, Contact, Faq, Footer, Hero, Pricing, Services, Skills,
    Testimonials,
};

#[component]
pub fn Home() -> Element {
    tracing::trace!("home render");

    rsx! {
        SeoHead { path: "/" }
        main { class: "page page-home",
            Hero {}
            About {}
            Services {}
            Skills {}
            AppsPortfolio {}
            Pricing {}
            Testimonials {}
            Certifications {}
            Faq {}
            Contact {}
        }
        Footer {}
    }
}
