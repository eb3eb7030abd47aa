use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::context::use_locale;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let locale = use_locale().read().active();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            p { {t!(locale, "footer.rights", year = year)} }
        }
    }
}
