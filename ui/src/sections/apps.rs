use api::Collection;
use dioxus::prelude::*;

use crate::core::context::{use_locale, use_projected};
use crate::core::record::ProjectedRecord;
use crate::core::filter::{categories, filter, CategoryFilter, FilterOutcome};
use crate::i18n::{self, Locale};
use crate::t;

/// Localized label for a category value; unknown categories show as stored.
fn category_label(category: &str, locale: Locale) -> String {
    let key = format!("apps.categories.{category}");
    let catalog = i18n::catalog();
    if catalog.contains(&key, catalog.fallback()) {
        catalog.translate(&key, locale, &[])
    } else {
        category.to_string()
    }
}

#[component]
pub fn AppsPortfolio() -> Element {
    let locale = use_locale().read().active();
    let projected = use_projected(Collection::Apps);
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| CategoryFilter::All);

    let body = match projected.read().as_ref() {
        None => rsx! { p { class: "state state--loading", {t!(locale, "common.loading")} } },
        Some(records) if records.is_empty() => {
            rsx! { p { class: "state state--empty", {t!(locale, "apps.empty")} } }
        }
        Some(records) => {
            let options = categories(records);
            let selected = category.read().clone();
            let needle = query.read().clone();
            let outcome = filter(records, &needle, &selected);
            let selected_value = selected.as_value().to_string();

            rsx! {
                div { class: "filters",
                    label { class: "filters__field",
                        span { class: "visually-hidden", {t!(locale, "common.search_label")} }
                        input {
                            r#type: "search",
                            class: "filters__search",
                            placeholder: t!(locale, "apps.search_placeholder"),
                            value: "{needle}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                    label { class: "filters__field",
                        span { class: "visually-hidden", {t!(locale, "common.category_label")} }
                        select {
                            class: "filters__category",
                            value: "{selected_value}",
                            oninput: move |evt| category.set(CategoryFilter::parse(&evt.value())),
                            option { value: CategoryFilter::ALL_VALUE, {t!(locale, "apps.categories.all")} }
                            for c in options {
                                option { key: "{c}", value: "{c}", {category_label(&c, locale)} }
                            }
                        }
                    }
                    span { class: "filters__count", {t!(locale, "apps.count", count = outcome.len())} }
                }
                {match outcome {
                    FilterOutcome::NoResults => rsx! {
                        p { class: "state state--empty", {t!(locale, "apps.no_results", query = needle)} }
                    },
                    FilterOutcome::Matches(matches) => rsx! {
                        div { class: "apps__grid",
                            for app in matches {
                                AppCard { key: "{app.id}", app: app.clone(), locale }
                            }
                        }
                    },
                }}
            }
        }
    };

    rsx! {
        section { id: "apps", class: "section apps",
            h2 { class: "section__title", {t!(locale, "apps.title")} }
            p { class: "section__subtitle", {t!(locale, "apps.subtitle")} }
            {body}
        }
    }
}

#[component]
fn AppCard(app: ProjectedRecord, locale: Locale) -> Element {
    let image = app.attr("image_url");
    let gradient = app.attr("gradient");
    let title = app.title();
    let description = app.description();

    rsx! {
        article { class: "card app-card", style: "--app-gradient: {gradient}",
            if !image.is_empty() {
                img { class: "app-card__image", src: "{image}", alt: "{title}", loading: "lazy" }
            }
            span { class: "chip app-card__category", {category_label(app.category(), locale)} }
            h3 { class: "app-card__title", "{title}" }
            p { class: "app-card__description", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_are_translated() {
        assert_eq!(category_label("realestate", Locale::En), "Real estate");
        assert_ne!(category_label("realestate", Locale::Fr), "realestate");
    }

    #[test]
    fn unknown_categories_show_as_stored() {
        assert_eq!(category_label("robotics", Locale::Ar), "robotics");
    }
}
