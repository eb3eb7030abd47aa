use api::Collection;
use dioxus::prelude::*;

use crate::components::{post_link, SeoHead};
use crate::core::context::{use_locale, use_projected};
use crate::core::filter::{filter, CategoryFilter, FilterOutcome};
use crate::core::format::{format_timestamp, read_time_minutes};
use crate::core::record::ProjectedRecord;
use crate::i18n::Locale;
use crate::sections::Footer;
use crate::t;

/// Posts carry an excerpt instead of a description; search runs over title and excerpt.
fn searchable(posts: &[ProjectedRecord]) -> Vec<ProjectedRecord> {
    posts
        .iter()
        .map(|post| {
            let mut post = post.clone();
            let excerpt = post.text("excerpt").to_string();
            post.fields.insert("description".to_string(), excerpt);
            post
        })
        .collect()
}

#[component]
pub fn BlogList() -> Element {
    let locale = use_locale().read().active();
    let projected = use_projected(Collection::Posts);
    let mut query = use_signal(String::new);

    let body = match projected.read().as_ref() {
        None => rsx! { p { class: "state state--loading", {t!(locale, "common.loading")} } },
        Some(posts) if posts.is_empty() => {
            rsx! { p { class: "state state--empty", {t!(locale, "blog.empty")} } }
        }
        Some(posts) => {
            let posts = searchable(posts);
            let needle = query.read().clone();
            let outcome = filter(&posts, &needle, &CategoryFilter::All);

            rsx! {
                div { class: "filters",
                    label { class: "filters__field",
                        span { class: "visually-hidden", {t!(locale, "common.search_label")} }
                        input {
                            r#type: "search",
                            class: "filters__search",
                            placeholder: t!(locale, "blog.search_placeholder"),
                            value: "{needle}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                }
                {match outcome {
                    FilterOutcome::NoResults => rsx! {
                        p { class: "state state--empty", {t!(locale, "blog.no_results", query = needle)} }
                    },
                    FilterOutcome::Matches(matches) => rsx! {
                        div { class: "blog__list",
                            for post in matches {
                                PostCard { key: "{post.id}", post: post.clone(), locale }
                            }
                        }
                    },
                }}
            }
        }
    };

    rsx! {
        SeoHead {
            title: t!(locale, "blog.title"),
            description: t!(locale, "seo.blog_description"),
            path: "/blog",
        }
        main { class: "page page-blog",
            section { class: "section blog",
                h1 { class: "section__title", {t!(locale, "blog.title")} }
                p { class: "section__subtitle", {t!(locale, "blog.subtitle")} }
                {body}
            }
        }
        Footer {}
    }
}

#[component]
fn PostCard(post: ProjectedRecord, locale: Locale) -> Element {
    let title = post.title();
    let excerpt = post.text("excerpt");
    let cover = post.attr("cover_image");
    let category = post.category();
    let author = post.attr("author_name");
    let published_raw = post.attr("published_at");
    let published = format_timestamp(published_raw, locale);
    let minutes = read_time_minutes(post.text("content"));
    let slug = post.slug();
    let read_more = t!(locale, "post.read_more");

    rsx! {
        article { class: "card post-card",
            if !cover.is_empty() {
                img { class: "post-card__cover", src: "{cover}", alt: "{title}", loading: "lazy" }
            }
            div { class: "post-card__meta",
                if !category.is_empty() {
                    span { class: "chip", "{category}" }
                }
                time { datetime: "{published_raw}", "{published}" }
                span { {t!(locale, "blog.read_time", minutes = minutes)} }
            }
            h2 { class: "post-card__title", {post_link(slug, title)} }
            p { class: "post-card__excerpt", "{excerpt}" }
            div { class: "post-card__footer",
                if !author.is_empty() {
                    p { class: "post-card__author", "{author}" }
                }
                span { class: "post-card__more", {post_link(slug, &read_more)} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{LocalizedText, MultilingualRecord};
    use crate::core::projector::project;

    #[test]
    fn search_matches_post_excerpts() {
        let record = MultilingualRecord::new("p-1")
            .with_field("title", LocalizedText::new().with(Locale::En, "Shipping faster"))
            .with_field(
                "excerpt",
                LocalizedText::new().with(Locale::En, "Why n8n beats glue code"),
            );
        let posts = vec![project(&record, &["title", "excerpt"], Locale::En)];

        let posts = searchable(&posts);
        assert_eq!(filter(&posts, "N8N", &CategoryFilter::All).len(), 1);
        assert!(filter(&posts, "wordpress", &CategoryFilter::All).is_empty());
    }
}
