use api::Collection;
use dioxus::prelude::*;

use crate::components::{blog_link, SeoHead};
use crate::core::context::{use_locale, use_projected, use_site_config};
use crate::core::format::{format_timestamp, read_time_minutes};
use crate::core::record::ProjectedRecord;
use crate::core::seo;
use crate::i18n::Locale;
use crate::sections::Footer;
use crate::t;

use super::NotFound;

/// The visible post addressed by `slug`. Drafts and scheduled posts are never fetched,
/// so their slugs resolve to nothing.
fn find_post<'a>(posts: &'a [ProjectedRecord], slug: &str) -> Option<&'a ProjectedRecord> {
    posts.iter().find(|post| post.slug() == slug)
}

/// Body paragraphs: one per non-blank line.
fn paragraphs(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.trim().is_empty() {
        fallback
    } else {
        preferred
    }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    let locale = use_locale().read().active();
    let projected = use_projected(Collection::Posts);

    let found = projected
        .read()
        .as_ref()
        .map(|posts| find_post(posts, &slug).cloned());

    match found {
        None => rsx! {
            SeoHead { path: seo::post_path(&slug) }
            main { class: "page page-post",
                p { class: "state state--loading", {t!(locale, "common.loading")} }
            }
        },
        Some(Some(post)) => rsx! { Article { post, locale } },
        Some(None) => {
            tracing::debug!(%slug, "no visible post with this slug");
            rsx! { NotFound { route: vec!["blog".to_string(), slug.clone()] } }
        }
    }
}

#[component]
fn Article(post: ProjectedRecord, locale: Locale) -> Element {
    let config = use_site_config();
    let slug = post.slug().to_string();
    let title = post.title();
    let excerpt = post.text("excerpt");
    let seo_title = first_non_empty(post.attr("seo_title"), title).to_string();
    let seo_description = first_non_empty(post.attr("seo_description"), excerpt).to_string();
    let schema = seo::blog_posting_schema(&post, &config.base_url, &config.site_name).to_string();

    let cover = post.attr("cover_image");
    let category = post.category();
    let author = post.attr("author_name");
    let published_raw = post.attr("published_at");
    let published = format_timestamp(published_raw, locale);
    let content = post.text("content");
    let minutes = read_time_minutes(content);

    rsx! {
        SeoHead {
            title: seo_title,
            description: seo_description,
            path: seo::post_path(&slug),
        }
        document::Script { r#type: "application/ld+json", "{schema}" }
        main { class: "page page-post",
            article { class: "section post",
                div { class: "post__back", {blog_link(&t!(locale, "post.back"))} }
                header { class: "post__header",
                    if !category.is_empty() {
                        span { class: "chip", "{category}" }
                    }
                    h1 { class: "post__title", "{title}" }
                    div { class: "post__meta",
                        if !author.is_empty() {
                            span { class: "post__author", "{author}" }
                        }
                        time { datetime: "{published_raw}", "{published}" }
                        span { {t!(locale, "blog.read_time", minutes = minutes)} }
                    }
                }
                if !cover.is_empty() {
                    img { class: "post__cover", src: "{cover}", alt: "{title}" }
                }
                if !excerpt.is_empty() {
                    p { class: "post__lead", "{excerpt}" }
                }
                div { class: "post__body",
                    for (i, paragraph) in paragraphs(content).into_iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
                footer { class: "post__footer",
                    if !author.is_empty() {
                        p { class: "post__byline",
                            {t!(locale, "post.published_by")}
                            " "
                            strong { "{author}" }
                        }
                    }
                    div { class: "post__all", {blog_link(&t!(locale, "post.all_posts"))} }
                }
            }
        }
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::project_all;
    use crate::core::record::{LocalizedText, MultilingualRecord};

    fn posts() -> Vec<ProjectedRecord> {
        let records = [
            MultilingualRecord::new("p-1")
                .with_field("title", LocalizedText::new().with(Locale::En, "First"))
                .with_attribute("slug", "first-post"),
            MultilingualRecord::new("p-2")
                .with_field("title", LocalizedText::new().with(Locale::En, "No slug")),
        ];
        project_all(&records, &["title", "excerpt", "content"], Locale::En)
    }

    #[test]
    fn posts_are_found_by_slug_or_id() {
        let posts = posts();
        assert_eq!(find_post(&posts, "first-post").map(|p| p.id.as_str()), Some("p-1"));
        assert_eq!(find_post(&posts, "p-2").map(|p| p.title()), Some("No slug"));
        assert!(find_post(&posts, "p-1").is_none());
        assert!(find_post(&posts, "missing").is_none());
    }

    #[test]
    fn content_splits_into_non_blank_paragraphs() {
        let content = "First paragraph.\n\n  Second one.  \n\n\nThird.";
        assert_eq!(paragraphs(content), vec!["First paragraph.", "Second one.", "Third."]);
        assert!(paragraphs("  \n ").is_empty());
    }

    #[test]
    fn seo_fields_fall_back_to_article_text() {
        assert_eq!(first_non_empty("", "Title"), "Title");
        assert_eq!(first_non_empty("  ", "Title"), "Title");
        assert_eq!(first_non_empty("SEO title", "Title"), "SEO title");
    }
}
