//! Search-engine metadata: hreflang alternates, sitemap, robots and JSON-LD.

use serde_json::{json, Value};
use time::macros::format_description;
use time::Date;

use crate::core::record::ProjectedRecord;
use crate::i18n::{catalog, Locale};

/// `<link rel="alternate" hreflang=.. href=..>` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// One sitemap entry before expansion over locales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapRoute {
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Public sections of the single-page site.
pub const SITE_ROUTES: &[SitemapRoute] = &[
    route("/", ChangeFreq::Weekly, 1.0),
    route("/#about", ChangeFreq::Monthly, 0.8),
    route("/#skills", ChangeFreq::Monthly, 0.8),
    route("/#apps", ChangeFreq::Weekly, 0.9),
    route("/#certifications", ChangeFreq::Monthly, 0.7),
    route("/#testimonials", ChangeFreq::Monthly, 0.7),
    route("/#services", ChangeFreq::Monthly, 0.9),
    route("/#pricing", ChangeFreq::Monthly, 0.8),
    route("/#faq", ChangeFreq::Monthly, 0.8),
    route("/#contact", ChangeFreq::Monthly, 0.7),
    route("/blog", ChangeFreq::Weekly, 0.8),
];

const fn route(path: &'static str, changefreq: ChangeFreq, priority: f32) -> SitemapRoute {
    SitemapRoute {
        path,
        changefreq,
        priority,
    }
}

/// Localized URL of `path`: English lives at the root, other languages under `/<code>`.
///
/// The launchers only route unprefixed paths and pick the language on the client.
/// The `/fr` and `/ar` forms are the hreflang URLs advertised to crawlers; the host
/// has to rewrite them to the unprefixed page ([`prefix_rewrites`]).
pub fn localized_url(base_url: &str, path: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{base_url}{path}"),
        other => format!("{base_url}/{}{path}", other.code()),
    }
}

/// One alternate per language plus `x-default` (the English URL).
pub fn alternates(base_url: &str, path: &str) -> Vec<Alternate> {
    let mut links: Vec<Alternate> = Locale::ALL
        .into_iter()
        .map(|l| Alternate {
            hreflang: l.hreflang(),
            href: localized_url(base_url, path, l),
        })
        .collect();
    links.push(Alternate {
        hreflang: "x-default",
        href: format!("{base_url}{path}"),
    });
    links
}

/// `sitemap.xml` covering every route in every language.
pub fn sitemap_xml(base_url: &str, routes: &[SitemapRoute], lastmod: &str) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n");
    xml.push_str("        xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n");

    for route in routes {
        for locale in Locale::ALL {
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                localized_url(base_url, route.path, locale)
            ));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                route.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", route.priority));
            for alt in alternates(base_url, route.path) {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    alt.hreflang, alt.href
                ));
            }
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>");
    xml
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /admin/\n\
         Disallow: /api/\n\
         \n\
         # Sitemaps\n\
         Sitemap: {base_url}/sitemap.xml\n\
         \n\
         # Crawl-delay\n\
         Crawl-delay: 0\n\
         \n\
         # Google\n\
         User-agent: Googlebot\n\
         Allow: /\n\
         \n\
         # Bing\n\
         User-agent: Bingbot\n\
         Allow: /\n"
    )
}

/// Host rewrite rules mapping every language-prefixed URL onto the page the router serves.
pub fn prefix_rewrites() -> String {
    let mut rules = String::new();
    for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::En) {
        let code = locale.code();
        rules.push_str(&format!("/{code}      /     200\n/{code}/*    /:splat    200\n"));
    }
    rules
}

/// `lastmod` value for the sitemap (`YYYY-MM-DD`).
pub fn lastmod(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Write `sitemap.xml` and `robots.txt` for `base_url` into `dir`.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_static_files(
    dir: &std::path::Path,
    base_url: &str,
    today: Date,
) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let sitemap = sitemap_xml(base_url, SITE_ROUTES, &lastmod(today));
    std::fs::write(dir.join("sitemap.xml"), sitemap)?;
    std::fs::write(dir.join("robots.txt"), robots_txt(base_url))?;
    std::fs::write(dir.join("_redirects"), prefix_rewrites())?;
    tracing::info!(
        dir = %dir.display(),
        routes = SITE_ROUTES.len(),
        "wrote sitemap.xml, robots.txt and _redirects"
    );
    Ok(())
}

/// Browser tab title: `"{title} | {region} | {site}"`, or the catalog default.
pub fn page_title(title: Option<&str>, site_name: &str, locale: Locale) -> String {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => format!(
            "{title} | {} | {site_name}",
            catalog().translate("seo.region", locale, &[])
        ),
        None => catalog().translate("seo.default_title", locale, &[]),
    }
}

/// schema.org `FAQPage` for Google rich results.
pub fn faq_schema<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
    let questions: Vec<Value> = entries
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Path of a single article.
pub fn post_path(slug: &str) -> String {
    format!("/blog/{slug}")
}

/// schema.org `BlogPosting` for an article page.
///
/// The image falls back to the site logo, the description to the SEO description,
/// and the modification date to the publication date.
pub fn blog_posting_schema(post: &ProjectedRecord, base_url: &str, site_name: &str) -> Value {
    let logo = format!("{base_url}/logo.png");
    let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

    let description = non_empty(post.text("excerpt"))
        .or_else(|| non_empty(post.attr("seo_description")))
        .unwrap_or_default();
    let image = non_empty(post.attr("cover_image")).unwrap_or_else(|| logo.clone());
    let published = post.attr("published_at");
    let modified = non_empty(post.attr("updated_at")).unwrap_or_else(|| published.to_string());
    let author = non_empty(post.attr("author_name")).unwrap_or_else(|| site_name.to_string());

    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title(),
        "description": description,
        "image": image,
        "datePublished": published,
        "dateModified": modified,
        "author": { "@type": "Person", "name": author, "url": base_url },
        "publisher": {
            "@type": "Person",
            "name": site_name,
            "url": base_url,
            "logo": { "@type": "ImageObject", "url": logo },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": format!("{base_url}{}", post_path(post.slug())),
        },
    })
}
