//! Hosted tables the site reads from.

use std::fmt;

/// One content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Apps,
    Testimonials,
    Certifications,
    Posts,
}

/// Sort applied by the store before rows reach the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub column: &'static str,
    pub ascending: bool,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Apps,
        Collection::Testimonials,
        Collection::Certifications,
        Collection::Posts,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Collection::Apps => "apps",
            Collection::Testimonials => "testimonials",
            Collection::Certifications => "certifications",
            Collection::Posts => "posts",
        }
    }

    /// Logical field names, stored as `<field>_en`, `<field>_fr`, `<field>_ar` columns,
    /// or as one plain `<field>` column for single-language tables (`posts`).
    pub fn localized_fields(self) -> &'static [&'static str] {
        match self {
            Collection::Apps => &["title", "description"],
            Collection::Testimonials => &["quote", "author", "role"],
            Collection::Certifications => &["title", "issuer", "description"],
            Collection::Posts => &["title", "excerpt", "content"],
        }
    }

    pub fn ordering(self) -> Ordering {
        match self {
            // Newest article first.
            Collection::Posts => Ordering {
                column: "published_at",
                ascending: false,
            },
            _ => Ordering {
                column: "display_order",
                ascending: true,
            },
        }
    }

    /// Drafts live in the same table; only rows with a publication date are listed.
    pub fn published_only(self) -> bool {
        matches!(self, Collection::Posts)
    }

    pub fn from_table(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.table() == name)
    }
}

impl Ordering {
    /// PostgREST `order` parameter value, e.g. `display_order.asc`.
    pub fn as_query(&self) -> String {
        let dir = if self.ascending { "asc" } else { "desc" };
        format!("{}.{dir}", self.column)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
