//! Multilingual content rows and their single-language projection.

use std::collections::BTreeMap;

use api::Row;
use serde_json::Value;

use crate::i18n::Locale;

/// One logical text field in every language it was written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.0.insert(locale, text.into());
        self
    }

    pub fn insert(&mut self, locale: Locale, text: impl Into<String>) {
        self.0.insert(locale, text.into());
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0.get(&locale).map(String::as_str)
    }

    /// Text to display for `locale`.
    ///
    /// Each language reads only its own column. There is no second fallback: an empty
    /// French value stays empty, and a missing value is the empty string.
    pub fn resolve(&self, locale: Locale) -> &str {
        self.get(locale).unwrap_or("")
    }
}

/// A content row with per-language copies of its text fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultilingualRecord {
    pub id: String,
    pub fields: BTreeMap<String, LocalizedText>,
    /// Columns that are not localized (category, display_order, image_url, ...).
    pub attributes: Row,
}

impl MultilingualRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: &str, text: LocalizedText) -> Self {
        self.fields.insert(name.to_string(), text);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Split a store row into localized fields (`<field>_en|fr|ar` columns) and plain attributes.
    ///
    /// Null or non-string localized cells are treated as absent. A field with no
    /// per-language column at all is read from its bare `<field>` column, which then
    /// serves every language (single-language tables such as `posts`).
    pub fn from_row(row: &Row, localized_fields: &[&str]) -> Self {
        let id = match row.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let mut fields = BTreeMap::new();
        let mut consumed = Vec::new();
        for &field in localized_fields {
            let mut text = LocalizedText::new();
            let columns: Vec<(Locale, String)> = Locale::ALL
                .into_iter()
                .map(|locale| (locale, format!("{field}_{}", locale.code())))
                .collect();

            if columns.iter().any(|(_, column)| row.contains_key(column)) {
                for (locale, column) in columns {
                    if let Some(Value::String(s)) = row.get(&column) {
                        text.insert(locale, s.clone());
                    }
                    consumed.push(column);
                }
            } else if let Some(Value::String(s)) = row.get(field) {
                for locale in Locale::ALL {
                    text.insert(locale, s.clone());
                }
                consumed.push(field.to_string());
            }
            fields.insert(field.to_string(), text);
        }

        let attributes = row
            .iter()
            .filter(|(k, _)| k.as_str() != "id" && !consumed.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            id,
            fields,
            attributes,
        }
    }

    pub fn field(&self, name: &str) -> Option<&LocalizedText> {
        self.fields.get(name)
    }
}

/// A record resolved for exactly one language. Never stored; rebuilt on every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedRecord {
    pub id: String,
    pub fields: BTreeMap<String, String>,
    pub attributes: Row,
}

impl ProjectedRecord {
    /// Resolved text of `name`, empty if the field was not projected.
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.text("title")
    }

    pub fn description(&self) -> &str {
        self.text("description")
    }

    /// String attribute, empty when absent or not a string.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.attr("category")
    }

    /// URL segment of a post; rows without a slug are addressed by id.
    pub fn slug(&self) -> &str {
        match self.attr("slug") {
            "" => self.id.as_str(),
            slug => slug,
        }
    }
}
