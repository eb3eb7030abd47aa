//! Static interface-label catalog keyed by dot paths (`nav.home`, `skills.items`).

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use thiserror::Error;

use super::locale::Locale;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValue {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog for `{locale}` is not valid JSON: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for `{0}` must be a JSON object at the top level")]
    NotAnObject(Locale),
}

/// Per-locale flat key/value tables plus the locale used when a key is missing.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    entries: HashMap<Locale, BTreeMap<String, CatalogValue>>,
    fallback: Locale,
}

impl TranslationCatalog {
    pub fn empty(fallback: Locale) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// Build a catalog from one nested JSON document per locale.
    pub fn from_json_documents<'a>(
        fallback: Locale,
        documents: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty(fallback);
        for (locale, src) in documents {
            catalog.load_document(locale, src)?;
        }
        Ok(catalog)
    }

    /// Parse `src` and replace the entries of `locale`.
    pub fn load_document(&mut self, locale: Locale, src: &str) -> Result<(), CatalogError> {
        let doc: Value =
            serde_json::from_str(src).map_err(|source| CatalogError::Parse { locale, source })?;
        let Value::Object(_) = doc else {
            return Err(CatalogError::NotAnObject(locale));
        };
        let mut flat = BTreeMap::new();
        flatten("", &doc, &mut flat);
        self.entries.insert(locale, flat);
        Ok(())
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    pub fn contains(&self, key: &str, locale: Locale) -> bool {
        self.entries
            .get(&locale)
            .is_some_and(|table| table.contains_key(key))
    }

    /// All key paths defined for `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        self.entries
            .get(&locale)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Locale entry, else fallback entry.
    fn lookup(&self, key: &str, locale: Locale) -> Option<&CatalogValue> {
        self.entries
            .get(&locale)
            .and_then(|table| table.get(key))
            .or_else(|| {
                let value = self
                    .entries
                    .get(&self.fallback)
                    .and_then(|table| table.get(key));
                if value.is_some() && locale != self.fallback {
                    tracing::trace!(key, %locale, "translation missing; using fallback locale");
                }
                value
            })
    }

    /// Display string for `key`. Never fails: a key missing everywhere renders as itself.
    ///
    /// `{name}` placeholders are replaced from `params`; list entries are joined with `, `.
    pub fn translate(&self, key: &str, locale: Locale, params: &[(&str, String)]) -> String {
        let Some(value) = self.lookup(key, locale) else {
            tracing::debug!(key, %locale, "translation key missing in every locale");
            return key.to_string();
        };
        let text = match value {
            CatalogValue::Text(text) => text.clone(),
            CatalogValue::List(items) => items.join(", "),
        };
        interpolate(&text, params)
    }

    /// Ordered items of a list entry, with the same fallback chain as [`Self::translate`].
    pub fn translate_list(&self, key: &str, locale: Locale) -> Vec<String> {
        match self.lookup(key, locale) {
            Some(CatalogValue::List(items)) => items.clone(),
            Some(CatalogValue::Text(text)) => vec![text.clone()],
            None => vec![key.to_string()],
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, CatalogValue>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&path, v, out);
            }
        }
        Value::Array(items) => {
            let list = items.iter().map(scalar_text).collect();
            out.insert(prefix.to_string(), CatalogValue::List(list));
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), CatalogValue::Text(scalar_text(other)));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Replace `{name}` with the matching parameter; unknown placeholders are kept as written.
pub(crate) fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{
        "nav": { "home": "Home", "blog": "Blog" },
        "hero": { "greeting": "Hi, I'm {name}" },
        "skills": { "web": ["HTML", "CSS", "React"] },
        "stats": { "years": 5 }
    }"#;
    const FR: &str = r#"{
        "nav": { "blog": "Le blog" },
        "hero": { "greeting": "Bonjour, je suis {name}" }
    }"#;

    fn catalog() -> TranslationCatalog {
        TranslationCatalog::from_json_documents(Locale::En, [(Locale::En, EN), (Locale::Fr, FR)])
            .unwrap()
    }

    #[test]
    fn present_key_uses_requested_locale() {
        assert_eq!(catalog().translate("nav.blog", Locale::Fr, &[]), "Le blog");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        assert_eq!(catalog().translate("nav.home", Locale::Fr, &[]), "Home");
        // No Arabic document loaded at all.
        assert_eq!(catalog().translate("nav.home", Locale::Ar, &[]), "Home");
    }

    #[test]
    fn key_missing_everywhere_renders_as_itself() {
        assert_eq!(
            catalog().translate("footer.legal", Locale::Fr, &[]),
            "footer.legal"
        );
        assert_eq!(
            catalog().translate_list("footer.legal", Locale::En),
            vec!["footer.legal".to_string()]
        );
    }

    #[test]
    fn interpolates_named_params() {
        let params = [("name", "Yahya".to_string())];
        assert_eq!(
            catalog().translate("hero.greeting", Locale::Fr, &params),
            "Bonjour, je suis Yahya"
        );
    }

    #[test]
    fn unknown_placeholders_survive() {
        assert_eq!(
            interpolate("{a} and {b}", &[("a", "x".to_string())]),
            "x and {b}"
        );
        assert_eq!(interpolate("open {brace", &[("a", "x".into())]), "open {brace");
    }

    #[test]
    fn list_entries() {
        let c = catalog();
        assert_eq!(
            c.translate_list("skills.web", Locale::Fr),
            vec!["HTML", "CSS", "React"]
        );
        assert_eq!(c.translate("skills.web", Locale::En, &[]), "HTML, CSS, React");
        assert_eq!(c.translate_list("nav.home", Locale::En), vec!["Home"]);
    }

    #[test]
    fn non_string_scalars_become_text() {
        assert_eq!(catalog().translate("stats.years", Locale::En, &[]), "5");
    }

    #[test]
    fn keys_are_flattened_and_sorted() {
        let c = catalog();
        assert_eq!(c.keys(Locale::Fr), vec!["hero.greeting", "nav.blog"]);
        assert!(c.contains("nav.home", Locale::En));
        assert!(!c.contains("nav.home", Locale::Fr));
        assert!(c.keys(Locale::Ar).is_empty());
    }

    #[test]
    fn rejects_malformed_documents() {
        let mut c = TranslationCatalog::empty(Locale::En);
        assert!(matches!(
            c.load_document(Locale::En, "{ nope"),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            c.load_document(Locale::En, "[\"a\"]"),
            Err(CatalogError::NotAnObject(Locale::En))
        ));
    }
}
