//! Internationalization (i18n) support for `folio-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the JSON catalogs)
//! - `serde_json` (catalog parsing, nested objects flattened to dot paths)
//! - `unic-langid` (parsing language tags into a [`Locale`])
//! - `i18n-embed` requesters (the OS / browser language list at startup)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en.json   (fallback/reference)
//!   fr.json
//!   ar.json   (rendered right-to-left)
//! ```
//!
//! Usage in a component:
//! ```ignore
//! let locale = use_locale().read().active();
//! let home_label = t!(locale, "nav.home");
//! let hello = t!(locale, "hero.greeting", name = "Yahya");
//! ```
//!
//! The catalog is immutable and shared process-wide; the *active* language is not.
//! It lives in an explicit [`LocaleState`] injected through context.
//!
//! To add a key: add it to `en.json`, then to `fr.json` and `ar.json` (the
//! completeness tests fail otherwise).

mod catalog;
mod locale;
mod state;

pub use catalog::{CatalogError, CatalogValue, TranslationCatalog};
pub use locale::{Direction, InvalidLocaleError, Locale};
pub use state::{LocaleChange, LocaleState, SubscriptionId};

use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

/// Locale whose catalog backs every missing key.
pub const FALLBACK_LOCALE: Locale = Locale::En;

/// Ergonomic translation macro over the embedded catalog.
/// Examples:
///     t!(locale, "nav.home")
///     t!(locale, "hero.greeting", name = "Yahya")
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::catalog().translate($key, $locale, &[])
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::catalog().translate(
            $key,
            $locale,
            &[ $( (stringify!($arg), ($value).to_string()) ),+ ],
        )
    };
}

/// Embed all catalogs under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static CATALOG: Lazy<TranslationCatalog> = Lazy::new(load_embedded);

/// The process-wide interface-label catalog, parsed on first use.
pub fn catalog() -> &'static TranslationCatalog {
    &CATALOG
}

fn load_embedded() -> TranslationCatalog {
    let mut catalog = TranslationCatalog::empty(FALLBACK_LOCALE);
    for locale in Locale::ALL {
        let path = format!("{}.json", locale.code());
        let Some(file) = Localizations::get(&path) else {
            tracing::warn!(%locale, "no embedded catalog; lookups fall back to {FALLBACK_LOCALE}");
            continue;
        };
        let src = String::from_utf8_lossy(&file.data);
        if let Err(err) = catalog.load_document(locale, &src) {
            tracing::error!(%locale, error = %err, "embedded catalog rejected");
        }
    }
    catalog
}

/// Languages with an embedded catalog, in [`Locale::ALL`] order (for a picker).
pub fn available_locales() -> Vec<Locale> {
    Locale::ALL
        .into_iter()
        .filter(|l| Localizations::get(&format!("{}.json", l.code())).is_some())
        .collect()
}

/// Starting language: the first supported entry of the user's preference list, else `default`.
pub fn negotiate_initial(default: Locale) -> Locale {
    let requested = requested_languages();
    let chosen = Locale::negotiate(&requested).unwrap_or(default);
    tracing::info!(%chosen, requested = ?requested, "initial locale");
    chosen
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_is_embedded() {
        assert_eq!(available_locales(), Locale::ALL.to_vec());
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(t!(Locale::En, "nav.home"), "Home");
        assert_eq!(t!(Locale::Fr, "nav.home"), "Accueil");
    }

    #[test]
    fn macro_interpolates() {
        let s = t!(Locale::En, "apps.count", count = 3);
        assert_eq!(s, "3 projects");
    }

    #[test]
    fn embedded_catalogs_all_parse() {
        for locale in Locale::ALL {
            assert!(
                !catalog().keys(locale).is_empty(),
                "catalog for {locale} is empty or failed to parse"
            );
        }
    }
}
