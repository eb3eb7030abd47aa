//! The fixed set of site languages and their text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// A supported site language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

/// Text layout direction of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Rejected attempt to select a language outside [`Locale::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}` (expected one of: en, fr, ar)")]
pub struct InvalidLocaleError(pub String);

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Name shown in the language picker, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
        }
    }

    /// Region-qualified tag used for `hreflang` alternates.
    pub fn hreflang(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Fr => "fr-FR",
            Locale::Ar => "ar-MA",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En | Locale::Fr => Direction::Ltr,
        }
    }

    /// Map a parsed language tag onto a site language by its primary subtag.
    pub fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        match id.language.as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// First supported entry of a preference list (OS or browser order).
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Option<Self> {
        requested.iter().find_map(Self::from_langid)
    }
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleError;

    /// Exactly `en`, `fr` or `ar`. Region-qualified tags from the OS or browser go
    /// through [`Locale::negotiate`] instead.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == raw)
            .ok_or_else(|| InvalidLocaleError(raw.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", Locale::En)]
    #[case("fr", Locale::Fr)]
    #[case("ar", Locale::Ar)]
    fn parses_supported_codes(#[case] raw: &str, #[case] expected: Locale) {
        assert_eq!(raw.parse::<Locale>(), Ok(expected));
    }

    #[rstest]
    #[case("xx")]
    #[case("es")]
    #[case("")]
    #[case("not a tag")]
    #[case("fr-FR")]
    #[case("ar_MA")]
    #[case(" EN ")]
    #[case("EN")]
    fn rejects_everything_else(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Locale>(),
            Err(InvalidLocaleError(raw.to_string()))
        );
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Fr.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
    }

    #[test]
    fn negotiation_picks_first_supported() {
        let requested: Vec<LanguageIdentifier> = ["de-DE", "ar-EG", "fr-FR"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(Locale::negotiate(&requested), Some(Locale::Ar));
        assert_eq!(Locale::negotiate(&[]), None);
    }
}
