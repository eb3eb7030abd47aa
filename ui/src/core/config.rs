//! Site configuration: embedded `site.toml` plus build-time overrides.
//!
//! ```toml
//! site_name = "Yahya Houssini"
//! base_url = "https://yahyahoussini.pro"
//! default_locale = "en"
//!
//! [content]
//! url = ""        # empty: use the embedded seed content
//! anon_key = ""
//!
//! [contact]
//! email = "hello@example.com"
//! whatsapp = "212700000000"   # international number, digits only
//! ```
//!
//! `FOLIO_CONTENT_URL` and `FOLIO_CONTENT_KEY`, when set at build time, replace
//! the `[content]` values (the WASM bundle has no runtime environment).

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::i18n::Locale;

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("base_url must be an absolute http(s) URL, got `{0}`")]
    BaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_url: String,
    pub default_locale: Locale,
    pub content: ContentConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub url: String,
    pub anon_key: String,
}

/// Where the pricing and contact calls to action send visitors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub whatsapp: String,
}

impl ContactConfig {
    /// `wa.me` chat link with `message` prefilled, or `None` without a number.
    pub fn whatsapp_url(&self, message: &str) -> Option<String> {
        let number: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        if number.is_empty() {
            return None;
        }
        match Url::parse_with_params(&format!("https://wa.me/{number}"), [("text", message)]) {
            Ok(url) => Some(url.into()),
            Err(err) => {
                tracing::warn!(error = %err, "could not build WhatsApp link");
                None
            }
        }
    }

    pub fn mailto_url(&self) -> Option<String> {
        let email = self.email.trim();
        (!email.is_empty()).then(|| format!("mailto:{email}"))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Folio".to_string(),
            base_url: "http://localhost:8080".to_string(),
            default_locale: Locale::En,
            content: ContentConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(src)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if !(config.base_url.starts_with("https://") || config.base_url.starts_with("http://")) {
            return Err(ConfigError::BaseUrl(config.base_url));
        }
        Ok(config)
    }

    /// Embedded configuration with build-time overrides. Falls back to defaults if invalid.
    pub fn load() -> Self {
        let mut config = match Self::from_toml(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "embedded site.toml rejected; using defaults");
                Self::default()
            }
        };
        config.apply_overrides(option_env!("FOLIO_CONTENT_URL"), option_env!("FOLIO_CONTENT_KEY"));
        config
    }

    fn apply_overrides(&mut self, url: Option<&str>, key: Option<&str>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.content.url = url.to_string();
        }
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.content.anon_key = key.to_string();
        }
    }

    /// `true` when a hosted store is configured; otherwise the seed content is used.
    pub fn has_remote_content(&self) -> bool {
        !self.content.url.trim().is_empty()
    }
}
