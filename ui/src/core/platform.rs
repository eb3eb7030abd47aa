//! Platform detection and host-document effects.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Mirror the active language onto `<html dir=".." lang="..">`.
///
/// The browser document is only reachable on the web target; native webviews
/// get the same attributes from the root element rendered by the launcher.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_locale(locale: Locale) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!("no document element; direction not applied");
        return;
    };
    let dir = locale.direction().as_attr();
    if root.set_attribute("dir", dir).is_err() || root.set_attribute("lang", locale.code()).is_err()
    {
        tracing::warn!(%locale, "failed to set document direction");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_locale(locale: Locale) {
    tracing::trace!(
        %locale,
        dir = %locale.direction(),
        "document direction handled by root element"
    );
}
