//! Dependency wiring for the component tree.
//!
//! The launcher calls [`use_site_root`] once; sections then pull the locale state,
//! the site configuration and the content store from context instead of globals.

use std::rc::Rc;

use api::{fetch_or_empty, Collection, ContentStore, RestContentStore, StaticContentStore};
use dioxus::prelude::*;

use super::config::SiteConfig;
use super::platform;
use super::projector::project_all;
use super::record::{MultilingualRecord, ProjectedRecord};
use crate::i18n::{self, LocaleState};

const SEED_CONTENT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/seed.json"));

/// Shared handle to whichever store the site reads from.
#[derive(Clone)]
pub struct ContentSource(pub Rc<dyn ContentStore>);

impl ContentSource {
    /// Hosted tables when configured, otherwise the embedded seed content.
    pub fn from_config(config: &SiteConfig) -> Self {
        if config.has_remote_content() {
            tracing::info!(url = %config.content.url, "reading content from hosted store");
            return Self(Rc::new(RestContentStore::new(
                config.content.url.clone(),
                config.content.anon_key.clone(),
            )));
        }
        let store = StaticContentStore::from_json(SEED_CONTENT).unwrap_or_else(|err| {
            tracing::error!(error = %err, "embedded seed content rejected; sections will be empty");
            StaticContentStore::new()
        });
        Self(Rc::new(store))
    }
}

/// Build and provide every site-wide dependency. Returns the locale signal for the root.
pub fn use_site_root(config: SiteConfig) -> Signal<LocaleState> {
    let source = use_hook(|| ContentSource::from_config(&config));
    use_context_provider(|| source);

    let default_locale = config.default_locale;
    tracing::debug!(
        platform = ?platform::Platform::current(),
        site = %config.site_name,
        "site root"
    );
    use_context_provider(|| config);

    use_context_provider(|| {
        let initial = i18n::negotiate_initial(default_locale);
        let mut state = LocaleState::new(initial);
        state.subscribe(|change| platform::apply_document_locale(change.current));
        platform::apply_document_locale(initial);
        Signal::new(state)
    })
}

pub fn use_locale() -> Signal<LocaleState> {
    use_context::<Signal<LocaleState>>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Raw multilingual rows of `collection`; `None` while the fetch is in flight.
///
/// Fetch failures settle into an empty list (logged by [`fetch_or_empty`]).
pub fn use_collection(collection: Collection) -> Resource<Vec<MultilingualRecord>> {
    let source = use_context::<ContentSource>();
    use_resource(move || {
        let store = source.0.clone();
        async move {
            let rows = fetch_or_empty(store.as_ref(), collection).await;
            rows.iter()
                .map(|row| MultilingualRecord::from_row(row, collection.localized_fields()))
                .collect()
        }
    })
}

/// Rows of `collection` projected into the active language; recomputed on locale change.
pub fn use_projected(collection: Collection) -> Memo<Option<Vec<ProjectedRecord>>> {
    let records = use_collection(collection);
    let locale = use_locale();
    use_memo(move || {
        let active = locale.read().active();
        records
            .read()
            .as_ref()
            .map(|recs| project_all(recs, collection.localized_fields(), active))
    })
}
