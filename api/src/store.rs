use async_trait::async_trait;

use crate::{Collection, ContentFetchError};

/// One table row exactly as the store returned it.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Read side of the hosted content tables.
///
/// Futures are not `Send`: the site runs on a single-threaded executor and the
/// browser `fetch` backend cannot cross threads anyway.
#[async_trait(?Send)]
pub trait ContentStore {
    /// All rows of `collection`, already sorted per [`Collection::ordering`].
    async fn fetch(&self, collection: Collection) -> Result<Vec<Row>, ContentFetchError>;
}

/// Fetch a collection, logging and swallowing any failure.
///
/// Views render an empty section instead of an error banner; there is no retry.
pub async fn fetch_or_empty(store: &dyn ContentStore, collection: Collection) -> Vec<Row> {
    match store.fetch(collection).await {
        Ok(rows) => {
            tracing::debug!(%collection, rows = rows.len(), "fetched collection");
            rows
        }
        Err(err) => {
            tracing::warn!(%collection, error = %err, "content fetch failed; showing nothing");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    struct Broken;

    #[async_trait(?Send)]
    impl ContentStore for Broken {
        async fn fetch(&self, collection: Collection) -> Result<Vec<Row>, ContentFetchError> {
            Err(ContentFetchError::Unavailable(collection))
        }
    }

    struct One;

    #[async_trait(?Send)]
    impl ContentStore for One {
        async fn fetch(&self, _collection: Collection) -> Result<Vec<Row>, ContentFetchError> {
            let row = json!({ "id": "a" });
            Ok(vec![row.as_object().cloned().unwrap_or_default()])
        }
    }

    #[test]
    fn failure_degrades_to_empty_collection() {
        let rows = block_on(fetch_or_empty(&Broken, Collection::Testimonials));
        assert!(rows.is_empty());
    }

    #[test]
    fn success_passes_rows_through() {
        let rows = block_on(fetch_or_empty(&One, Collection::Apps));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "a");
    }
}
