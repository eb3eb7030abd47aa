//! PostgREST-style hosted table client.

use async_trait::async_trait;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::{Collection, ContentFetchError, ContentStore, Row};

/// Reads tables through `{base_url}/rest/v1/{table}` with the project's public (anon) key.
#[derive(Debug, Clone)]
pub struct RestContentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestContentStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }
}

/// Query string for "select everything, sorted" on one table.
///
/// Posts are limited to rows published at or before `now`; drafts and scheduled
/// posts never leave the server.
pub(crate) fn query_params(
    collection: Collection,
    now: OffsetDateTime,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", "*".to_string()),
        ("order", collection.ordering().as_query()),
    ];
    if collection.published_only() {
        params.push(("published_at", "not.is.null".to_string()));
        match now.format(&Rfc3339) {
            Ok(stamp) => params.push(("published_at", format!("lte.{stamp}"))),
            Err(err) => {
                tracing::warn!(error = %err, "clock outside RFC 3339 range; posts not filtered")
            }
        }
    }
    params
}

#[async_trait(?Send)]
impl ContentStore for RestContentStore {
    async fn fetch(&self, collection: Collection) -> Result<Vec<Row>, ContentFetchError> {
        let response = self
            .client
            .get(self.table_url(collection))
            .query(&query_params(collection, OffsetDateTime::now_utc()))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| ContentFetchError::Transport { collection, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentFetchError::Status { collection, status });
        }

        response
            .json::<Vec<Row>>()
            .await
            .map_err(|err| ContentFetchError::Decode {
                collection,
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let store = RestContentStore::new("https://example.supabase.co/", "anon");
        assert_eq!(store.base_url(), "https://example.supabase.co");
        assert_eq!(
            store.table_url(Collection::Certifications),
            "https://example.supabase.co/rest/v1/certifications"
        );
    }

    fn noon() -> OffsetDateTime {
        OffsetDateTime::parse("2025-03-02T12:00:00Z", &Rfc3339).unwrap()
    }

    #[test]
    fn testimonials_query_orders_by_display_order() {
        let params = query_params(Collection::Testimonials, noon());
        assert_eq!(
            params,
            vec![
                ("select", "*".to_string()),
                ("order", "display_order.asc".to_string()),
            ]
        );
    }

    #[test]
    fn posts_query_excludes_drafts() {
        let params = query_params(Collection::Posts, noon());
        assert!(params.contains(&("published_at", "not.is.null".to_string())));
        assert!(params.contains(&("order", "published_at.desc".to_string())));
    }

    #[test]
    fn posts_query_excludes_scheduled_posts() {
        let params = query_params(Collection::Posts, noon());
        assert!(params.contains(&("published_at", "lte.2025-03-02T12:00:00Z".to_string())));
    }
}
