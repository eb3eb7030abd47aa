use thiserror::Error;

use crate::Collection;

/// Failure while reading a collection from a content store.
#[derive(Debug, Error)]
pub enum ContentFetchError {
    #[error("request for `{collection}` failed: {source}")]
    Transport {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    #[error("content store answered {status} for `{collection}`")]
    Status {
        collection: Collection,
        status: reqwest::StatusCode,
    },

    #[error("could not decode rows of `{collection}`: {reason}")]
    Decode {
        collection: Collection,
        reason: String,
    },

    #[error("collection `{0}` is not available in this store")]
    Unavailable(Collection),
}
