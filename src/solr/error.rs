use reqwest::StatusCode;
use thiserror::Error;

/// Ways a single Solr round-trip can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum SolrError {
    /// Transport-level failure, including timeouts.
    #[error("Solr unreachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error response from Solr ({status}): {body}")]
    NonSuccess { status: StatusCode, body: String },

    #[error("Malformed Solr response: {0}")]
    Malformed(String),
}
