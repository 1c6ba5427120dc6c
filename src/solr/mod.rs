//! Everything that talks to, or speaks the dialect of, the upstream Solr
//! collection: the HTTP client, query construction, and response reshaping.

pub mod client;
pub mod error;
pub mod query;
pub mod reshape;

pub use client::SolrClient;
