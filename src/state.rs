use crate::config::Config;
use crate::solr::SolrClient;

/// Shared application state. Holds no mutable data: every request is an
/// independent round-trip to Solr.
#[derive(Clone)]
pub struct AppState {
    pub solr: SolrClient,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let solr = SolrClient::new(&config.solr)?;
        Ok(Self { solr })
    }
}
