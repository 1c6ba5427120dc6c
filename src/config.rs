use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Upstream Solr configuration
    pub solr: SolrConfig,
}

/// Where the Solr collection lives and how long we are willing to wait for it.
#[derive(Debug, Clone, Serialize)]
pub struct SolrConfig {
    /// Collection base URL, e.g. "http://localhost:8983/solr/mycollection".
    /// `/select` and `/schema/fields` are appended to it.
    pub base_url: String,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            solr: SolrConfig::default(),
        }
    }
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8983/solr/mycollection".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

impl SolrConfig {
    /// Config for a collection at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("SOLR_GATEWAY_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(url) = lookup("SOLR_URL") {
            config.solr.base_url = normalize_base_url(&url);
        }
        if let Some(val) = lookup("SOLR_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.solr.timeout_secs = v;
            }
        }
        if let Some(val) = lookup("SOLR_CONNECT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.solr.connect_timeout_secs = v;
            }
        }

        config
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
