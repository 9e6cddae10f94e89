//! Runtime configuration
//!
//! Upstream endpoints and the per-call timeout. The server binary builds a
//! [`ServerConfig`] from flags and environment (after loading `.env`), then
//! hands the upstream half to the clients.

use std::time::Duration;

use url::Url;

pub const DEFAULT_DATAMUSE_URL: &str = "https://api.datamuse.com";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// Where the upstream services live and how long one call may take.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub datamuse_url: Url,
    pub dictionary_url: Url,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(datamuse_url: Url, dictionary_url: Url, timeout: Duration) -> Self {
        Self {
            datamuse_url,
            dictionary_url,
            timeout,
        }
    }

    /// Point both services at one base URL. Used against local mock servers.
    pub fn single_host(base: &str, timeout: Duration) -> Result<Self, url::ParseError> {
        let url = Url::parse(base)?;
        Ok(Self::new(url.clone(), url, timeout))
    }
}

#[cfg(feature = "server")]
pub use server::ServerConfig;

#[cfg(feature = "server")]
mod server {
    use std::net::SocketAddr;
    use std::time::Duration;

    use clap::Parser;
    use url::Url;

    use super::UpstreamConfig;

    /// Thesaurus lookup server
    #[derive(Parser, Debug, Clone)]
    #[command(name = "thesaurus_server")]
    #[command(about = "HTTP server aggregating synonyms, definitions and spelling suggestions")]
    pub struct ServerConfig {
        /// Listen address
        #[arg(long, default_value = "0.0.0.0:3000", env = "THESAURUS_LISTEN")]
        pub listen: SocketAddr,

        /// Base URL of the Datamuse word service
        #[arg(long, default_value = super::DEFAULT_DATAMUSE_URL, env = "THESAURUS_DATAMUSE_URL")]
        pub datamuse_url: Url,

        /// Base URL of the Free Dictionary service
        #[arg(long, default_value = super::DEFAULT_DICTIONARY_URL, env = "THESAURUS_DICTIONARY_URL")]
        pub dictionary_url: Url,

        /// Timeout for each outbound call in milliseconds
        #[arg(
            long,
            default_value_t = super::DEFAULT_UPSTREAM_TIMEOUT_MS,
            env = "THESAURUS_UPSTREAM_TIMEOUT_MS"
        )]
        pub upstream_timeout_ms: u64,
    }

    impl ServerConfig {
        pub fn upstream(&self) -> UpstreamConfig {
            UpstreamConfig::new(
                self.datamuse_url.clone(),
                self.dictionary_url.clone(),
                Duration::from_millis(self.upstream_timeout_ms),
            )
        }
    }

}
