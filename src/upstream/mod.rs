//! Upstream word services
//!
//! Two external collaborators feed a lookup:
//!
//! - **Datamuse** ([`DatamuseClient`]): synonyms (`rel_syn`) and spelling
//!   suggestions (`sp`), both returning scored word lists.
//! - **Free Dictionary** ([`FreeDictionaryClient`]): structured lexical
//!   entries, of which only the first sense is kept.
//!
//! The aggregator only sees the traits below, so tests can swap in fakes.

mod datamuse;
mod dictionary;
pub(crate) mod http;

pub use datamuse::DatamuseClient;
pub use dictionary::{first_definition, DefinitionSense, DictionaryEntry, FreeDictionaryClient, Meaning};
pub use http::build_http_client;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::types::WordScore;

/// Scored word lists keyed on a term.
#[async_trait]
pub trait WordRelationSource: Send + Sync {
    /// Words with the same meaning as `term`, in upstream order.
    async fn synonyms(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError>;

    /// Words spelled like `term`, in upstream order.
    async fn spelled_like(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError>;
}

/// Definitions keyed on a term.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// First definition of the first meaning of the first entry.
    ///
    /// `Ok(None)` means the service answered but the chain was incomplete.
    async fn first_definition(&self, term: &str) -> Result<Option<String>, UpstreamError>;
}
