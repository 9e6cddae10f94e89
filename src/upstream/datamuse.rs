//! Datamuse API client
//!
//! Synonyms and spelling suggestions both come from the `/words` endpoint,
//! selected by query parameter.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::http::{check_base, endpoint, get_json};
use super::WordRelationSource;
use crate::error::{UpstreamCall, UpstreamError};
use crate::types::WordScore;

const PARAM_SYNONYM: &str = "rel_syn";
const PARAM_SPELLED_LIKE: &str = "sp";

/// Datamuse word-relation client
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    http: Client,
    base: Url,
    timeout: Duration,
}

impl DatamuseClient {
    pub fn new(http: Client, base: Url, timeout: Duration) -> Result<Self> {
        check_base(&base)?;
        Ok(Self {
            http,
            base,
            timeout,
        })
    }

    fn words_url(&self, param: &str, term: &str) -> Url {
        let mut url = endpoint(&self.base, &["words"]);
        url.query_pairs_mut().append_pair(param, term);
        url
    }

    async fn words(
        &self,
        call: UpstreamCall,
        param: &str,
        term: &str,
    ) -> Result<Vec<WordScore>, UpstreamError> {
        let words: Vec<WordScore> =
            get_json(&self.http, call, self.words_url(param, term), self.timeout).await?;
        tracing::debug!(%call, count = words.len(), "Datamuse words received");
        Ok(words)
    }
}

#[async_trait]
impl WordRelationSource for DatamuseClient {
    async fn synonyms(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError> {
        self.words(UpstreamCall::Synonyms, PARAM_SYNONYM, term).await
    }

    async fn spelled_like(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError> {
        self.words(UpstreamCall::Suggestions, PARAM_SPELLED_LIKE, term)
            .await
    }
}
