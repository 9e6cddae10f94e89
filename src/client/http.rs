//! HTTP client for the lookup endpoint

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{ClientError, LookupApi};
use crate::types::{ErrorResponse, LookupResult};
use crate::upstream::http::{check_base, endpoint};

#[derive(Debug, Clone)]
pub struct ThesaurusClient {
    http: Client,
    base_url: Url,
}

impl ThesaurusClient {
    pub fn new(http: Client, base_url: Url) -> Result<Self> {
        check_base(&base_url)?;
        Ok(Self { http, base_url })
    }

    pub fn lookup_url(&self, word: &str) -> Url {
        let mut url = endpoint(&self.base_url, &["api", "thesaurus"]);
        url.query_pairs_mut().append_pair("word", word);
        url
    }
}

#[async_trait]
impl LookupApi for ThesaurusClient {
    async fn lookup(&self, word: &str) -> Result<LookupResult, ClientError> {
        let response = self
            .http
            .get(self.lookup_url(word))
            .send()
            .await
            .map_err(ClientError::Unreachable)?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::Malformed);
        }

        let body = response.bytes().await.map_err(ClientError::Unreachable)?;
        match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(err) => Err(ClientError::Rejected {
                status,
                message: err.error,
            }),
            Err(_) => Err(ClientError::UnexpectedStatus(status)),
        }
    }
}
