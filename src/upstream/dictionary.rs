//! Free Dictionary API client
//!
//! `GET /api/v2/entries/en/<term>` returns a list of entries, each with
//! meanings, each with definitions. A lookup keeps one string from that tree.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::{check_base, endpoint, get_json};
use super::DictionarySource;
use crate::error::{UpstreamCall, UpstreamError};

// =============================================================================
// Response schema
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<DefinitionSense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSense {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// First entry → first meaning → first definition, if every link exists.
///
/// A blank definition string counts as missing.
pub fn first_definition(entries: &[DictionaryEntry]) -> Option<&str> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()
        .map(|sense| sense.definition.as_str())
        .filter(|text| !text.trim().is_empty())
}

// =============================================================================
// Client
// =============================================================================

/// Free Dictionary client (English entries)
#[derive(Debug, Clone)]
pub struct FreeDictionaryClient {
    http: Client,
    base: Url,
    timeout: Duration,
}

impl FreeDictionaryClient {
    pub fn new(http: Client, base: Url, timeout: Duration) -> Result<Self> {
        check_base(&base)?;
        Ok(Self {
            http,
            base,
            timeout,
        })
    }

    fn entries_url(&self, term: &str) -> Url {
        endpoint(&self.base, &["api", "v2", "entries", "en", term])
    }

    /// Fetch the full entry list for a term.
    pub async fn entries(&self, term: &str) -> Result<Vec<DictionaryEntry>, UpstreamError> {
        get_json(
            &self.http,
            UpstreamCall::Dictionary,
            self.entries_url(term),
            self.timeout,
        )
        .await
    }
}

#[async_trait]
impl DictionarySource for FreeDictionaryClient {
    async fn first_definition(&self, term: &str) -> Result<Option<String>, UpstreamError> {
        let entries = self.entries(term).await?;
        Ok(first_definition(&entries).map(str::to_string))
    }
}
