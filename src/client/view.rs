//! Client view state
//!
//! One mutable record per interface. A search replaces the result fields
//! wholesale; nothing is merged with the previous lookup.

use super::{ClientError, LookupApi};
use crate::types::{Definition, LookupResult, SuggestionEntry, SynonymEntry};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a word to search.";
pub const IDLE_HINT: &str = "Enter a word to find synonyms and definitions.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub synonyms: Vec<SynonymEntry>,
    pub definition: Option<Definition>,
    pub suggestions: Vec<SuggestionEntry>,
    pub error: Option<String>,
    pub loading: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for the current query.
    ///
    /// Returns the word to send, or `None` (with `error` set) when the query
    /// is blank. The word is sent exactly as typed.
    pub fn begin_search(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            self.error = Some(EMPTY_QUERY_MESSAGE.to_string());
            return None;
        }
        self.error = None;
        self.synonyms.clear();
        self.definition = None;
        self.suggestions.clear();
        self.loading = true;
        Some(self.query.clone())
    }

    /// Apply the outcome of a search started with [`begin_search`](Self::begin_search).
    pub fn finish_search(&mut self, outcome: Result<LookupResult, ClientError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.synonyms = result.synonyms;
                self.definition = Some(result.definition);
                self.suggestions = result.suggestions;
                self.error = None;
            }
            Err(err) => {
                tracing::debug!(error = ?err, "Lookup failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Run one full lookup cycle for the current query.
    pub async fn search(&mut self, api: &dyn LookupApi) {
        if let Some(word) = self.begin_search() {
            let outcome = api.lookup(&word).await;
            self.finish_search(outcome);
        }
    }

    /// Search for another word, making it the current query.
    pub async fn search_for(&mut self, word: impl Into<String>, api: &dyn LookupApi) {
        self.query = word.into();
        self.search(api).await;
    }

    /// Pivot to the synonym at `index`. Returns `false` if there is none.
    pub async fn select_synonym(&mut self, index: usize, api: &dyn LookupApi) -> bool {
        match self.synonyms.get(index) {
            Some(entry) => {
                let word = entry.word.clone();
                self.search_for(word, api).await;
                true
            }
            None => false,
        }
    }

    /// Pivot to the spelling suggestion at `index`. Returns `false` if there is none.
    pub async fn select_suggestion(&mut self, index: usize, api: &dyn LookupApi) -> bool {
        match self.suggestions.get(index) {
            Some(entry) => {
                let word = entry.word.clone();
                self.search_for(word, api).await;
                true
            }
            None => false,
        }
    }

    /// Reset every field without calling the server.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Nothing to show yet: no results, no error, no search in flight.
    pub fn is_idle(&self) -> bool {
        !self.loading && self.synonyms.is_empty() && self.error.is_none() && self.definition.is_none()
    }
}
