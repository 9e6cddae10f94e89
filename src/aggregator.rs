//! Lookup aggregation
//!
//! One lookup fans out to three independent upstream calls and folds them
//! into a single [`LookupResult`]:
//!
//! | Call | Source | On failure |
//! |---|---|---|
//! | synonyms | word-relation service | whole lookup fails |
//! | definition | dictionary service | sentinel definition |
//! | suggestions | word-relation service | whole lookup fails |
//!
//! The calls run concurrently. Each one is bounded by the configured call
//! timeout, and a timeout is treated exactly like a transport failure.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::config::UpstreamConfig;
use crate::error::{LookupError, UpstreamCall, UpstreamError};
use crate::types::{Definition, LookupQuery, LookupResult};
use crate::upstream::{
    build_http_client, DatamuseClient, DictionarySource, FreeDictionaryClient, WordRelationSource,
};

/// Stateless aggregator over the upstream word services.
#[derive(Clone)]
pub struct Aggregator {
    words: Arc<dyn WordRelationSource>,
    dictionary: Arc<dyn DictionarySource>,
    call_timeout: Duration,
}

impl Aggregator {
    pub fn new(
        words: Arc<dyn WordRelationSource>,
        dictionary: Arc<dyn DictionarySource>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            words,
            dictionary,
            call_timeout,
        }
    }

    /// Wire the Datamuse and Free Dictionary clients from configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let http = build_http_client(config.timeout)?;
        let words = DatamuseClient::new(http.clone(), config.datamuse_url.clone(), config.timeout)?;
        let dictionary =
            FreeDictionaryClient::new(http, config.dictionary_url.clone(), config.timeout)?;
        Ok(Self::new(
            Arc::new(words),
            Arc::new(dictionary),
            config.timeout,
        ))
    }

    /// Look up a raw user-supplied term.
    ///
    /// Blank input fails with [`LookupError::MissingInput`] before any
    /// upstream call is made.
    pub async fn lookup(&self, term: &str) -> Result<LookupResult, LookupError> {
        let query = LookupQuery::parse(Some(term)).ok_or(LookupError::MissingInput)?;
        self.lookup_query(&query).await
    }

    /// Look up an already validated query.
    #[tracing::instrument(name = "lookup", skip_all, fields(term = %query))]
    pub async fn lookup_query(&self, query: &LookupQuery) -> Result<LookupResult, LookupError> {
        let term = query.term();

        let synonyms = bounded(
            UpstreamCall::Synonyms,
            self.call_timeout,
            self.words.synonyms(term),
        );
        let suggestions = bounded(
            UpstreamCall::Suggestions,
            self.call_timeout,
            self.words.spelled_like(term),
        );
        let definition = async {
            let fetched = bounded(
                UpstreamCall::Dictionary,
                self.call_timeout,
                self.dictionary.first_definition(term),
            )
            .await;
            Ok::<_, UpstreamError>(degrade_definition(fetched))
        };

        let (synonyms, definition, suggestions) =
            tokio::try_join!(synonyms, definition, suggestions).map_err(|err| {
                tracing::error!(call = %err.call(), error = %err, "Mandatory upstream call failed");
                LookupError::UpstreamFailure(err)
            })?;

        tracing::debug!(
            synonyms = synonyms.len(),
            suggestions = suggestions.len(),
            definition_found = definition.is_found(),
            "Lookup assembled"
        );

        Ok(LookupResult {
            synonyms,
            definition,
            suggestions,
        })
    }
}

/// Map the optional dictionary call onto a definition that never fails.
fn degrade_definition(fetched: Result<Option<String>, UpstreamError>) -> Definition {
    match fetched {
        Ok(Some(text)) => Definition::Found(text),
        Ok(None) => {
            tracing::debug!("Dictionary entry has no definition");
            Definition::NotFound
        }
        Err(err) => {
            tracing::warn!(error = %err, "Definition unavailable, using fallback");
            Definition::NotFound
        }
    }
}

/// Run one upstream call under the per-call timeout.
async fn bounded<T, F>(call: UpstreamCall, after: Duration, fut: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => Err(UpstreamError::Timeout { call, after }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordScore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ── Fakes ───────────────────────────────────────────────────────

    #[derive(Clone)]
    enum Outcome<T> {
        Ok(T),
        Status(u16),
        Hang,
    }

    impl<T: Clone> Outcome<T> {
        async fn resolve(&self, call: UpstreamCall) -> Result<T, UpstreamError> {
            match self {
                Self::Ok(value) => Ok(value.clone()),
                Self::Status(code) => Err(UpstreamError::Status {
                    call,
                    status: reqwest::StatusCode::from_u16(*code).unwrap(),
                }),
                Self::Hang => std::future::pending().await,
            }
        }
    }

    struct FakeWords {
        synonyms: Outcome<Vec<WordScore>>,
        suggestions: Outcome<Vec<WordScore>>,
        calls: AtomicUsize,
        terms: Mutex<Vec<String>>,
    }

    impl FakeWords {
        fn new(synonyms: Outcome<Vec<WordScore>>, suggestions: Outcome<Vec<WordScore>>) -> Self {
            Self {
                synonyms,
                suggestions,
                calls: AtomicUsize::new(0),
                terms: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, term: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.terms.lock().unwrap().push(term.to_string());
        }
    }

    #[async_trait]
    impl WordRelationSource for FakeWords {
        async fn synonyms(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError> {
            self.record(term);
            self.synonyms.resolve(UpstreamCall::Synonyms).await
        }

        async fn spelled_like(&self, term: &str) -> Result<Vec<WordScore>, UpstreamError> {
            self.record(term);
            self.suggestions.resolve(UpstreamCall::Suggestions).await
        }
    }

    struct FakeDictionary {
        outcome: Outcome<Option<String>>,
        calls: AtomicUsize,
    }

    impl FakeDictionary {
        fn new(outcome: Outcome<Option<String>>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DictionarySource for FakeDictionary {
        async fn first_definition(&self, _term: &str) -> Result<Option<String>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.resolve(UpstreamCall::Dictionary).await
        }
    }

    fn glad() -> Vec<WordScore> {
        vec![WordScore::new("glad", 100)]
    }

    fn happy() -> Vec<WordScore> {
        vec![WordScore::new("happy", 100)]
    }

    fn pleasure() -> Outcome<Option<String>> {
        Outcome::Ok(Some("feeling or showing pleasure".to_string()))
    }

    fn build(
        words: FakeWords,
        dictionary: FakeDictionary,
    ) -> (Aggregator, Arc<FakeWords>, Arc<FakeDictionary>) {
        let words = Arc::new(words);
        let dictionary = Arc::new(dictionary);
        let aggregator = Aggregator::new(
            words.clone(),
            dictionary.clone(),
            Duration::from_secs(10),
        );
        (aggregator, words, dictionary)
    }

    // ── Tests ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_all_calls_succeed() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(pleasure()),
        );

        let result = aggregator.lookup("happy").await.unwrap();
        assert_eq!(
            result,
            LookupResult {
                synonyms: glad(),
                definition: Definition::Found("feeling or showing pleasure".into()),
                suggestions: happy(),
            }
        );
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_calls() {
        let (aggregator, words, dictionary) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(pleasure()),
        );

        for input in ["", " ", "\t\n  "] {
            let err = aggregator.lookup(input).await.unwrap_err();
            assert!(matches!(err, LookupError::MissingInput));
            assert_eq!(err.http_status(), 400);
        }
        assert_eq!(words.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dictionary.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_term_is_trimmed_before_upstream() {
        let (aggregator, words, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(pleasure()),
        );

        aggregator.lookup("  ice cream ").await.unwrap();
        let terms = words.terms.lock().unwrap().clone();
        assert_eq!(terms, vec!["ice cream".to_string(), "ice cream".to_string()]);
    }

    #[tokio::test]
    async fn test_dictionary_failure_degrades() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(Outcome::Status(404)),
        );

        let result = aggregator.lookup("happy").await.unwrap();
        assert_eq!(result.definition, Definition::NotFound);
        assert_eq!(result.definition.as_str(), "Definition not found");
        assert_eq!(result.synonyms, glad());
        assert_eq!(result.suggestions, happy());
    }

    #[tokio::test]
    async fn test_incomplete_dictionary_entry_is_not_found() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(Outcome::Ok(None)),
        );

        let result = aggregator.lookup("happy").await.unwrap();
        assert_eq!(result.definition, Definition::NotFound);
    }

    #[tokio::test]
    async fn test_synonym_failure_fails_lookup() {
        for dictionary in [pleasure(), Outcome::Status(500)] {
            let (aggregator, _, _) = build(
                FakeWords::new(Outcome::Status(503), Outcome::Ok(happy())),
                FakeDictionary::new(dictionary),
            );

            let err = aggregator.lookup("happy").await.unwrap_err();
            assert_eq!(err.http_status(), 500);
            assert_eq!(err.to_string(), "Error fetching data. Please try again.");
        }
    }

    #[tokio::test]
    async fn test_suggestion_failure_fails_lookup() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Status(502)),
            FakeDictionary::new(pleasure()),
        );

        match aggregator.lookup("happy").await.unwrap_err() {
            LookupError::UpstreamFailure(err) => assert_eq!(err.call(), UpstreamCall::Suggestions),
            other => panic!("Expected upstream failure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_synonym_call_times_out() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Hang, Outcome::Ok(happy())),
            FakeDictionary::new(pleasure()),
        );

        match aggregator.lookup("happy").await.unwrap_err() {
            LookupError::UpstreamFailure(UpstreamError::Timeout { call, after }) => {
                assert_eq!(call, UpstreamCall::Synonyms);
                assert_eq!(after, Duration::from_secs(10));
            }
            other => panic!("Expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_dictionary_call_degrades() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(Outcome::Hang),
        );

        let result = aggregator.lookup("happy").await.unwrap();
        assert_eq!(result.definition, Definition::NotFound);
        assert_eq!(result.synonyms, glad());
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_identical() {
        let (aggregator, _, _) = build(
            FakeWords::new(Outcome::Ok(glad()), Outcome::Ok(happy())),
            FakeDictionary::new(pleasure()),
        );

        let first = aggregator.lookup("happy").await.unwrap();
        let second = aggregator.lookup("happy").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config_rejects_unusable_base() {
        let config = UpstreamConfig::new(
            url::Url::parse("mailto:someone@example.com").unwrap(),
            url::Url::parse("https://api.dictionaryapi.dev").unwrap(),
            Duration::from_secs(1),
        );
        assert!(Aggregator::from_config(&config).is_err());
    }
}
