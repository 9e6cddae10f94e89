//! Thesaurus API endpoints
//!
//! GET /api/thesaurus?word=<term> — synonyms, definition and suggestions
//! GET /api/health                — liveness check

use axum::{
    extract::{RawQuery, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::aggregator::Aggregator;
use crate::error::LookupError;
use crate::types::LookupResult;

#[derive(Clone)]
pub struct ThesaurusState {
    aggregator: Aggregator,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// First `word` value in a raw query string. Repeats after it are ignored.
pub fn word_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "word")
        .map(|(_, value)| value.into_owned())
}

/// GET /api/thesaurus
async fn lookup_word(
    State(state): State<ThesaurusState>,
    RawQuery(query): RawQuery,
) -> Result<Json<LookupResult>, LookupError> {
    let word = word_param(query.as_deref()).unwrap_or_default();
    state
        .aggregator
        .lookup(&word)
        .await
        .inspect_err(|e| {
            if matches!(e, LookupError::MissingInput) {
                tracing::debug!("Rejected lookup without a word");
            }
        })
        .map(Json)
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create router for thesaurus endpoints
pub fn create_thesaurus_router(aggregator: Aggregator) -> Router {
    let state = ThesaurusState { aggregator };

    Router::new()
        .route("/api/thesaurus", get(lookup_word))
        .route("/api/health", get(health))
        .with_state(state)
}
