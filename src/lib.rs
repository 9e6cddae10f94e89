//! Thesaurus lookup service
//!
//! Given a word, aggregates synonyms, a definition and spelling suggestions
//! from two public APIs (Datamuse and the Free Dictionary API) into a single
//! JSON payload served at `GET /api/thesaurus?word=<term>`.
//!
//! - [`aggregator::Aggregator`] is the core: validation, concurrent fan-out,
//!   and mapping of mandatory vs degraded upstream failures.
//! - [`upstream`] holds the reqwest clients behind injectable traits.
//! - [`api`] (feature `server`) exposes the aggregator over axum.
//! - [`client`] is the consuming side: an HTTP client and a view-state holder
//!   used by the interactive terminal client.

pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod upstream;

#[cfg(feature = "server")]
pub mod api;

pub use aggregator::Aggregator;
pub use error::{LookupError, UpstreamCall, UpstreamError};
pub use types::{Definition, LookupQuery, LookupResult, WordScore, DEFINITION_NOT_FOUND};
