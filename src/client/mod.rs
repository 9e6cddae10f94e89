//! Interactive client
//!
//! [`ThesaurusClient`] calls the lookup endpoint; [`ViewState`] holds what an
//! interface shows between searches. Both the terminal client and tests drive
//! `ViewState` through the [`LookupApi`] trait.

mod http;
mod view;

pub use http::ThesaurusClient;
pub use view::{ViewState, EMPTY_QUERY_MESSAGE, IDLE_HINT};

use async_trait::async_trait;
use thiserror::Error;

use crate::types::LookupResult;

/// Message shown whenever the server cannot be reached or answers with
/// something other than a lookup result or an error body.
pub const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching data.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an `{ "error": ... }` body.
    #[error("{message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("An error occurred while fetching data.")]
    Unreachable(#[source] reqwest::Error),

    #[error("An error occurred while fetching data.")]
    Malformed(#[source] reqwest::Error),

    #[error("An error occurred while fetching data.")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Anything that can run a lookup on behalf of the interface.
#[async_trait]
pub trait LookupApi: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<LookupResult, ClientError>;
}
