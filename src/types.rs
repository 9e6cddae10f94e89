//! Lookup value types
//!
//! Request-scoped values that cross the endpoint boundary. Nothing here is
//! persisted; a `LookupResult` lives for exactly one request/response cycle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel text sent in place of a definition when none could be found.
pub const DEFINITION_NOT_FOUND: &str = "Definition not found";

/// A validated lookup term.
///
/// Construction trims surrounding whitespace and rejects blank input, so a
/// `LookupQuery` always holds a non-empty term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    term: String,
}

impl LookupQuery {
    /// Parse raw user input. Returns `None` for absent, empty or whitespace-only input.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let term = raw?.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl std::fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.term)
    }
}

/// A scored word from the word-relation service.
///
/// Used for both synonyms and spelling suggestions. The score is kept as the
/// upstream JSON number so integer scores stay integers on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<serde_json::Number>,
}

impl WordScore {
    pub fn new(word: impl Into<String>, score: u64) -> Self {
        Self {
            word: word.into(),
            score: Some(score.into()),
        }
    }
}

pub type SynonymEntry = WordScore;
pub type SuggestionEntry = WordScore;

/// The single retained definition of a term.
///
/// On the wire this is always a string: either the definition text or
/// [`DEFINITION_NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Definition {
    Found(String),
    #[default]
    NotFound,
}

impl Definition {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(text) => text,
            Self::NotFound => DEFINITION_NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<String>> for Definition {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => Self::Found(text),
            None => Self::NotFound,
        }
    }
}

impl Serialize for Definition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Definition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(match text {
            Some(text) if text != DEFINITION_NOT_FOUND && !text.is_empty() => Self::Found(text),
            _ => Self::NotFound,
        })
    }
}

/// Composite payload for one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub synonyms: Vec<SynonymEntry>,
    pub definition: Definition,
    pub suggestions: Vec<SuggestionEntry>,
}

/// Error body returned by the endpoint on any non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
