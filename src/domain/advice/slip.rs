//! Wire types of the Advice Slip search API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single advice record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slip {
    pub id: i64,
    pub advice: String,
    pub date: String,
}

/// Message carried by an upstream error payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

/// Error payload, used by the upstream to signal "no results"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipError {
    pub message: Message,
}

/// Successful search payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    #[serde(rename = "total_results")]
    pub results_amount: String,
    pub query: String,
    pub slips: Vec<Slip>,
}

/// Outcome of a single upstream search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResponse {
    Found(QueryResult),
    NotFound(SlipError),
}

impl UpstreamResponse {
    /// Classifies a response body.
    ///
    /// The body is decoded once. A message with non-empty text always wins
    /// over the slip list; only then is the body required to be a
    /// [`QueryResult`].
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;

        if let Ok(error) = SlipError::deserialize(&value) {
            if !error.message.text.is_empty() {
                return Ok(Self::NotFound(error));
            }
        }

        QueryResult::deserialize(&value).map(Self::Found)
    }
}
