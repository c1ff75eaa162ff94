pub mod config;
pub mod error;
pub mod processor;
pub mod routes;

use serde_json::{Map, Value};

#[derive(serde::Deserialize, Debug, Clone)]
pub struct TextRequest {
    pub text: String,
}

/// Response envelope shared by every text action.
///
/// `result` is the field clients read first; the other fields are aliases
/// specific to the action that produced the response.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TextResponse {
    pub improved_text: Option<String>,
    pub result: Option<String>,
    pub corrected_text: Option<String>,
    pub rephrased_text: Option<String>,
    pub suggestions: Option<Vec<Map<String, Value>>>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Status {
    pub message: String,
    pub status: String,
}
