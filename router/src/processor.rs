use crate::{TextRequest, TextResponse};

use std::fmt;
use tracing::instrument;

const REPHRASE_SUFFIX: &str = " (rephrased)";
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Text actions the API knows how to run.
///
/// Parsing is total: any name that is not an exact match falls back to
/// [`Action::Improve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Improve,
    Rephrase,
    Grammar,
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        match name {
            "rephrase" => Action::Rephrase,
            "grammar" => Action::Grammar,
            _ => Action::Improve,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Improve => "improve",
            Action::Rephrase => "rephrase",
            Action::Grammar => "grammar",
        };
        f.write_str(name)
    }
}

impl Action {
    #[instrument(skip(request), fields(text_len = request.text.len()))]
    pub fn apply(self, request: TextRequest) -> TextResponse {
        match self {
            Action::Improve => improve(request),
            Action::Rephrase => rephrase(request),
            Action::Grammar => grammar(request),
        }
    }
}

// Placeholders below stand in for the language-model call.

pub fn improve(request: TextRequest) -> TextResponse {
    let mut improved = capitalize(&request.text);
    if !improved.ends_with(TERMINAL_PUNCTUATION) {
        improved.push('.');
    }

    TextResponse {
        improved_text: Some(improved.clone()),
        result: Some(improved),
        ..Default::default()
    }
}

/// `result` carries the untouched input, not the rephrased text.
pub fn rephrase(request: TextRequest) -> TextResponse {
    TextResponse {
        rephrased_text: Some(format!("{}{}", request.text, REPHRASE_SUFFIX)),
        result: Some(request.text),
        ..Default::default()
    }
}

pub fn grammar(request: TextRequest) -> TextResponse {
    let corrected = capitalize(&request.text);

    TextResponse {
        corrected_text: Some(corrected.clone()),
        result: Some(corrected),
        suggestions: Some(Vec::new()),
        ..Default::default()
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
