//! Stem token filter
//!
//! Adapts the root extractor to a token stream: every token's text is
//! replaced with its stem, and blank tokens are skipped.

use std::collections::HashMap;

use jidhr_stem::IsriStemmer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// A token of text with its position in the source stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Filter that replaces each token with its ISRI stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StemFilter {
    stemmer: IsriStemmer,
}

impl StemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stemmer(stemmer: IsriStemmer) -> Self {
        Self { stemmer }
    }

    /// Trim and stem each token; tokens that are blank once trimmed are dropped.
    pub fn filter<I>(&self, tokens: I) -> Vec<Token>
    where
        I: IntoIterator<Item = Token>,
    {
        tokens
            .into_iter()
            .filter_map(|token| {
                let text = token.text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(Token {
                    text: self.stemmer.stem(text),
                    position: token.position,
                })
            })
            .collect()
    }

    pub fn name(&self) -> &'static str {
        "isri_stem"
    }
}

/// Builds [`StemFilter`]s from host-supplied parameters.
#[derive(Debug, Clone, Default)]
pub struct StemFilterFactory;

impl StemFilterFactory {
    /// The `class` key names the factory itself; anything else is rejected.
    pub fn from_args(mut args: HashMap<String, String>) -> Result<Self> {
        args.remove("class");
        if !args.is_empty() {
            let mut keys: Vec<String> = args.into_keys().collect();
            keys.sort();
            return Err(AnalysisError::UnknownArgument(keys.join(", ")));
        }
        debug!("created isri stem filter factory");
        Ok(Self)
    }

    pub fn create(&self) -> StemFilter {
        StemFilter::new()
    }
}
