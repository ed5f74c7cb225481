//! Analyzer Traits
//!
//! Common interface for analyzers and their configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Configuration for text analyzers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Apply root extraction to Arabic tokens
    pub stemming: bool,
    /// Drop tatweel (kashida) before stemming
    pub remove_tatweel: bool,
    /// Minimum token length, in letters
    pub min_token_length: usize,
    /// Maximum token length, in letters
    pub max_token_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stemming: true,
            remove_tatweel: true,
            min_token_length: 1,
            max_token_length: 50,
        }
    }
}

impl AnalyzerConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded analyzer config");
        Ok(config)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(AnalysisError::InvalidConfig(
                "min_token_length must be at least 1".into(),
            ));
        }
        if self.min_token_length > self.max_token_length {
            return Err(AnalysisError::InvalidConfig(format!(
                "min_token_length {} exceeds max_token_length {}",
                self.min_token_length, self.max_token_length
            )));
        }
        Ok(())
    }
}

/// Common trait for all text analyzers.
pub trait Analyzer: Send + Sync {
    /// Tokenize text into individual tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the analyzer configuration.
    fn config(&self) -> &AnalyzerConfig;

    /// Process text: tokenize, stem and filter.
    fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
    }
}
