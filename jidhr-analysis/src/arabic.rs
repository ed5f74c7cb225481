//! Arabic Text Analyzer
//!
//! Splits text into Arabic and ASCII alphanumeric tokens, applies length
//! limits and reduces Arabic tokens to their ISRI roots.

use jidhr_stem::{is_short_vowel, IsriStemmer};
use rayon::prelude::*;

use super::traits::{Analyzer, AnalyzerConfig};

const TATWEEL: char = '\u{0640}';

/// Arabic analyzer backed by the ISRI root extractor.
#[derive(Debug, Clone)]
pub struct IsriAnalyzer {
    config: AnalyzerConfig,
    stemmer: IsriStemmer,
}

impl Default for IsriAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl IsriAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            stemmer: IsriStemmer::new(),
        }
    }

    pub fn with_stemmer(mut self, stemmer: IsriStemmer) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Analyze many documents in parallel, keeping input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Arabic letters and marks, excluding punctuation in the Arabic block.
    fn is_arabic_char(ch: char) -> bool {
        matches!(ch as u32,
            0x0621..=0x065F |  // Letters, tatweel, harakat
            0x0670..=0x06D3    // Superscript alef, extended letters
        )
    }

    fn is_token_char(ch: char) -> bool {
        Self::is_arabic_char(ch) || ch.is_ascii_alphanumeric()
    }

    fn letter_count(token: &str) -> usize {
        token.chars().filter(|&ch| !is_short_vowel(ch)).count()
    }

    fn process(&self, token: String) -> Option<String> {
        let token = if self.config.remove_tatweel {
            token.chars().filter(|&ch| ch != TATWEEL).collect()
        } else {
            token
        };

        let len = Self::letter_count(&token);
        if len < self.config.min_token_length || len > self.config.max_token_length {
            return None;
        }

        if self.config.stemming && token.chars().any(Self::is_arabic_char) {
            Some(self.stemmer.stem(&token))
        } else {
            Some(token)
        }
    }
}

impl Analyzer for IsriAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|ch: char| !Self::is_token_char(ch))
            .filter(|token| !token.is_empty())
            .filter_map(|token| self.process(token.to_string()))
            .collect()
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
