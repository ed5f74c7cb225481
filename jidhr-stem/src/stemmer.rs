//! ISRI Root Extractor
//!
//! Drives a word through normalization, the stop-word check, affix stripping
//! and the length-keyed pattern stages.

use rayon::prelude::*;
use tracing::trace;

use crate::affix::{pre1, pre32, suf1, suf32, waw};
use crate::normalize::{normalize_chars, NormMode};
use crate::pattern::{end_w5, end_w6, pro_w4, pro_w53, pro_w6};
use crate::tables::RuleSet;

/// Stateless ISRI stemmer over a shared, immutable [`RuleSet`].
#[derive(Debug, Clone, Copy)]
pub struct IsriStemmer {
    rules: &'static RuleSet,
}

impl Default for IsriStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl IsriStemmer {
    /// Create a stemmer over the built-in ISRI tables.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::isri())
    }

    pub fn with_rules(rules: &'static RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        self.stem_chars(word.chars().collect()).into_iter().collect()
    }

    /// Whether the word, once diacritics are removed, is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        let mut chars: Vec<char> = word.chars().collect();
        normalize_chars(&mut chars, NormMode::ShortVowels);
        self.rules
            .stop_words
            .contains(&chars.into_iter().collect::<String>())
    }

    /// Stem a word given as code points.
    pub fn stem_chars(&self, mut word: Vec<char>) -> Vec<char> {
        let rules = self.rules;

        normalize_chars(&mut word, NormMode::ShortVowels);
        let normalized: String = word.iter().collect();
        if rules.stop_words.contains(&normalized) {
            trace!(word = %normalized, "stop word, skipping");
            return word;
        }

        let word = pre32(rules, word);
        let word = suf32(rules, word);
        let mut word = waw(word);
        normalize_chars(&mut word, NormMode::InitialHamza);

        match word.len() {
            4 => pro_w4(rules, word),
            5 => {
                let word = pro_w53(rules, word);
                end_w5(rules, word)
            }
            6 => {
                let word = pro_w6(rules, word);
                end_w6(rules, word)
            }
            7 => {
                let mut word = suf1(rules, word);
                if word.len() == 7 {
                    word = pre1(rules, word);
                }
                if word.len() == 6 {
                    let word = pro_w6(rules, word);
                    end_w6(rules, word)
                } else {
                    word
                }
            }
            _ => word,
        }
    }

    /// Stem many words in parallel, keeping input order.
    pub fn stem_batch<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|word| self.stem(word.as_ref())).collect()
    }
}
