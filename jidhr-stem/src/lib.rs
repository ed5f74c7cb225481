//! ISRI Arabic Root Extraction
//!
//! Reduces an Arabic word to an approximation of its root:
//! - Short-vowel (tashkeel) removal and initial hamza folding
//! - Stop-word short-circuit
//! - Prefix/suffix stripping from fixed affix tables
//! - Length-keyed infix pattern rules for four to seven letter words
//!
//! ```
//! assert_eq!(jidhr_stem::stem("المكتبة"), "كتب");
//! ```

pub mod affix;
pub mod normalize;
pub mod pattern;
mod stemmer;
pub mod tables;

pub use normalize::{is_initial_hamza, is_short_vowel, normalize, NormMode};
pub use pattern::{PatternRule, PatternTable, Test};
pub use stemmer::IsriStemmer;
pub use tables::{AffixSet, PositionalCharSet, RuleSet, StopWordSet, ISRI_STOP_WORDS};

/// Stem a word with the built-in rule set.
pub fn stem(word: &str) -> String {
    IsriStemmer::new().stem(word)
}
