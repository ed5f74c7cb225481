//! Prefix and suffix stripping stages.

use crate::tables::RuleSet;

const WAW: char = '\u{0648}';

/// Remove a three-letter prefix from words of six letters or more, otherwise
/// a two-letter prefix from words of five or more.
pub fn pre32(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    if word.len() >= 6 {
        if let Some(stripped) = rules.p3.strip_prefix(&word) {
            return stripped;
        }
    }
    if word.len() >= 5 {
        if let Some(stripped) = rules.p2.strip_prefix(&word) {
            return stripped;
        }
    }
    word
}

/// Suffix counterpart of [`pre32`].
pub fn suf32(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    if word.len() >= 6 {
        if let Some(stripped) = rules.s3.strip_suffix(&word) {
            return stripped;
        }
    }
    if word.len() >= 5 {
        if let Some(stripped) = rules.s2.strip_suffix(&word) {
            return stripped;
        }
    }
    word
}

/// Collapse a doubled leading waw.
pub fn waw(mut word: Vec<char>) -> Vec<char> {
    if word.len() >= 4 && word[0] == WAW && word[1] == WAW {
        word.remove(0);
    }
    word
}

/// Remove one trailing character listed in S1.
pub fn suf1(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    rules.s1.strip_suffix(&word).unwrap_or(word)
}

/// Remove one leading character listed in P1.
pub fn pre1(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    rules.p1.strip_prefix(&word).unwrap_or(word)
}
