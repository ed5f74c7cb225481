//! Infix Pattern Rules
//!
//! Length-keyed rule tables that cut pattern letters out of four, five and
//! six letter words. Each table is an ordered list of declarative rules;
//! the first rule whose tests all hold rewrites the word by concatenating
//! the ranges it keeps.

use std::ops::Range;

use tracing::trace;

use crate::affix::{pre1, suf1};
use crate::tables::{PositionalCharSet, RuleSet, PR4, PR53};

const ALEF: char = '\u{0627}';
const TAA: char = '\u{062A}';
const TAA_MARBUTA: char = '\u{0629}';
const MEEM: char = '\u{0645}';
const NOON: char = '\u{0646}';
const WAW: char = '\u{0648}';
const YAA: char = '\u{064A}';
const YAA_HAMZA: char = '\u{0626}';

/// A single positional predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Test {
    /// Char at `at` belongs to `slot` of the table's positional classes.
    InClass { at: usize, slot: usize },
    /// Char at `at` equals `ch`.
    Is { at: usize, ch: char },
    /// Chars at `at` and `other` are the same.
    Same { at: usize, other: usize },
    /// Word starts with the literal.
    StartsWith(&'static str),
}

impl Test {
    fn holds(&self, word: &[char], classes: Option<&PositionalCharSet>) -> bool {
        match *self {
            Test::InClass { at, slot } => match (word.get(at), classes) {
                (Some(&ch), Some(classes)) => classes.allows(slot, ch),
                _ => false,
            },
            Test::Is { at, ch } => word.get(at) == Some(&ch),
            Test::Same { at, other } => match (word.get(at), word.get(other)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Test::StartsWith(literal) => {
                let width = literal.chars().count();
                word.get(..width)
                    .is_some_and(|head| literal.chars().eq(head.iter().copied()))
            }
        }
    }
}

/// Tests plus the ranges kept when every test holds.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub tests: &'static [Test],
    pub keep: &'static [Range<usize>],
}

impl PatternRule {
    pub fn matches(&self, word: &[char], classes: Option<&PositionalCharSet>) -> bool {
        self.tests.iter().all(|test| test.holds(word, classes))
    }

    /// Concatenate the kept ranges; `None` if a range falls outside the word.
    pub fn rewrite(&self, word: &[char]) -> Option<Vec<char>> {
        let mut out = Vec::with_capacity(word.len());
        for range in self.keep {
            out.extend_from_slice(word.get(range.clone())?);
        }
        Some(out)
    }
}

/// Ordered rules for words of exactly `width` characters.
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    pub name: &'static str,
    pub width: usize,
    pub classes: Option<&'static PositionalCharSet>,
    pub rules: &'static [PatternRule],
}

impl PatternTable {
    /// First rule, in table order, that applies to the word.
    pub fn matching_rule(&self, word: &[char]) -> Option<&'static PatternRule> {
        if word.len() != self.width {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(word, self.classes))
    }

    /// Rewrite the word with the first applicable rule.
    pub fn apply(&self, word: &[char]) -> Option<Vec<char>> {
        let rule = self.matching_rule(word)?;
        let out = rule.rewrite(word)?;
        trace!(table = self.name, rule = rule.name, "pattern rule matched");
        Some(out)
    }
}

pub const PRO_W4: PatternTable = PatternTable {
    name: "pro_w4",
    width: 4,
    classes: Some(&PR4),
    rules: &[
        PatternRule {
            name: "leading meem",
            tests: &[Test::InClass { at: 0, slot: 0 }],
            keep: &[1..4],
        },
        PatternRule {
            name: "alef at 1",
            tests: &[Test::InClass { at: 1, slot: 1 }],
            keep: &[0..1, 2..4],
        },
        PatternRule {
            name: "weak letter at 2",
            tests: &[Test::InClass { at: 2, slot: 2 }],
            keep: &[0..2, 3..4],
        },
        PatternRule {
            name: "trailing taa marbuta",
            tests: &[Test::InClass { at: 3, slot: 3 }],
            keep: &[0..3],
        },
    ],
};

pub const PRO_W53: PatternTable = PatternTable {
    name: "pro_w53",
    width: 5,
    classes: Some(&PR53),
    rules: &[
        PatternRule {
            name: "ifta'al",
            tests: &[Test::InClass { at: 2, slot: 0 }, Test::Is { at: 0, ch: ALEF }],
            keep: &[1..2, 3..5],
        },
        PatternRule {
            name: "maf'ul",
            tests: &[Test::InClass { at: 3, slot: 1 }, Test::Is { at: 0, ch: MEEM }],
            keep: &[1..3, 4..5],
        },
        PatternRule {
            name: "prefixed feminine",
            tests: &[Test::InClass { at: 0, slot: 2 }, Test::Is { at: 4, ch: TAA_MARBUTA }],
            keep: &[1..4],
        },
        PatternRule {
            name: "prefix with taa at 2",
            tests: &[Test::InClass { at: 0, slot: 3 }, Test::Is { at: 2, ch: TAA }],
            keep: &[1..2, 3..5],
        },
        PatternRule {
            name: "prefix with alef at 2",
            tests: &[Test::InClass { at: 0, slot: 4 }, Test::Is { at: 2, ch: ALEF }],
            keep: &[1..2, 3..5],
        },
        PatternRule {
            name: "weak infix feminine",
            tests: &[Test::InClass { at: 2, slot: 5 }, Test::Is { at: 4, ch: TAA_MARBUTA }],
            keep: &[0..2, 3..4],
        },
        PatternRule {
            name: "infa'al",
            tests: &[Test::InClass { at: 0, slot: 6 }, Test::Is { at: 1, ch: NOON }],
            keep: &[2..5],
        },
        PatternRule {
            name: "if'aal",
            tests: &[Test::Is { at: 3, ch: ALEF }, Test::Is { at: 0, ch: ALEF }],
            keep: &[1..3, 4..5],
        },
        PatternRule {
            name: "fa'laan",
            tests: &[Test::Is { at: 4, ch: NOON }, Test::Is { at: 3, ch: ALEF }],
            keep: &[0..3],
        },
        PatternRule {
            name: "taf'eel",
            tests: &[Test::Is { at: 3, ch: YAA }, Test::Is { at: 0, ch: TAA }],
            keep: &[1..3, 4..5],
        },
        PatternRule {
            name: "faa'ool",
            tests: &[Test::Is { at: 3, ch: WAW }, Test::Is { at: 1, ch: ALEF }],
            keep: &[0..1, 2..3, 4..5],
        },
        PatternRule {
            name: "fawaa'il",
            tests: &[Test::Is { at: 2, ch: ALEF }, Test::Is { at: 1, ch: WAW }],
            keep: &[0..1, 3..5],
        },
        PatternRule {
            name: "fa'aa'il",
            tests: &[Test::Is { at: 3, ch: YAA_HAMZA }, Test::Is { at: 2, ch: ALEF }],
            keep: &[0..2, 4..5],
        },
        PatternRule {
            name: "faa'ila",
            tests: &[Test::Is { at: 4, ch: TAA_MARBUTA }, Test::Is { at: 1, ch: ALEF }],
            keep: &[0..1, 2..4],
        },
        PatternRule {
            name: "fa'aali",
            tests: &[Test::Is { at: 4, ch: YAA }, Test::Is { at: 2, ch: ALEF }],
            keep: &[0..2, 3..4],
        },
    ],
};

pub const PRO_W54: PatternTable = PatternTable {
    name: "pro_w54",
    width: 5,
    classes: Some(&PR53),
    rules: &[
        PatternRule {
            name: "leading prefix letter",
            tests: &[Test::InClass { at: 0, slot: 2 }],
            keep: &[1..5],
        },
        PatternRule {
            name: "trailing taa marbuta",
            tests: &[Test::Is { at: 4, ch: TAA_MARBUTA }],
            keep: &[0..4],
        },
        PatternRule {
            name: "alef at 2",
            tests: &[Test::Is { at: 2, ch: ALEF }],
            keep: &[0..2, 3..5],
        },
    ],
};

pub const PRO_W6: PatternTable = PatternTable {
    name: "pro_w6",
    width: 6,
    classes: None,
    rules: &[
        PatternRule {
            name: "istaf'ala",
            tests: &[Test::StartsWith("\u{0627}\u{0633}\u{062A}")],
            keep: &[3..6],
        },
        PatternRule {
            name: "mustaf'il",
            tests: &[Test::StartsWith("\u{0645}\u{0633}\u{062A}")],
            keep: &[3..6],
        },
        PatternRule {
            name: "maf'aala",
            tests: &[
                Test::Is { at: 0, ch: MEEM },
                Test::Is { at: 3, ch: ALEF },
                Test::Is { at: 5, ch: TAA_MARBUTA },
            ],
            keep: &[1..3, 4..5],
        },
        PatternRule {
            name: "ifti'aal",
            tests: &[
                Test::Is { at: 0, ch: ALEF },
                Test::Is { at: 2, ch: TAA },
                Test::Is { at: 4, ch: ALEF },
            ],
            keep: &[1..2, 3..4, 5..6],
        },
        PatternRule {
            name: "if'aw'ala",
            tests: &[
                Test::Is { at: 0, ch: ALEF },
                Test::Is { at: 3, ch: WAW },
                Test::Same { at: 2, other: 4 },
            ],
            keep: &[1..2, 4..6],
        },
        PatternRule {
            name: "tafaa'eel",
            tests: &[
                Test::Is { at: 0, ch: TAA },
                Test::Is { at: 2, ch: ALEF },
                Test::Is { at: 4, ch: YAA },
            ],
            keep: &[1..2, 3..4, 5..6],
        },
    ],
};

pub const PRO_W64: PatternTable = PatternTable {
    name: "pro_w64",
    width: 6,
    classes: None,
    rules: &[
        PatternRule {
            name: "if'aal with alef at 4",
            tests: &[Test::Is { at: 0, ch: ALEF }, Test::Is { at: 4, ch: ALEF }],
            keep: &[1..4, 5..6],
        },
        PatternRule {
            name: "mutafa'il",
            tests: &[Test::StartsWith("\u{0645}\u{062A}")],
            keep: &[2..6],
        },
    ],
};

/// Four-letter infix removal, falling back to one suffix then one prefix letter.
pub fn pro_w4(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    if let Some(out) = rules.pro_w4.apply(&word) {
        return out;
    }
    let word = suf1(rules, word);
    if word.len() == 4 {
        pre1(rules, word)
    } else {
        word
    }
}

/// Five-letter to three-letter reduction.
pub fn pro_w53(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    if let Some(out) = rules.pro_w53.apply(&word) {
        return out;
    }
    let word = suf1(rules, word);
    if word.len() == 5 {
        pre1(rules, word)
    } else {
        word
    }
}

/// Five-letter to four-letter reduction. Unchanged when no rule applies.
pub fn pro_w54(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    rules.pro_w54.apply(&word).unwrap_or(word)
}

/// Follow-up after [`pro_w53`], keyed on the new length.
pub fn end_w5(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    match word.len() {
        4 => pro_w4(rules, word),
        5 => pro_w54(rules, word),
        _ => word,
    }
}

/// Six-letter reduction.
pub fn pro_w6(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    if let Some(out) = rules.pro_w6.apply(&word) {
        return out;
    }
    let word = suf1(rules, word);
    if word.len() == 6 {
        pre1(rules, word)
    } else {
        word
    }
}

/// Six-letter to four-letter reduction. Unchanged when no rule applies.
pub fn pro_w64(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    rules.pro_w64.apply(&word).unwrap_or(word)
}

/// Follow-up after [`pro_w6`], keyed on the new length.
pub fn end_w6(rules: &RuleSet, word: Vec<char>) -> Vec<char> {
    match word.len() {
        5 => {
            let word = pro_w53(rules, word);
            end_w5(rules, word)
        }
        6 => pro_w64(rules, word),
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn rule_and_result(table: &PatternTable, word: &str) -> (usize, String) {
        let word = chars(word);
        let rule = table.matching_rule(&word).expect("no rule matched");
        let index = table
            .rules
            .iter()
            .position(|r| std::ptr::eq(r, rule))
            .unwrap();
        let out: String = table.apply(&word).unwrap().into_iter().collect();
        (index, out)
    }

    #[test]
    fn rule_counts() {
        assert_eq!(PRO_W4.rules.len(), 4);
        assert_eq!(PRO_W53.rules.len(), 15);
        assert_eq!(PRO_W54.rules.len(), 3);
        assert_eq!(PRO_W6.rules.len(), 6);
        assert_eq!(PRO_W64.rules.len(), 2);
    }

    #[test]
    fn keep_ranges_stay_inside_width() {
        for table in [PRO_W4, PRO_W53, PRO_W54, PRO_W6, PRO_W64] {
            for rule in table.rules {
                for range in rule.keep {
                    assert!(range.end <= table.width, "{} / {}", table.name, rule.name);
                }
            }
        }
    }

    #[test]
    fn four_letter_rules_in_order() {
        assert_eq!(rule_and_result(&PRO_W4, "مكتب"), (0, "كتب".into()));
        assert_eq!(rule_and_result(&PRO_W4, "كاتب"), (1, "كتب".into()));
        assert_eq!(rule_and_result(&PRO_W4, "كتاب"), (2, "كتب".into()));
        assert_eq!(rule_and_result(&PRO_W4, "جلوس"), (2, "جلس".into()));
        assert_eq!(rule_and_result(&PRO_W4, "كتبة"), (3, "كتب".into()));
        assert!(PRO_W4.matching_rule(&chars("بجدك")).is_none());
    }

    #[test]
    fn five_to_three_rules_in_order() {
        let cases = [
            "ابتجد", "مبجيد", "تبجدة", "يبتجد", "تباجد", "بجودة", "انبجد", "ابجاد", "بجدان",
            "تبجيد", "باجود", "بواجد", "بجائد", "باجدة", "بجادي",
        ];
        for (expected, word) in cases.iter().enumerate() {
            assert_eq!(rule_and_result(&PRO_W53, word), (expected, "بجد".into()), "{word}");
        }
        assert!(PRO_W53.matching_rule(&chars("بجدكل")).is_none());
    }

    #[test]
    fn five_to_four_rules_in_order() {
        assert_eq!(rule_and_result(&PRO_W54, "مبجدك"), (0, "بجدك".into()));
        assert_eq!(rule_and_result(&PRO_W54, "بجدكة"), (1, "بجدك".into()));
        assert_eq!(rule_and_result(&PRO_W54, "بجادك"), (2, "بجدك".into()));
    }

    #[test]
    fn six_letter_rules_in_order() {
        assert_eq!(rule_and_result(&PRO_W6, "استقبل"), (0, "قبل".into()));
        assert_eq!(rule_and_result(&PRO_W6, "مستقبل"), (1, "قبل".into()));
        assert_eq!(rule_and_result(&PRO_W6, "مبجادة"), (2, "بجد".into()));
        assert_eq!(rule_and_result(&PRO_W6, "ابتجاد"), (3, "بجد".into()));
        assert_eq!(rule_and_result(&PRO_W6, "ابجوجد"), (4, "بجد".into()));
        assert_eq!(rule_and_result(&PRO_W6, "تباجيد"), (5, "بجد".into()));
    }

    #[test]
    fn six_to_four_rules_in_order() {
        assert_eq!(rule_and_result(&PRO_W64, "ابجدال"), (0, "بجدل".into()));
        assert_eq!(rule_and_result(&PRO_W64, "متبجدل"), (1, "بجدل".into()));
    }

    #[test]
    fn wrong_width_never_matches() {
        assert!(PRO_W53.apply(&chars("ابت")).is_none());
        assert!(PRO_W6.apply(&chars("است")).is_none());
        assert!(PRO_W4.apply(&chars("مكتبة")).is_none());
    }

    #[test]
    fn out_of_range_tests_fail_closed() {
        let short = chars("ا");
        assert!(!Test::Is { at: 3, ch: ALEF }.holds(&short, None));
        assert!(!Test::Same { at: 0, other: 4 }.holds(&short, None));
        assert!(!Test::InClass { at: 0, slot: 1 }.holds(&short, None));
        assert!(!Test::StartsWith("\u{0627}\u{0633}").holds(&short, None));
    }

    #[test]
    fn four_letter_fallback_strips_suffix_before_prefix() {
        let rules = RuleSet::isri();
        let run = |w: &str| -> String { pro_w4(rules, chars(w)).into_iter().collect() };
        assert_eq!(run("بجدن"), "بجد");
        assert_eq!(run("يبجد"), "بجد");
        // suffix removal shortens the word, so no prefix is tried
        assert_eq!(run("نبجك"), "نبج");
        assert_eq!(run("حجدد"), "حجدد");
    }

    #[test]
    fn five_letter_fallback_reenters_four_letter_rules() {
        let rules = RuleSet::isri();
        let word = pro_w53(rules, chars("يبجدك"));
        assert_eq!(word, chars("يبجد"));
        let word = end_w5(rules, word);
        assert_eq!(word.into_iter().collect::<String>(), "بجد");
    }

    #[test]
    fn six_letter_fallback_reenters_five_letter_rules() {
        let rules = RuleSet::isri();
        // no six-letter rule, prefix seen is dropped, then ta-prefixed five letters
        let word = pro_w6(rules, chars("ستخدام"));
        assert_eq!(word, chars("تخدام"));
        let word = end_w6(rules, word);
        assert_eq!(word.into_iter().collect::<String>(), "خدم");
    }
}
