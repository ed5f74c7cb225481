//! Static Rule Tables
//!
//! Affix lists, positional character classes and the stop-word list used by
//! the ISRI root extractor. Every table is a compiled-in constant; the only
//! runtime construction is the stop-word hash set, built once behind a
//! [`OnceLock`].

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::pattern::{PatternTable, PRO_W4, PRO_W53, PRO_W54, PRO_W6, PRO_W64};

/// A fixed-width list of literal affixes, matched in declared order.
#[derive(Debug, Clone, Copy)]
pub struct AffixSet {
    name: &'static str,
    width: usize,
    entries: &'static [&'static str],
}

impl AffixSet {
    pub const fn new(name: &'static str, width: usize, entries: &'static [&'static str]) -> Self {
        Self {
            name,
            width,
            entries,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of characters every entry spans.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().copied()
    }

    /// Exact membership test for a character sequence.
    pub fn contains(&self, affix: &[char]) -> bool {
        self.entries.iter().any(|entry| entry.chars().eq(affix.iter().copied()))
    }

    /// First entry, in table order, that the word starts with.
    pub fn matching_prefix(&self, word: &[char]) -> Option<&'static str> {
        let head = word.get(..self.width)?;
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.chars().eq(head.iter().copied()))
    }

    /// First entry, in table order, that the word ends with.
    pub fn matching_suffix(&self, word: &[char]) -> Option<&'static str> {
        let start = word.len().checked_sub(self.width)?;
        let tail = &word[start..];
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.chars().eq(tail.iter().copied()))
    }

    /// Drops a matching prefix, or returns `None` when no entry matches.
    pub fn strip_prefix(&self, word: &[char]) -> Option<Vec<char>> {
        self.matching_prefix(word)
            .map(|_| word[self.width..].to_vec())
    }

    /// Drops a matching suffix, or returns `None` when no entry matches.
    pub fn strip_suffix(&self, word: &[char]) -> Option<Vec<char>> {
        self.matching_suffix(word)
            .map(|_| word[..word.len() - self.width].to_vec())
    }
}

/// Sets of characters allowed at numbered slots of a pattern.
#[derive(Debug, Clone, Copy)]
pub struct PositionalCharSet {
    slots: &'static [&'static [char]],
}

impl PositionalCharSet {
    pub const fn new(slots: &'static [&'static [char]]) -> Self {
        Self { slots }
    }

    /// Whether `ch` belongs to the class at `slot`. Unknown slots allow nothing.
    pub fn allows(&self, slot: usize, ch: char) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|class| class.contains(&ch))
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

pub const P3: AffixSet = AffixSet::new(
    "p3",
    3,
    &[
        "\u{0643}\u{0627}\u{0644}", // kal
        "\u{0628}\u{0627}\u{0644}", // bal
        "\u{0648}\u{0644}\u{0644}", // wall
        "\u{0648}\u{0627}\u{0644}", // wal
    ],
);

pub const P2: AffixSet = AffixSet::new(
    "p2",
    2,
    &[
        "\u{0627}\u{0644}", // al
        "\u{0644}\u{0644}", // ll
    ],
);

pub const P1: AffixSet = AffixSet::new(
    "p1",
    1,
    &[
        "\u{0644}", "\u{0628}", "\u{0641}", "\u{0633}", "\u{0648}", "\u{064A}", "\u{062A}",
        "\u{0646}", "\u{0627}",
    ],
);

pub const S3: AffixSet = AffixSet::new(
    "s3",
    3,
    &[
        "\u{062A}\u{0645}\u{0644}",
        "\u{0647}\u{0645}\u{0644}",
        "\u{062A}\u{0627}\u{0646}",
        "\u{062A}\u{064A}\u{0646}",
        "\u{0643}\u{0645}\u{0644}",
    ],
);

pub const S2: AffixSet = AffixSet::new(
    "s2",
    2,
    &[
        "\u{0648}\u{0646}",
        "\u{0627}\u{062A}",
        "\u{0627}\u{0646}",
        "\u{064A}\u{0646}",
        "\u{062A}\u{0646}",
        "\u{0643}\u{0645}",
        "\u{0647}\u{0646}",
        "\u{0646}\u{0627}",
        "\u{064A}\u{0627}",
        "\u{0647}\u{0627}",
        "\u{062A}\u{0645}",
        "\u{0643}\u{0646}",
        "\u{0646}\u{064A}",
        "\u{0648}\u{0627}",
        "\u{0645}\u{0627}",
        "\u{0647}\u{0645}",
    ],
);

pub const S1: AffixSet = AffixSet::new(
    "s1",
    1,
    &[
        "\u{0629}", "\u{0647}", "\u{064A}", "\u{0643}", "\u{062A}", "\u{0627}", "\u{0646}",
    ],
);

/// Infix classes for four-letter words.
pub const PR4: PositionalCharSet = PositionalCharSet::new(&[
    &['\u{0645}'],
    &['\u{0627}'],
    &['\u{0627}', '\u{0648}', '\u{064A}'],
    &['\u{0629}'],
]);

/// Infix classes for five-letter words.
pub const PR53: PositionalCharSet = PositionalCharSet::new(&[
    &['\u{0627}', '\u{062A}'],
    &['\u{0627}', '\u{064A}', '\u{0648}'],
    &['\u{0627}', '\u{062A}', '\u{0645}'],
    &['\u{0645}', '\u{064A}', '\u{062A}'],
    &['\u{0645}', '\u{062A}'],
    &['\u{0627}', '\u{0648}'],
    &['\u{0627}', '\u{0645}'],
]);

/// Words returned untouched once diacritics are removed.
pub static ISRI_STOP_WORDS: &[&str] = &[
    "\u{064A}\u{0643}\u{0648}\u{0646}",
    "\u{0648}\u{0644}\u{064A}\u{0633}",
    "\u{0648}\u{0643}\u{0627}\u{0646}",
    "\u{0643}\u{0630}\u{0644}\u{0643}",
    "\u{0627}\u{0644}\u{062A}\u{064A}",
    "\u{0648}\u{0628}\u{064A}\u{0646}",
    "\u{0639}\u{0644}\u{064A}\u{0647}\u{0627}",
    "\u{0645}\u{0633}\u{0627}\u{0621}",
    "\u{0627}\u{0644}\u{0630}\u{064A}",
    "\u{0648}\u{0643}\u{0627}\u{0646}\u{062A}",
    "\u{0648}\u{0644}\u{0643}\u{0646}",
    "\u{0648}\u{0627}\u{0644}\u{062A}\u{064A}",
    "\u{062A}\u{0643}\u{0648}\u{0646}",
    "\u{0627}\u{0644}\u{064A}\u{0648}\u{0645}",
    "\u{0627}\u{0644}\u{0644}\u{0630}\u{064A}\u{0646}",
    "\u{0639}\u{0644}\u{064A}\u{0647}",
    "\u{0643}\u{0627}\u{0646}\u{062A}",
    "\u{0644}\u{0630}\u{0644}\u{0643}",
    "\u{0623}\u{0645}\u{0627}\u{0645}",
    "\u{0647}\u{0646}\u{0627}\u{0643}",
    "\u{0645}\u{0646}\u{0647}\u{0627}",
    "\u{0645}\u{0627}\u{0632}\u{0627}\u{0644}",
    "\u{0644}\u{0627}\u{0632}\u{0627}\u{0644}",
    "\u{0644}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0645}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0627}\u{0635}\u{0628}\u{062D}",
    "\u{0623}\u{0635}\u{0628}\u{062D}",
    "\u{0623}\u{0645}\u{0633}\u{0649}",
    "\u{0627}\u{0645}\u{0633}\u{0649}",
    "\u{0623}\u{0636}\u{062D}\u{0649}",
    "\u{0627}\u{0636}\u{062D}\u{0649}",
    "\u{0645}\u{0627}\u{0628}\u{0631}\u{062D}",
    "\u{0645}\u{0627}\u{0641}\u{062A}\u{0626}",
    "\u{0645}\u{0627}\u{0627}\u{0646}\u{0641}\u{0643}",
    "\u{0644}\u{0627}\u{0633}\u{064A}\u{0645}\u{0627}",
    "\u{0648}\u{0644}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0627}\u{0644}\u{062D}\u{0627}\u{0644}\u{064A}",
    "\u{0627}\u{0644}\u{064A}\u{0647}\u{0627}",
    "\u{0627}\u{0644}\u{0630}\u{064A}\u{0646}",
    "\u{0641}\u{0627}\u{0646}\u{0647}",
    "\u{0648}\u{0627}\u{0644}\u{0630}\u{064A}",
    "\u{0648}\u{0647}\u{0630}\u{0627}",
    "\u{0644}\u{0647}\u{0630}\u{0627}",
    "\u{0641}\u{0643}\u{0627}\u{0646}",
    "\u{0633}\u{062A}\u{0643}\u{0648}\u{0646}",
    "\u{0627}\u{0644}\u{064A}\u{0647}",
    "\u{064A}\u{0645}\u{0643}\u{0646}",
    "\u{0628}\u{0647}\u{0630}\u{0627}",
    "\u{0627}\u{0644}\u{0630}\u{0649}",
];

/// Immutable stop-word lookup.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<&'static str>,
}

impl StopWordSet {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Every table the stemmer reads, grouped so it can be handed around by reference.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub p3: AffixSet,
    pub p2: AffixSet,
    pub p1: AffixSet,
    pub s3: AffixSet,
    pub s2: AffixSet,
    pub s1: AffixSet,
    pub pro_w4: PatternTable,
    pub pro_w53: PatternTable,
    pub pro_w54: PatternTable,
    pub pro_w6: PatternTable,
    pub pro_w64: PatternTable,
    pub stop_words: StopWordSet,
}

impl RuleSet {
    /// The ISRI rule set, built on first use and shared for the life of the process.
    pub fn isri() -> &'static RuleSet {
        static RULES: OnceLock<RuleSet> = OnceLock::new();
        RULES.get_or_init(|| RuleSet {
            p3: P3,
            p2: P2,
            p1: P1,
            s3: S3,
            s2: S2,
            s1: S1,
            pro_w4: PRO_W4,
            pro_w53: PRO_W53,
            pro_w54: PRO_W54,
            pro_w6: PRO_W6,
            pro_w64: PRO_W64,
            stop_words: StopWordSet::new(ISRI_STOP_WORDS),
        })
    }
}
