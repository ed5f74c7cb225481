//! Arabic Normalizer
//!
//! Short-vowel removal and word-initial hamza folding, done with explicit
//! code-point tests.

const ALEF: char = '\u{0627}';

/// Normalization modes of the ISRI stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormMode {
    /// Remove short-vowel diacritics (fathatan through sukun).
    ShortVowels,
    /// Fold a leading alef-with-hamza or alef-with-madda to bare alef.
    InitialHamza,
    /// Both of the above, diacritics first.
    Both,
}

impl NormMode {
    /// Map the numeric mode codes 1, 2 and 3.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(NormMode::ShortVowels),
            2 => Some(NormMode::InitialHamza),
            3 => Some(NormMode::Both),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            NormMode::ShortVowels => 1,
            NormMode::InitialHamza => 2,
            NormMode::Both => 3,
        }
    }

    fn strips_vowels(&self) -> bool {
        matches!(self, NormMode::ShortVowels | NormMode::Both)
    }

    fn folds_hamza(&self) -> bool {
        matches!(self, NormMode::InitialHamza | NormMode::Both)
    }
}

/// Check if a character is a short-vowel diacritic.
pub fn is_short_vowel(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{0652}')
}

/// Check if a character is one of the hamza-bearing alef forms.
pub fn is_initial_hamza(ch: char) -> bool {
    matches!(ch,
        '\u{0622}' | // Alef with madda
        '\u{0623}' | // Alef with hamza above
        '\u{0625}'   // Alef with hamza below
    )
}

/// Normalize a word in place.
pub fn normalize_chars(word: &mut Vec<char>, mode: NormMode) {
    if mode.strips_vowels() {
        word.retain(|&ch| !is_short_vowel(ch));
    }
    if mode.folds_hamza() {
        if let Some(first) = word.first_mut() {
            if is_initial_hamza(*first) {
                *first = ALEF;
            }
        }
    }
}

/// Normalize a word.
pub fn normalize(word: &str, mode: NormMode) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    normalize_chars(&mut chars, mode);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_short_vowels() {
        assert_eq!(normalize("كَتَبَ", NormMode::ShortVowels), "كتب");
        assert_eq!(normalize("مُدَرِّسٌ", NormMode::ShortVowels), "مدرس");
    }

    #[test]
    fn keeps_marks_outside_short_vowel_range() {
        // superscript alef and maddah are not short vowels
        assert_eq!(normalize("ه\u{0670}ذا", NormMode::ShortVowels), "ه\u{0670}ذا");
        assert_eq!(normalize("ا\u{0653}", NormMode::ShortVowels), "ا\u{0653}");
    }

    #[test]
    fn folds_only_initial_hamza() {
        assert_eq!(normalize("أسأل", NormMode::InitialHamza), "اسأل");
        assert_eq!(normalize("إنشاء", NormMode::InitialHamza), "انشاء");
        assert_eq!(normalize("آمن", NormMode::InitialHamza), "امن");
        assert_eq!(normalize("سأل", NormMode::InitialHamza), "سأل");
    }

    #[test]
    fn hamza_mode_leaves_vowels() {
        assert_eq!(normalize("أَمَلٌ", NormMode::InitialHamza), "اَمَلٌ");
    }

    #[test]
    fn combined_mode_strips_then_folds() {
        assert_eq!(normalize("\u{064E}أمل", NormMode::Both), "امل");
        assert_eq!(normalize("\u{064E}أمل", NormMode::InitialHamza), "\u{064E}أمل");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize("", NormMode::Both), "");
    }

    #[test]
    fn mode_codes() {
        assert_eq!(NormMode::from_code(1), Some(NormMode::ShortVowels));
        assert_eq!(NormMode::from_code(3).map(|m| m.code()), Some(3));
        assert_eq!(NormMode::from_code(4), None);
    }
}
