//! Two-language classifier for recognized text.
//!
//! Turkish is detected through its diacritic letters plus a set of very
//! frequent function words and pronouns; English through two closed lists
//! of function/determiner words. A language wins when its score beats the
//! other by 1.5x.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Texts shorter than this (in characters) are never classified
pub const MIN_CLASSIFIABLE_CHARS: usize = 10;

const DOMINANCE_RATIO: f64 = 1.5;
const DIACRITIC_BONUS: u32 = 5;

/// Letters that only show up in Turkish among the supported languages.
pub const TURKISH_DIACRITICS: [char; 12] = [
    'ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü',
];

lazy_static! {
    static ref TURKISH_LETTERS: Regex = Regex::new(r"[çğıöşüÇĞİÖŞÜ]").unwrap();
    static ref TURKISH_FUNCTION_WORDS: Regex = Regex::new(
        r"(?i)\b(?:ve|bir|bu|da|de|için|ile|ama|gibi|çok|daha|olarak|kadar|sonra|değil|var|yok)\b"
    ).unwrap();
    static ref TURKISH_PRONOUNS: Regex = Regex::new(
        r"(?i)\b(?:ben|sen|biz|siz|onlar|şu|bunlar|şunlar|her|hiç|bazı)\b"
    ).unwrap();

    static ref ENGLISH_COMMON: Regex = Regex::new(
        r"(?i)\b(?:the|and|is|in|to|of|that|it|you|he|for|with|but|on|at|she|her|him|his|are|or)\b"
    ).unwrap();
    static ref ENGLISH_DETERMINERS: Regex = Regex::new(
        r"(?i)\b(?:a|an|this|these|those|was|were|be|been|have|has|had|will|would|from|by|not|they|we|which)\b"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVerdict {
    Turkish,
    English,
    Mixed,
    Unknown,
}

impl LanguageVerdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::Turkish => "turkish",
            Self::English => "english",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LanguageVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw per-language evidence, exposed for debugging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageScores {
    pub turkish: u32,
    pub english: u32,
}

impl LanguageScores {
    pub fn verdict(&self) -> LanguageVerdict {
        let tr = f64::from(self.turkish);
        let en = f64::from(self.english);

        if tr > en * DOMINANCE_RATIO {
            LanguageVerdict::Turkish
        } else if en > tr * DOMINANCE_RATIO {
            LanguageVerdict::English
        } else if self.turkish > 0 && self.english > 0 {
            LanguageVerdict::Mixed
        } else {
            LanguageVerdict::Unknown
        }
    }
}

fn count(pattern: &Regex, text: &str) -> u32 {
    pattern.find_iter(text).count() as u32
}

/// Score `text` against both languages without applying the length gate.
pub fn score(text: &str) -> LanguageScores {
    let bonus = TURKISH_DIACRITICS
        .iter()
        .filter(|c| text.contains(**c))
        .count() as u32
        * DIACRITIC_BONUS;

    LanguageScores {
        turkish: count(&TURKISH_LETTERS, text)
            + count(&TURKISH_FUNCTION_WORDS, text)
            + count(&TURKISH_PRONOUNS, text)
            + bonus,
        english: count(&ENGLISH_COMMON, text) + count(&ENGLISH_DETERMINERS, text),
    }
}

/// Classify a snippet of recognized text.
pub fn classify(text: &str) -> LanguageVerdict {
    if text.chars().count() < MIN_CLASSIFIABLE_CHARS {
        return LanguageVerdict::Unknown;
    }
    score(text).verdict()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unknown() {
        assert_eq!(classify(""), LanguageVerdict::Unknown);
        assert_eq!(classify("the cat i"), LanguageVerdict::Unknown);
        assert_eq!(classify("çok güzel"), LanguageVerdict::Unknown);
    }

    #[test]
    fn test_exactly_ten_chars_is_classified() {
        assert_eq!("the cat is".chars().count(), 10);
        assert_eq!(classify("the cat is"), LanguageVerdict::English);
    }

    #[test]
    fn test_ten_chars_without_evidence() {
        assert_eq!(classify("1234567890"), LanguageVerdict::Unknown);
    }

    #[test]
    fn test_turkish_sentence() {
        let scores = score("çok güzel bir gün");
        // ç ü ü, çok bir, bonus for ç and ü
        assert_eq!(scores.turkish, 3 + 2 + 10);
        assert_eq!(scores.english, 0);
        assert_eq!(classify("çok güzel bir gün"), LanguageVerdict::Turkish);
    }

    #[test]
    fn test_diacritics_without_function_words() {
        assert_eq!(classify("güzel gün görüş"), LanguageVerdict::Turkish);
    }

    #[test]
    fn test_bonus_counts_distinct_letters_once() {
        let one = score("üüüüüüüüüü");
        assert_eq!(one.turkish, 10 + 5);
    }

    #[test]
    fn test_english_sentence() {
        assert_eq!(
            classify("The report was sent to the office by the manager"),
            LanguageVerdict::English
        );
    }

    #[test]
    fn test_tie_is_mixed() {
        let scores = score("bu the house");
        assert_eq!(scores.turkish, scores.english);
        assert_eq!(classify("bu the house"), LanguageVerdict::Mixed);
    }

    #[test]
    fn test_no_dominance_is_mixed() {
        // tr = 3 (bu, ve, bir), en = 2 (the, and): 3 is not > 3
        assert_eq!(classify("bu ve bir the and house"), LanguageVerdict::Mixed);
    }

    #[test]
    fn test_case_insensitive_words() {
        assert_eq!(classify("THE HOUSE AND THE DOG"), LanguageVerdict::English);
    }

    #[test]
    fn test_whole_word_only() {
        // "theatre" and "android" must not count as "the"/"and"
        assert_eq!(classify("theatre android"), LanguageVerdict::Unknown);
    }

    #[test]
    fn test_deterministic() {
        let text = "Bu bir deneme metnidir and this is a test";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_labels() {
        assert_eq!(LanguageVerdict::Turkish.to_string(), "turkish");
        assert_eq!(
            serde_json::to_string(&LanguageVerdict::Mixed).unwrap(),
            "\"mixed\""
        );
    }
}
