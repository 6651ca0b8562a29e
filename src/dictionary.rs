//! Known OCR misreadings and their corrections.
//!
//! A small closed table covering both supported languages. Each entry is
//! compiled once into a whole-word, case-insensitive pattern; the table is
//! applied in order.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// (misreading, correction) pairs
pub const MISREADINGS: &[(&str, &str)] = &[
    // English: h/b and li/h confusions
    ("tbe", "the"),
    ("tlie", "the"),
    ("tbat", "that"),
    ("wbich", "which"),
    ("witb", "with"),
    ("bave", "have"),
    // rn/m and n/a confusions
    ("frorn", "from"),
    ("rnay", "may"),
    ("nnd", "and"),
    // Turkish (after accent folding): l/i confusions
    ("lcin", "icin"),
    ("gibl", "gibi"),
    ("lle", "ile"),
];

/// Compiled correction table.
pub struct CorrectionDictionary {
    entries: Vec<(Regex, &'static str)>,
}

impl CorrectionDictionary {
    pub fn new() -> Self {
        let entries = MISREADINGS
            .iter()
            .map(|(wrong, right)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(wrong));
                (Regex::new(&pattern).unwrap(), *right)
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every correction; returns the corrected text and the number of
    /// words replaced.
    pub fn correct(&self, text: &str) -> (String, u64) {
        let mut result = text.to_string();
        let mut total_subs: u64 = 0;

        for (pattern, replacement) in &self.entries {
            let hits = pattern.find_iter(&result).count();
            if hits == 0 {
                continue;
            }
            result = pattern
                .replace_all(&result, |caps: &Captures| match_case(&caps[0], replacement))
                .into_owned();
            total_subs += hits as u64;
        }

        (result, total_subs)
    }
}

impl Default for CorrectionDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Carry a leading capital over from the misread word.
fn match_case(found: &str, replacement: &str) -> String {
    let capitalized = found.chars().next().is_some_and(char::is_uppercase);
    if !capitalized {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

lazy_static! {
    pub static ref DICTIONARY: CorrectionDictionary = CorrectionDictionary::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(DICTIONARY.len(), 12);
        assert!(!DICTIONARY.is_empty());
    }

    #[test]
    fn test_corrects_whole_words() {
        let (text, subs) = DICTIONARY.correct("tbe cat sat witb tlie dog");
        assert_eq!(text, "the cat sat with the dog");
        assert_eq!(subs, 3);
    }

    #[test]
    fn test_leaves_substrings_alone() {
        let (text, subs) = DICTIONARY.correct("tbere is nothing here");
        assert_eq!(text, "tbere is nothing here");
        assert_eq!(subs, 0);
    }

    #[test]
    fn test_case_insensitive_keeps_capital() {
        let (text, _) = DICTIONARY.correct("Tbe end. TBAT is all");
        assert_eq!(text, "The end. That is all");
    }

    #[test]
    fn test_turkish_entries() {
        let (text, subs) = DICTIONARY.correct("bunun lcin ali lle gibl");
        assert_eq!(text, "bunun icin ali ile gibi");
        assert_eq!(subs, 3);
    }

    #[test]
    fn test_no_change() {
        let (text, subs) = DICTIONARY.correct("plain words only");
        assert_eq!(text, "plain words only");
        assert_eq!(subs, 0);
    }
}
