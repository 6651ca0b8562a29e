//! Intake of raw OCR engine output.
//!
//! The engine hands over plain text and its own confidence. Before the text
//! is enhanced it gets a light cleanup and a check that it contains real
//! characters at all (blank scans produce a few stray symbols).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::EnhancerConfig;
use crate::language::{self, LanguageVerdict};
use crate::report::EnhancementReport;

lazy_static! {
    static ref BLANK_LINES: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref INLINE_SPACE: Regex = Regex::new(r"[^\S\n]+").unwrap();
}

/// Text and confidence as produced by the OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecognition {
    pub text: String,
    /// Engine confidence, nominally 0-100
    pub confidence: f64,
}

/// A recognition after intake cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedText {
    pub raw_text: String,
    pub text: String,
    pub confidence: u8,
    pub language: LanguageVerdict,
    pub text_length: usize,
    pub has_text: bool,
}

impl RecognizedText {
    pub fn from_raw(raw: RawRecognition, config: &EnhancerConfig) -> Self {
        let text = clean_recognized_text(&raw.text);
        let meaningful = text.chars().filter(|c| c.is_alphanumeric()).count();

        Self {
            confidence: engine_confidence(raw.confidence),
            language: language::classify(&text),
            text_length: text.chars().count(),
            has_text: meaningful > config.min_text_chars,
            raw_text: raw.text,
            text,
        }
    }
}

/// Collapse blank lines and inline whitespace, then trim.
pub fn clean_recognized_text(text: &str) -> String {
    let text = BLANK_LINES.replace_all(text, "\n");
    INLINE_SPACE.replace_all(&text, " ").trim().to_string()
}

fn engine_confidence(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Recognition plus the enhancement pass, when there was text to enhance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub recognition: RecognizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<EnhancementReport>,
}

impl ScanOutcome {
    /// Text handed on to export: the enhanced text when available.
    pub fn export_text(&self) -> &str {
        match &self.enhancement {
            Some(report) => &report.enhanced,
            None => &self.recognition.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str, confidence: f64) -> RawRecognition {
        RawRecognition {
            text: text.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_clean_recognized_text() {
        assert_eq!(
            clean_recognized_text("  first   line\n\n\nsecond\t line  "),
            "first line\nsecond line"
        );
    }

    #[test]
    fn test_from_raw() {
        let config = EnhancerConfig::default();
        let recognized = RecognizedText::from_raw(raw("The cat and the dog", 87.6), &config);
        assert_eq!(recognized.confidence, 88);
        assert_eq!(recognized.language, LanguageVerdict::English);
        assert_eq!(recognized.text_length, 19);
        assert!(recognized.has_text);
        assert_eq!(recognized.raw_text, "The cat and the dog");
    }

    #[test]
    fn test_noise_has_no_text() {
        let config = EnhancerConfig::default();
        let recognized = RecognizedText::from_raw(raw(" | ~ . a1 _ ", 12.0), &config);
        assert!(!recognized.has_text);
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(engine_confidence(-3.0), 0);
        assert_eq!(engine_confidence(140.0), 100);
        assert_eq!(engine_confidence(f64::NAN), 0);
    }

    #[test]
    fn test_export_text_falls_back_to_recognition() {
        let config = EnhancerConfig::default();
        let outcome = ScanOutcome {
            recognition: RecognizedText::from_raw(raw("..", 50.0), &config),
            enhancement: None,
        };
        assert_eq!(outcome.export_text(), "..");
    }
}
