//! Enhancement report assembly.

use serde::{Deserialize, Serialize};

use crate::language::LanguageVerdict;

/// Text length statistics for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Characters in the original text
    pub original_length: usize,
    /// Characters in the enhanced text
    pub enhanced_length: usize,
    /// Share of the original length removed; negative when text grew
    pub reduction_percentage: i64,
}

/// Final output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementReport {
    pub original: String,
    pub enhanced: String,
    /// Labels of the stages that changed the text, in stage order
    pub improvements: Vec<String>,
    pub confidence: u8,
    pub detected_language: LanguageVerdict,
    pub word_count: usize,
    pub character_count: usize,
    pub avg_chars_per_word: f64,
    pub stats: ReportStats,
}

impl EnhancementReport {
    /// True when at least one stage changed the text.
    pub fn was_modified(&self) -> bool {
        !self.improvements.is_empty()
    }
}

/// Whitespace-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Characters that are not whitespace.
pub fn character_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn avg_chars_per_word(character_count: usize, word_count: usize) -> f64 {
    character_count as f64 / word_count.max(1) as f64
}

pub fn reduction_percentage(original_length: usize, enhanced_length: usize) -> i64 {
    if original_length == 0 {
        return 0;
    }
    let removed = original_length as f64 - enhanced_length as f64;
    // Halves round toward positive infinity
    (100.0 * removed / original_length as f64 + 0.5).floor() as i64
}

/// Inputs gathered by the pipeline driver.
#[derive(Debug)]
pub(crate) struct ReportParts {
    pub original: String,
    pub enhanced: String,
    pub improvements: Vec<String>,
    pub confidence: u8,
    pub language: LanguageVerdict,
    pub word_count: usize,
    pub character_count: usize,
}

pub(crate) fn assemble(parts: ReportParts) -> EnhancementReport {
    let original_length = parts.original.chars().count();
    let enhanced_length = parts.enhanced.chars().count();

    EnhancementReport {
        avg_chars_per_word: avg_chars_per_word(parts.character_count, parts.word_count),
        stats: ReportStats {
            original_length,
            enhanced_length,
            reduction_percentage: reduction_percentage(original_length, enhanced_length),
        },
        original: parts.original,
        enhanced: parts.enhanced,
        improvements: parts.improvements,
        confidence: parts.confidence,
        detected_language: parts.language,
        word_count: parts.word_count,
        character_count: parts.character_count,
    }
}
