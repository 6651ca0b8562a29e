//! Pipeline driver.
//!
//! Classifies the input once, runs the stage set in order over an
//! accumulating text, and hands the collected labels to the confidence
//! estimator and the report assembler.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::confidence;
use crate::config::EnhancerConfig;
use crate::error::{EnhanceError, Result};
use crate::language::{self, LanguageVerdict};
use crate::recognition::{RawRecognition, RecognizedText, ScanOutcome};
use crate::report::{self, EnhancementReport, ReportParts};
use crate::rules::{NormalizationRules, RULES};
use crate::stages::Stage;

/// Score reported when the text needed no changes at all.
pub const UNCHANGED_CONFIDENCE: u8 = 100;

/// Run the enhancement pipeline over one text using the shared rule tables.
pub fn enhance(text: &str) -> EnhancementReport {
    enhance_with(&RULES, text)
}

pub fn enhance_with(rules: &NormalizationRules, text: &str) -> EnhancementReport {
    if text.trim().is_empty() {
        return report::assemble(ReportParts {
            original: text.to_string(),
            enhanced: text.to_string(),
            improvements: Vec::new(),
            confidence: 0,
            language: LanguageVerdict::Unknown,
            word_count: 0,
            character_count: 0,
        });
    }

    let word_count = report::word_count(text);
    let character_count = report::character_count(text);
    let language = language::classify(text);

    let mut stages: Vec<Stage> = Stage::UNIVERSAL.to_vec();
    if language == LanguageVerdict::Turkish {
        stages.push(Stage::TurkishRules);
    }

    let mut current = text.to_string();
    let mut improvements = Vec::new();
    for stage in stages {
        let result = stage.apply(rules, &current);
        if result.changed {
            debug!(stage = result.label, "stage changed text");
            improvements.push(result.label.to_string());
            current = result.text;
        }
    }

    let confidence = if current == text {
        improvements.clear();
        UNCHANGED_CONFIDENCE
    } else {
        confidence::score(
            improvements.len(),
            character_count,
            report::avg_chars_per_word(character_count, word_count),
        )
    };

    info!(
        language = %language,
        improvements = improvements.len(),
        confidence,
        "text enhanced"
    );

    report::assemble(ReportParts {
        original: text.to_string(),
        enhanced: current,
        improvements,
        confidence,
        language,
        word_count,
        character_count,
    })
}

/// Configured entry point used by service layers.
#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    config: EnhancerConfig,
}

impl Enhancer {
    pub fn new(config: EnhancerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    fn check_size(&self, text: &str) -> Result<()> {
        let limit = self.config.max_input_bytes;
        if text.len() > limit {
            warn!(size = text.len(), limit, "rejecting oversized input");
            return Err(EnhanceError::InputTooLarge {
                size: text.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Enhance one text, rejecting inputs above the size ceiling.
    pub fn run(&self, text: &str) -> Result<EnhancementReport> {
        self.check_size(text)?;
        Ok(enhance(text))
    }

    /// Enhance independent documents in parallel; output order follows input.
    pub fn run_batch<S>(&self, texts: &[S]) -> Vec<Result<EnhancementReport>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.run(text.as_ref())).collect()
    }

    /// Take raw engine output through intake and, when it holds real text,
    /// through the enhancement pipeline.
    pub fn process_recognition(&self, raw: RawRecognition) -> Result<ScanOutcome> {
        self.check_size(&raw.text)?;
        let recognition = RecognizedText::from_raw(raw, &self.config);

        let enhancement = if recognition.has_text {
            Some(enhance(&recognition.text))
        } else {
            debug!(
                length = recognition.text_length,
                "skipping enhancement, no meaningful text"
            );
            None
        };

        Ok(ScanOutcome {
            recognition,
            enhancement,
        })
    }
}
