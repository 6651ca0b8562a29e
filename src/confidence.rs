//! Confidence estimate for an enhancement pass.
//!
//! This is a heuristic about how trustworthy the cleaned text is, separate
//! from the OCR engine's own confidence.

const BASE_SCORE: u32 = 60;
const PER_IMPROVEMENT: u32 = 5;
const IMPROVEMENT_CAP: u32 = 30;
const LENGTH_BONUS: u32 = 5;
const WORD_SHAPE_BONUS: u32 = 5;
const MAX_SCORE: u32 = 95;

/// Score a pass that changed the text. Never exceeds 95; the "nothing to
/// fix" case is scored 100 by the pipeline without calling this.
pub fn score(improvement_count: usize, character_count: usize, avg_chars_per_word: f64) -> u8 {
    let mut total = BASE_SCORE;
    total += (improvement_count as u32)
        .saturating_mul(PER_IMPROVEMENT)
        .min(IMPROVEMENT_CAP);

    if character_count > 100 {
        total += LENGTH_BONUS;
    }
    if character_count > 500 {
        total += LENGTH_BONUS;
    }
    // Typical word lengths; very short or very long averages suggest noise
    if avg_chars_per_word > 3.0 && avg_chars_per_word < 10.0 {
        total += WORD_SHAPE_BONUS;
    }

    total.min(MAX_SCORE) as u8
}
