//! Compiled pattern tables for the normalization stages.
//!
//! Built once on first use and shared read-only by every pipeline run.

use lazy_static::lazy_static;
use regex::Regex;

use crate::dictionary::{CorrectionDictionary, DICTIONARY};

const MONTH_NAMES: &str = concat!(
    "january|february|march|april|may|june|july|august|september|october|november|december|",
    "ocak|[sş]ubat|mart|nisan|may[iı]s|haziran|temmuz|a[gğ]ustos|eyl[uü]l|ekim|kas[iı]m|aral[iı]k",
);

const CURRENCY_CODES: &str = "USD|EUR|GBP|TRY|JPY|CHF|CAD|AUD";

/// Top-level domains accepted after a dot that has stray spaces around it.
const SPACED_TLDS: &str = "com|net|org|edu|gov|info|io|co|tr|uk|de";

pub struct NormalizationRules {
    // whitespace
    pub horizontal_space: Regex,
    pub space_before_punct: Regex,
    pub blank_line_run: Regex,

    // character confusion
    pub line_leading_zero: Regex,

    // dates and times
    pub day_month_year: Regex,
    pub year_month_day: Regex,
    pub spelled_date: Regex,
    pub clock_time: Regex,

    // currency and numbers
    pub amount_then_code: Regex,
    pub code_then_amount: Regex,
    pub digit_run: Regex,

    // email and web addresses
    pub at_token: Regex,
    pub dot_token: Regex,
    pub email: Regex,
    pub url: Regex,
    pub www_host: Regex,

    // tables
    pub wide_gap: Regex,

    // abbreviations
    pub spaced_initials: Regex,
    pub spaced_lower_abbrev: Regex,
    pub caps_trailing_period: Regex,

    // typography
    pub ellipsis: Regex,

    // casing and lists
    pub symbol_bullet: Regex,
    pub ascii_bullet: Regex,
    pub paren_number: Regex,
    pub dot_number: Regex,
    pub letter_marker: Regex,
    pub sentence_start: Regex,

    // Turkish pass
    pub repeated_ve: Regex,
    pub glued_sentence: Regex,

    pub dictionary: &'static CorrectionDictionary,
}

impl NormalizationRules {
    fn new() -> Self {
        let host_tail = format!(r"(?:\.[a-z0-9-]+|[ \t]*\.[ \t]*(?:{SPACED_TLDS})\b)");

        Self {
            horizontal_space: Regex::new(r"[^\S\r\n]+").unwrap(),
            space_before_punct: Regex::new(r" +([.,])").unwrap(),
            blank_line_run: Regex::new(r"\n(?:[^\S\n]*\n){2,}").unwrap(),

            line_leading_zero: Regex::new(r"(?m)^0(?:[0-9][.:][0-9]{2}\b)?").unwrap(),

            day_month_year: Regex::new(
                r"\b([0-9]{1,2})[./\-–—]([0-9]{1,2})[./\-–—]([0-9]{2,4})\b"
            ).unwrap(),
            year_month_day: Regex::new(
                r"\b([0-9]{4})[./\-–—]([0-9]{1,2})[./\-–—]([0-9]{1,2})\b"
            ).unwrap(),
            spelled_date: Regex::new(&format!(
                r"(?i)\b([0-9]{{1,2}})\s+({MONTH_NAMES})\s+([0-9]{{4}})\b"
            )).unwrap(),
            clock_time: Regex::new(
                r"\b([0-9]{1,2})([.:])([0-9]{2})(?:[ \t]*([AaPp][Mm]))?\b"
            ).unwrap(),

            amount_then_code: Regex::new(&format!(
                r"\b([0-9][0-9.,]*)[ \t]*({CURRENCY_CODES})\b"
            )).unwrap(),
            code_then_amount: Regex::new(&format!(
                r"\b({CURRENCY_CODES})[ \t]*([0-9][0-9.,]*)"
            )).unwrap(),
            digit_run: Regex::new(r"[0-9]{4,}").unwrap(),

            at_token: Regex::new(r"(?i)[ \t]*\[at\][ \t]*").unwrap(),
            dot_token: Regex::new(r"(?i)[ \t]*\[dot\][ \t]*").unwrap(),
            email: Regex::new(&format!(
                r"[A-Za-z0-9._%+-]+[ \t]*@[ \t]*[A-Za-z0-9-]+{host_tail}+"
            )).unwrap(),
            url: Regex::new(&format!(
                r"\b(?i:https?)[ \t]*:[ \t]*/[ \t]*/[ \t]*(?:(?i:www)[ \t]*\.[ \t]*)?[a-z0-9-]+{host_tail}*"
            )).unwrap(),
            www_host: Regex::new(&format!(
                r"\b(?i:www)[ \t]*\.[ \t]*[a-z0-9-]+{host_tail}+"
            )).unwrap(),

            wide_gap: Regex::new(r" {3,}").unwrap(),

            spaced_initials: Regex::new(r"\b[A-Z]\.(?:[ \t]+[A-Za-z]\.)+").unwrap(),
            spaced_lower_abbrev: Regex::new(r"\b[a-z]\.(?:[ \t]+[A-Za-z]\.)+").unwrap(),
            caps_trailing_period: Regex::new(r"\b([A-Z]{2,})\.([ \t]|$)").unwrap(),

            ellipsis: Regex::new(r"[ \t]*…").unwrap(),

            symbol_bullet: Regex::new(r"(?m)^[•●◦▪‣∙⁃][ \t]*(\S)").unwrap(),
            ascii_bullet: Regex::new(r"(?m)^[-*][ \t]+(\S)").unwrap(),
            paren_number: Regex::new(r"(?m)^([0-9]+)\)[ \t]*(\S)").unwrap(),
            dot_number: Regex::new(r"(?m)^([0-9]+)\.[ \t]+(\S)").unwrap(),
            letter_marker: Regex::new(r"(?m)^([a-z])\)").unwrap(),
            sentence_start: Regex::new(r"(^\s*|[.!?]\s+)(\p{Ll})").unwrap(),

            repeated_ve: Regex::new(r"(?i)\b(ve)(?:\s+ve)+\b").unwrap(),
            glued_sentence: Regex::new(r"(\p{Ll})\.(\p{Lu})").unwrap(),

            dictionary: &DICTIONARY,
        }
    }
}

lazy_static! {
    pub static ref RULES: NormalizationRules = NormalizationRules::new();
}
