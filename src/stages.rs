//! The normalization stage set.
//!
//! Twelve independent text rewrites applied in a fixed order. Every stage is
//! a pure `&str -> String` transform; [`Stage::apply`] wraps it and reports
//! whether the output differs from the input.

use regex::Captures;
use unicode_normalization::UnicodeNormalization;

use crate::rules::NormalizationRules;

/// Tokens joined by a gap spanning more than this many characters are
/// treated as table cells.
pub const TABLE_MATCH_MIN_CHARS: usize = 20;
/// A gap at least this wide is a column separator regardless of span.
pub const TABLE_GAP_MIN_SPACES: usize = 8;

const SENTENCE_TERMINALS: [char; 4] = ['.', '!', '?', ':'];
const BULLET_MARKERS: [char; 10] = ['•', '-', '*', '·', '◦', '▪', '‣', '●', '∙', '⁃'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Whitespace,
    CharacterConfusion,
    DateTime,
    CurrencyNumber,
    EmailUrl,
    ParagraphReflow,
    Dictionary,
    TabularSpacing,
    Abbreviations,
    Typography,
    SentenceCasing,
    TurkishRules,
}

/// Outcome of running one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    pub label: &'static str,
    pub changed: bool,
    pub text: String,
}

impl Stage {
    /// Stages that run on every input, in order.
    pub const UNIVERSAL: [Stage; 11] = [
        Stage::Whitespace,
        Stage::CharacterConfusion,
        Stage::DateTime,
        Stage::CurrencyNumber,
        Stage::EmailUrl,
        Stage::ParagraphReflow,
        Stage::Dictionary,
        Stage::TabularSpacing,
        Stage::Abbreviations,
        Stage::Typography,
        Stage::SentenceCasing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Whitespace => "Extra spaces removed",
            Stage::CharacterConfusion => "OCR character confusions fixed",
            Stage::DateTime => "Date and time formats normalized",
            Stage::CurrencyNumber => "Currency and number formats normalized",
            Stage::EmailUrl => "Email and web addresses fixed",
            Stage::ParagraphReflow => "Broken lines rejoined into paragraphs",
            Stage::Dictionary => "Common OCR misreadings corrected",
            Stage::TabularSpacing => "Table columns separated with tabs",
            Stage::Abbreviations => "Abbreviations normalized",
            Stage::Typography => "Typographic characters normalized",
            Stage::SentenceCasing => "Sentence capitalization corrected",
            Stage::TurkishRules => "Turkish-specific corrections applied",
        }
    }

    pub fn transform(self, rules: &NormalizationRules, text: &str) -> String {
        match self {
            Stage::Whitespace => normalize_whitespace(rules, text),
            Stage::CharacterConfusion => repair_character_confusion(rules, text),
            Stage::DateTime => normalize_dates_and_times(rules, text),
            Stage::CurrencyNumber => normalize_currency_and_numbers(rules, text),
            Stage::EmailUrl => normalize_email_and_urls(rules, text),
            Stage::ParagraphReflow => reflow_paragraphs(text),
            Stage::Dictionary => rules.dictionary.correct(text).0,
            Stage::TabularSpacing => tabulate_columns(rules, text),
            Stage::Abbreviations => normalize_abbreviations(rules, text),
            Stage::Typography => normalize_typography(rules, text),
            Stage::SentenceCasing => normalize_casing(rules, text),
            Stage::TurkishRules => apply_turkish_rules(rules, text),
        }
    }

    pub fn apply(self, rules: &NormalizationRules, text: &str) -> StageResult {
        let output = self.transform(rules, text);
        StageResult {
            label: self.label(),
            changed: output != text,
            text: output,
        }
    }
}

// =============================================================================
// 1. Whitespace
// =============================================================================

pub fn normalize_whitespace(rules: &NormalizationRules, text: &str) -> String {
    let collapsed = rules.horizontal_space.replace_all(text, " ");
    let collapsed = rules.space_before_punct.replace_all(&collapsed, "$1");
    let collapsed = rules.blank_line_run.replace_all(&collapsed, "\n\n");

    collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

// =============================================================================
// 2. Character confusion
// =============================================================================

/// Fold Turkish letters to their closest ASCII letter.
pub fn fold_turkish_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ö' => 'o',
            'ş' => 's',
            'ü' => 'u',
            'Ç' => 'C',
            'Ğ' => 'G',
            'İ' => 'I',
            'Ö' => 'O',
            'Ş' => 'S',
            'Ü' => 'U',
            other => other,
        })
        .collect()
}

fn confusable_letter(digit: char) -> Option<char> {
    match digit {
        '0' => Some('o'),
        '1' => Some('l'),
        '5' => Some('s'),
        _ => None,
    }
}

/// Replace digits that sit inside a word, and lone zeros between spaces.
fn repair_confusable_digits(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();

        let inside_word =
            prev.is_some_and(char::is_alphabetic) && next.is_some_and(char::is_alphabetic);
        let standalone_zero = c == '0' && prev == Some(' ') && next == Some(' ');

        let replacement = if inside_word {
            confusable_letter(c)
        } else if standalone_zero {
            Some('o')
        } else {
            None
        };
        out.push(replacement.unwrap_or(c));
    }

    out
}

pub fn repair_character_confusion(rules: &NormalizationRules, text: &str) -> String {
    // Compose first so decomposed accents fold like precomposed ones
    let composed: String = text.nfc().collect();
    let folded = fold_turkish_letters(&composed);
    let repaired = repair_confusable_digits(&folded);
    // A padded clock time is stage 3 output, not a misread letter
    rules
        .line_leading_zero
        .replace_all(&repaired, |caps: &Captures| {
            if caps[0].len() == 1 {
                "O".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

// =============================================================================
// 3. Dates and times
// =============================================================================

pub fn normalize_dates_and_times(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.year_month_day.replace_all(text, "$1/$2/$3");
    let text = rules.day_month_year.replace_all(&text, "$1/$2/$3");
    let text = rules.spelled_date.replace_all(&text, "$1 $2 $3");
    rules
        .clock_time
        .replace_all(&text, |caps: &Captures| {
            let mut time = format!("{:0>2}{}{}", &caps[1], &caps[2], &caps[3]);
            if let Some(marker) = caps.get(4) {
                time.push(' ');
                time.push_str(&marker.as_str().to_lowercase());
            }
            time
        })
        .into_owned()
}

// =============================================================================
// 4. Currency and numbers
// =============================================================================

/// Insert a comma every three digits counting from the right.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn normalize_currency_and_numbers(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.amount_then_code.replace_all(text, "$1 $2");
    let text = rules.code_then_amount.replace_all(&text, "$1 $2");
    // Not locale aware: years, phone numbers and already grouped numbers
    // are grouped too.
    rules
        .digit_run
        .replace_all(&text, |caps: &Captures| group_thousands(&caps[0]))
        .into_owned()
}

// =============================================================================
// 5. Email and web addresses
// =============================================================================

fn strip_inline_space(caps: &Captures) -> String {
    caps[0].chars().filter(|c| *c != ' ' && *c != '\t').collect()
}

pub fn normalize_email_and_urls(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.at_token.replace_all(text, "@");
    let text = rules.dot_token.replace_all(&text, ".");
    let text = rules.email.replace_all(&text, strip_inline_space);
    let text = rules.url.replace_all(&text, strip_inline_space);
    rules
        .www_host
        .replace_all(&text, strip_inline_space)
        .into_owned()
}

// =============================================================================
// 6. Paragraph reflow
// =============================================================================

fn continues_onto(line: &str, next: &str) -> bool {
    let ends_sentence = line
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| SENTENCE_TERMINALS.contains(&c));
    let starts_block = next.trim_start().chars().next().is_some_and(|c| {
        c.is_uppercase() || c.is_ascii_digit() || BULLET_MARKERS.contains(&c)
    });
    !ends_sentence && !starts_block
}

/// Re-join lines that were hard-wrapped in the middle of a sentence.
pub fn reflow_paragraphs(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for line in text.split('\n') {
        if line.trim().is_empty() {
            lines.extend(pending.take());
            lines.push(line.to_string());
            continue;
        }

        match pending.as_mut() {
            Some(current) if continues_onto(current, line) => {
                let tail = line.trim_start();
                current.truncate(current.trim_end().len());
                if !tail.starts_with(['.', ',']) {
                    current.push(' ');
                }
                current.push_str(tail);
            }
            _ => lines.extend(pending.replace(line.to_string())),
        }
    }
    lines.extend(pending);

    lines.join("\n")
}

// =============================================================================
// 8. Tabular spacing
// =============================================================================

pub fn tabulate_columns(rules: &NormalizationRules, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for gap in rules.wide_gap.find_iter(text) {
        let left = text[..gap.start()]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("");
        let right = text[gap.end()..]
            .split(char::is_whitespace)
            .next()
            .unwrap_or("");
        let gap_width = gap.as_str().len();
        let span = left.chars().count() + gap_width + right.chars().count();

        out.push_str(&text[last..gap.start()]);
        let is_cell_boundary = !left.is_empty()
            && !right.is_empty()
            && (span > TABLE_MATCH_MIN_CHARS || gap_width >= TABLE_GAP_MIN_SPACES);
        if is_cell_boundary {
            out.push('\t');
        } else {
            out.push_str(gap.as_str());
        }
        last = gap.end();
    }
    out.push_str(&text[last..]);

    out
}

// =============================================================================
// 9. Abbreviations
// =============================================================================

pub fn normalize_abbreviations(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.spaced_initials.replace_all(text, strip_inline_space);
    let text = rules.caps_trailing_period.replace_all(&text, "$1$2");
    rules
        .spaced_lower_abbrev
        .replace_all(&text, strip_inline_space)
        .into_owned()
}

// =============================================================================
// 10. Typography
// =============================================================================

fn plain_typography(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
        '«' | '»' => '"',
        '‹' | '›' => '\'',
        '\u{2014}' | '\u{2013}' | '\u{2012}' | '\u{2015}' | '\u{2011}' => '-',
        '●' | '◦' | '▪' | '‣' | '∙' | '⁃' => '•',
        other => other,
    }
}

pub fn normalize_typography(rules: &NormalizationRules, text: &str) -> String {
    // The ellipsis absorbs the spaces before it, like any other period
    let text = rules.ellipsis.replace_all(text, "...");
    text.chars().map(plain_typography).collect()
}

// =============================================================================
// 11. Sentence and list casing
// =============================================================================

pub fn normalize_casing(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.symbol_bullet.replace_all(text, "• $1");
    let text = rules.ascii_bullet.replace_all(&text, "• $1");
    let text = rules.paren_number.replace_all(&text, "$1. $2");
    let text = rules.dot_number.replace_all(&text, "$1. $2");
    let text = rules
        .letter_marker
        .replace_all(&text, |caps: &Captures| format!("{})", caps[1].to_uppercase()));
    rules
        .sentence_start
        .replace_all(&text, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

// =============================================================================
// 12. Turkish pass
// =============================================================================

pub fn apply_turkish_rules(rules: &NormalizationRules, text: &str) -> String {
    let text = rules.repeated_ve.replace_all(text, "$1");
    // Stage 2 already folded these; kept as a second pass for text that
    // reaches this stage through other routes.
    let text = fold_turkish_letters(&text);
    rules
        .glued_sentence
        .replace_all(&text, "$1. $2")
        .into_owned()
}
