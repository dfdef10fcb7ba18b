//! Part-number extraction from free text.
//!
//! A part number is the first maximal run of ASCII decimal digits in the
//! question, bounded by non-digit characters. Absence of a part number is
//! represented as data (the [`UNKNOWN_PART`] sentinel), never as an error.

/// Sentinel returned when no part-number-like token is present.
pub const UNKNOWN_PART: &str = "unknown";

/// Extract the first maximal digit run from `text`.
///
/// Returns [`UNKNOWN_PART`] when the text contains no digits. Total
/// function: every input produces a token.
pub fn extract_part_number(text: &str) -> String {
    let mut run = String::new();
    for character in text.chars() {
        if character.is_ascii_digit() {
            run.push(character);
        } else if !run.is_empty() {
            return run;
        }
    }

    if run.is_empty() {
        UNKNOWN_PART.to_string()
    } else {
        run
    }
}

/// Deterministic extraction as a value object, for call sites that hold an
/// extractor rather than calling the free function.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigitRunExtractor;

impl DigitRunExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> String {
        extract_part_number(text)
    }
}
