//! Input cleaners shared by the detector and the validators.
//!
//! Both functions are total: any string (including an empty one) is accepted
//! and cleaning an already clean value returns it unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Any Unicode decimal digit (general category Nd).
static DECIMAL_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("valid decimal digit regex"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit (`'7'`, `'７'`, `'٧'`, ...).
///
/// Nd code points come in contiguous runs made of whole `0..=9` sets, so the
/// value is the offset from the start of the run, modulo 10.
pub fn decimal_digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut run_start = c as u32;
    while let Some(prev) = run_start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        run_start -= 1;
    }

    Some((c as u32 - run_start) % 10)
}

/// Keep only decimal digits, normalized to ASCII.
///
/// Full-width and other script digits are accepted:
/// `"123.456.789-09"` and `"１２３.４５６.７８９-０９"` both give `"12345678909"`
pub fn clean_digits(value: &str) -> String {
    value
        .chars()
        .filter_map(decimal_digit_value)
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}

/// Keep only ASCII letters and digits, upper-cased.
///
/// `"ab-123 456"` → `"AB123456"`
pub fn clean_alphanumeric(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
