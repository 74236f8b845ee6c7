//! Per-type document validators.
//!
//! Every predicate takes the raw (uncleaned) input, cleans it itself and
//! answers `false` for anything malformed. None of them panic.

use crate::cleaners::{clean_alphanumeric, clean_digits};
use regex::Regex;
use std::sync::LazyLock;

pub const CPF_LENGTH: usize = 11;
pub const CNPJ_LENGTH: usize = 14;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Two letters followed by six digits.
pub(crate) static PASSPORT_BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{6}$").expect("valid BR passport regex"));

/// Six to fifteen letters or digits.
pub(crate) static PASSPORT_GENERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]{6,15}$").expect("valid generic passport regex")
});

/// Parse an already-cleaned string into digit values, requiring an exact
/// length and rejecting sequences made of a single repeated digit.
fn checkable_digits(digits: &str, expected_len: usize) -> Option<Vec<u32>> {
    if digits.len() != expected_len {
        return None;
    }

    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if values.len() != expected_len {
        return None;
    }

    // 000.000.000-00, 111.111.111-11, ... satisfy the checksum but are not issued
    if values.iter().all(|&d| d == values[0]) {
        return None;
    }

    Some(values)
}

/// CPF check digit over `digits`, weighting from `digits.len() + 1` down to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();

    (sum * 10 % 11) % 10
}

/// CNPJ check digit: remainders 0 and 1 map to 0, everything else to `11 - r`.
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;

    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Validate a CPF (Módulo 11, two check digits).
///
/// Accepts formatted (`123.456.789-09`) or bare (`12345678909`) input.
pub fn is_cpf_valid(value: &str) -> bool {
    let Some(digits) = checkable_digits(&clean_digits(value), CPF_LENGTH) else {
        return false;
    };

    let first = cpf_check_digit(&digits[..9]);
    let second = cpf_check_digit(&digits[..10]);

    first == digits[9] && second == digits[10]
}

/// Validate a CNPJ (Módulo 11 with the 5..2/9..2 weight cycle).
///
/// Accepts formatted (`33.592.510/0001-54`) or bare input.
pub fn is_cnpj_valid(value: &str) -> bool {
    let Some(digits) = checkable_digits(&clean_digits(value), CNPJ_LENGTH) else {
        return false;
    };

    let first = cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS);

    let mut with_first = digits[..12].to_vec();
    with_first.push(first);
    let second = cnpj_check_digit(&with_first, &CNPJ_SECOND_WEIGHTS);

    first == digits[12] && second == digits[13]
}

/// Brazilian passport: exactly two letters and six digits once cleaned.
pub fn is_passport_br_valid(value: &str) -> bool {
    PASSPORT_BR_RE.is_match(&clean_alphanumeric(value))
}

/// Foreign passport: 6 to 15 letters/digits once cleaned.
pub fn is_generic_passport_valid(value: &str) -> bool {
    PASSPORT_GENERIC_RE.is_match(&clean_alphanumeric(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        assert!(is_cpf_valid("12345678909"));
        assert!(is_cpf_valid("123.456.789-09"));
        assert!(is_cpf_valid("529.982.247-25"));
        assert!(is_cpf_valid("５２９.９８２.２４７-２５"));
    }

    #[test]
    fn test_invalid_cpf_check_digits() {
        // Wrong first digit
        assert!(!is_cpf_valid("12345678919"));
        // Wrong second digit
        assert!(!is_cpf_valid("12345678900"));
        assert!(!is_cpf_valid("529.982.247-26"));
    }

    #[test]
    fn test_cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_cpf_valid(&cpf), "{} should be rejected", cpf);
        }
        assert!(!is_cpf_valid("111.111.111-11"));
    }

    #[test]
    fn test_cpf_wrong_length() {
        assert!(!is_cpf_valid(""));
        assert!(!is_cpf_valid("1234567890"));
        assert!(!is_cpf_valid("123456789091"));
        assert!(!is_cpf_valid("abc"));
    }

    #[test]
    fn test_valid_cnpjs() {
        assert!(is_cnpj_valid("33.592.510/0001-54"));
        assert!(is_cnpj_valid("33592510000154"));
        assert!(is_cnpj_valid("11.222.333/0001-81"));
    }

    #[test]
    fn test_invalid_cnpjs() {
        assert!(!is_cnpj_valid("12345678000199"));
        assert!(!is_cnpj_valid("33.592.510/0001-55"));
        assert!(!is_cnpj_valid("33.592.510/0001-64"));
        assert!(!is_cnpj_valid("3359251000015"));
        assert!(!is_cnpj_valid(""));
    }

    #[test]
    fn test_cnpj_repeated_digits_rejected() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(14);
            assert!(!is_cnpj_valid(&cnpj), "{} should be rejected", cnpj);
        }
    }

    #[test]
    fn test_cpf_check_digit_arithmetic() {
        // 1*10 + 2*9 + ... + 9*2 = 210; 2100 mod 11 = 10; 10 mod 10 = 0
        assert_eq!(cpf_check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
        assert_eq!(cpf_check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0]), 9);
    }

    #[test]
    fn test_cnpj_check_digit_low_remainder_is_zero() {
        // 220 mod 11 == 0
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0];
        assert_eq!(cnpj_check_digit(&digits, &CNPJ_FIRST_WEIGHTS), 0);
    }

    #[test]
    fn test_passport_br() {
        assert!(is_passport_br_valid("AB123456"));
        assert!(is_passport_br_valid("ab-123456"));
        assert!(!is_passport_br_valid("A1234567"));
        assert!(!is_passport_br_valid("AB1234567"));
        assert!(!is_passport_br_valid("ABC12345"));
        assert!(!is_passport_br_valid(""));
    }

    #[test]
    fn test_generic_passport() {
        assert!(is_generic_passport_valid("X12345"));
        assert!(is_generic_passport_valid("123456789ABCDEF"));
        assert!(is_generic_passport_valid("p-1234-5678"));
        assert!(!is_generic_passport_valid("X1234"));
        assert!(!is_generic_passport_valid("123456789ABCDEFG"));
        assert!(!is_generic_passport_valid(""));
    }
}
