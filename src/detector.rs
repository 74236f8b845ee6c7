//! Document type detection funnel.
//!
//! Classification is by shape only: an 11-digit string is a CPF even when
//! its check digits are wrong. Correctness is the validators' job.

use crate::cleaners::{clean_alphanumeric, clean_digits};
use crate::models::DocType;
use crate::validators::{CNPJ_LENGTH, CPF_LENGTH, PASSPORT_BR_RE, PASSPORT_GENERIC_RE};

/// The two cleaned views every funnel stage looks at.
struct Cleaned {
    digits: String,
    alphanumeric: String,
}

type Stage = (fn(&Cleaned) -> bool, DocType);

/// Evaluated top to bottom, first match wins. Order matters: any 14-digit
/// string also satisfies the generic passport pattern.
const FUNNEL: [Stage; 4] = [
    (|c| c.digits.len() == CPF_LENGTH, DocType::Cpf),
    (|c| c.digits.len() == CNPJ_LENGTH, DocType::Cnpj),
    (|c| PASSPORT_BR_RE.is_match(&c.alphanumeric), DocType::PassportBr),
    (
        |c| PASSPORT_GENERIC_RE.is_match(&c.alphanumeric),
        DocType::PassportForeign,
    ),
];

/// Pick the most likely document type for a raw string.
///
/// Never fails; empty or unrecognizable input yields `DocType::Unknown`.
pub fn detect_doc_type(value: &str) -> DocType {
    if value.is_empty() {
        return DocType::Unknown;
    }

    let cleaned = Cleaned {
        digits: clean_digits(value),
        alphanumeric: clean_alphanumeric(value),
    };

    let doc_type = FUNNEL
        .iter()
        .find(|(matches, _)| matches(&cleaned))
        .map(|(_, doc_type)| *doc_type)
        .unwrap_or(DocType::Unknown);

    tracing::trace!(
        "Detected {} (digits: {}, alphanumeric: {})",
        doc_type,
        cleaned.digits.len(),
        cleaned.alphanumeric.len()
    );

    doc_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(detect_doc_type(""), DocType::Unknown);
        assert_eq!(detect_doc_type("   "), DocType::Unknown);
        assert_eq!(detect_doc_type("-./"), DocType::Unknown);
    }

    #[test]
    fn test_cpf_by_length_only() {
        assert_eq!(detect_doc_type("12345678909"), DocType::Cpf);
        assert_eq!(detect_doc_type("123.456.789-09"), DocType::Cpf);
        // Bad checksum, still a CPF shape
        assert_eq!(detect_doc_type("12345678900"), DocType::Cpf);
        assert_eq!(detect_doc_type("111.111.111-11"), DocType::Cpf);
    }

    #[test]
    fn test_cnpj_by_length_only() {
        assert_eq!(detect_doc_type("33.592.510/0001-54"), DocType::Cnpj);
        assert_eq!(detect_doc_type("12345678000199"), DocType::Cnpj);
    }

    #[test]
    fn test_digit_count_wins_over_letters() {
        // Letters are ignored by the digit view, so 11 digits still means CPF
        assert_eq!(detect_doc_type("CPF 123.456.789-09"), DocType::Cpf);
    }

    #[test]
    fn test_passport_br() {
        assert_eq!(detect_doc_type("AB123456"), DocType::PassportBr);
        assert_eq!(detect_doc_type("ab 123456"), DocType::PassportBr);
    }

    #[test]
    fn test_passport_foreign() {
        assert_eq!(detect_doc_type("X1234567"), DocType::PassportForeign);
        assert_eq!(detect_doc_type("ABC123"), DocType::PassportForeign);
        // 8 digits: not a CPF/CNPJ length, fits the generic pattern
        assert_eq!(detect_doc_type("12345678"), DocType::PassportForeign);
    }

    #[test]
    fn test_unknown_shapes() {
        assert_eq!(detect_doc_type("AB12"), DocType::Unknown);
        assert_eq!(detect_doc_type("1234567890ABCDEFG"), DocType::Unknown);
        assert_eq!(detect_doc_type("ção"), DocType::Unknown);
    }
}
