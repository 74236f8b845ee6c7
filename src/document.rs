/// Document processing: detection, validation and formatting in one call.
///
/// This is the entry point used by the HTTP handlers and the demo binary:
/// 1. Detect the document type from its shape
/// 2. Run the matching validator
/// 3. Fill in the canonical value and, for valid documents, the formatted one
use crate::cleaners::{clean_alphanumeric, clean_digits};
use crate::detector::detect_doc_type;
use crate::models::{DocType, DocumentResult};
use crate::validators::{is_cnpj_valid, is_cpf_valid, CNPJ_LENGTH, CPF_LENGTH};

fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Format 11 digits as `DDD.DDD.DDD-DD`.
///
/// Returns `None` unless `digits` is exactly 11 ASCII digits.
pub fn format_cpf(digits: &str) -> Option<String> {
    if !is_exact_digits(digits, CPF_LENGTH) {
        return None;
    }

    Some(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

/// Format 14 digits as `DD.DDD.DDD/DDDD-DD`.
///
/// Returns `None` unless `digits` is exactly 14 ASCII digits.
pub fn format_cnpj(digits: &str) -> Option<String> {
    if !is_exact_digits(digits, CNPJ_LENGTH) {
        return None;
    }

    Some(format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    ))
}

/// Classify, validate and format a raw document string.
///
/// Never fails: unrecognized input comes back as `DocType::Unknown` with
/// `is_valid = false` and no canonical or formatted value.
pub fn process_document(value: &str) -> DocumentResult {
    let doc_type = detect_doc_type(value);
    let mut result = DocumentResult::unvalidated(Some(value.to_string()), doc_type);

    match doc_type {
        DocType::Cpf => {
            let digits = clean_digits(value);
            result.is_valid = is_cpf_valid(value);
            if result.is_valid {
                result.formatted = format_cpf(&digits);
            }
            result.clean_value = Some(digits);
        }
        DocType::Cnpj => {
            let digits = clean_digits(value);
            result.is_valid = is_cnpj_valid(value);
            if result.is_valid {
                result.formatted = format_cnpj(&digits);
            }
            result.clean_value = Some(digits);
        }
        DocType::PassportBr | DocType::PassportForeign => {
            // The detector already matched the passport pattern
            let cleaned = clean_alphanumeric(value);
            result.is_valid = true;
            result.formatted = Some(cleaned.clone());
            result.clean_value = Some(cleaned);
        }
        DocType::Unknown => {}
    }

    tracing::debug!(
        "Processed document: type={}, valid={}",
        result.doc_type,
        result.is_valid
    );

    result
}

/// Like [`process_document`], but an absent input is accepted and yields an
/// `Unknown` result with no `original_input`.
pub fn process_optional_document(value: Option<&str>) -> DocumentResult {
    match value {
        Some(v) => process_document(v),
        None => {
            tracing::debug!("Processed document: no input given");
            DocumentResult::unvalidated(None, DocType::Unknown)
        }
    }
}
