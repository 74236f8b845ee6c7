use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Document Models ============

/// Kind of document a raw string was classified as.
///
/// Serialized with the same upper-snake-case tags used in the API responses
/// (`"CPF"`, `"CNPJ"`, `"PASSPORT_BR"`, `"PASSPORT_FOREIGN"`, `"UNKNOWN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    /// Individual taxpayer registry (11 digits).
    Cpf,
    /// Corporate taxpayer registry (14 digits).
    Cnpj,
    /// Brazilian passport (2 letters + 6 digits).
    PassportBr,
    /// Any other passport (6 to 15 letters/digits).
    PassportForeign,
    /// Nothing matched.
    Unknown,
}

impl DocType {
    /// Tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Cpf => "CPF",
            DocType::Cnpj => "CNPJ",
            DocType::PassportBr => "PASSPORT_BR",
            DocType::PassportForeign => "PASSPORT_FOREIGN",
            DocType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying and validating a single document string.
///
/// `clean_value` and `formatted` are `None` for `DocType::Unknown`, and
/// `formatted` is only ever set when `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Raw input exactly as received (`None` when no input was given).
    pub original_input: Option<String>,
    /// Detected document type.
    #[serde(rename = "type")]
    pub doc_type: DocType,
    /// Whether the checksum or pattern check passed.
    pub is_valid: bool,
    /// Canonical digits-only or alphanumeric form.
    pub clean_value: Option<String>,
    /// Human-readable form, present only for valid documents.
    pub formatted: Option<String>,
}

impl DocumentResult {
    /// Result for an input that has been classified but not yet validated.
    pub fn unvalidated(original_input: Option<String>, doc_type: DocType) -> Self {
        Self {
            original_input,
            doc_type,
            is_valid: false,
            clean_value: None,
            formatted: None,
        }
    }
}

// ============ API Request/Response Models ============

/// Body of `POST /api/v1/documents/validate`.
///
/// A missing `document` field is treated as an absent input, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateDocumentRequest {
    pub document: Option<String>,
}

/// Query string accepted by the `GET` document endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    pub document: Option<String>,
}

/// Response of `GET /api/v1/documents/detect`.
#[derive(Debug, Clone, Serialize)]
pub struct DetectResponse {
    pub document: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: DocType,
}
