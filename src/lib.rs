//! Brazilian Document Validator Library
//!
//! Classifies raw document strings (CPF, CNPJ, Brazilian passport, foreign
//! passport), validates them with the official check-digit rules and returns
//! a normalized, formatted representation. The core is a set of pure
//! functions; the HTTP service in `main.rs` is a thin wrapper around it.
//!
//! # Modules
//!
//! - `api`: API-layer namespace.
//! - `core`: Core document logic namespace.
//! - `cleaners`: Digit/alphanumeric input cleaners.
//! - `config`: Configuration management.
//! - `detector`: Document type detection funnel.
//! - `document`: Detection + validation + formatting orchestration.
//! - `errors`: HTTP error types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Document and API data models.
//! - `validators`: CPF/CNPJ checksum and passport pattern validators.
//!
//! # Example
//!
//! ```
//! use rust_doc_validator::{process_document, DocType};
//!
//! let result = process_document("33.592.510/0001-54");
//! assert_eq!(result.doc_type, DocType::Cnpj);
//! assert!(result.is_valid);
//! assert_eq!(result.formatted.as_deref(), Some("33.592.510/0001-54"));
//! ```

pub mod api;
pub mod core;

pub mod cleaners;
pub mod config;
pub mod detector;
pub mod document;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validators;

pub use cleaners::{clean_alphanumeric, clean_digits};
pub use detector::detect_doc_type;
pub use document::{format_cnpj, format_cpf, process_document, process_optional_document};
pub use models::{DocType, DocumentResult};
pub use validators::{
    is_cnpj_valid, is_cpf_valid, is_generic_passport_valid, is_passport_br_valid,
};
