//! Form definitions backing the supplier page.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

pub mod import;
pub mod supplier;

/// Field name to user-facing message. Empty when the form is valid.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid form mode")]
    InvalidMode,

    #[error("invalid supplier id")]
    InvalidSupplierId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid cnpj")]
    InvalidCnpj,

    #[error("empty import payload")]
    EmptyImport,

    #[error("malformed import payload: {0}")]
    MalformedImport(String),
}

/// Flattens `validator` output into one message per field.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
