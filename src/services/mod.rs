//! Service layer: the page workflows, independent of Actix.

use thiserror::Error;

use crate::forms::{FieldErrors, FormError};
use crate::gateway::errors::GatewayError;

pub mod main;
pub mod supplier;

/// Reason shown when the backend gave no structured message.
pub const GENERIC_FAILURE_REASON: &str = "erro de comunicação com o servidor";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The form failed client-side validation; nothing was sent.
    #[error("form validation failed")]
    Validation(FieldErrors),

    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),

    #[error("supplier not found")]
    NotFound,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ServiceError {
    /// Reason suitable for a notification detail line.
    pub fn reason(&self) -> String {
        match self {
            ServiceError::Gateway(err) => err
                .backend_message()
                .unwrap_or(GENERIC_FAILURE_REASON)
                .to_string(),
            ServiceError::Validation(_) | ServiceError::Form(_) => {
                "formulário inválido".to_string()
            }
            ServiceError::TypeConstraint(message) => message.clone(),
            ServiceError::NotFound => "fornecedor não encontrado".to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
