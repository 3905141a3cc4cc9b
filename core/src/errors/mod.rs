//! Domain-specific error types and error handling.
//!
//! The whole business-rule failure taxonomy is a single sum type with a
//! stable `code` discriminant, so the transport layer can map errors to
//! status codes with an exhaustive match. Use cases never catch these;
//! they bubble to the caller unchanged.

use pv_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use pv_shared::utils::validation::{ValidationError as FieldError, ValidationErrors};
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or out-of-range input
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// A referenced entity does not exist
    #[error("{resource} with id {id} not found")]
    NotFound { resource: String, id: i64 },

    /// A uniqueness constraint would be violated
    #[error("{resource} with {field} '{value}' already exists")]
    Duplicate {
        resource: String,
        field: String,
        value: String,
    },

    /// The caller is not entitled to act on the resource
    #[error("{message}")]
    Unauthorized { message: String },

    /// A business rule blocks an otherwise well-formed request
    #[error("Cannot {operation}: {reason}")]
    InvalidOperation { operation: String, reason: String },

    /// A withdrawal exceeds the available balance
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Unexpected failure; the transport layer logs it and answers with a
    /// generic 500 without leaking the message
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Validation failure without field-level detail
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Validation failure carrying the collected field errors
    pub fn from_field_errors(errors: ValidationErrors) -> Self {
        let fields = errors.into_errors();
        let message = fields
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation { message, fields }
    }

    pub fn not_found(resource: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn duplicate(
        resource: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            resource: resource.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn invalid_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable error code used by clients and the transport mapping
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_codes::VALIDATION_ERROR,
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::Duplicate { .. } => error_codes::DUPLICATE_ERROR,
            Self::Unauthorized { .. } => error_codes::UNAUTHORIZED,
            Self::InvalidOperation { .. } => error_codes::INVALID_OPERATION,
            Self::InsufficientFunds { .. } => error_codes::INSUFFICIENT_FUNDS,
            Self::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// HTTP status the transport layer answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Duplicate { .. } => 409,
            Self::Unauthorized { .. } => 401,
            Self::InvalidOperation { .. } => 400,
            Self::InsufficientFunds { .. } => 400,
            Self::Internal { .. } => 500,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.code(), self.to_string());
        match self {
            Self::Validation { fields, .. } if !fields.is_empty() => {
                response.add_detail("fields", fields)
            }
            Self::Duplicate { field, .. } => response.add_detail("field", field),
            Self::InsufficientFunds {
                requested,
                available,
            } => response
                .add_detail("requested", requested)
                .add_detail("available", available),
            _ => response,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
