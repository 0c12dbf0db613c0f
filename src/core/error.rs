//! Typed error handling for the stayops toolkit
//!
//! The query pipeline itself is total and never produces errors; every
//! would-be error path (out-of-range page, unset sort field, incomparable
//! values) is defined to yield a corrected, well-formed result instead.
//! Errors only arise at the edges: store mutations against missing records,
//! configuration loading, and domain input validation.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Errors related to entity store operations (CRUD)
//! - [`ValidationError`]: Errors related to domain input validation
//! - [`ConfigError`]: Errors related to configuration parsing and validation

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the stayops toolkit
#[derive(Debug, Error)]
pub enum OpsError {
    /// Store-level failures (missing record, conflicting create)
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Domain input rejected by validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or is inconsistent
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything that indicates a bug rather than bad input
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpsError {
    /// Get the stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OpsError::Entity(e) => e.error_code(),
            OpsError::Validation(_) => "VALIDATION_ERROR",
            OpsError::Config(_) => "CONFIG_ERROR",
            OpsError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Errors from entity store operations
#[derive(Debug, Error)]
pub enum EntityError {
    /// No record with the given id
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: Uuid },

    /// Id collision on create
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: Uuid },

    /// Backend-specific operation failure
    #[error("Failed to {operation} {entity_type}: {message}")]
    OperationFailed {
        entity_type: String,
        operation: String,
        message: String,
    },
}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            EntityError::OperationFailed { .. } => "ENTITY_OPERATION_FAILED",
        }
    }
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to domain input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON payload
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Invalid UUID format
    #[error("Invalid UUID format: {value}")]
    InvalidUuid { value: String },
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    #[error("Failed to parse config{}: {message}", .file.as_deref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<serde_json::Error> for OpsError {
    fn from(err: serde_json::Error) -> Self {
        OpsError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for OpsError {
    fn from(err: serde_yaml::Error) -> Self {
        OpsError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for OpsError {
    fn from(err: std::io::Error) -> Self {
        OpsError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<uuid::Error> for OpsError {
    fn from(err: uuid::Error) -> Self {
        OpsError::Validation(ValidationError::InvalidUuid {
            value: err.to_string(),
        })
    }
}

/// A specialized Result type for stayops operations
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_display() {
        let err = EntityError::NotFound {
            entity_type: "hotel".to_string(),
            id: Uuid::nil(),
        };
        assert!(err.to_string().contains("hotel"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_error_codes() {
        let err: OpsError = EntityError::AlreadyExists {
            entity_type: "kiosk".to_string(),
            id: Uuid::nil(),
        }
        .into();
        assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");

        let err: OpsError = ValidationError::FieldError {
            field: "email".to_string(),
            message: "invalid format".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "email".to_string(),
                message: "invalid format".to_string(),
            },
            FieldValidationError {
                field: "phone".to_string(),
                message: "too short".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("email"));
        assert!(display.contains("phone"));
    }

    #[test]
    fn test_config_parse_error_display() {
        let err = ConfigError::ParseError {
            file: Some("lists.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("lists.yaml"));

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("bad indent"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ops_err: OpsError = json_err.into();
        assert!(matches!(
            ops_err,
            OpsError::Validation(ValidationError::InvalidJson { .. })
        ));
    }
}
