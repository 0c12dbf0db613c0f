//! Core module containing fundamental traits and types for the toolkit

pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use entity::{Entity, Record};
pub use error::{
    ConfigError, EntityError, FieldValidationError, OpsError, OpsResult, ValidationError,
};
pub use field::{FieldFormat, FieldValue, ToFieldValue};
pub use service::EntityService;
