//! Guest records with contact validation

use uuid::Uuid;

use crate::core::error::{FieldValidationError, OpsResult, ValidationError};
use crate::core::field::{FieldFormat, FieldValue};
use crate::impl_record;

impl_record!(
    Guest,
    "guest", "guests",
    searchable: ["name", "email"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        email: String,
        phone: String,
    }
);

impl Guest {
    /// Create a guest, validating contact details first.
    ///
    /// Collects every failing field instead of stopping at the first, so
    /// the console can surface all of them in one pass.
    pub fn checked(
        name: String,
        hotel_id: Uuid,
        email: String,
        phone: String,
    ) -> OpsResult<Guest> {
        let mut errors = Vec::new();

        if !FieldFormat::Email.validate(&FieldValue::String(email.clone())) {
            errors.push(FieldValidationError {
                field: "email".to_string(),
                message: "invalid email format".to_string(),
            });
        }
        if !FieldFormat::Phone.validate(&FieldValue::String(phone.clone())) {
            errors.push(FieldValidationError {
                field: "phone".to_string(),
                message: "invalid phone number".to_string(),
            });
        }

        if !errors.is_empty() {
            return Err(ValidationError::FieldErrors(errors).into());
        }

        Ok(Guest::new(name, "active".to_string(), hotel_id, email, phone))
    }
}
