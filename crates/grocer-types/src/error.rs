//! Local validation errors.
//!
//! These are raised before a request is sent so the user gets a precise
//! message without a round trip. Payloads declare their rules with
//! `validator` derives; [`CheckPayload::check`] folds the derive's error
//! tree into a single [`ValidationError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Code shared by every "must not be empty" rule.
pub(crate) const REQUIRED: &str = "required";

/// A request payload failed local validation.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// A required field is empty
    #[error("{field} is required")]
    Required {
        /// Wire name of the empty field
        field: String,
    },

    /// A field has a value the server would reject
    #[error("{field}: {message}")]
    Invalid {
        /// Wire name of the offending field
        field: String,
        /// What is wrong with the value
        message: String,
    },
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid { field: field.to_string(), message: message.into() }
    }
}

impl From<ValidationErrors> for ValidationError {
    /// Reports the first failing field. Fields are visited by name so the
    /// same payload always yields the same error.
    fn from(errors: ValidationErrors) -> Self {
        first_failure(&errors).unwrap_or_else(|| Self::invalid("payload", "is invalid"))
    }
}

fn first_failure(errors: &ValidationErrors) -> Option<ValidationError> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));
    fields.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(list) => list.first().map(|err| convert(field, err)),
        ValidationErrorsKind::Struct(inner) => first_failure(inner),
        ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_failure(inner)),
    })
}

fn convert(field: &str, err: &validator::ValidationError) -> ValidationError {
    let field = wire_name(field);
    match err.code.as_ref() {
        REQUIRED | "length" => ValidationError::required(&field),
        code => {
            let message = err.message.as_deref().unwrap_or(code);
            ValidationError::invalid(&field, message)
        },
    }
}

/// `stock_qty` -> `stockQty`
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `custom` rule: rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Runs a payload's `validator` rules and reports them as a
/// [`ValidationError`].
pub trait CheckPayload: Validate {
    fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

impl<T: Validate> CheckPayload for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_display() {
        assert_eq!(ValidationError::required("email").to_string(), "email is required");
        assert_eq!(
            ValidationError::invalid("quantity", "must be positive").to_string(),
            "quantity: must be positive"
        );
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank("a@b.c").is_ok());
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("stock_qty"), "stockQty");
        assert_eq!(wire_name("full_name"), "fullName");
        assert_eq!(wire_name("email"), "email");
    }

    #[test]
    fn test_field_errors_convert_by_code() {
        let mut errors = ValidationErrors::new();
        errors.add("price", validator::ValidationError::new("range").with_message(Cow::Borrowed("too low")));
        assert_eq!(ValidationError::from(errors), ValidationError::invalid("price", "too low"));

        let mut errors = ValidationErrors::new();
        errors.add("full_name", validator::ValidationError::new(REQUIRED));
        assert_eq!(ValidationError::from(errors), ValidationError::required("fullName"));
    }
}
