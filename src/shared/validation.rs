use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Reject strings that are empty or contain only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Pick the first human-readable message out of a set of validation errors.
///
/// Falls back to the full `Display` output when no field carries a message.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
