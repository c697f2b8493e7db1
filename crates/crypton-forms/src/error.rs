use thiserror::Error;

/// A schema check that failed for a single field.
///
/// This is the only error a user can cause on the form path. It is
/// rendered inline next to the offending input and never escalates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
	/// Name of the field that failed
	pub field: String,
	/// Human-readable message shown to the user
	pub message: String,
}

impl FieldValidationError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

/// Programming errors raised while wiring a form to its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
	#[error("Field '{0}' is not declared in the form schema")]
	UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_field_validation_error_display() {
		let error = FieldValidationError::new("family", "Family must be at least 2 characters.");
		assert_eq!(
			error.to_string(),
			"family: Family must be at least 2 characters."
		);
	}

	#[rstest]
	fn test_unknown_field_display() {
		let error = FormError::UnknownField("email".to_string());
		assert_eq!(
			error.to_string(),
			"Field 'email' is not declared in the form schema"
		);
	}
}
