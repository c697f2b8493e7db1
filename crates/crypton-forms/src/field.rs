//! Field constraint descriptors

use crate::error::FieldValidationError;
use crate::validators;

/// Value kind of a form field.
///
/// Every kind is carried as a string; the kind only selects which
/// validation function runs at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Free text with an optional minimum length
	Text,
	/// Numeric input kept as a string. Only the length rule applies.
	Numeric,
	/// Single choice out of a fixed set of options
	Choice,
}

/// One option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
	/// Stored value (e.g. `male`)
	pub value: String,
	/// Label shown to the user (e.g. `مرد`)
	pub label: String,
}

impl Choice {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}

	/// Whether `candidate` selects this option, by value or by label.
	pub fn matches(&self, candidate: &str) -> bool {
		candidate == self.value || candidate == self.label
	}
}

/// Constraint descriptor attached to a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConstraint {
	pub kind: FieldKind,
	pub min_length: Option<usize>,
	pub choices: Vec<Choice>,
	/// Overrides the generated error message
	pub message: Option<String>,
}

impl FieldConstraint {
	/// Create a text constraint with no rules attached
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{FieldConstraint, FieldKind};
	///
	/// let constraint = FieldConstraint::text().with_min_length(4);
	/// assert_eq!(constraint.kind, FieldKind::Text);
	/// assert_eq!(constraint.min_length, Some(4));
	/// ```
	pub fn text() -> Self {
		Self::of_kind(FieldKind::Text)
	}

	/// Create a numeric-string constraint
	pub fn numeric() -> Self {
		Self::of_kind(FieldKind::Numeric)
	}

	/// Create a single-choice constraint over `choices`
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{Choice, FieldConstraint};
	///
	/// let constraint = FieldConstraint::choice([
	///     Choice::new("male", "مرد"),
	///     Choice::new("female", "زن"),
	/// ]);
	/// assert_eq!(constraint.choices.len(), 2);
	/// ```
	pub fn choice(choices: impl IntoIterator<Item = Choice>) -> Self {
		Self {
			choices: choices.into_iter().collect(),
			..Self::of_kind(FieldKind::Choice)
		}
	}

	fn of_kind(kind: FieldKind) -> Self {
		Self {
			kind,
			min_length: None,
			choices: Vec::new(),
			message: None,
		}
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the message reported when this constraint fails
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::FieldConstraint;
	///
	/// let constraint = FieldConstraint::numeric()
	///     .with_min_length(2)
	///     .with_message("You must be at least 18 years old.");
	/// let error = constraint.check("age", "7").unwrap_err();
	/// assert_eq!(error.message, "You must be at least 18 years old.");
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validate `value` for the field called `field`.
	pub fn check(&self, field: &str, value: &str) -> Result<(), FieldValidationError> {
		let outcome = match self.kind {
			FieldKind::Text => validators::check_text(field, self, value),
			FieldKind::Numeric => validators::check_numeric(field, self, value),
			FieldKind::Choice => validators::check_choice(field, self, value),
		};
		outcome.map_err(|generated| {
			FieldValidationError::new(field, self.message.clone().unwrap_or(generated))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("male", true)]
	#[case("مرد", true)]
	#[case("female", false)]
	#[case("", false)]
	fn test_choice_matches_value_or_label(#[case] candidate: &str, #[case] expected: bool) {
		let choice = Choice::new("male", "مرد");
		assert_eq!(choice.matches(candidate), expected);
	}

	#[rstest]
	fn test_custom_message_overrides_generated() {
		// Arrange
		let constraint = FieldConstraint::text()
			.with_min_length(3)
			.with_message("Too short");

		// Act
		let error = constraint.check("name", "ab").unwrap_err();

		// Assert
		assert_eq!(error.field, "name");
		assert_eq!(error.message, "Too short");
	}

	#[rstest]
	fn test_constraint_without_rules_accepts_anything() {
		let constraint = FieldConstraint::text();
		assert!(constraint.check("bio", "").is_ok());
		assert!(constraint.check("bio", "anything at all").is_ok());
	}
}
