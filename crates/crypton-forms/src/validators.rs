//! Validation functions, one per field kind
//!
//! Each function returns the generated message on failure. The caller
//! swaps in the constraint's own message when one is configured.

use crate::field::FieldConstraint;

/// Whether `value` has at least `min` characters.
///
/// Length is counted in characters, not bytes, so Persian input is
/// measured the way the user sees it.
///
/// # Examples
///
/// ```
/// use crypton_forms::validators::meets_min_length;
///
/// assert!(meets_min_length("علی", 3));
/// assert!(!meets_min_length("ab", 3));
/// ```
pub fn meets_min_length(value: &str, min: usize) -> bool {
	value.chars().count() >= min
}

/// Capitalize a field name for use in generated messages (`username` → `Username`).
pub fn display_name(field: &str) -> String {
	let mut chars = field.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn check_min_length(
	field: &str,
	constraint: &FieldConstraint,
	value: &str,
) -> Result<(), String> {
	if let Some(min) = constraint.min_length
		&& !meets_min_length(value, min)
	{
		return Err(format!(
			"{} must be at least {} characters.",
			display_name(field),
			min
		));
	}
	Ok(())
}

pub fn check_text(field: &str, constraint: &FieldConstraint, value: &str) -> Result<(), String> {
	check_min_length(field, constraint, value)
}

/// Numeric strings are stored verbatim; no parsing or range check happens.
pub fn check_numeric(
	field: &str,
	constraint: &FieldConstraint,
	value: &str,
) -> Result<(), String> {
	check_min_length(field, constraint, value)
}

pub fn check_choice(
	field: &str,
	constraint: &FieldConstraint,
	value: &str,
) -> Result<(), String> {
	if constraint.choices.iter().any(|choice| choice.matches(value)) {
		return Ok(());
	}
	let labels: Vec<&str> = constraint
		.choices
		.iter()
		.map(|choice| choice.label.as_str())
		.collect();
	Err(format!(
		"{} must be one of: {}.",
		display_name(field),
		labels.join(", ")
	))
}
