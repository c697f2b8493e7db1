//! Ordered form schemas

use crate::error::FieldValidationError;
use crate::field::FieldConstraint;

/// Ordered mapping of field name to constraint descriptor.
///
/// Declaration order is significant: it drives validation order, the
/// order of submitted data and the order inputs are rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
	name: String,
	fields: Vec<(String, FieldConstraint)>,
}

impl FormSchema {
	/// Create an empty schema
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::FormSchema;
	///
	/// let schema = FormSchema::new("login");
	/// assert_eq!(schema.name(), "login");
	/// assert!(schema.is_empty());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Declare a field
	///
	/// Declaring a name twice replaces the earlier constraint and keeps
	/// the original position.
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{FieldConstraint, FormSchema};
	///
	/// let schema = FormSchema::new("login")
	///     .field("username", FieldConstraint::text().with_min_length(4))
	///     .field("password", FieldConstraint::text().with_min_length(4));
	///
	/// let names: Vec<_> = schema.field_names().collect();
	/// assert_eq!(names, ["username", "password"]);
	/// ```
	pub fn field(mut self, name: impl Into<String>, constraint: FieldConstraint) -> Self {
		self.add_field(name, constraint);
		self
	}

	pub fn add_field(&mut self, name: impl Into<String>, constraint: FieldConstraint) {
		let name = name.into();
		match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = constraint,
			None => self.fields.push((name, constraint)),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn constraint(&self, name: &str) -> Option<&FieldConstraint> {
		self.fields
			.iter()
			.find(|(field, _)| field == name)
			.map(|(_, constraint)| constraint)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.constraint(name).is_some()
	}

	/// Position of `name` in declaration order
	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|(field, _)| field == name)
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldConstraint)> {
		self.fields
			.iter()
			.map(|(name, constraint)| (name.as_str(), constraint))
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Validate a candidate value for one field
	///
	/// A field the schema does not declare is reported as a validation
	/// failure for that name rather than silently accepted.
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::login_schema;
	///
	/// let schema = login_schema();
	/// assert!(schema.validate_field("username", "admin").is_ok());
	///
	/// let error = schema.validate_field("username", "abc").unwrap_err();
	/// assert_eq!(error.message, "Username must be at least 4 characters.");
	/// ```
	pub fn validate_field(&self, name: &str, value: &str) -> Result<(), FieldValidationError> {
		match self.constraint(name) {
			Some(constraint) => constraint.check(name, value),
			None => Err(FieldValidationError::new(
				name,
				"This field is not part of the form.",
			)),
		}
	}
}
