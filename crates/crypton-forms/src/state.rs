//! Per-field and per-form state

use crate::schema::FormSchema;

/// Current value and error of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
	pub name: String,
	pub value: String,
	pub error: Option<String>,
}

impl FieldState {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn reset(&mut self) {
		self.value.clear();
		self.error = None;
	}
}

/// Field states of one form instance, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	fields: Vec<FieldState>,
}

impl FormState {
	/// Create the initial (empty) state for every field in `schema`
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{FormState, login_schema};
	///
	/// let state = FormState::from_schema(&login_schema());
	/// assert_eq!(state.len(), 2);
	/// assert!(state.is_pristine());
	/// ```
	pub fn from_schema(schema: &FormSchema) -> Self {
		Self {
			fields: schema.field_names().map(FieldState::new).collect(),
		}
	}

	pub fn get(&self, name: &str) -> Option<&FieldState> {
		self.fields.iter().find(|field| field.name == name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldState> {
		self.fields.iter_mut().find(|field| field.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldState> {
		self.fields.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FieldState> {
		self.fields.iter_mut()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Return every field to its initial empty value with no error.
	pub fn reset(&mut self) {
		self.fields.iter_mut().for_each(FieldState::reset);
	}

	/// True when every field is empty and error-free.
	pub fn is_pristine(&self) -> bool {
		self.fields
			.iter()
			.all(|field| field.value.is_empty() && field.error.is_none())
	}

	pub fn has_errors(&self) -> bool {
		self.fields.iter().any(|field| field.error.is_some())
	}
}
