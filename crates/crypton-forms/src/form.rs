use crate::error::{FieldValidationError, FormError, FormResult};
use crate::schema::FormSchema;
use crate::state::{FieldState, FormState};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Validated values keyed by field name, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(field, _)| field == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0
			.iter()
			.map(|(field, value)| (field.as_str(), value.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(field, value)| (field.into(), value.into()))
				.collect(),
		)
	}
}

impl Serialize for FormData {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (field, value) in &self.0 {
			map.serialize_entry(field, value)?;
		}
		map.end()
	}
}

/// One error per failing field, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldValidationError>);

impl FieldErrors {
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|error| error.field == name)
			.map(|error| error.message.as_str())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<FieldValidationError> for FieldErrors {
	fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Serialize for FieldErrors {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for error in &self.0 {
			map.serialize_entry(&error.field, &error.message)?;
		}
		map.end()
	}
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
	/// Every field passed; holds a snapshot of all values
	Ok(FormData),
	/// At least one field failed; holds one message per failing field
	Invalid(FieldErrors),
}

impl SubmissionResult {
	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok(_))
	}

	pub fn data(&self) -> Option<&FormData> {
		match self {
			Self::Ok(data) => Some(data),
			Self::Invalid(_) => None,
		}
	}

	pub fn errors(&self) -> Option<&FieldErrors> {
		match self {
			Self::Ok(_) => None,
			Self::Invalid(errors) => Some(errors),
		}
	}
}

/// Form controller: owns the state of one form instance and validates it
/// against its schema on submit.
#[derive(Debug, Clone)]
pub struct Form {
	schema: FormSchema,
	state: FormState,
}

impl Form {
	/// Create a form with every field empty
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{Form, signup_schema};
	///
	/// let form = Form::new(signup_schema());
	/// assert_eq!(form.value("name"), Some(""));
	/// assert_eq!(form.value("email"), None);
	/// ```
	pub fn new(schema: FormSchema) -> Self {
		let state = FormState::from_schema(&schema);
		Self { schema, state }
	}

	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn field(&self, name: &str) -> Option<&FieldState> {
		self.state.get(name)
	}

	pub fn value(&self, name: &str) -> Option<&str> {
		self.state.get(name).map(|field| field.value.as_str())
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.state.get(name).and_then(|field| field.error.as_deref())
	}

	/// Store a new value for `name`
	///
	/// No validation runs here; errors from a previous submit stay in
	/// place until the next one.
	pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		let field = self
			.state
			.get_mut(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
		field.value = value.into();
		tracing::trace!(form = %self.schema.name(), field = %name, "field value updated");
		Ok(())
	}

	/// Validate the current values without touching state
	pub fn validate(&self) -> SubmissionResult {
		let errors: FieldErrors = self
			.state
			.iter()
			.filter_map(|field| self.schema.validate_field(&field.name, &field.value).err())
			.collect();

		if errors.is_empty() {
			SubmissionResult::Ok(
				self.state
					.iter()
					.map(|field| (field.name.as_str(), field.value.as_str()))
					.collect(),
			)
		} else {
			SubmissionResult::Invalid(errors)
		}
	}

	/// Validate every field and record the outcome on each field
	///
	/// All fields are checked; failing fields receive their message and
	/// passing fields have any stale error cleared. Values are left as-is.
	///
	/// # Examples
	///
	/// ```
	/// use crypton_forms::{Form, login_schema};
	///
	/// let mut form = Form::new(login_schema());
	/// form.set_value("username", "admin").unwrap();
	/// form.set_value("password", "secret1").unwrap();
	///
	/// let result = form.submit();
	/// let data = result.data().unwrap();
	/// assert_eq!(data.get("username"), Some("admin"));
	/// assert_eq!(data.get("password"), Some("secret1"));
	/// ```
	pub fn submit(&mut self) -> SubmissionResult {
		let result = self.validate();

		let errors = result.errors();
		for field in self.state.iter_mut() {
			field.error = errors
				.and_then(|errors| errors.get(&field.name))
				.map(str::to_string);
		}

		match &result {
			SubmissionResult::Ok(_) => {
				tracing::debug!(form = %self.schema.name(), "submission validated");
			}
			SubmissionResult::Invalid(errors) => {
				tracing::debug!(
					form = %self.schema.name(),
					failed = errors.len(),
					"submission rejected"
				);
			}
		}
		result
	}

	/// Return every field to its initial empty value.
	pub fn reset(&mut self) {
		self.state.reset();
	}
}
