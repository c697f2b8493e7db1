//! Form binding: observable fields over a shared form controller
//!
//! `FormBinding` owns a [`Form`] behind `Rc<RefCell<_>>` and mirrors each
//! field's value and error into a pair of [`Signal`]s. Views subscribe to
//! those signals; the form controller stays the single source of truth and
//! the signals are refreshed after every write.
//!
//! ```text
//! input event ──► FieldBinding::set_value ──► Form (value)
//!                                           └─► Signal<String>
//! submit ──────► FormBinding::submit ───────► Form::submit
//!                                           └─► Signal<Option<String>> per field
//! ```
//!
//! ## Example
//!
//! ```
//! use crypton_forms::login_schema;
//! use crypton_pages::binding::FormBinding;
//!
//! let binding = FormBinding::new(login_schema());
//! binding.set_value("username", "abc").unwrap();
//! binding.set_value("password", "abcdefgh").unwrap();
//!
//! let result = binding.submit();
//! assert!(!result.is_ok());
//! assert_eq!(
//!     binding.field("username").unwrap().error().as_deref(),
//!     Some("Username must be at least 4 characters.")
//! );
//! ```

use crate::reactive::{Signal, SubscriptionId};
use crypton_forms::{Form, FormError, FormResult, FormSchema, SubmissionResult};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
	/// Accepting input
	#[default]
	Idle,
	/// Running the validation pass
	Validating,
	/// Validation passed; success effects are pending
	Submitted,
}

/// A change to one bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
	Value(String),
	Error(Option<String>),
}

/// Subscription to both signals of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSubscription {
	value: SubscriptionId,
	error: SubscriptionId,
}

/// Observable view of one declared field.
#[derive(Clone)]
pub struct FieldBinding {
	name: String,
	form: Rc<RefCell<Form>>,
	value: Signal<String>,
	error: Signal<Option<String>>,
}

impl FieldBinding {
	fn new(name: &str, form: Rc<RefCell<Form>>) -> Self {
		Self {
			name: name.to_string(),
			form,
			value: Signal::new(String::new()),
			error: Signal::new(None),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> String {
		self.value.get()
	}

	pub fn error(&self) -> Option<String> {
		self.error.get()
	}

	/// Store a new value. Validation waits for the next submit.
	pub fn set_value(&self, value: impl Into<String>) {
		let value = value.into();
		// The field was declared when this binding was created.
		if let Err(error) = self.form.borrow_mut().set_value(&self.name, value.clone()) {
			tracing::warn!(%error, "bound field vanished from its form");
			return;
		}
		self.value.set_if_changed(value);
	}

	/// Call `callback` on every change to this field's value or error.
	pub fn subscribe(&self, callback: impl Fn(FieldEvent) + 'static) -> FieldSubscription {
		let callback = Rc::new(callback);
		let on_value = Rc::clone(&callback);
		let value = self
			.value
			.subscribe(move |value| on_value(FieldEvent::Value(value.clone())));
		let error = self
			.error
			.subscribe(move |error| callback(FieldEvent::Error(error.clone())));
		FieldSubscription { value, error }
	}

	pub fn unsubscribe(&self, subscription: FieldSubscription) {
		self.value.unsubscribe(subscription.value);
		self.error.unsubscribe(subscription.error);
	}

	pub fn value_signal(&self) -> &Signal<String> {
		&self.value
	}

	pub fn error_signal(&self) -> &Signal<Option<String>> {
		&self.error
	}

	// Pull value and error from the form after it changed behind our back.
	fn sync(&self) {
		let (value, error) = {
			let form = self.form.borrow();
			(
				form.value(&self.name).unwrap_or_default().to_string(),
				form.error(&self.name).map(str::to_string),
			)
		};
		self.value.set_if_changed(value);
		self.error.set_if_changed(error);
	}
}

impl fmt::Debug for FieldBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldBinding")
			.field("name", &self.name)
			.field("value", &self.value.get())
			.field("error", &self.error.get())
			.finish()
	}
}

/// Observable wrapper around one form instance
///
/// Cloning yields another handle to the same form.
#[derive(Clone)]
pub struct FormBinding {
	form: Rc<RefCell<Form>>,
	fields: Vec<FieldBinding>,
	phase: Signal<FormPhase>,
}

impl FormBinding {
	/// Bind every field declared in `schema`.
	pub fn new(schema: FormSchema) -> Self {
		let form = Rc::new(RefCell::new(Form::new(schema)));
		let fields = form
			.borrow()
			.schema()
			.field_names()
			.map(|name| FieldBinding::new(name, Rc::clone(&form)))
			.collect();
		Self {
			form,
			fields,
			phase: Signal::new(FormPhase::Idle),
		}
	}

	pub fn name(&self) -> String {
		self.form.borrow().schema().name().to_string()
	}

	/// Copy of the schema this form validates against.
	pub fn schema(&self) -> FormSchema {
		self.form.borrow().schema().clone()
	}

	/// Look up the binding of a declared field.
	pub fn field(&self, name: &str) -> FormResult<&FieldBinding> {
		self.fields
			.iter()
			.find(|field| field.name == name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))
	}

	/// Bindings in schema order.
	pub fn fields(&self) -> impl Iterator<Item = &FieldBinding> {
		self.fields.iter()
	}

	pub fn set_value(&self, name: &str, value: impl Into<String>) -> FormResult<()> {
		self.field(name)?.set_value(value);
		Ok(())
	}

	pub fn phase(&self) -> FormPhase {
		self.phase.get()
	}

	pub fn phase_signal(&self) -> &Signal<FormPhase> {
		&self.phase
	}

	pub(crate) fn set_phase(&self, phase: FormPhase) {
		if self.phase.set_if_changed(phase) {
			tracing::debug!(form = %self.name(), ?phase, "form phase changed");
		}
	}

	/// Validate all fields and publish their errors
	///
	/// On failure the form returns to [`FormPhase::Idle`] with errors shown.
	/// On success it stays in [`FormPhase::Submitted`] until the success
	/// effects have run.
	pub fn submit(&self) -> SubmissionResult {
		self.set_phase(FormPhase::Validating);
		let result = self.form.borrow_mut().submit();
		self.sync();
		self.set_phase(if result.is_ok() {
			FormPhase::Submitted
		} else {
			FormPhase::Idle
		});
		result
	}

	/// Return every field to its empty initial value.
	pub fn reset(&self) {
		self.form.borrow_mut().reset();
		self.sync();
	}

	/// True when every field is empty and error-free.
	pub fn is_pristine(&self) -> bool {
		self.form.borrow().state().is_pristine()
	}

	fn sync(&self) {
		self.fields.iter().for_each(FieldBinding::sync);
	}
}

impl fmt::Debug for FormBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormBinding")
			.field("form", &self.name())
			.field("fields", &self.fields)
			.field("phase", &self.phase.get())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crypton_forms::{login_schema, signup_schema};
	use rstest::{fixture, rstest};

	#[fixture]
	fn login() -> FormBinding {
		FormBinding::new(login_schema())
	}

	fn recorder(field: &FieldBinding) -> Rc<RefCell<Vec<FieldEvent>>> {
		let events = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&events);
		field.subscribe(move |event| sink.borrow_mut().push(event));
		events
	}

	#[rstest]
	fn test_binding_unknown_field(login: FormBinding) {
		let error = login.field("email").unwrap_err();
		assert_eq!(error, FormError::UnknownField("email".to_string()));
		assert!(login.set_value("email", "x").is_err());
	}

	#[rstest]
	fn test_set_value_notifies_without_validating(login: FormBinding) {
		// Arrange
		let username = login.field("username").unwrap();
		let events = recorder(username);

		// Act
		username.set_value("ab");

		// Assert
		assert_eq!(*events.borrow(), [FieldEvent::Value("ab".to_string())]);
		assert_eq!(username.error(), None);
		assert_eq!(login.phase(), FormPhase::Idle);
	}

	#[rstest]
	fn test_submit_publishes_errors(login: FormBinding) {
		// Arrange
		login.set_value("username", "abc").unwrap();
		login.set_value("password", "abcdefgh").unwrap();
		let events = recorder(login.field("username").unwrap());
		let password_events = recorder(login.field("password").unwrap());

		// Act
		let result = login.submit();

		// Assert
		assert!(!result.is_ok());
		assert_eq!(
			*events.borrow(),
			[FieldEvent::Error(Some(
				"Username must be at least 4 characters.".to_string()
			))]
		);
		assert!(password_events.borrow().is_empty());
		assert_eq!(login.phase(), FormPhase::Idle);
	}

	#[rstest]
	fn test_successful_submit_clears_errors_and_waits(login: FormBinding) {
		login.submit();
		login.set_value("username", "admin").unwrap();
		login.set_value("password", "secret1").unwrap();

		let result = login.submit();

		assert!(result.is_ok());
		assert_eq!(login.field("username").unwrap().error(), None);
		assert_eq!(login.phase(), FormPhase::Submitted);
	}

	#[rstest]
	fn test_phase_transitions_through_validating(login: FormBinding) {
		let phases = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&phases);
		login.phase_signal().subscribe(move |phase| sink.borrow_mut().push(*phase));

		login.submit();

		assert_eq!(*phases.borrow(), [FormPhase::Validating, FormPhase::Idle]);
	}

	#[rstest]
	fn test_reset_notifies_changed_fields() {
		// Arrange
		let binding = FormBinding::new(signup_schema());
		binding.set_value("name", "Ali").unwrap();
		let name_events = recorder(binding.field("name").unwrap());
		let family_events = recorder(binding.field("family").unwrap());

		// Act
		binding.reset();

		// Assert
		assert_eq!(*name_events.borrow(), [FieldEvent::Value(String::new())]);
		assert!(family_events.borrow().is_empty());
		assert!(binding.is_pristine());
	}

	#[rstest]
	fn test_clones_share_state(login: FormBinding) {
		let other = login.clone();
		other.set_value("username", "shared").unwrap();
		assert_eq!(login.field("username").unwrap().value(), "shared");
	}

	#[rstest]
	fn test_unsubscribe_field(login: FormBinding) {
		let username = login.field("username").unwrap();
		let events = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&events);
		let subscription = username.subscribe(move |event| sink.borrow_mut().push(event));

		username.unsubscribe(subscription);
		username.set_value("admin");

		assert!(events.borrow().is_empty());
	}
}
