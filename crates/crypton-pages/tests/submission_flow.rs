//! Submit flows of the login and signup forms with mocked side effects

use crypton_forms::{login_schema, signup_schema};
use crypton_pages::{
	FormBinding, FormPhase, LOGIN_SUCCESS_TITLE, Navigator, Notification, Notifier,
	SIGNUP_SUCCESS_TITLE, SubmissionHandler,
};
use mockall::{Sequence, mock};
use rstest::rstest;
use std::rc::Rc;

mock! {
	pub Toasts {}

	impl Notifier for Toasts {
		fn notify(&self, notification: Notification);
	}
}

mock! {
	pub History {}

	impl Navigator for History {
		fn push(&self, path: &str);
	}
}

fn fill(binding: &FormBinding, values: &[(&str, &str)]) {
	for (field, value) in values {
		binding.set_value(field, *value).unwrap();
	}
}

#[rstest]
fn test_login_success_notifies_resets_then_navigates() {
	// Arrange
	let binding = FormBinding::new(login_schema());
	fill(&binding, &[("username", "admin"), ("password", "secret1")]);

	let mut seq = Sequence::new();
	let mut toasts = MockToasts::new();
	let mut history = MockHistory::new();

	let pending = binding.clone();
	toasts
		.expect_notify()
		.withf(|notification| {
			notification.title == LOGIN_SUCCESS_TITLE
				&& notification.description
					== "{\n  \"username\": \"admin\",\n  \"password\": \"secret1\"\n}"
		})
		.times(1)
		.in_sequence(&mut seq)
		.returning_st(move |_| assert!(!pending.is_pristine(), "reset ran before notify"));

	let reset = binding.clone();
	history
		.expect_push()
		.withf(|path| path == "/admin/dashboard")
		.times(1)
		.in_sequence(&mut seq)
		.returning_st(move |_| assert!(reset.is_pristine(), "navigation ran before reset"));

	let handler = SubmissionHandler::login(Rc::new(toasts), Rc::new(history));

	// Act
	let result = handler.submit(&binding).unwrap();

	// Assert
	assert!(result.is_ok());
	assert!(binding.is_pristine());
	assert_eq!(binding.phase(), FormPhase::Idle);
}

#[rstest]
fn test_login_invalid_has_no_side_effects() {
	// Arrange
	let binding = FormBinding::new(login_schema());
	fill(&binding, &[("username", "abc"), ("password", "abcdefgh")]);

	let mut toasts = MockToasts::new();
	toasts.expect_notify().never();
	let mut history = MockHistory::new();
	history.expect_push().never();
	let handler = SubmissionHandler::login(Rc::new(toasts), Rc::new(history));

	// Act
	let result = handler.submit(&binding).unwrap();

	// Assert
	let errors = result.errors().unwrap();
	assert_eq!(errors.len(), 1);
	assert_eq!(
		errors.get("username"),
		Some("Username must be at least 4 characters.")
	);
	assert_eq!(binding.field("username").unwrap().value(), "abc");
	assert_eq!(binding.field("password").unwrap().value(), "abcdefgh");
}

#[rstest]
fn test_signup_reports_single_failing_field() {
	// Arrange
	let binding = FormBinding::new(signup_schema());
	fill(
		&binding,
		&[
			("name", "Ali"),
			("family", "R"),
			("username", "aliR"),
			("password", "12345678"),
			("age", "25"),
			("gender", "مرد"),
		],
	);

	let mut toasts = MockToasts::new();
	toasts.expect_notify().never();
	let mut history = MockHistory::new();
	history.expect_push().never();
	let handler = SubmissionHandler::signup(Rc::new(toasts), Rc::new(history));

	// Act
	let result = handler.submit(&binding).unwrap();

	// Assert
	let errors = result.errors().unwrap();
	assert_eq!(errors.len(), 1);
	assert_eq!(
		errors.get("family"),
		Some("Family must be at least 2 characters.")
	);
	assert_eq!(
		binding.field("family").unwrap().error().as_deref(),
		Some("Family must be at least 2 characters.")
	);
}

#[rstest]
fn test_signup_success_goes_to_user_dashboard() {
	// Arrange
	let binding = FormBinding::new(signup_schema());
	fill(
		&binding,
		&[
			("name", "Ali"),
			("family", "Rezaei"),
			("username", "aliR"),
			("password", "12345678"),
			("age", "25"),
			("gender", "مرد"),
		],
	);

	let mut toasts = MockToasts::new();
	toasts
		.expect_notify()
		.withf(|notification| {
			notification.title == SIGNUP_SUCCESS_TITLE
				&& notification.description.contains("\"gender\": \"مرد\"")
		})
		.times(1)
		.return_const(());
	let mut history = MockHistory::new();
	history
		.expect_push()
		.withf(|path| path == "/user/dashboard")
		.times(1)
		.return_const(());
	let handler = SubmissionHandler::signup(Rc::new(toasts), Rc::new(history));

	// Act
	let result = handler.submit(&binding).unwrap();

	// Assert
	assert_eq!(result.data().unwrap().len(), 6);
	assert!(binding.is_pristine());
}

#[rstest]
fn test_second_submit_after_fix_succeeds() {
	// Arrange
	let binding = FormBinding::new(login_schema());
	fill(&binding, &[("username", "abc"), ("password", "abcd")]);

	let mut toasts = MockToasts::new();
	toasts.expect_notify().times(1).return_const(());
	let mut history = MockHistory::new();
	history.expect_push().times(1).return_const(());
	let handler = SubmissionHandler::login(Rc::new(toasts), Rc::new(history));
	assert!(!handler.submit(&binding).unwrap().is_ok());

	// Act
	binding.set_value("username", "abcd").unwrap();
	let result = handler.submit(&binding).unwrap();

	// Assert
	assert_eq!(result.data().unwrap().get("username"), Some("abcd"));
	assert_eq!(binding.field("username").unwrap().error(), None);
}
