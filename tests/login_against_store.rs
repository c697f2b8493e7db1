//! Front-end forms feeding the accounts backend through the facade crate

use crypton::accounts::{Argon2Hasher, Gender};
use crypton::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> AccountStore {
	let store = AccountStore::with_hasher(Argon2Hasher::with_params(8, 1, 1).unwrap());
	store.create_superuser("admin", "secret1").unwrap();
	store
}

#[rstest]
fn test_submitted_login_matches_backend_role(store: AccountStore) {
	// Arrange
	let app = App::new(SiteSettings::default());
	app.set_value(Route::Login, "username", "admin").unwrap();
	app.set_value(Route::Login, "password", "secret1").unwrap();

	// Act
	let result = app.submit(Route::Login).unwrap();
	let data = result.data().unwrap();
	let session = store
		.authenticate(data.get("username").unwrap(), data.get("password").unwrap())
		.unwrap();

	// Assert
	assert_eq!(session.role, Role::Admin);
	assert_eq!(app.history().current(), session.dashboard_path());
}

#[rstest]
fn test_submitted_signup_registers_user(store: AccountStore) {
	// Arrange
	let app = App::new(SiteSettings::default());
	for (field, value) in [
		("name", "Sara"),
		("family", "Karimi"),
		("username", "sarak"),
		("password", "12345678"),
		("age", "31"),
		("gender", "female"),
	] {
		app.set_value(Route::Signup, field, value).unwrap();
	}

	// Act
	let result = app.submit(Route::Signup).unwrap();
	let registration = Registration::from_form_data(result.data().unwrap()).unwrap();
	let user = store.register(registration).unwrap();

	// Assert
	assert_eq!(user.gender, Some(Gender::Female));
	assert_eq!(user.age, Some(31));
	assert_eq!(
		store.authenticate("sarak", "12345678").unwrap().dashboard_path(),
		app.history().current()
	);
}

#[rstest]
fn test_schema_validation_runs_before_backend(store: AccountStore) {
	let mut form = Form::new(login_schema());
	form.set_value("username", "adm").unwrap();
	form.set_value("password", "secret1").unwrap();

	let result = form.submit();

	assert!(result.data().is_none());
	assert_eq!(store.users("admin").unwrap().len(), 1);
}
