//! The login and signup schemas

use crate::field::{Choice, FieldConstraint};
use crate::schema::FormSchema;

pub const LOGIN_FORM: &str = "login";
pub const SIGNUP_FORM: &str = "signup";

/// `(value, label)` pairs accepted by the signup gender field.
pub const GENDER_CHOICES: [(&str, &str); 2] = [("male", "مرد"), ("female", "زن")];

/// Username and password, four characters each.
pub fn login_schema() -> FormSchema {
	FormSchema::new(LOGIN_FORM)
		.field("username", FieldConstraint::text().with_min_length(4))
		.field("password", FieldConstraint::text().with_min_length(4))
}

/// Profile fields collected on signup, in the order they are rendered.
pub fn signup_schema() -> FormSchema {
	FormSchema::new(SIGNUP_FORM)
		.field("name", FieldConstraint::text().with_min_length(2))
		.field("family", FieldConstraint::text().with_min_length(2))
		.field("username", FieldConstraint::text().with_min_length(4))
		.field(
			"password",
			FieldConstraint::text()
				.with_min_length(8)
				.with_message("Password must be at least 4 characters."),
		)
		.field(
			"age",
			FieldConstraint::numeric()
				.with_min_length(2)
				.with_message("You must be at least 18 years old."),
		)
		.field(
			"gender",
			FieldConstraint::choice(
				GENDER_CHOICES
					.iter()
					.map(|(value, label)| Choice::new(*value, *label)),
			),
		)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;
	use rstest::rstest;

	#[rstest]
	fn test_login_schema_fields() {
		let schema = login_schema();
		let names: Vec<_> = schema.field_names().collect();
		assert_eq!(names, ["username", "password"]);
	}

	#[rstest]
	fn test_signup_schema_fields() {
		let schema = signup_schema();
		let names: Vec<_> = schema.field_names().collect();
		assert_eq!(
			names,
			["name", "family", "username", "password", "age", "gender"]
		);
		assert_eq!(schema.constraint("age").unwrap().kind, FieldKind::Numeric);
		assert_eq!(schema.constraint("gender").unwrap().kind, FieldKind::Choice);
	}

	#[rstest]
	#[case("username", "abc", "Username must be at least 4 characters.")]
	#[case("password", "abc", "Password must be at least 4 characters.")]
	fn test_login_messages(#[case] field: &str, #[case] value: &str, #[case] message: &str) {
		let error = login_schema().validate_field(field, value).unwrap_err();
		assert_eq!(error.message, message);
	}

	#[rstest]
	#[case("name", "A", "Name must be at least 2 characters.")]
	#[case("family", "R", "Family must be at least 2 characters.")]
	#[case("username", "ali", "Username must be at least 4 characters.")]
	#[case("password", "1234567", "Password must be at least 4 characters.")]
	#[case("age", "9", "You must be at least 18 years old.")]
	#[case("gender", "", "Gender must be one of: مرد, زن.")]
	fn test_signup_messages(#[case] field: &str, #[case] value: &str, #[case] message: &str) {
		let error = signup_schema().validate_field(field, value).unwrap_err();
		assert_eq!(error.message, message);
	}

	#[rstest]
	#[case("male")]
	#[case("female")]
	#[case("مرد")]
	#[case("زن")]
	fn test_gender_accepts_values_and_labels(#[case] value: &str) {
		assert!(signup_schema().validate_field("gender", value).is_ok());
	}
}
