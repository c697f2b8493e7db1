//! Users, registration input and roles

use crate::error::{AccountError, AccountResult};
use chrono::{DateTime, Utc};
use crypton_forms::{FormData, GENDER_CHOICES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Minimum age accepted at registration.
pub const MIN_AGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
}

impl Gender {
	/// Stored value (`male`, `female`).
	pub fn as_str(self) -> &'static str {
		match self {
			Gender::Male => "male",
			Gender::Female => "female",
		}
	}

	/// Persian label (`مرد`, `زن`).
	pub fn label(self) -> &'static str {
		GENDER_CHOICES
			.iter()
			.find(|(value, _)| *value == self.as_str())
			.map(|(_, label)| *label)
			.unwrap_or_default()
	}
}

impl FromStr for Gender {
	type Err = AccountError;

	/// Accepts the stored value or the Persian label.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"male" | "مرد" => Ok(Gender::Male),
			"female" | "زن" => Ok(Gender::Female),
			other => Err(AccountError::InvalidGender(other.to_string())),
		}
	}
}

/// Dashboard a user lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Admin,
	User,
}

impl Role {
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Admin => "admin",
			Role::User => "user",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
	pub id: Uuid,
	pub username: String,
	pub name: String,
	pub family: String,
	pub age: Option<u32>,
	pub gender: Option<Gender>,
	#[serde(skip_serializing)]
	pub password_hash: String,
	pub is_active: bool,
	pub is_staff: bool,
	pub is_superuser: bool,
	pub date_joined: DateTime<Utc>,
}

impl User {
	/// Staff log in to the admin dashboard, everyone else to the user one.
	pub fn role(&self) -> Role {
		if self.is_staff { Role::Admin } else { Role::User }
	}
}

impl fmt::Display for User {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {} {}", self.username, self.name, self.family)
	}
}

/// Input for [`AccountStore::register`](crate::AccountStore::register).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Registration {
	pub username: String,
	pub password: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub family: String,
	#[serde(default)]
	pub age: Option<u32>,
	#[serde(default)]
	pub gender: Option<Gender>,
}

impl Registration {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
			..Self::default()
		}
	}

	/// Build a registration from a validated signup form
	///
	/// Empty optional fields are treated as absent. The age must parse as
	/// a whole number and the gender may be given by value or label.
	///
	/// # Examples
	///
	/// ```
	/// use crypton_accounts::{Gender, Registration};
	/// use crypton_forms::FormData;
	///
	/// let data: FormData = [
	///     ("name", "Ali"),
	///     ("family", "Rezaei"),
	///     ("username", "alir"),
	///     ("password", "12345678"),
	///     ("age", "25"),
	///     ("gender", "مرد"),
	/// ]
	/// .into_iter()
	/// .collect();
	///
	/// let registration = Registration::from_form_data(&data).unwrap();
	/// assert_eq!(registration.age, Some(25));
	/// assert_eq!(registration.gender, Some(Gender::Male));
	/// ```
	pub fn from_form_data(data: &FormData) -> AccountResult<Self> {
		let text = |field: &str| data.get(field).unwrap_or_default().to_string();
		let present = |field: &str| data.get(field).filter(|value| !value.trim().is_empty());

		let age = present("age")
			.map(|value| value.trim().parse::<u32>())
			.transpose()
			.map_err(|_| AccountError::InvalidAge)?;
		let gender = present("gender").map(Gender::from_str).transpose()?;

		Ok(Self {
			username: text("username"),
			password: text("password"),
			name: text("name"),
			family: text("family"),
			age,
			gender,
		})
	}

	pub(crate) fn validate(&self) -> AccountResult<()> {
		if self.username.trim().is_empty() {
			return Err(AccountError::UsernameRequired);
		}
		if let Some(age) = self.age
			&& age < MIN_AGE
		{
			return Err(AccountError::AgeTooLow);
		}
		Ok(())
	}
}

/// Partial profile update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
	pub name: Option<String>,
	pub family: Option<String>,
	pub age: Option<u32>,
	pub gender: Option<Gender>,
	pub password: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("male", Gender::Male)]
	#[case("مرد", Gender::Male)]
	#[case("female", Gender::Female)]
	#[case("زن", Gender::Female)]
	fn test_gender_from_value_or_label(#[case] input: &str, #[case] expected: Gender) {
		assert_eq!(input.parse::<Gender>().unwrap(), expected);
	}

	#[rstest]
	fn test_gender_label() {
		assert_eq!(Gender::Male.label(), "مرد");
		assert_eq!(Gender::Female.label(), "زن");
	}

	#[rstest]
	#[case(Some(9), Err(AccountError::AgeTooLow))]
	#[case(Some(10), Ok(()))]
	#[case(None, Ok(()))]
	fn test_age_rule(#[case] age: Option<u32>, #[case] expected: AccountResult<()>) {
		let registration = Registration {
			age,
			..Registration::new("sara", "pw")
		};
		assert_eq!(registration.validate(), expected);
	}

	#[rstest]
	fn test_username_required() {
		let registration = Registration::new("  ", "pw");
		assert_eq!(registration.validate(), Err(AccountError::UsernameRequired));
	}

	#[rstest]
	#[case("abc")]
	#[case("-3")]
	fn test_from_form_data_rejects_bad_age(#[case] age: &str) {
		let data: FormData = [("username", "sara"), ("age", age)].into_iter().collect();
		assert_eq!(
			Registration::from_form_data(&data),
			Err(AccountError::InvalidAge)
		);
	}

	#[rstest]
	fn test_from_form_data_empty_optionals() {
		let data: FormData = [("username", "sara"), ("age", ""), ("gender", "")]
			.into_iter()
			.collect();

		let registration = Registration::from_form_data(&data).unwrap();

		assert_eq!(registration.age, None);
		assert_eq!(registration.gender, None);
		assert_eq!(registration.password, "");
	}

	#[rstest]
	fn test_user_serialization_hides_password_hash() {
		let user = User {
			id: Uuid::nil(),
			username: "admin".to_string(),
			name: String::new(),
			family: String::new(),
			age: None,
			gender: Some(Gender::Female),
			password_hash: "$argon2id$secret".to_string(),
			is_active: true,
			is_staff: true,
			is_superuser: true,
			date_joined: DateTime::<Utc>::UNIX_EPOCH,
		};

		let json = serde_json::to_value(&user).unwrap();

		assert!(json.get("password_hash").is_none());
		assert_eq!(json["gender"], "female");
		assert_eq!(user.role(), Role::Admin);
	}
}
