//! In-memory account store
//!
//! `AccountStore` keeps every user, wallet, holding and message behind one
//! `RwLock`. Password hashing runs outside the lock; uniqueness is checked
//! again once the write lock is held.

use crate::community::{Announcement, ContactMessage};
use crate::error::{AccountError, AccountResult};
use crate::exchange::{Asset, Coin, Transaction, Wallet};
use crate::hasher::{Argon2Hasher, PasswordHasher};
use crate::user::{ProfileUpdate, Registration, Role, User};
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Minimum length of a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
	pub user: User,
	pub role: Role,
}

impl Session {
	/// Path of the dashboard this session lands on.
	pub fn dashboard_path(&self) -> &'static str {
		match self.role {
			Role::Admin => "/admin/dashboard",
			Role::User => "/user/dashboard",
		}
	}
}

#[derive(Debug, Default)]
pub(crate) struct State {
	pub(crate) users: Vec<User>,
	pub(crate) wallets: Vec<Wallet>,
	pub(crate) coins: Vec<Coin>,
	pub(crate) assets: Vec<Asset>,
	pub(crate) transactions: Vec<Transaction>,
	pub(crate) announcements: Vec<Announcement>,
	pub(crate) messages: Vec<ContactMessage>,
	next_id: u64,
}

impl State {
	pub(crate) fn next_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}

	pub(crate) fn user(&self, username: &str) -> AccountResult<&User> {
		self.users
			.iter()
			.find(|user| user.username == username)
			.ok_or(AccountError::UserNotFound)
	}

	pub(crate) fn wallet_mut(&mut self, username: &str) -> AccountResult<&mut Wallet> {
		self.wallets
			.iter_mut()
			.find(|wallet| wallet.username == username)
			.ok_or(AccountError::UserNotFound)
	}

	fn has_user(&self, username: &str) -> bool {
		self.users.iter().any(|user| user.username == username)
	}
}

/// Users, wallets and exchange state of one Crypton deployment.
pub struct AccountStore {
	hasher: Box<dyn PasswordHasher>,
	pub(crate) state: RwLock<State>,
}

impl Default for AccountStore {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for AccountStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.read();
		f.debug_struct("AccountStore")
			.field("users", &state.users.len())
			.field("coins", &state.coins.len())
			.finish_non_exhaustive()
	}
}

impl AccountStore {
	/// Store hashing with Argon2id defaults.
	pub fn new() -> Self {
		Self::with_hasher(Argon2Hasher::new())
	}

	pub fn with_hasher(hasher: impl PasswordHasher + 'static) -> Self {
		Self {
			hasher: Box::new(hasher),
			state: RwLock::new(State::default()),
		}
	}

	/// Register a regular user with an empty wallet
	///
	/// # Examples
	///
	/// ```
	/// use crypton_accounts::{AccountError, AccountStore, Registration};
	///
	/// let store = AccountStore::new();
	/// store.register(Registration::new("sara", "12345678")).unwrap();
	///
	/// let again = store.register(Registration::new("sara", "abcdefgh"));
	/// assert_eq!(again.unwrap_err(), AccountError::UsernameTaken);
	/// ```
	pub fn register(&self, registration: Registration) -> AccountResult<User> {
		self.insert_user(registration, false)
	}

	/// Register an active staff superuser.
	pub fn create_superuser(&self, username: &str, password: &str) -> AccountResult<User> {
		self.insert_user(Registration::new(username, password), true)
	}

	fn insert_user(&self, registration: Registration, superuser: bool) -> AccountResult<User> {
		registration.validate()?;
		if self.state.read().has_user(&registration.username) {
			return Err(AccountError::UsernameTaken);
		}

		let password_hash = self.hasher.hash(&registration.password)?;
		let user = User {
			id: Uuid::new_v4(),
			username: registration.username,
			name: registration.name,
			family: registration.family,
			age: registration.age,
			gender: registration.gender,
			password_hash,
			is_active: true,
			is_staff: superuser,
			is_superuser: superuser,
			date_joined: Utc::now(),
		};

		let mut state = self.state.write();
		if state.has_user(&user.username) {
			return Err(AccountError::UsernameTaken);
		}
		state.wallets.push(Wallet {
			username: user.username.clone(),
			balance: Decimal::ZERO,
		});
		state.users.push(user.clone());
		drop(state);

		tracing::info!(username = %user.username, superuser, "User registered");
		Ok(user)
	}

	/// Check credentials and open a session
	///
	/// Checks run in order: both fields present, user exists, password
	/// matches, account active.
	pub fn authenticate(&self, username: &str, password: &str) -> AccountResult<Session> {
		if username.is_empty() || password.is_empty() {
			return Err(AccountError::MissingCredentials);
		}

		let user = self.state.read().user(username)?.clone();
		if !self.hasher.verify(password, &user.password_hash)? {
			tracing::warn!(username, "Login rejected: wrong password");
			return Err(AccountError::WrongPassword);
		}
		if !user.is_active {
			tracing::warn!(username, "Login rejected: inactive account");
			return Err(AccountError::Inactive);
		}

		let role = user.role();
		tracing::info!(username, %role, "User logged in");
		Ok(Session { user, role })
	}

	/// Replace `username`'s password after checking the current one.
	pub fn change_password(&self, username: &str, old: &str, new: &str) -> AccountResult<()> {
		let current = self.state.read().user(username)?.password_hash.clone();
		if !self.hasher.verify(old, &current)? {
			return Err(AccountError::WrongOldPassword);
		}
		let password_hash = self.hash_new_password(new)?;

		let mut state = self.state.write();
		let user = Self::user_mut(&mut state, username)?;
		user.password_hash = password_hash;
		drop(state);

		tracing::info!(username, "Password changed");
		Ok(())
	}

	/// Apply `update` to `target`. Superusers may edit anyone, others only
	/// themselves.
	pub fn update_profile(
		&self,
		actor: &str,
		target: &str,
		update: ProfileUpdate,
	) -> AccountResult<User> {
		{
			let state = self.state.read();
			let actor = state.user(actor)?;
			if !actor.is_superuser && actor.username != target {
				return Err(AccountError::PermissionDenied);
			}
			state.user(target)?;
		}
		if let Some(age) = update.age
			&& age < crate::user::MIN_AGE
		{
			return Err(AccountError::AgeTooLow);
		}
		let password_hash = update
			.password
			.as_deref()
			.map(|password| self.hash_new_password(password))
			.transpose()?;

		let mut state = self.state.write();
		let user = Self::user_mut(&mut state, target)?;
		if let Some(name) = update.name {
			user.name = name;
		}
		if let Some(family) = update.family {
			user.family = family;
		}
		if let Some(age) = update.age {
			user.age = Some(age);
		}
		if let Some(gender) = update.gender {
			user.gender = Some(gender);
		}
		if let Some(password_hash) = password_hash {
			user.password_hash = password_hash;
		}
		let updated = user.clone();
		drop(state);

		tracing::debug!(actor, target, "Profile updated");
		Ok(updated)
	}

	pub fn user(&self, username: &str) -> AccountResult<User> {
		self.state.read().user(username).cloned()
	}

	/// Users visible to `viewer`: everyone, newest first, for superusers and
	/// only themselves otherwise.
	pub fn users(&self, viewer: &str) -> AccountResult<Vec<User>> {
		let state = self.state.read();
		let viewer = state.user(viewer)?;
		if viewer.is_superuser {
			Ok(state.users.iter().rev().cloned().collect())
		} else {
			Ok(vec![viewer.clone()])
		}
	}

	/// Block or unblock `target`. Staff only.
	pub fn set_active(&self, actor: &str, target: &str, active: bool) -> AccountResult<()> {
		let mut state = self.state.write();
		Self::require_staff(&state, actor)?;
		Self::user_mut(&mut state, target)?.is_active = active;
		drop(state);

		tracing::info!(actor, target, active, "Account status changed");
		Ok(())
	}

	pub(crate) fn require_staff(state: &State, username: &str) -> AccountResult<()> {
		if state.user(username)?.is_staff {
			Ok(())
		} else {
			Err(AccountError::PermissionDenied)
		}
	}

	fn user_mut<'a>(state: &'a mut State, username: &str) -> AccountResult<&'a mut User> {
		state
			.users
			.iter_mut()
			.find(|user| user.username == username)
			.ok_or(AccountError::UserNotFound)
	}

	fn hash_new_password(&self, password: &str) -> AccountResult<String> {
		if password.chars().count() < MIN_PASSWORD_LENGTH {
			return Err(AccountError::WeakPassword);
		}
		self.hasher.hash(password)
	}
}
