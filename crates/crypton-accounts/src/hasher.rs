//! Password hashing

use crate::error::{AccountError, AccountResult};
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

/// Password hasher trait
///
/// # Examples
///
/// ```
/// use crypton_accounts::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::new();
/// let hash = hasher.hash("my_secure_password").unwrap();
///
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// assert!(!hasher.verify("wrong_password", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
	/// Hash a plaintext password into a PHC string.
	fn hash(&self, password: &str) -> AccountResult<String>;

	/// Check `password` against a stored hash
	///
	/// `Ok(false)` means the password does not match; `Err` means the hash
	/// itself could not be parsed.
	fn verify(&self, password: &str, hash: &str) -> AccountResult<bool>;
}

/// Argon2id hasher.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
	argon2: Argon2<'static>,
}

impl std::fmt::Debug for Argon2Hasher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Argon2Hasher").finish_non_exhaustive()
	}
}

impl Argon2Hasher {
	/// Hasher with the library's default cost parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Hasher with explicit memory (KiB), iteration and lane costs.
	pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> AccountResult<Self> {
		let params = Params::new(m_cost, t_cost, p_cost, None)
			.map_err(|e| AccountError::Hash(e.to_string()))?;
		Ok(Self {
			argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
		})
	}
}

impl PasswordHasher for Argon2Hasher {
	fn hash(&self, password: &str) -> AccountResult<String> {
		let mut salt_bytes = [0u8; 16];
		rand::thread_rng().fill_bytes(&mut salt_bytes);
		let salt =
			SaltString::encode_b64(&salt_bytes).map_err(|e| AccountError::Hash(e.to_string()))?;

		self.argon2
			.hash_password(password.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|e| AccountError::Hash(e.to_string()))
	}

	fn verify(&self, password: &str, hash: &str) -> AccountResult<bool> {
		let parsed_hash = PasswordHash::new(hash).map_err(|e| AccountError::Hash(e.to_string()))?;

		Ok(self
			.argon2
			.verify_password(password.as_bytes(), &parsed_hash)
			.is_ok())
	}
}
