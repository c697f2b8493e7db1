//! Accounts and exchange backend for Crypton
//!
//! An in-memory store behind the login and signup forms:
//! - Registration and Argon2id password login with admin/user roles
//! - Profile updates and account blocking
//! - Wallets, coin listings and buy/sell/swap trades
//! - Staff announcements and user contact messages
//!
//! ## Example
//!
//! ```
//! use crypton_accounts::{AccountStore, Registration, Role};
//!
//! let store = AccountStore::new();
//! store.register(Registration::new("sara", "12345678")).unwrap();
//!
//! let session = store.authenticate("sara", "12345678").unwrap();
//! assert_eq!(session.role, Role::User);
//! assert_eq!(session.dashboard_path(), "/user/dashboard");
//! ```

pub mod community;
pub mod error;
pub mod exchange;
pub mod hasher;
pub mod store;
pub mod user;

pub use community::{Announcement, ContactMessage, STARS};
pub use error::{AccountError, AccountResult};
pub use exchange::{
	Asset, Coin, MIN_SELL_AMOUNT, SellReceipt, SwapReceipt, Transaction, TransactionKind, Wallet,
};
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use store::{AccountStore, MIN_PASSWORD_LENGTH, Session};
pub use user::{Gender, MIN_AGE, ProfileUpdate, Registration, Role, User};
