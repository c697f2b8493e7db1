//! # Crypton
//!
//! A Persian, right-to-left crypto currency front-end.
//!
//! Crypton serves a login and a signup page whose forms validate on submit,
//! show a toast with the submitted values and send the user to a dashboard.
//! An in-memory accounts backend handles registration, login and coin
//! trading behind those forms.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `forms` - Form schemas and submit-time validation
//! - `conf` - Site settings from TOML and the environment
//! - `pages` - Reactive binding, submission flow and server-rendered pages
//! - `accounts` - Users, wallets and the buy/sell/swap exchange
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "pages")]
//! # {
//! use crypton::prelude::*;
//!
//! let app = App::new(SiteSettings::default());
//! app.set_value(Route::Login, "username", "admin").unwrap();
//! app.set_value(Route::Login, "password", "secret1").unwrap();
//!
//! assert!(app.submit(Route::Login).unwrap().is_ok());
//! assert_eq!(app.history().current(), "/admin/dashboard");
//! assert!(app.render("/signup").unwrap().contains(r#"dir="rtl""#));
//! # }
//! ```

#[cfg(feature = "accounts")]
pub mod accounts;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

pub mod prelude {
	#[cfg(feature = "accounts")]
	pub use crate::accounts::{AccountError, AccountStore, Coin, Registration, Role, Session};
	#[cfg(feature = "conf")]
	pub use crate::conf::SiteSettings;
	#[cfg(feature = "forms")]
	pub use crate::forms::{Form, FormData, SubmissionResult, login_schema, signup_schema};
	#[cfg(feature = "pages")]
	pub use crate::pages::{
		App, FormBinding, HistoryNavigator, Notifier, Navigator, Route, SubmissionHandler,
		ToastQueue,
	};
}
