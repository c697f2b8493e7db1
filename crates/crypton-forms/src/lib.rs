//! Form schemas and validation for Crypton
//!
//! This crate holds the declarative half of Crypton's forms:
//! - Constraint descriptors for text, numeric-string and choice fields
//! - Ordered form schemas with human-readable validation messages
//! - Per-form field state and the submit-time validation loop
//! - The concrete login and signup schemas
//!
//! Rendering, reactive binding and the success side effects live in
//! `crypton-pages`.
//!
//! ## Example
//!
//! ```
//! use crypton_forms::{Form, login_schema};
//!
//! let mut form = Form::new(login_schema());
//! form.set_value("username", "abc").unwrap();
//! form.set_value("password", "abcdefgh").unwrap();
//!
//! let result = form.submit();
//! let errors = result.errors().unwrap();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors.get("username"),
//!     Some("Username must be at least 4 characters.")
//! );
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod schema;
pub mod schemas;
pub mod state;
pub mod validators;

pub use error::{FieldValidationError, FormError, FormResult};
pub use field::{Choice, FieldConstraint, FieldKind};
pub use form::{FieldErrors, Form, FormData, SubmissionResult};
pub use schema::FormSchema;
pub use schemas::{GENDER_CHOICES, LOGIN_FORM, SIGNUP_FORM, login_schema, signup_schema};
pub use state::{FieldState, FormState};
