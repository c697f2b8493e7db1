//! Success effects of a validated submit
//!
//! A handler runs only for [`SubmissionResult::Ok`] and always in the same
//! order: notify, reset the form, navigate.

use crate::binding::{FormBinding, FormPhase};
use crate::error::PagesResult;
use crate::navigation::Navigator;
use crate::notify::{Notification, Notifier};
use crate::route::Route;
use crypton_forms::{FormData, SubmissionResult};
use std::fmt;
use std::rc::Rc;

/// Toast title shown after a successful login.
pub const LOGIN_SUCCESS_TITLE: &str = "ورود با موفقیت انجام شد";
/// Toast title shown after a successful signup.
pub const SIGNUP_SUCCESS_TITLE: &str = "ثبت نام با موفقیت انجام شد";

/// Runs the success side effects for one form.
#[derive(Clone)]
pub struct SubmissionHandler {
	title: String,
	redirect: Route,
	notifier: Rc<dyn Notifier>,
	navigator: Rc<dyn Navigator>,
}

impl SubmissionHandler {
	pub fn new(
		title: impl Into<String>,
		redirect: Route,
		notifier: Rc<dyn Notifier>,
		navigator: Rc<dyn Navigator>,
	) -> Self {
		Self {
			title: title.into(),
			redirect,
			notifier,
			navigator,
		}
	}

	/// Handler for the login form: toast, then `/admin/dashboard`.
	pub fn login(notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>) -> Self {
		Self::new(LOGIN_SUCCESS_TITLE, Route::AdminDashboard, notifier, navigator)
	}

	/// Handler for the signup form: toast, then `/user/dashboard`.
	pub fn signup(notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>) -> Self {
		Self::new(SIGNUP_SUCCESS_TITLE, Route::UserDashboard, notifier, navigator)
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn redirect(&self) -> Route {
		self.redirect
	}

	/// Submit `binding` and run the success effects if it validated.
	pub fn submit(&self, binding: &FormBinding) -> PagesResult<SubmissionResult> {
		let result = binding.submit();
		self.handle(binding, &result)?;
		Ok(result)
	}

	/// Apply the effects for `result`. `Invalid` results are a no-op.
	///
	/// The description is built before any effect runs, so a serialization
	/// failure leaves the form untouched.
	pub fn handle(&self, binding: &FormBinding, result: &SubmissionResult) -> PagesResult<()> {
		let SubmissionResult::Ok(data) = result else {
			return Ok(());
		};
		let description = describe(data)?;

		self.notifier
			.notify(Notification::new(self.title.clone(), description));
		binding.reset();
		self.navigator.push(self.redirect.path());
		binding.set_phase(FormPhase::Idle);

		tracing::info!(
			form = %binding.name(),
			redirect = %self.redirect,
			"submission completed"
		);
		Ok(())
	}
}

impl fmt::Debug for SubmissionHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubmissionHandler")
			.field("title", &self.title)
			.field("redirect", &self.redirect)
			.finish_non_exhaustive()
	}
}

/// Pretty JSON echo of the submitted values, two-space indented.
pub fn describe(data: &FormData) -> PagesResult<String> {
	Ok(serde_json::to_string_pretty(data)?)
}
