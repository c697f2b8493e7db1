//! The running front-end
//!
//! `App` owns one binding per auth form for the lifetime of the session and
//! wires them to a shared toast queue and navigation history.
//!
//! ```
//! use crypton_conf::SiteSettings;
//! use crypton_pages::{App, Route};
//!
//! let app = App::new(SiteSettings::default());
//! app.set_value(Route::Login, "username", "admin").unwrap();
//! app.set_value(Route::Login, "password", "secret1").unwrap();
//!
//! let result = app.submit(Route::Login).unwrap();
//! assert!(result.is_ok());
//! assert_eq!(app.history().current(), "/admin/dashboard");
//! assert_eq!(app.toasts().len(), 1);
//! ```

use crate::binding::FormBinding;
use crate::components::{FormComponent, LOGIN_WIDGETS, SIGNUP_WIDGETS};
use crate::error::{PagesError, PagesResult};
use crate::layout::Layout;
use crate::navigation::{HistoryNavigator, Navigator};
use crate::notify::ToastQueue;
use crate::route::Route;
use crate::router::Router;
use crate::submission::SubmissionHandler;
use crate::views::{login_page, signup_page};
use crypton_conf::SiteSettings;
use crypton_forms::{SubmissionResult, login_schema, signup_schema};
use std::rc::Rc;

struct AuthForm {
	component: FormComponent,
	handler: SubmissionHandler,
}

pub struct App {
	layout: Layout,
	router: Router,
	login: AuthForm,
	signup: AuthForm,
	toasts: Rc<ToastQueue>,
	history: Rc<HistoryNavigator>,
}

impl App {
	/// Start a session on `/login`.
	pub fn new(settings: SiteSettings) -> Self {
		let toasts = Rc::new(ToastQueue::new());
		let history = Rc::new(HistoryNavigator::new(Route::Login.path()));

		let login = AuthForm {
			component: FormComponent::new(FormBinding::new(login_schema()), LOGIN_WIDGETS),
			handler: SubmissionHandler::login(toasts.clone(), history.clone()),
		};
		let signup = AuthForm {
			component: FormComponent::new(FormBinding::new(signup_schema()), SIGNUP_WIDGETS),
			handler: SubmissionHandler::signup(toasts.clone(), history.clone()),
		};

		let login_view = login.component.clone();
		let signup_view = signup.component.clone();
		let router = Router::new()
			.route(Route::Login, move || login_page(&login_view))
			.route(Route::Signup, move || signup_page(&signup_view));

		Self {
			layout: Layout::new(settings),
			router,
			login,
			signup,
			toasts,
			history,
		}
	}

	pub fn toasts(&self) -> &ToastQueue {
		&self.toasts
	}

	pub fn history(&self) -> &HistoryNavigator {
		&self.history
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	/// Binding of the form rendered at `route`.
	pub fn form(&self, route: Route) -> PagesResult<&FormBinding> {
		Ok(self.auth_form(route)?.component.binding())
	}

	fn auth_form(&self, route: Route) -> PagesResult<&AuthForm> {
		match route {
			Route::Login => Ok(&self.login),
			Route::Signup => Ok(&self.signup),
			Route::AdminDashboard | Route::UserDashboard => {
				Err(PagesError::NotFound(route.path().to_string()))
			}
		}
	}

	pub fn set_value(
		&self,
		route: Route,
		field: &str,
		value: impl Into<String>,
	) -> PagesResult<()> {
		Ok(self.form(route)?.set_value(field, value)?)
	}

	/// Submit the form at `route` and run its success effects.
	pub fn submit(&self, route: Route) -> PagesResult<SubmissionResult> {
		let form = self.auth_form(route)?;
		form.handler.submit(form.component.binding())
	}

	/// Navigate to a page path. Unknown paths are rejected.
	pub fn visit(&self, path: &str) -> PagesResult<()> {
		let route = self.router.match_path(path)?;
		self.history.push(route.path());
		Ok(())
	}

	/// Render `path` as a full HTML document.
	pub fn render(&self, path: &str) -> PagesResult<String> {
		let page = self.router.render(path)?;
		Ok(self.layout.render(page))
	}

	/// Render the page at the current history entry.
	pub fn render_current(&self) -> PagesResult<String> {
		self.render(&self.history.current())
	}
}

impl std::fmt::Debug for App {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("App")
			.field("router", &self.router)
			.field("current", &self.history.current())
			.field("toasts", &self.toasts.len())
			.finish_non_exhaustive()
	}
}
