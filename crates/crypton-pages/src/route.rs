//! Known routes

use std::fmt;

/// Every path the front-end renders or navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
	Login,
	Signup,
	/// Landing page after a successful login
	AdminDashboard,
	/// Landing page after a successful signup
	UserDashboard,
}

impl Route {
	pub const ALL: [Route; 4] = [
		Route::Login,
		Route::Signup,
		Route::AdminDashboard,
		Route::UserDashboard,
	];

	pub fn path(self) -> &'static str {
		match self {
			Route::Login => "/login",
			Route::Signup => "/signup",
			Route::AdminDashboard => "/admin/dashboard",
			Route::UserDashboard => "/user/dashboard",
		}
	}

	/// Match a request path, ignoring a trailing slash and any query string.
	pub fn from_path(path: &str) -> Option<Self> {
		let path = path.split(['?', '#']).next().unwrap_or_default();
		let path = match path.strip_suffix('/') {
			Some(stripped) if !stripped.is_empty() => stripped,
			_ => path,
		};
		Self::ALL.into_iter().find(|route| route.path() == path)
	}

	/// Whether this crate renders the route. Dashboards are served elsewhere.
	pub fn is_page(self) -> bool {
		matches!(self, Route::Login | Route::Signup)
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/login", Some(Route::Login))]
	#[case("/signup/", Some(Route::Signup))]
	#[case("/login?next=%2F", Some(Route::Login))]
	#[case("/admin/dashboard", Some(Route::AdminDashboard))]
	#[case("/", None)]
	#[case("/logout", None)]
	fn test_from_path(#[case] path: &str, #[case] expected: Option<Route>) {
		assert_eq!(Route::from_path(path), expected);
	}

	#[rstest]
	fn test_paths_round_trip() {
		for route in Route::ALL {
			assert_eq!(Route::from_path(route.path()), Some(route));
		}
	}
}
