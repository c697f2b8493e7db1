//! Path to page resolution

use crate::error::{PagesError, PagesResult};
use crate::page::Page;
use crate::route::Route;
use std::fmt;

type View = Box<dyn Fn() -> Page>;

/// Maps page routes to view functions.
#[derive(Default)]
pub struct Router {
	routes: Vec<(Route, View)>,
}

impl Router {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `view` for `route`, replacing any earlier registration.
	pub fn route<F>(mut self, route: Route, view: F) -> Self
	where
		F: Fn() -> Page + 'static,
	{
		self.routes.retain(|(existing, _)| *existing != route);
		self.routes.push((route, Box::new(view)));
		self
	}

	/// Resolve `path` to a registered route.
	pub fn match_path(&self, path: &str) -> PagesResult<Route> {
		Route::from_path(path)
			.filter(|route| self.has_route(*route))
			.ok_or_else(|| PagesError::NotFound(path.to_string()))
	}

	/// Render the page registered for `path`.
	pub fn render(&self, path: &str) -> PagesResult<Page> {
		let route = self.match_path(path)?;
		let view = self
			.routes
			.iter()
			.find(|(existing, _)| *existing == route)
			.map(|(_, view)| view)
			.ok_or_else(|| PagesError::NotFound(path.to_string()))?;
		Ok(view())
	}

	pub fn has_route(&self, route: Route) -> bool {
		self.routes.iter().any(|(existing, _)| *existing == route)
	}

	pub fn route_count(&self) -> usize {
		self.routes.len()
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let routes: Vec<_> = self.routes.iter().map(|(route, _)| *route).collect();
		f.debug_struct("Router").field("routes", &routes).finish()
	}
}
