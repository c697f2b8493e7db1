//! Client-side navigation

use crate::reactive::Signal;
use std::cell::RefCell;
use std::rc::Rc;

/// Requests a move to another route.
pub trait Navigator {
	fn push(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
	fn push(&self, path: &str) {
		(**self).push(path);
	}
}

/// In-memory history stack with an observable current path.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
	current: Signal<String>,
	history: Rc<RefCell<Vec<String>>>,
}

impl HistoryNavigator {
	/// Start at `initial`
	///
	/// # Examples
	///
	/// ```
	/// use crypton_pages::navigation::{HistoryNavigator, Navigator};
	///
	/// let history = HistoryNavigator::new("/login");
	/// history.push("/admin/dashboard");
	/// assert_eq!(history.current(), "/admin/dashboard");
	///
	/// assert_eq!(history.back().as_deref(), Some("/login"));
	/// ```
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		Self {
			current: Signal::new(initial.clone()),
			history: Rc::new(RefCell::new(vec![initial])),
		}
	}

	pub fn current(&self) -> String {
		self.current.get()
	}

	/// Signal holding the current path; subscribe to follow navigation.
	pub fn current_signal(&self) -> &Signal<String> {
		&self.current
	}

	/// Every visited path, oldest first.
	pub fn history(&self) -> Vec<String> {
		self.history.borrow().clone()
	}

	/// Pop the current entry and return to the previous one
	///
	/// Returns `None` at the first entry.
	pub fn back(&self) -> Option<String> {
		let previous = {
			let mut history = self.history.borrow_mut();
			if history.len() < 2 {
				return None;
			}
			history.pop();
			history.last().cloned()
		}?;
		self.current.set(previous.clone());
		Some(previous)
	}
}

impl Navigator for HistoryNavigator {
	fn push(&self, path: &str) {
		self.history.borrow_mut().push(path.to_string());
		self.current.set(path.to_string());
		tracing::info!(path, "navigated");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_back_at_start() {
		let history = HistoryNavigator::new("/login");
		assert_eq!(history.back(), None);
		assert_eq!(history.current(), "/login");
	}

	#[rstest]
	fn test_push_records_history() {
		let history = HistoryNavigator::new("/login");

		history.push("/signup");
		history.push("/user/dashboard");

		assert_eq!(
			history.history(),
			["/login", "/signup", "/user/dashboard"]
		);
	}

	#[rstest]
	fn test_current_signal_follows_push() {
		let history = HistoryNavigator::new("/login");
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		history
			.current_signal()
			.subscribe(move |path| sink.borrow_mut().push(path.clone()));

		history.push("/admin/dashboard");

		assert_eq!(*seen.borrow(), ["/admin/dashboard"]);
	}
}
