//! Toast notifications

use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
	pub title: String,
	pub description: String,
}

impl Notification {
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
		}
	}
}

/// Sink for user-facing notifications.
pub trait Notifier {
	fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
	fn notify(&self, notification: Notification) {
		(**self).notify(notification);
	}
}

/// In-memory toast queue
///
/// Clones share the same queue, so the submission handler can push while
/// the view drains.
///
/// # Examples
///
/// ```
/// use crypton_pages::notify::{Notification, Notifier, ToastQueue};
///
/// let toasts = ToastQueue::new();
/// toasts.notify(Notification::new("ورود با موفقیت انجام شد", "{}"));
/// assert_eq!(toasts.peek().len(), 1);
///
/// let shown = toasts.get_all();
/// assert_eq!(shown[0].title, "ورود با موفقیت انجام شد");
/// assert!(toasts.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
	toasts: Rc<RefCell<VecDeque<Notification>>>,
}

impl ToastQueue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&self, notification: Notification) {
		self.toasts.borrow_mut().push_back(notification);
	}

	/// Remove and return every queued toast, oldest first.
	pub fn get_all(&self) -> Vec<Notification> {
		self.toasts.borrow_mut().drain(..).collect()
	}

	/// Copy of the queue without draining it.
	pub fn peek(&self) -> Vec<Notification> {
		self.toasts.borrow().iter().cloned().collect()
	}

	pub fn clear(&self) {
		self.toasts.borrow_mut().clear();
	}

	pub fn len(&self) -> usize {
		self.toasts.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.borrow().is_empty()
	}
}

impl Notifier for ToastQueue {
	fn notify(&self, notification: Notification) {
		tracing::debug!(title = %notification.title, "toast queued");
		self.add(notification);
	}
}
