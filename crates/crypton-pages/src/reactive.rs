//! Signal - observable value with explicit subscribers
//!
//! `Signal<T>` holds a value behind `Rc<RefCell<_>>` and calls every
//! subscriber after each change. Subscribers stand in for the re-render
//! hook of a view: a component subscribes to the signals it displays.
//!
//! ## Example
//!
//! ```
//! use crypton_pages::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_clone = Rc::clone(&seen);
//! count.subscribe(move |value| seen_clone.set(*value));
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//! assert_eq!(seen.get(), 42);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
	value: T,
	subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
	next_id: u64,
}

/// An observable value
///
/// Cloning a `Signal` yields another handle to the same value and the same
/// subscriber list.
pub struct Signal<T: 'static> {
	inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Clone + 'static> Signal<T> {
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(RefCell::new(Inner {
				value,
				subscribers: Vec::new(),
				next_id: 0,
			})),
		}
	}

	/// Get a clone of the current value.
	pub fn get(&self) -> T {
		self.inner.borrow().value.clone()
	}

	/// Read the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.borrow().value)
	}

	/// Replace the value and notify subscribers.
	pub fn set(&self, value: T) {
		self.inner.borrow_mut().value = value;
		self.notify();
	}

	/// Modify the value in place and notify subscribers once.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.inner.borrow_mut().value);
		self.notify();
	}

	/// Replace the value only if it differs, returning whether it changed
	///
	/// Subscribers are not called when the new value equals the old one.
	pub fn set_if_changed(&self, value: T) -> bool
	where
		T: PartialEq,
	{
		{
			let mut inner = self.inner.borrow_mut();
			if inner.value == value {
				return false;
			}
			inner.value = value;
		}
		self.notify();
		true
	}

	/// Register `callback` to run after every change.
	pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
		let mut inner = self.inner.borrow_mut();
		let id = SubscriptionId(inner.next_id);
		inner.next_id += 1;
		inner.subscribers.push((id, Rc::new(callback)));
		id
	}

	/// Remove a subscriber. Returns `false` if it was already gone.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut inner = self.inner.borrow_mut();
		let before = inner.subscribers.len();
		inner.subscribers.retain(|(existing, _)| *existing != id);
		inner.subscribers.len() != before
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner.borrow().subscribers.len()
	}

	// Callbacks run against a snapshot with no borrow held, so they may
	// read or write this signal.
	fn notify(&self) {
		let (value, subscribers) = {
			let inner = self.inner.borrow();
			let subscribers: Vec<Subscriber<T>> = inner
				.subscribers
				.iter()
				.map(|(_, callback)| Rc::clone(callback))
				.collect();
			(inner.value.clone(), subscribers)
		};
		for callback in subscribers {
			callback(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("Signal")
			.field("value", &inner.value)
			.field("subscribers", &inner.subscribers.len())
			.finish()
	}
}

impl<T: Clone + Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}
