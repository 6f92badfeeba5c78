use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a handler registered with [`Callbacks::subscribe`]. Unique across every list, so an
/// owner of several lists can tell which one a given id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
	fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(0);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

/// An ordered list of handlers, all invoked synchronously by [`Callbacks::notify`].
///
/// Handlers are called in registration order. They only ever see a shared borrow of the input, so
/// they cannot reach back into whatever owns the list while it is notifying.
pub struct Callbacks<In: ?Sized> {
	handlers: Vec<(SubscriptionId, Box<dyn FnMut(&In)>)>,
}

impl<In: ?Sized> Default for Callbacks<In> {
	fn default() -> Self {
		Self {
			handlers: Vec::new(),
		}
	}
}

impl<In: ?Sized> fmt::Debug for Callbacks<In> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		fmt
			.debug_struct("Callbacks")
			.field("len", &self.len())
			.finish()
	}
}

impl<In: ?Sized> Callbacks<In> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&mut self, handler: impl FnMut(&In) + 'static) -> SubscriptionId {
		let id = SubscriptionId::next();
		self.handlers.push((id, Box::new(handler)));
		id
	}

	/// Returns whether a handler was removed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let len = self.handlers.len();
		self.handlers.retain(|(handler_id, _)| *handler_id != id);
		self.handlers.len() != len
	}

	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}

	pub fn notify(&mut self, input: &In) {
		for (_, handler) in self.handlers.iter_mut() {
			handler(input);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{cell::RefCell, rc::Rc};

	#[test]
	fn notifies_in_registration_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut callbacks = Callbacks::<str>::new();
		for name in ["a", "b", "c"] {
			let log = log.clone();
			callbacks.subscribe(move |input: &str| log.borrow_mut().push(format!("{name}:{input}")));
		}
		callbacks.notify("x");
		assert_eq!(*log.borrow(), ["a:x", "b:x", "c:x"]);
	}

	#[test]
	fn unsubscribe() {
		let count = Rc::new(RefCell::new(0u32));
		let mut callbacks = Callbacks::<u32>::new();
		let id = {
			let count = count.clone();
			callbacks.subscribe(move |n: &u32| *count.borrow_mut() += *n)
		};
		callbacks.notify(&2);
		assert!(callbacks.unsubscribe(id));
		assert!(!callbacks.unsubscribe(id));
		assert!(callbacks.is_empty());
		callbacks.notify(&2);
		assert_eq!(*count.borrow(), 2);
	}

	#[test]
	fn ids_are_not_shared_between_lists() {
		let mut first = Callbacks::<u32>::new();
		let mut second = Callbacks::<u32>::new();
		let a = first.subscribe(|_: &u32| {});
		let b = second.subscribe(|_: &u32| {});
		assert_ne!(a, b);
		assert!(!first.unsubscribe(b));
		assert!(!second.unsubscribe(a));
		assert_eq!(first.len(), 1);
		assert_eq!(second.len(), 1);
	}
}
