//! Per-event-type observer registry.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;

use crate::{Observer, ObserverId, ObserverOptions, Priority};

/// A registered observer together with its options.
pub struct Registration<E> {
	id: ObserverId,
	options: ObserverOptions,
	observer: Arc<dyn Observer<E>>,
}

impl<E> Registration<E> {
	pub fn id(&self) -> ObserverId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.options.name
	}

	pub fn owner(&self) -> Option<&str> {
		self.options.owner.as_deref()
	}

	pub fn priority(&self) -> Priority {
		self.options.priority
	}

	pub fn ignores_suppressed(&self) -> bool {
		self.options.ignore_suppressed
	}

	pub fn observer(&self) -> &Arc<dyn Observer<E>> {
		&self.observer
	}

	fn order_key(&self) -> (Priority, ObserverId) {
		(self.options.priority, self.id)
	}
}

impl<E> fmt::Debug for Registration<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registration")
			.field("id", &self.id)
			.field("name", &self.options.name)
			.field("owner", &self.options.owner)
			.field("priority", &self.options.priority)
			.field("ignore_suppressed", &self.options.ignore_suppressed)
			.finish()
	}
}

pub type Snapshot<E> = Arc<Vec<Arc<Registration<E>>>>;

/// Ordered observers for one event type.
///
/// Entries are kept sorted by priority tier, then by registration order.
/// Readers take a copy-on-write snapshot; writers clone the current list,
/// modify it and publish it with a compare-and-swap, retrying on contention.
pub struct HandlerList<E> {
	snap: ArcSwap<Vec<Arc<Registration<E>>>>,
	ids: Arc<AtomicU64>,
}

impl<E> Default for HandlerList<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> HandlerList<E> {
	pub fn new() -> Self {
		Self::with_id_source(Arc::new(AtomicU64::new(0)))
	}

	/// Creates a list drawing ids from a counter shared with sibling lists.
	pub(crate) fn with_id_source(ids: Arc<AtomicU64>) -> Self {
		Self {
			snap: ArcSwap::from_pointee(Vec::new()),
			ids,
		}
	}

	/// Adds an observer. Registering the same observer twice invokes it twice.
	pub fn register(&self, options: ObserverOptions, observer: Arc<dyn Observer<E>>) -> ObserverId {
		let id = ObserverId(self.ids.fetch_add(1, Ordering::Relaxed));
		let entry = Arc::new(Registration { id, options, observer });

		self.update(|entries| {
			let key = entry.order_key();
			let pos = entries.partition_point(|existing| existing.order_key() < key);
			entries.insert(pos, entry.clone());
		});

		tracing::trace!(
			observer = entry.name(),
			priority = %entry.priority(),
			%id,
			"observer.register"
		);
		id
	}

	/// Removes every registration of `observer`. Returns the number removed.
	pub fn unregister(&self, observer: &Arc<dyn Observer<E>>) -> usize {
		self.remove_where(|entry| Arc::ptr_eq(&entry.observer, observer))
	}

	/// Removes a single registration. Returns whether it was present.
	pub fn unregister_id(&self, id: ObserverId) -> bool {
		self.remove_where(|entry| entry.id == id) > 0
	}

	/// Removes every registration tagged with `owner`.
	pub fn unregister_owner(&self, owner: &str) -> usize {
		self.remove_where(|entry| entry.owner() == Some(owner))
	}

	pub fn clear(&self) -> usize {
		self.remove_where(|_| true)
	}

	/// Returns the current entries in invocation order.
	pub fn snapshot(&self) -> Snapshot<E> {
		self.snap.load_full()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	fn remove_where(&self, matches: impl Fn(&Registration<E>) -> bool) -> usize {
		if !self.snap.load().iter().any(|entry| matches(entry.as_ref())) {
			return 0;
		}

		self.update(|entries| {
			let before = entries.len();
			entries.retain(|entry| !matches(entry.as_ref()));
			before - entries.len()
		})
	}

	fn update<R>(&self, apply: impl Fn(&mut Vec<Arc<Registration<E>>>) -> R) -> R {
		loop {
			let cur = self.snap.load_full();
			let mut next = (*cur).clone();
			let result = apply(&mut next);

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return result;
			}
		}
	}
}

impl<E> fmt::Debug for HandlerList<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.snap.load().iter()).finish()
	}
}

#[cfg(test)]
mod tests;
