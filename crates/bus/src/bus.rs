//! Type-indexed event bus and synchronous dispatch.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::{
	Cancellable, DispatchConfig, DispatchError, Event, FaultPolicy, HandlerList, Observer, ObserverId,
	ObserverOptions, Suppression,
};

/// Type-erased operations over a [`HandlerList`] of any event type.
trait ErasedList: Send + Sync {
	fn event_name(&self) -> &'static str;
	fn len(&self) -> usize;
	fn unregister_id(&self, id: ObserverId) -> bool;
	fn unregister_owner(&self, owner: &str) -> usize;
	fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<E: Event> ErasedList for HandlerList<E> {
	fn event_name(&self) -> &'static str {
		E::NAME
	}

	fn len(&self) -> usize {
		HandlerList::len(self)
	}

	fn unregister_id(&self, id: ObserverId) -> bool {
		HandlerList::unregister_id(self, id)
	}

	fn unregister_owner(&self, owner: &str) -> usize {
		HandlerList::unregister_owner(self, owner)
	}

	fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
		self
	}
}

static NEXT_BUS_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
	/// Emissions currently running on this thread, keyed by bus.
	static ACTIVE_EMISSIONS: RefCell<HashMap<u64, usize>> = RefCell::new(HashMap::default());
}

struct NestingGuard {
	bus: u64,
}

impl NestingGuard {
	fn enter(bus: u64, event: &'static str, limit: usize) -> Result<Self, DispatchError> {
		ACTIVE_EMISSIONS.with_borrow_mut(|active| {
			let depth = active.get(&bus).copied().unwrap_or(0);
			if depth > limit {
				tracing::warn!(event, depth, limit, "event.nesting_rejected");
				return Err(DispatchError::NestingTooDeep { event, depth, limit });
			}
			active.insert(bus, depth + 1);
			Ok(Self { bus })
		})
	}
}

impl Drop for NestingGuard {
	fn drop(&mut self) {
		ACTIVE_EMISSIONS.with_borrow_mut(|active| {
			if let Some(depth) = active.get_mut(&self.bus) {
				*depth -= 1;
				if *depth == 0 {
					active.remove(&self.bus);
				}
			}
		});
	}
}

/// Verdict of [`EventBus::emit_gate`].
#[derive(Debug)]
#[must_use]
pub enum Gate {
	/// Dispatch completed and the action is not suppressed.
	Proceed,
	/// Dispatch completed and the action is suppressed.
	Suppressed,
	/// An observer aborted the dispatch.
	Faulted {
		error: DispatchError,
		/// Whether the action may still proceed under the bus's [`FaultPolicy`].
		allows_action: bool,
	},
}

impl Gate {
	pub fn allows_action(&self) -> bool {
		match self {
			Gate::Proceed => true,
			Gate::Suppressed => false,
			Gate::Faulted { allows_action, .. } => *allows_action,
		}
	}

	pub fn error(&self) -> Option<&DispatchError> {
		match self {
			Gate::Faulted { error, .. } => Some(error),
			_ => None,
		}
	}

	pub fn into_error(self) -> Option<DispatchError> {
		match self {
			Gate::Faulted { error, .. } => Some(error),
			_ => None,
		}
	}
}

/// Registry of observers for every event type, plus the dispatcher.
///
/// Each event type gets one [`HandlerList`], created on first use and kept for
/// the lifetime of the bus. The bus is an ordinary value: the embedding process
/// builds one at startup and hands out references to it.
pub struct EventBus {
	id: u64,
	lists: RwLock<HashMap<TypeId, Arc<dyn ErasedList>>>,
	ids: Arc<AtomicU64>,
	config: DispatchConfig,
}

impl Default for EventBus {
	fn default() -> Self {
		Self::new(DispatchConfig::default())
	}
}

impl EventBus {
	pub fn new(config: DispatchConfig) -> Self {
		Self {
			id: NEXT_BUS_ID.fetch_add(1, Ordering::Relaxed),
			lists: RwLock::new(HashMap::default()),
			ids: Arc::new(AtomicU64::new(0)),
			config,
		}
	}

	pub fn config(&self) -> &DispatchConfig {
		&self.config
	}

	/// Returns the handler list for `E`, creating it on first use.
	pub fn handlers<E: Event>(&self) -> Arc<HandlerList<E>> {
		if let Some(list) = self.existing::<E>() {
			return list;
		}

		let mut lists = self.lists.write();
		if let Some(list) = lists.get(&TypeId::of::<E>()).and_then(|list| list.clone().into_any().downcast::<HandlerList<E>>().ok()) {
			return list;
		}
		let list = Arc::new(HandlerList::<E>::with_id_source(self.ids.clone()));
		lists.insert(TypeId::of::<E>(), list.clone());
		tracing::debug!(event = E::NAME, "event.registry_created");
		list
	}

	fn existing<E: Event>(&self) -> Option<Arc<HandlerList<E>>> {
		let list = self.lists.read().get(&TypeId::of::<E>())?.clone();
		list.into_any().downcast::<HandlerList<E>>().ok()
	}

	pub fn register<E, O>(&self, options: ObserverOptions, observer: O) -> ObserverId
	where
		E: Event,
		O: Observer<E> + 'static,
	{
		self.register_shared(options, Arc::new(observer))
	}

	/// Registers an observer the caller keeps a handle to, for later [`Self::unregister`].
	pub fn register_shared<E: Event>(&self, options: ObserverOptions, observer: Arc<dyn Observer<E>>) -> ObserverId {
		self.handlers::<E>().register(options, observer)
	}

	/// Removes every registration of `observer` for `E`. Returns the number removed.
	pub fn unregister<E: Event>(&self, observer: &Arc<dyn Observer<E>>) -> usize {
		self.existing::<E>().map_or(0, |list| list.unregister(observer))
	}

	/// Removes a registration by id, whatever event type it belongs to.
	pub fn unregister_id(&self, id: ObserverId) -> bool {
		self.lists.read().values().any(|list| list.unregister_id(id))
	}

	/// Removes every registration tagged with `owner` across all event types.
	pub fn unregister_owner(&self, owner: &str) -> usize {
		let removed: usize = self.lists.read().values().map(|list| list.unregister_owner(owner)).sum();
		if removed > 0 {
			tracing::debug!(owner, removed, "observer.unregister_owner");
		}
		removed
	}

	pub fn clear<E: Event>(&self) -> usize {
		self.existing::<E>().map_or(0, |list| list.clear())
	}

	pub fn observer_count<E: Event>(&self) -> usize {
		self.existing::<E>().map_or(0, |list| list.len())
	}

	/// Names and observer counts of every event type seen by this bus, sorted by name.
	pub fn registered_events(&self) -> Vec<(&'static str, usize)> {
		let mut events: Vec<_> = self.lists.read().values().map(|list| (list.event_name(), list.len())).collect();
		events.sort_unstable();
		events
	}

	/// Dispatches `event` to every observer of `E`.
	///
	/// Observers run on the calling thread in priority order, each seeing the
	/// changes made by the ones before it. Observers registered with
	/// `ignore_suppressed` are skipped while [`Event::cancellation`] reports the
	/// event suppressed. The first observer fault stops the dispatch and is
	/// returned; the event keeps whatever state it had at that point.
	pub fn emit<E: Event>(&self, event: &mut E) -> Result<(), DispatchError> {
		self.dispatch(event, |event| event.cancellation().is_some_and(Suppression::is_suppressed))
	}

	/// Dispatches a cancellable event and reports whether its action may run.
	///
	/// Both the `ignore_suppressed` skip and the verdict read
	/// [`Cancellable::suppression`].
	pub fn emit_gate<E: Cancellable>(&self, event: &mut E) -> Gate {
		let result = self.dispatch(event, |event| event.is_suppressed());
		let suppressed = event.is_suppressed();
		match result {
			Ok(()) if suppressed => Gate::Suppressed,
			Ok(()) => Gate::Proceed,
			Err(error) => Gate::Faulted {
				error,
				allows_action: self.config.fault_policy == FaultPolicy::Inspect && !suppressed,
			},
		}
	}

	fn dispatch<E: Event>(&self, event: &mut E, is_suppressed: impl Fn(&E) -> bool) -> Result<(), DispatchError> {
		let _guard = NestingGuard::enter(self.id, E::NAME, self.config.max_nesting_depth)?;

		let Some(list) = self.existing::<E>() else {
			return Ok(());
		};
		let entries = list.snapshot();
		let slow_threshold = self.config.slow_observer_threshold();

		for entry in entries.iter() {
			if entry.ignores_suppressed() && is_suppressed(&*event) {
				tracing::trace!(event = E::NAME, observer = entry.name(), "observer.skip_suppressed");
				continue;
			}

			let started = Instant::now();
			let result = entry.observer().observe(event);
			let elapsed = started.elapsed();

			tracing::trace!(
				event = E::NAME,
				observer = entry.name(),
				priority = %entry.priority(),
				suppressed = is_suppressed(&*event),
				elapsed_us = elapsed.as_micros() as u64,
				"observer.invoke"
			);
			if let Some(threshold) = slow_threshold
				&& elapsed > threshold
			{
				tracing::warn!(
					event = E::NAME,
					observer = entry.name(),
					elapsed_ms = elapsed.as_millis() as u64,
					threshold_ms = threshold.as_millis() as u64,
					"observer.slow"
				);
			}

			if let Err(source) = result {
				tracing::warn!(
					event = E::NAME,
					observer = entry.name(),
					priority = %entry.priority(),
					error = %source,
					"observer.fault"
				);
				return Err(DispatchError::Observer {
					event: E::NAME,
					observer: entry.name().into(),
					priority: entry.priority(),
					source,
				});
			}
		}

		tracing::debug!(
			event = E::NAME,
			observers = entries.len(),
			suppressed = is_suppressed(&*event),
			"event.dispatch"
		);
		Ok(())
	}
}

impl fmt::Debug for EventBus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventBus")
			.field("config", &self.config)
			.field("events", &self.registered_events())
			.finish()
	}
}
