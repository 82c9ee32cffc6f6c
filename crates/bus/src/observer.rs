//! Observer trait and registration options.

use std::fmt;

use crate::{ObserverFault, Priority};

pub type ObserverResult = Result<(), ObserverFault>;

/// A callback invoked when an event of type `E` is emitted.
///
/// Returning `Err` aborts the dispatch; observers after this one are skipped
/// and the fault propagates to the emitter.
pub trait Observer<E>: Send + Sync {
	fn observe(&self, event: &mut E) -> ObserverResult;
}

impl<E, F> Observer<E> for F
where
	F: Fn(&mut E) -> ObserverResult + Send + Sync,
{
	fn observe(&self, event: &mut E) -> ObserverResult {
		self(event)
	}
}

/// Identifier of a single registration, unique within one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(crate) u64);

impl fmt::Display for ObserverId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "observer#{}", self.0)
	}
}

/// How an observer is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverOptions {
	/// Name used in logs and errors.
	pub name: Box<str>,
	/// Owning plugin or subsystem, for bulk unregistration.
	pub owner: Option<Box<str>>,
	pub priority: Priority,
	/// Skip this observer when the event is already suppressed.
	pub ignore_suppressed: bool,
}

impl ObserverOptions {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			owner: None,
			priority: Priority::Normal,
			ignore_suppressed: false,
		}
	}

	pub fn priority(mut self, priority: Priority) -> Self {
		self.priority = priority;
		self
	}

	pub fn owner(mut self, owner: impl Into<Box<str>>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	pub fn ignore_suppressed(mut self) -> Self {
		self.ignore_suppressed = true;
		self
	}
}
