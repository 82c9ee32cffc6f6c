//! Event traits and the macros that implement them.

use crate::Suppression;

/// A notification type that can be emitted on an [`crate::EventBus`].
///
/// Each implementing type owns exactly one handler list per bus, keyed by its
/// [`std::any::TypeId`].
pub trait Event: Send + Sync + 'static {
	/// Stable name used in logs and errors (e.g. `"player:pre-attack-entity"`).
	const NAME: &'static str;

	/// The event's suppression state, or `None` if it cannot be cancelled.
	///
	/// [`Cancellable`] types must return the same value their
	/// [`Cancellable::suppression`] does.
	fn cancellation(&self) -> Option<&Suppression>;
}

/// An event whose action observers may veto.
///
/// Implementations expose a single [`Suppression`] so the feasibility lock is
/// enforced in one place rather than per event type.
pub trait Cancellable: Event {
	fn suppression(&self) -> &Suppression;

	fn suppression_mut(&mut self) -> &mut Suppression;

	/// Whether the described action is currently suppressed.
	fn is_suppressed(&self) -> bool {
		self.suppression().is_suppressed()
	}

	/// Whether the action is structurally possible regardless of observers.
	fn is_feasible(&self) -> bool {
		self.suppression().is_feasible()
	}

	/// Suppresses or releases the action. A no-op on infeasible events.
	fn set_suppressed(&mut self, suppressed: bool) {
		self.suppression_mut().set(suppressed);
	}
}

/// Implements [`Event`] for a type that cannot be cancelled.
#[macro_export]
macro_rules! impl_event {
	($type:ty, $name:literal) => {
		impl $crate::Event for $type {
			const NAME: &'static str = $name;

			fn cancellation(&self) -> Option<&$crate::Suppression> {
				None
			}
		}
	};
}

/// Implements [`Event`] and [`Cancellable`] for a type with a [`Suppression`] field.
#[macro_export]
macro_rules! impl_cancellable_event {
	($type:ty, $name:literal, $field:ident) => {
		impl $crate::Event for $type {
			const NAME: &'static str = $name;

			fn cancellation(&self) -> Option<&$crate::Suppression> {
				Some(&self.$field)
			}
		}

		impl $crate::Cancellable for $type {
			fn suppression(&self) -> &$crate::Suppression {
				&self.$field
			}

			fn suppression_mut(&mut self) -> &mut $crate::Suppression {
				&mut self.$field
			}
		}
	};
}
