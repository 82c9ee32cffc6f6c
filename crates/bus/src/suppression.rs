//! Lockable cancellation state shared by every gate-style event.

/// Cancellation state of a pending action.
///
/// Combines a hard feasibility check made by the emitter before the event
/// exists with a soft, observer-controlled veto. When the action is not
/// feasible the state is locked to suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suppression {
	feasible: bool,
	suppressed: bool,
}

impl Suppression {
	/// Creates the state for an action; infeasible actions start suppressed.
	pub const fn new(feasible: bool) -> Self {
		Self {
			feasible,
			suppressed: !feasible,
		}
	}

	/// Shorthand for `Suppression::new(true)`.
	pub const fn feasible() -> Self {
		Self::new(true)
	}

	/// Whether the action is structurally possible at all.
	pub const fn is_feasible(&self) -> bool {
		self.feasible
	}

	pub const fn is_suppressed(&self) -> bool {
		self.suppressed
	}

	/// Sets the suppression flag.
	///
	/// Ignored when the action is infeasible. Callers that need to know whether
	/// the write took effect compare [`Self::is_suppressed`] before and after.
	pub fn set(&mut self, suppressed: bool) {
		if !self.feasible {
			return;
		}
		self.suppressed = suppressed;
	}
}

impl Default for Suppression {
	fn default() -> Self {
		Self::feasible()
	}
}
