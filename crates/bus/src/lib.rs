//! Typed, cancellable pre-action event bus.
//!
//! Events are emitted immediately before an action that cannot be undone. Every
//! event type owns one [`HandlerList`], and the [`EventBus`] resolves that list by
//! type when an event is emitted. Observers run synchronously in [`Priority`]
//! order and may veto the action through the event's [`Suppression`].
//!
//! ```ignore
//! let bus = EventBus::new(DispatchConfig::default());
//! bus.register::<PrePlayerAttackEntityEvent, _>(
//! 	ObserverOptions::new("spawn_protection").priority(Priority::High),
//! 	|event: &mut PrePlayerAttackEntityEvent| {
//! 		event.set_suppressed(true);
//! 		Ok(())
//! 	},
//! );
//!
//! let mut event = PrePlayerAttackEntityEvent::new(player, target, true);
//! if bus.emit_gate(&mut event).allows_action() {
//! 	// apply damage
//! }
//! ```
//!
//! # Feasibility lock
//!
//! A cancellable event built with `feasible == false` starts suppressed and
//! stays suppressed. Observers may still call `set_suppressed(false)`; the call
//! is silently ignored.

mod bus;
pub mod config;
pub mod error;
mod event;
mod handler_list;
mod observer;
mod priority;
mod suppression;

pub use bus::{EventBus, Gate};
pub use config::{DispatchConfig, FaultPolicy};
pub use error::{ConfigError, DispatchError, ObserverFault};
pub use event::{Cancellable, Event};
pub use handler_list::{HandlerList, Registration};
pub use observer::{Observer, ObserverId, ObserverOptions, ObserverResult};
pub use priority::Priority;
pub use suppression::Suppression;
