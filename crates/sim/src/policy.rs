//! Built-in observers driven by [`PolicyConfig`].

use vigil_bus::{Cancellable, EventBus, ObserverOptions, ObserverResult, Priority};
use vigil_events::{EntityKind, PlayerEvent, PrePlayerAttackEntityEvent};

use crate::config::PolicyConfig;

pub const OWNER: &str = "policy";

/// Registers the observers `policy` asks for. Returns how many were added.
pub fn install(bus: &EventBus, policy: &PolicyConfig) -> usize {
	let mut installed = 0;

	if !policy.pvp {
		bus.register(
			ObserverOptions::new("pvp_guard").owner(OWNER).ignore_suppressed(),
			|event: &mut PrePlayerAttackEntityEvent| -> ObserverResult {
				if event.attacked().kind == EntityKind::Player {
					event.set_suppressed(true);
				}
				Ok(())
			},
		);
		installed += 1;
	}

	if !policy.protected.is_empty() {
		let protected = policy.protected.clone();
		bus.register(
			ObserverOptions::new("protection").owner(OWNER).priority(policy.protect_priority),
			move |event: &mut PrePlayerAttackEntityEvent| -> ObserverResult {
				if protected.contains(&event.attacked().kind) {
					event.set_suppressed(true);
				}
				Ok(())
			},
		);
		installed += 1;
	}

	if policy.audit {
		bus.register(
			ObserverOptions::new("audit").owner(OWNER).priority(Priority::Monitor),
			|event: &mut PrePlayerAttackEntityEvent| -> ObserverResult {
				tracing::info!(
					player = %event.player().name,
					entity = %event.attacked(),
					will_attack = event.will_attack(),
					suppressed = event.is_suppressed(),
					"attack.audit"
				);
				Ok(())
			},
		);
		installed += 1;
	}

	tracing::debug!(installed, "policy.install");
	installed
}
