//! Emitting side of the attack and interaction gates.

use std::sync::Arc;

use vigil_bus::{DispatchError, EventBus, Gate};

use crate::attack::PrePlayerAttackEntityEvent;
use crate::entity::Entity;
use crate::interact::{Hand, PlayerInteractEntityEvent};
use crate::player::Player;

/// What the caller of [`attack_entity`] should do with the attack.
#[derive(Debug)]
#[must_use]
pub enum AttackOutcome {
	/// Run damage logic and play attack feedback.
	Proceed,
	/// Skip the attack and all of its feedback.
	Suppressed {
		/// Whether the target could have been attacked at all.
		will_attack: bool,
	},
	/// An observer failed; `proceeds` carries the bus's fault policy verdict.
	Faulted { error: DispatchError, proceeds: bool },
}

impl AttackOutcome {
	pub fn proceeds(&self) -> bool {
		match self {
			AttackOutcome::Proceed => true,
			AttackOutcome::Suppressed { .. } => false,
			AttackOutcome::Faulted { proceeds, .. } => *proceeds,
		}
	}

	/// Whether swing sounds and particles should play.
	pub fn plays_feedback(&self) -> bool {
		self.proceeds()
	}
}

/// Whether `player` can attack `target` at all, before any observer runs.
pub fn attack_feasible(player: &Player, target: &Entity) -> bool {
	target.kind.is_attackable() && target.id != player.id
}

/// Emits [`PrePlayerAttackEntityEvent`] for an attack and reports the verdict.
pub fn attack_entity(bus: &EventBus, player: &Arc<Player>, target: &Arc<Entity>) -> AttackOutcome {
	let will_attack = attack_feasible(player, target);
	let mut event = PrePlayerAttackEntityEvent::new(player.clone(), target.clone(), will_attack);

	match bus.emit_gate(&mut event) {
		Gate::Proceed => {
			tracing::debug!(player = %player.name, entity = %target, "attack.proceed");
			AttackOutcome::Proceed
		}
		Gate::Suppressed => {
			tracing::debug!(player = %player.name, entity = %target, will_attack, "attack.suppressed");
			AttackOutcome::Suppressed { will_attack }
		}
		Gate::Faulted { error, allows_action } => {
			tracing::error!(
				player = %player.name,
				entity = %target,
				proceeds = allows_action,
				%error,
				"attack.faulted"
			);
			AttackOutcome::Faulted {
				error,
				proceeds: allows_action,
			}
		}
	}
}

/// Emits [`PlayerInteractEntityEvent`] and returns whether the interaction runs.
pub fn interact_entity(bus: &EventBus, player: &Arc<Player>, target: &Arc<Entity>, hand: Hand) -> bool {
	let mut event = PlayerInteractEntityEvent::new(player.clone(), target.clone(), hand);
	let gate = bus.emit_gate(&mut event);
	if let Some(error) = gate.error() {
		tracing::error!(player = %player.name, entity = %target, %error, "interact.faulted");
	}
	gate.allows_action()
}

#[cfg(test)]
mod tests;
