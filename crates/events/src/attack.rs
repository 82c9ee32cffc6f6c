use std::sync::Arc;

use vigil_bus::Suppression;

use crate::entity::Entity;
use crate::player::{Player, PlayerEvent};

/// Fired when a player tries to attack an entity, before any damage logic.
///
/// Suppressing it also prevents attack sounds and effects. Events for entities
/// that cannot be attacked (items, projectiles, falling blocks) fire already
/// suppressed with [`Self::will_attack`] returning `false`, and stay suppressed
/// whatever observers do.
///
/// Other factors (invulnerability, game mode) may still stop the attack later;
/// this event does not cover them.
#[derive(Debug, Clone)]
pub struct PrePlayerAttackEntityEvent {
	player: Arc<Player>,
	attacked: Arc<Entity>,
	suppression: Suppression,
}

vigil_bus::impl_cancellable_event!(PrePlayerAttackEntityEvent, "player:pre-attack-entity", suppression);

impl PrePlayerAttackEntityEvent {
	pub fn new(player: Arc<Player>, attacked: Arc<Entity>, will_attack: bool) -> Self {
		Self {
			player,
			attacked,
			suppression: Suppression::new(will_attack),
		}
	}

	/// The entity being attacked.
	pub fn attacked(&self) -> &Arc<Entity> {
		&self.attacked
	}

	/// Whether the entity would be attacked if no observer intervenes.
	pub fn will_attack(&self) -> bool {
		self.suppression.is_feasible()
	}
}

impl PlayerEvent for PrePlayerAttackEntityEvent {
	fn player(&self) -> &Arc<Player> {
		&self.player
	}
}
