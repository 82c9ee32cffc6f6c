use std::sync::Arc;

use vigil_bus::Suppression;

use crate::entity::Entity;
use crate::player::{Player, PlayerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
	Main,
	Off,
}

/// Fired when a player right-clicks an entity.
///
/// Always feasible; observers may cancel it.
#[derive(Debug, Clone)]
pub struct PlayerInteractEntityEvent {
	player: Arc<Player>,
	target: Arc<Entity>,
	hand: Hand,
	suppression: Suppression,
}

vigil_bus::impl_cancellable_event!(PlayerInteractEntityEvent, "player:interact-entity", suppression);

impl PlayerInteractEntityEvent {
	pub fn new(player: Arc<Player>, target: Arc<Entity>, hand: Hand) -> Self {
		Self {
			player,
			target,
			hand,
			suppression: Suppression::feasible(),
		}
	}

	pub fn target(&self) -> &Arc<Entity> {
		&self.target
	}

	pub fn hand(&self) -> Hand {
		self.hand
	}
}

impl PlayerEvent for PlayerInteractEntityEvent {
	fn player(&self) -> &Arc<Player> {
		&self.player
	}
}
