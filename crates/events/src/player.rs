use std::sync::Arc;

use uuid::Uuid;

use crate::entity::{Entity, EntityId, EntityKind};

/// A connected player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
	pub id: EntityId,
	pub uuid: Uuid,
	pub name: String,
}

impl Player {
	pub fn new(id: EntityId, name: impl Into<String>) -> Self {
		Self {
			id,
			uuid: Uuid::new_v4(),
			name: name.into(),
		}
	}

	/// The player viewed as an entity, e.g. as the target of another player's attack.
	pub fn as_entity(&self) -> Entity {
		Entity {
			id: self.id,
			uuid: self.uuid,
			kind: EntityKind::Player,
			custom_name: Some(self.name.clone()),
		}
	}
}

/// An event whose subject is a player.
pub trait PlayerEvent {
	fn player(&self) -> &Arc<Player>;
}
