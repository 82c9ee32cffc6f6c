//! Minimal entity handles carried by events.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Runtime id of an entity within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub i32);

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	Player,
	Zombie,
	Skeleton,
	Creeper,
	Villager,
	Cow,
	ArmorStand,
	ItemFrame,
	EndCrystal,
	Item,
	ExperienceOrb,
	Arrow,
	Trident,
	FallingBlock,
	Marker,
}

impl EntityKind {
	/// Whether entities of this kind can be hit at all.
	///
	/// Dropped items, orbs, projectiles, falling blocks and markers never take
	/// attack interactions.
	pub const fn is_attackable(self) -> bool {
		!matches!(
			self,
			EntityKind::Item
				| EntityKind::ExperienceOrb
				| EntityKind::Arrow
				| EntityKind::Trident
				| EntityKind::FallingBlock
				| EntityKind::Marker
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
	pub id: EntityId,
	pub uuid: Uuid,
	pub kind: EntityKind,
	pub custom_name: Option<String>,
}

impl Entity {
	pub fn new(id: EntityId, kind: EntityKind) -> Self {
		Self {
			id,
			uuid: Uuid::new_v4(),
			kind,
			custom_name: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.custom_name = Some(name.into());
		self
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.custom_name {
			Some(name) => write!(f, "{} '{}' {}", self.kind, name, self.id),
			None => write!(f, "{} {}", self.kind, self.id),
		}
	}
}
