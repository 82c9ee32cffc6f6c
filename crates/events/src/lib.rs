//! Player and entity events emitted on a [`vigil_bus::EventBus`].
//!
//! [`combat::attack_entity`] is the emitting side of
//! [`PrePlayerAttackEntityEvent`]: it decides whether the attack is possible at
//! all, lets observers veto it, and reports what the caller should do next.

pub mod attack;
pub mod combat;
pub mod entity;
pub mod interact;
pub mod player;

pub use attack::PrePlayerAttackEntityEvent;
pub use combat::{AttackOutcome, attack_entity, attack_feasible, interact_entity};
pub use entity::{Entity, EntityId, EntityKind};
pub use interact::{Hand, PlayerInteractEntityEvent};
pub use player::{Player, PlayerEvent};
