use rstest::rstest;
use vigil_bus::{Cancellable, Event, ObserverFault, ObserverOptions, ObserverResult, Priority};

use super::*;
use crate::entity::{EntityId, EntityKind};
use crate::player::PlayerEvent;

fn steve() -> Arc<Player> {
	Arc::new(Player::new(EntityId(1), "Steve"))
}

fn target(kind: EntityKind) -> Arc<Entity> {
	Arc::new(Entity::new(EntityId(2), kind))
}

#[rstest]
#[case::zombie(EntityKind::Zombie, true)]
#[case::armor_stand(EntityKind::ArmorStand, true)]
#[case::item(EntityKind::Item, false)]
#[case::orb(EntityKind::ExperienceOrb, false)]
#[case::arrow(EntityKind::Arrow, false)]
#[case::falling_block(EntityKind::FallingBlock, false)]
fn test_feasibility_follows_entity_kind(#[case] kind: EntityKind, #[case] feasible: bool) {
	assert_eq!(attack_feasible(&steve(), &target(kind)), feasible);
}

#[test]
fn test_player_cannot_attack_itself() {
	let player = steve();
	assert!(!attack_feasible(&player, &player.as_entity()));
}

#[test]
fn test_event_exposes_subject_and_target() {
	let player = steve();
	let zombie = target(EntityKind::Zombie);
	let event = PrePlayerAttackEntityEvent::new(player.clone(), zombie.clone(), true);

	assert!(Arc::ptr_eq(event.player(), &player));
	assert!(Arc::ptr_eq(event.attacked(), &zombie));
	assert!(event.will_attack());
	assert!(!event.is_suppressed());
}

#[test]
fn test_unattackable_target_is_locked_suppressed() {
	let mut event = PrePlayerAttackEntityEvent::new(steve(), target(EntityKind::Item), false);
	assert!(event.is_suppressed());
	event.set_suppressed(false);
	assert!(event.is_suppressed());
	assert!(!event.will_attack());
}

#[test]
fn test_attack_proceeds_without_observers() {
	let bus = EventBus::default();
	let outcome = attack_entity(&bus, &steve(), &target(EntityKind::Zombie));
	assert!(matches!(outcome, AttackOutcome::Proceed));
	assert!(outcome.plays_feedback());
}

#[test]
fn test_attack_on_item_is_suppressed_even_when_observer_allows() {
	let bus = EventBus::default();
	bus.register(
		ObserverOptions::new("force_allow").priority(Priority::Highest),
		|event: &mut PrePlayerAttackEntityEvent| -> ObserverResult {
			event.set_suppressed(false);
			Ok(())
		},
	);

	let outcome = attack_entity(&bus, &steve(), &target(EntityKind::Item));
	assert!(matches!(outcome, AttackOutcome::Suppressed { will_attack: false }));
	assert!(!outcome.plays_feedback());
}

#[test]
fn test_observer_vetoes_attack() {
	let bus = EventBus::default();
	bus.register(
		ObserverOptions::new("protect_villagers"),
		|event: &mut PrePlayerAttackEntityEvent| -> ObserverResult {
			if event.attacked().kind == EntityKind::Villager {
				event.set_suppressed(true);
			}
			Ok(())
		},
	);

	let villager = attack_entity(&bus, &steve(), &target(EntityKind::Villager));
	assert!(matches!(villager, AttackOutcome::Suppressed { will_attack: true }));

	let zombie = attack_entity(&bus, &steve(), &target(EntityKind::Zombie));
	assert!(zombie.proceeds());
}

#[test]
fn test_faulted_attack_fails_safe() {
	let bus = EventBus::default();
	bus.register(
		ObserverOptions::new("broken"),
		|_: &mut PrePlayerAttackEntityEvent| -> ObserverResult { Err(ObserverFault::rejected("no region data")) },
	);

	let outcome = attack_entity(&bus, &steve(), &target(EntityKind::Zombie));
	match &outcome {
		AttackOutcome::Faulted { error, proceeds } => {
			assert!(!proceeds);
			assert_eq!(error.event(), PrePlayerAttackEntityEvent::NAME);
		}
		other => panic!("expected fault, got {other:?}"),
	}
	assert!(!outcome.plays_feedback());
}

#[test]
fn test_interaction_is_a_separate_registry() {
	let bus = EventBus::default();
	bus.register(
		ObserverOptions::new("no_trading"),
		|event: &mut PlayerInteractEntityEvent| -> ObserverResult {
			event.set_suppressed(event.hand() == Hand::Main);
			Ok(())
		},
	);

	let villager = target(EntityKind::Villager);
	assert!(!interact_entity(&bus, &steve(), &villager, Hand::Main));
	assert!(interact_entity(&bus, &steve(), &villager, Hand::Off));
	assert!(attack_entity(&bus, &steve(), &villager).proceeds());
}
