mod cli;
mod config;
mod policy;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use config::SimConfig;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;
use vigil_bus::EventBus;
use vigil_events::{AttackOutcome, Entity, EntityId, EntityKind, Player, attack_entity};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => SimConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
		None => SimConfig::default(),
	};

	match cli.command {
		Command::Attack {
			kind,
			player,
			self_target,
		} => {
			let bus = EventBus::new(config.dispatch.clone());
			policy::install(&bus, &config.policy);

			let player = Arc::new(Player::new(EntityId(1), player));
			let target = if self_target {
				Arc::new(player.as_entity())
			} else {
				Arc::new(Entity::new(EntityId(2), kind))
			};

			let outcome = attack_entity(&bus, &player, &target);
			println!("{}", describe(&outcome));
			if let AttackOutcome::Faulted { error, .. } = outcome {
				return Err(error.into());
			}
		}
		Command::Kinds => {
			for kind in EntityKind::iter() {
				let verdict = if kind.is_attackable() { "attackable" } else { "never attacked" };
				println!("{kind:<16} {verdict}");
			}
		}
	}

	Ok(())
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn describe(outcome: &AttackOutcome) -> &'static str {
	match outcome {
		AttackOutcome::Proceed => "attack proceeds",
		AttackOutcome::Suppressed { will_attack: false } => "attack impossible: target cannot be attacked",
		AttackOutcome::Suppressed { will_attack: true } => "attack cancelled by an observer",
		AttackOutcome::Faulted { proceeds: true, .. } => "observer failed; attack proceeds",
		AttackOutcome::Faulted { proceeds: false, .. } => "observer failed; attack cancelled",
	}
}
