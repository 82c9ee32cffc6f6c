use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vigil_events::EntityKind;

#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(about = "Run player attacks through the pre-attack event gate")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// TOML file with `[dispatch]` and `[policy]` tables
	#[arg(long, short = 'c')]
	pub config: Option<PathBuf>,

	/// Log dispatch details (overridden by RUST_LOG)
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Attack an entity of the given kind (e.g. zombie, villager, item)
	Attack {
		/// Kind of entity to attack.
		kind: EntityKind,

		/// Name of the attacking player
		#[arg(long, default_value = "Steve")]
		player: String,

		/// Target the attacking player itself
		#[arg(long)]
		self_target: bool,
	},
	/// List entity kinds and whether they can be attacked
	Kinds,
}
