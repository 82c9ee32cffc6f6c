//! Driver configuration.
//!
//! ```toml
//! [dispatch]
//! slow_observer_ms = 5
//!
//! [policy]
//! pvp = false
//! protected = ["villager", "armor_stand"]
//! protect_priority = "high"
//! audit = true
//! ```

use std::path::Path;

use serde::Deserialize;
use vigil_bus::{ConfigError, DispatchConfig, Priority};
use vigil_events::EntityKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
	pub dispatch: DispatchConfig,
	pub policy: PolicyConfig,
}

/// Which attacks the built-in observers veto.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
	/// Allow players to attack other players.
	pub pvp: bool,
	/// Entity kinds no player may attack.
	pub protected: Vec<EntityKind>,
	/// Tier the protection observer runs at.
	pub protect_priority: Priority,
	/// Log every attack decision from a monitor observer.
	pub audit: bool,
}

impl Default for PolicyConfig {
	fn default() -> Self {
		Self {
			pvp: true,
			protected: Vec::new(),
			protect_priority: Priority::Normal,
			audit: true,
		}
	}
}

impl SimConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}
}
