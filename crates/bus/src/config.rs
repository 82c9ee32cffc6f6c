//! Dispatch configuration.
//!
//! Loaded from TOML; every field has a default, so an empty document is valid:
//!
//! ```toml
//! slow_observer_ms = 5
//! max_nesting_depth = 16
//! fault_policy = "suppress"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How [`crate::Gate`] treats a dispatch that an observer aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
	/// A faulted dispatch never allows the action.
	#[default]
	Suppress,
	/// Defer to the event's suppression state at the point of the fault.
	Inspect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
	/// Observers running longer than this are logged at `warn`.
	pub slow_observer_ms: Option<u64>,
	/// Maximum depth of emissions of one bus nested inside its own observers on
	/// one thread. Emissions on other buses do not count.
	pub max_nesting_depth: usize,
	pub fault_policy: FaultPolicy,
}

impl Default for DispatchConfig {
	fn default() -> Self {
		Self {
			slow_observer_ms: None,
			max_nesting_depth: 16,
			fault_policy: FaultPolicy::Suppress,
		}
	}
}

impl DispatchConfig {
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

	pub fn slow_observer_threshold(&self) -> Option<Duration> {
		self.slow_observer_ms.map(Duration::from_millis)
	}
}

#[cfg(test)]
mod tests;
