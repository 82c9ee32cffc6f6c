use std::fmt;

use serde::{Deserialize, Serialize};

/// Invocation tier for an observer.
///
/// Tiers run in ascending order, so `Lowest` observers see the event first and
/// `Highest` observers get the final say. `Monitor` runs last and should only
/// read the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	Lowest,
	Low,
	#[default]
	Normal,
	High,
	Highest,
	Monitor,
}

impl Priority {
	pub const ALL: [Priority; 6] = [
		Priority::Lowest,
		Priority::Low,
		Priority::Normal,
		Priority::High,
		Priority::Highest,
		Priority::Monitor,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Priority::Lowest => "lowest",
			Priority::Low => "low",
			Priority::Normal => "normal",
			Priority::High => "high",
			Priority::Highest => "highest",
			Priority::Monitor => "monitor",
		}
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
