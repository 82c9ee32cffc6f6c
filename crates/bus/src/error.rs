//! Error types for dispatch and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::Priority;

/// Failure raised by an observer while handling an event.
#[derive(Debug, Error)]
pub enum ObserverFault {
	/// The observer refused to continue, with a reason.
	#[error("{0}")]
	Rejected(String),

	/// An error from the observer's own collaborators.
	#[error(transparent)]
	Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ObserverFault {
	pub fn rejected(reason: impl Into<String>) -> Self {
		Self::Rejected(reason.into())
	}

	pub fn from_error<E>(error: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self::Source(Box::new(error))
	}
}

/// Errors that abort an emission.
#[derive(Debug, Error)]
pub enum DispatchError {
	/// An observer faulted; observers after it were not invoked.
	#[error("observer '{observer}' ({priority}) failed handling {event}: {source}")]
	Observer {
		/// Name of the event being dispatched.
		event: &'static str,
		/// Name of the faulting observer.
		observer: Box<str>,
		/// Tier the observer was registered at.
		priority: Priority,
		/// The fault the observer returned.
		#[source]
		source: ObserverFault,
	},

	/// Emission was nested deeper than the configured limit.
	#[error("nested emission of {event} at depth {depth} exceeds limit {limit}")]
	NestingTooDeep {
		/// Name of the event that was rejected.
		event: &'static str,
		/// Depth the emission would have run at.
		depth: usize,
		/// Configured maximum depth.
		limit: usize,
	},
}

impl DispatchError {
	/// Name of the event whose dispatch failed.
	pub fn event(&self) -> &'static str {
		match self {
			Self::Observer { event, .. } | Self::NestingTooDeep { event, .. } => event,
		}
	}
}

/// Errors that can occur when loading dispatch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}
