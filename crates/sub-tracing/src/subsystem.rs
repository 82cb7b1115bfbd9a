// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{LogFormat, TracingConfig, TracingError};

/// A configured, not yet installed, subscriber.
#[derive(Debug, Clone)]
pub struct TracingSubsystem {
	config: TracingConfig,
}

impl TracingSubsystem {
	pub fn new(config: TracingConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &TracingConfig {
		&self.config
	}

	pub fn filter(&self) -> Result<EnvFilter, TracingError> {
		if self.config.env_override {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return Ok(filter);
			}
		}

		EnvFilter::try_new(&self.config.level).map_err(|err| TracingError::InvalidFilter {
			filter: self.config.level.clone(),
			reason: err.to_string(),
		})
	}

	/// Installs the subscriber writing to stderr.
	///
	/// Returns `false` when a global subscriber was already installed, which leaves that one in place.
	pub fn init(&self) -> Result<bool, TracingError> {
		let filter = self.filter()?;
		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.with_ansi(self.config.ansi)
			.with_target(true);

		let installed = match self.config.format {
			LogFormat::Pretty => builder.pretty().try_init().is_ok(),
			LogFormat::Compact => builder.compact().try_init().is_ok(),
			LogFormat::Json => builder.json().try_init().is_ok(),
		};

		if installed {
			debug!(level = %self.config.level, format = ?self.config.format, "tracing initialized");
		}
		Ok(installed)
	}
}
