// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{LogFormat, TracingConfig, TracingSubsystem};

#[derive(Debug, Clone, Default)]
pub struct TracingBuilder {
	config: TracingConfig,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: TracingConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.config.level = level.into();
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.config.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.config.ansi = ansi;
		self
	}

	pub fn with_env_override(mut self, env_override: bool) -> Self {
		self.config.env_override = env_override;
		self
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem::new(self.config)
	}
}
