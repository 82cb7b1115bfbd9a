// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{TracingBuilder, TracingConfig, TracingSubsystem};

/// Configuration function for the tracing subsystem
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Creates a [`TracingSubsystem`] when the database that owns it is built.
pub struct TracingSubsystemFactory {
	config: TracingConfig,
	configurator: Option<TracingConfigurator>,
}

impl TracingSubsystemFactory {
	pub fn new() -> Self {
		Self::from_config(TracingConfig::default())
	}

	pub fn from_config(config: TracingConfig) -> Self {
		Self {
			config,
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator applied on top of the defaults
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			config: TracingConfig::default(),
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn create(self) -> TracingSubsystem {
		let builder = TracingBuilder::from_config(self.config);
		match self.configurator {
			Some(configurator) => configurator(builder).build(),
			None => builder.build(),
		}
	}
}

impl Default for TracingSubsystemFactory {
	fn default() -> Self {
		Self::new()
	}
}
