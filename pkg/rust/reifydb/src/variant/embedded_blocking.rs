// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::{Frame, Principal};
use reifydb_engine::{Engine, EngineConfig};
use reifydb_type::Params;

use crate::{ConfigError, DatabaseConfig, variant::boot};

/// An in-process database whose calls block the current thread until the statements ran.
#[derive(Clone)]
pub struct EmbeddedBlocking {
	engine: Engine,
}

impl EmbeddedBlocking {
	pub fn new() -> Self {
		Self {
			engine: Engine::new(EngineConfig::default()),
		}
	}

	pub fn with_config(config: DatabaseConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			engine: boot(config)?,
		})
	}

	pub fn engine(&self) -> &Engine {
		&self.engine
	}

	pub fn tx(&self, rql: &str) -> crate::Result<Vec<Frame>> {
		self.tx_as(&Principal::root(), rql)
	}

	pub fn rx(&self, rql: &str) -> crate::Result<Vec<Frame>> {
		self.rx_as(&Principal::root(), rql)
	}

	pub fn tx_as(&self, principal: &Principal, rql: &str) -> crate::Result<Vec<Frame>> {
		self.engine.tx_as(principal, rql, Params::None)
	}

	pub fn rx_as(&self, principal: &Principal, rql: &str) -> crate::Result<Vec<Frame>> {
		self.engine.rx_as(principal, rql, Params::None)
	}

	pub fn tx_with_params(&self, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		self.engine.tx_as(&Principal::root(), rql, params)
	}

	pub fn rx_with_params(&self, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		self.engine.rx_as(&Principal::root(), rql, params)
	}
}

impl Default for EmbeddedBlocking {
	fn default() -> Self {
		Self::new()
	}
}
