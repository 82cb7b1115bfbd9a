// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::panic::resume_unwind;

use reifydb_core::{Frame, Principal};
use reifydb_engine::{Engine, EngineConfig};
use reifydb_type::{Error, Params, diagnostic::transaction::transaction_aborted};
use tokio::task::{JoinError, spawn_blocking};

use crate::{ConfigError, DatabaseConfig, variant::boot};

/// The async flavour of [`EmbeddedBlocking`](crate::EmbeddedBlocking).
///
/// Statements run on tokio's blocking pool so that the engine never stalls the async workers.
#[derive(Clone)]
pub struct Embedded {
	engine: Engine,
}

impl Embedded {
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

	pub async fn tx(&self, rql: &str) -> crate::Result<Vec<Frame>> {
		self.tx_as(&Principal::root(), rql).await
	}

	pub async fn rx(&self, rql: &str) -> crate::Result<Vec<Frame>> {
		self.rx_as(&Principal::root(), rql).await
	}

	pub async fn tx_as(&self, principal: &Principal, rql: &str) -> crate::Result<Vec<Frame>> {
		self.run(principal, rql, Params::None, Mode::Command).await
	}

	pub async fn rx_as(&self, principal: &Principal, rql: &str) -> crate::Result<Vec<Frame>> {
		self.run(principal, rql, Params::None, Mode::Query).await
	}

	pub async fn tx_with_params(&self, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		self.run(&Principal::root(), rql, params.into(), Mode::Command).await
	}

	pub async fn rx_with_params(&self, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		self.run(&Principal::root(), rql, params.into(), Mode::Query).await
	}

	async fn run(&self, principal: &Principal, rql: &str, params: Params, mode: Mode) -> crate::Result<Vec<Frame>> {
		let engine = self.engine.clone();
		let principal = principal.clone();
		let rql = rql.to_string();

		let handle = spawn_blocking(move || match mode {
			Mode::Command => engine.tx_as(&principal, &rql, params),
			Mode::Query => engine.rx_as(&principal, &rql, params),
		});

		joined(handle.await)
	}
}

/// Unwraps the outcome of a blocking engine task. A panic resumes on the caller, a cancelled task is `TXN_002`.
fn joined<T>(result: Result<crate::Result<T>, JoinError>) -> crate::Result<T> {
	match result {
		Ok(result) => result,
		Err(err) if err.is_panic() => resume_unwind(err.into_panic()),
		Err(err) => Err(Error(transaction_aborted(err.to_string()))),
	}
}

impl Default for Embedded {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Clone, Copy)]
enum Mode {
	Command,
	Query,
}
