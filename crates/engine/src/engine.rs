// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{ops::Deref, sync::Arc};

use reifydb_core::{Frame, Principal};
use reifydb_rql::{ast::parse_str, plan::plan};
use reifydb_type::Params;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	execute::Executor,
	transaction::{CommandTransaction, CommitVersion, QueryTransaction, Transaction, TransactionManager},
};

/// What happens when arithmetic overflows or divides by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticPolicy {
	/// Fail the statement.
	#[default]
	Error,
	/// Store Undefined in place of the result.
	Undefined,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	pub arithmetic: ArithmeticPolicy,
}

impl EngineConfig {
	pub fn with_arithmetic(mut self, arithmetic: ArithmeticPolicy) -> Self {
		self.arithmetic = arithmetic;
		self
	}
}

pub struct Engine(Arc<EngineInner>);

pub struct EngineInner {
	config: EngineConfig,
	transaction: TransactionManager,
}

impl Engine {
	pub fn new(config: EngineConfig) -> Self {
		debug!(?config, "engine created");
		Self(Arc::new(EngineInner {
			config,
			transaction: TransactionManager::new(),
		}))
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// The version of the last committed command transaction.
	pub fn current_version(&self) -> CommitVersion {
		self.transaction.current_version()
	}

	pub fn begin_command(&self) -> CommandTransaction<'_> {
		self.transaction.begin_command()
	}

	pub fn begin_query(&self) -> QueryTransaction {
		self.transaction.begin_query()
	}

	/// Runs every statement of `rql` in one command transaction, committed only if all of them succeed.
	#[instrument(name = "engine::tx_as", level = "debug", skip(self, principal, params), fields(principal = %principal))]
	pub fn tx_as(&self, principal: &Principal, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		let params = params.into();
		let mut txn = self.begin_command();

		match self.run(&txn, rql, &params) {
			Ok(frames) => {
				txn.commit()?;
				Ok(frames)
			}
			Err(err) => {
				txn.rollback()?;
				Err(err.with_statement(rql))
			}
		}
	}

	#[instrument(name = "engine::rx_as", level = "debug", skip(self, principal, params), fields(principal = %principal))]
	pub fn rx_as(&self, principal: &Principal, rql: &str, params: impl Into<Params>) -> crate::Result<Vec<Frame>> {
		let params = params.into();
		let rx = self.begin_query();
		self.run(&rx, rql, &params).map_err(|err| err.with_statement(rql))
	}

	fn run(&self, txn: &impl Transaction, rql: &str, params: &Params) -> crate::Result<Vec<Frame>> {
		let plans = plan(parse_str(rql)?)?;
		let mut executor = Executor::new(params, self.config.arithmetic);

		let mut frames = Vec::with_capacity(plans.len());
		for (index, plan) in plans.into_iter().enumerate() {
			debug!(statement = index, version = txn.version(), "executing statement");
			frames.push(executor.execute(txn, plan)?);
		}
		Ok(frames)
	}
}

impl Clone for Engine {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl Deref for Engine {
	type Target = EngineInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use reifydb_core::Principal;
	use reifydb_type::{Params, Value};

	use super::*;

	fn engine() -> Engine {
		Engine::new(EngineConfig::default())
	}

	#[test]
	fn test_map_literals() {
		let frames = engine().tx_as(&Principal::root(), "map 1, 1 + 4", Params::None).unwrap();
		assert_eq!(frames.len(), 1);
		assert_eq!(frames[0].headers(), vec!["1".to_string(), "1 + 4".to_string()]);
		assert_eq!(frames[0].rows(), vec![vec![Value::Int1(1), Value::Int1(5)]]);
	}

	#[test]
	fn test_one_frame_per_statement() {
		let frames = engine().rx_as(&Principal::root(), "map 1; map 2; map 3", Params::None).unwrap();
		assert_eq!(frames.len(), 3);
		assert_eq!(frames[2].rows(), vec![vec![Value::Int1(3)]]);
	}

	#[test]
	fn test_commit_advances_version() {
		let engine = engine();
		engine.tx_as(&Principal::root(), "map 1", Params::None).unwrap();
		engine.tx_as(&Principal::root(), "map 1", Params::None).unwrap();
		assert_eq!(engine.current_version(), 2);
	}

	#[test]
	fn test_query_does_not_commit() {
		let engine = engine();
		engine.rx_as(&Principal::root(), "map 1", Params::None).unwrap();
		assert_eq!(engine.current_version(), 0);
	}

	#[test]
	fn test_error_rolls_back_and_carries_statement() {
		let engine = engine();
		let err = engine.tx_as(&Principal::root(), "map 1; map 1 / 0", Params::None).unwrap_err();
		assert_eq!(err.code(), "NUMBER_003");
		assert_eq!(err.0.statement.as_deref(), Some("map 1; map 1 / 0"));
		assert_eq!(engine.current_version(), 0);

		// the writer lock was released
		engine.tx_as(&Principal::root(), "map 1", Params::None).unwrap();
		assert_eq!(engine.current_version(), 1);
	}

	#[test]
	fn test_parse_error_carries_statement() {
		let err = engine().tx_as(&Principal::root(), "map 1 +", Params::None).unwrap_err();
		assert!(err.0.statement.is_some());
	}

	#[test]
	fn test_arithmetic_policy() {
		let engine = Engine::new(EngineConfig::default().with_arithmetic(ArithmeticPolicy::Undefined));
		let frames = engine.tx_as(&Principal::root(), "map 127 + 1", Params::None).unwrap();
		assert_eq!(frames[0].rows(), vec![vec![Value::Undefined]]);
	}

	#[test]
	fn test_params() {
		let frames = engine().tx_as(&Principal::root(), "map $1 + $2", vec![Value::Int1(2), Value::Int1(3)]).unwrap();
		assert_eq!(frames[0].rows(), vec![vec![Value::Int1(5)]]);
	}

	#[test]
	fn test_engine_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Engine>();

		let engine = engine();
		let clone = engine.clone();
		clone.tx_as(&Principal::root(), "map 1", Params::None).unwrap();
		assert_eq!(engine.current_version(), 1);
	}

	#[test]
	fn test_config_deserialize() {
		let config: EngineConfig = serde_json::from_str(r#"{"arithmetic": "undefined"}"#).unwrap();
		assert_eq!(config.arithmetic, ArithmeticPolicy::Undefined);

		let config: EngineConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, EngineConfig::default());
	}
}
