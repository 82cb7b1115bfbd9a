// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! # ReifyDB
//!
//! An embeddable engine for RQL, the Reify Query Language. Queries run in-process inside a transaction
//! and return one [`Frame`] per statement.
//!
//! ```
//! let (db, root) = reifydb::ReifyDB::embedded_blocking();
//! let frames = db.tx_as(&root, "map 1, 1 + 4").unwrap();
//! assert_eq!(frames[0].headers(), vec!["1", "1 + 4"]);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod variant;

pub use config::{ConfigError, DatabaseConfig};
pub use reifydb_core as core;
pub use reifydb_core::{Frame, FrameColumn, Principal};
pub use reifydb_engine as engine;
pub use reifydb_engine::{ArithmeticPolicy, EngineConfig};
pub use reifydb_rql as rql;
pub use reifydb_sub_tracing::{LogFormat, TracingConfig};
pub use reifydb_type as r#type;
pub use reifydb_type::{Error, Params, Result, Type, Value, params};
pub use variant::{Embedded, EmbeddedBlocking};

pub struct ReifyDB {}

impl ReifyDB {
	pub fn embedded_blocking() -> (EmbeddedBlocking, Principal) {
		(EmbeddedBlocking::new(), Principal::root())
	}

	pub fn embedded_blocking_with(
		config: DatabaseConfig,
	) -> std::result::Result<(EmbeddedBlocking, Principal), ConfigError> {
		Ok((EmbeddedBlocking::with_config(config)?, Principal::root()))
	}

	pub fn embedded() -> (Embedded, Principal) {
		(Embedded::new(), Principal::root())
	}

	pub fn embedded_with(config: DatabaseConfig) -> std::result::Result<(Embedded, Principal), ConfigError> {
		Ok((Embedded::with_config(config)?, Principal::root()))
	}
}
