// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_engine::Engine;
use tracing::debug;

pub use embedded::Embedded;
pub use embedded_blocking::EmbeddedBlocking;

use crate::{ConfigError, DatabaseConfig};

mod embedded;
mod embedded_blocking;

/// Installs tracing when configured, then creates the engine.
fn boot(config: DatabaseConfig) -> Result<Engine, ConfigError> {
	config.init_tracing()?;

	let engine = Engine::new(config.engine);
	debug!("embedded database ready");
	Ok(engine)
}
