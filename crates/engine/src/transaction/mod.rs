// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, instrument};

pub use command::CommandTransaction;
pub use query::QueryTransaction;

mod command;
mod query;

pub type CommitVersion = u64;

/// What every statement needs from the transaction it runs in.
pub trait Transaction {
	/// The committed version this transaction reads at.
	fn version(&self) -> CommitVersion;

	fn check_active(&self) -> crate::Result<()>;
}

/// Hands out transactions and keeps the committed version.
///
/// Command transactions serialize on a single writer lock; query transactions never wait.
#[derive(Debug, Default)]
pub struct TransactionManager {
	version: AtomicU64,
	writer: Mutex<()>,
}

impl TransactionManager {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn current_version(&self) -> CommitVersion {
		self.version.load(Ordering::Acquire)
	}

	#[instrument(name = "engine::transaction::begin_command", level = "debug", skip(self))]
	pub fn begin_command(&self) -> CommandTransaction<'_> {
		let guard = self.writer.lock();
		let version = self.current_version();
		debug!(version, "command transaction started");
		CommandTransaction::new(self, guard, version)
	}

	#[instrument(name = "engine::transaction::begin_query", level = "debug", skip(self))]
	pub fn begin_query(&self) -> QueryTransaction {
		QueryTransaction::new(self.current_version())
	}

	pub(crate) fn advance(&self) -> CommitVersion {
		self.version.fetch_add(1, Ordering::AcqRel) + 1
	}
}
