// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use parking_lot::MutexGuard;
use reifydb_type::{diagnostic::transaction, return_error};
use tracing::{debug, instrument};

use crate::transaction::{CommitVersion, Transaction, TransactionManager};

/// A read-write transaction holding the writer lock until it commits or rolls back.
///
/// The transaction rolls back on drop if it was not explicitly committed.
pub struct CommandTransaction<'a> {
	manager: &'a TransactionManager,
	guard: Option<MutexGuard<'a, ()>>,
	version: CommitVersion,
	state: TransactionState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TransactionState {
	Active,
	Committed,
	RolledBack,
}

impl<'a> CommandTransaction<'a> {
	pub(crate) fn new(manager: &'a TransactionManager, guard: MutexGuard<'a, ()>, version: CommitVersion) -> Self {
		Self {
			manager,
			guard: Some(guard),
			version,
			state: TransactionState::Active,
		}
	}

	#[instrument(name = "engine::transaction::command::commit", level = "debug", skip(self))]
	pub fn commit(&mut self) -> crate::Result<CommitVersion> {
		self.check_active()?;
		self.state = TransactionState::Committed;

		let version = self.manager.advance();
		self.guard.take();

		debug!(version, "committed");
		Ok(version)
	}

	#[instrument(name = "engine::transaction::command::rollback", level = "debug", skip(self))]
	pub fn rollback(&mut self) -> crate::Result<()> {
		self.check_active()?;
		self.state = TransactionState::RolledBack;
		self.guard.take();

		debug!(version = self.version, "rolled back");
		Ok(())
	}
}

impl Transaction for CommandTransaction<'_> {
	fn version(&self) -> CommitVersion {
		self.version
	}

	fn check_active(&self) -> crate::Result<()> {
		match self.state {
			TransactionState::Active => Ok(()),
			TransactionState::Committed => {
				return_error!(transaction::transaction_already_committed())
			}
			TransactionState::RolledBack => {
				return_error!(transaction::transaction_already_rolled_back())
			}
		}
	}
}

impl Drop for CommandTransaction<'_> {
	fn drop(&mut self) {
		if self.state == TransactionState::Active {
			let _ = self.rollback();
		}
	}
}
