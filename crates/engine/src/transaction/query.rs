// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::transaction::{CommitVersion, Transaction};

/// A read-only snapshot at the version that was committed when it began.
#[derive(Debug)]
pub struct QueryTransaction {
	version: CommitVersion,
}

impl QueryTransaction {
	pub(crate) fn new(version: CommitVersion) -> Self {
		Self {
			version,
		}
	}
}

impl Transaction for QueryTransaction {
	fn version(&self) -> CommitVersion {
		self.version
	}

	fn check_active(&self) -> crate::Result<()> {
		Ok(())
	}
}
