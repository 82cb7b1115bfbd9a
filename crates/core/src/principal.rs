// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt;

pub type PrincipalId = u64;

/// The identity a transaction is executed on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
	System {
		id: PrincipalId,
		name: String,
	},
}

impl Principal {
	pub fn root() -> Self {
		Self::System {
			id: 1,
			name: "root".to_string(),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::System {
				name,
				..
			} => name.as_str(),
		}
	}
}

impl fmt::Display for Principal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::System {
				id,
				name,
			} => write!(f, "system:{}:{}", id, name),
		}
	}
}
