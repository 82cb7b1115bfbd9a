// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracingError {
	#[error("invalid log filter '{filter}': {reason}")]
	InvalidFilter {
		filter: String,
		reason: String,
	},

	#[error("unknown log format '{0}', expected pretty, compact or json")]
	InvalidFormat(String),
}
