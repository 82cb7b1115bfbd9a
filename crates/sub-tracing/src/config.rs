// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TracingError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

impl FromStr for LogFormat {
	type Err = TracingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(LogFormat::Pretty),
			"compact" => Ok(LogFormat::Compact),
			"json" => Ok(LogFormat::Json),
			_ => Err(TracingError::InvalidFormat(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
	/// A level (`info`) or a full filter directive (`warn,reifydb_engine=trace`).
	pub level: String,
	pub format: LogFormat,
	pub ansi: bool,
	/// Let `RUST_LOG` replace `level` when it is set.
	pub env_override: bool,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::default(),
			ansi: true,
			env_override: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_from_str() {
		assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
		assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
		assert!(matches!("xml".parse::<LogFormat>(), Err(TracingError::InvalidFormat(_))));
	}

	#[test]
	fn test_deserialize_partial() {
		let config: TracingConfig = serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();
		assert_eq!(config.level, "debug");
		assert_eq!(config.format, LogFormat::Json);
		assert!(config.ansi);
	}
}
