// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	fs,
	path::{Path, PathBuf},
};

use reifydb_engine::{ArithmeticPolicy, EngineConfig};
use reifydb_sub_tracing::{TracingConfig, TracingError, TracingSubsystemFactory};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_ARITHMETIC: &str = "REIFYDB_ARITHMETIC";
pub const ENV_LOG: &str = "REIFYDB_LOG";

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid value '{value}' for {key}, expected one of: {expected}")]
	InvalidValue {
		key: &'static str,
		value: String,
		expected: String,
	},

	#[error("failed to read config file {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file {path:?}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Tracing(#[from] TracingError),
}

/// Everything an embedded database is built from. Tracing is only installed when `tracing` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
	pub engine: EngineConfig,
	pub tracing: Option<TracingConfig>,
}

impl DatabaseConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_engine(mut self, engine: EngineConfig) -> Self {
		self.engine = engine;
		self
	}

	pub fn with_arithmetic(mut self, arithmetic: ArithmeticPolicy) -> Self {
		self.engine.arithmetic = arithmetic;
		self
	}

	pub fn with_tracing(mut self, tracing: TracingConfig) -> Self {
		self.tracing = Some(tracing);
		self
	}

	/// Reads `REIFYDB_ARITHMETIC` (`error` or `undefined`) and `REIFYDB_LOG` (a log level).
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let mut config = Self::default();

		if let Some(value) = lookup(ENV_ARITHMETIC) {
			config.engine.arithmetic = match value.trim().to_ascii_lowercase().as_str() {
				"error" => ArithmeticPolicy::Error,
				"undefined" => ArithmeticPolicy::Undefined,
				_ => {
					return Err(ConfigError::InvalidValue {
						key: ENV_ARITHMETIC,
						value,
						expected: "error, undefined".to_string(),
					});
				}
			};
		}

		if let Some(value) = lookup(ENV_LOG) {
			let level = value.trim().to_ascii_lowercase();
			if !LEVELS.contains(&level.as_str()) {
				return Err(ConfigError::InvalidValue {
					key: ENV_LOG,
					value,
					expected: LEVELS.join(", "),
				});
			}
			config.tracing = Some(TracingConfig {
				level,
				..TracingConfig::default()
			});
		}

		Ok(config)
	}

	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Installs the global subscriber described by `tracing`.
	///
	/// Returns `false` when tracing is not configured or a subscriber was already installed.
	pub fn init_tracing(&self) -> Result<bool, ConfigError> {
		match &self.tracing {
			Some(tracing) => Ok(TracingSubsystemFactory::from_config(tracing.clone()).create().init()?),
			None => Ok(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::HashMap, io::Write};

	use reifydb_sub_tracing::LogFormat;

	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config = DatabaseConfig::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config, DatabaseConfig::default());
		assert_eq!(config.engine.arithmetic, ArithmeticPolicy::Error);
		assert!(config.tracing.is_none());
	}

	#[test]
	fn test_from_lookup() {
		let config =
			DatabaseConfig::from_lookup(lookup(&[(ENV_ARITHMETIC, "Undefined"), (ENV_LOG, "debug")])).unwrap();
		assert_eq!(config.engine.arithmetic, ArithmeticPolicy::Undefined);
		assert_eq!(config.tracing.unwrap().level, "debug");
	}

	#[test]
	fn test_invalid_arithmetic() {
		let err = DatabaseConfig::from_lookup(lookup(&[(ENV_ARITHMETIC, "saturate")])).unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid value 'saturate' for REIFYDB_ARITHMETIC, expected one of: error, undefined"
		);
	}

	#[test]
	fn test_invalid_log_level() {
		let err = DatabaseConfig::from_lookup(lookup(&[(ENV_LOG, "loud")])).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { key: ENV_LOG, .. }));
	}

	#[test]
	fn test_builders() {
		let config = DatabaseConfig::new()
			.with_arithmetic(ArithmeticPolicy::Undefined)
			.with_tracing(TracingConfig {
				format: LogFormat::Json,
				..TracingConfig::default()
			});
		assert_eq!(config.engine.arithmetic, ArithmeticPolicy::Undefined);
		assert_eq!(config.tracing.unwrap().format, LogFormat::Json);
	}

	#[test]
	fn test_from_json_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"engine": {{"arithmetic": "undefined"}}, "tracing": {{"level": "warn"}}}}"#).unwrap();

		let config = DatabaseConfig::from_json_file(file.path()).unwrap();
		assert_eq!(config.engine.arithmetic, ArithmeticPolicy::Undefined);
		assert_eq!(config.tracing.unwrap().level, "warn");
	}

	#[test]
	fn test_from_json_file_errors() {
		let err = DatabaseConfig::from_json_file("/nonexistent/reifydb.json").unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));

		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "not json").unwrap();
		let err = DatabaseConfig::from_json_file(file.path()).unwrap_err();
		assert!(matches!(err, ConfigError::Parse { .. }));
	}

	#[test]
	fn test_init_tracing() {
		assert!(!DatabaseConfig::new().init_tracing().unwrap());

		let config = DatabaseConfig::new().with_tracing(TracingConfig {
			level: "reifydb=loud".to_string(),
			env_override: false,
			..TracingConfig::default()
		});
		assert!(matches!(config.init_tracing().unwrap_err(), ConfigError::Tracing(_)));
	}
}
