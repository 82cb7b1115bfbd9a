// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod explain;
mod output;
mod shell;

use std::{
	error::Error as StdError,
	io::{self, BufReader},
	path::PathBuf,
	process::ExitCode,
};

use clap::{Parser, Subcommand};
use reifydb::{DatabaseConfig, EmbeddedBlocking, LogFormat, TracingConfig};

use crate::{
	explain::Stage,
	output::{render_json, render_tables},
};

/// Run RQL against an embedded ReifyDB
#[derive(Debug, Parser)]
#[command(name = "reifydb", version)]
struct Cli {
	/// JSON configuration file; REIFYDB_* environment variables are used without one
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Log level or filter directive, e.g. `debug` or `warn,reifydb_engine=trace`
	#[arg(long, global = true, value_name = "FILTER")]
	log_level: Option<String>,

	/// Log output format: pretty, compact or json
	#[arg(long, global = true, value_name = "FORMAT")]
	log_format: Option<LogFormat>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Execute statements and print one table per statement
	Query {
		/// Run in a read-only transaction
		#[arg(long)]
		rx: bool,

		/// Print frames as JSON
		#[arg(long)]
		json: bool,

		/// The RQL to execute
		rql: String,
	},

	/// Show how a query is tokenized, parsed or planned
	Explain {
		#[arg(value_enum)]
		stage: Stage,

		rql: String,
	},

	/// Execute statements read line by line from stdin
	Shell {
		/// Run every line in a read-only transaction
		#[arg(long)]
		rx: bool,
	},
}

impl Cli {
	fn database_config(&self) -> Result<DatabaseConfig, reifydb::ConfigError> {
		let mut config = match &self.config {
			Some(path) => DatabaseConfig::from_json_file(path)?,
			None => DatabaseConfig::from_env()?,
		};

		if self.log_level.is_some() || self.log_format.is_some() {
			let mut tracing = config.tracing.take().unwrap_or_else(TracingConfig::default);
			if let Some(level) = &self.log_level {
				tracing.level = level.clone();
			}
			if let Some(format) = self.log_format {
				tracing.format = format;
			}
			config.tracing = Some(tracing);
		}

		Ok(config)
	}
}

fn report(err: &dyn StdError) {
	eprintln!("error: {err}");
	let mut source = err.source();
	while let Some(cause) = source {
		eprintln!("  caused by: {cause}");
		source = cause.source();
	}
}

fn init_tracing(config: &DatabaseConfig) -> Result<(), ExitCode> {
	config.init_tracing().map(|_| ()).map_err(|err| {
		report(&err);
		ExitCode::from(2)
	})
}

fn open(config: DatabaseConfig) -> Result<EmbeddedBlocking, ExitCode> {
	EmbeddedBlocking::with_config(config).map_err(|err| {
		report(&err);
		ExitCode::from(2)
	})
}

fn query(db: &EmbeddedBlocking, rx: bool, json: bool, rql: &str) -> ExitCode {
	let result = if rx {
		db.rx(rql)
	} else {
		db.tx(rql)
	};

	let frames = match result {
		Ok(frames) => frames,
		Err(err) => {
			eprint!("{err}");
			return ExitCode::FAILURE;
		}
	};

	if !json {
		print!("{}", render_tables(&frames));
		return ExitCode::SUCCESS;
	}

	match render_json(&frames) {
		Ok(text) => {
			println!("{text}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			report(&err);
			ExitCode::FAILURE
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let config = match cli.database_config() {
		Ok(config) => config,
		Err(err) => {
			report(&err);
			return ExitCode::from(2);
		}
	};

	match cli.command {
		Command::Explain {
			stage,
			rql,
		} => {
			if let Err(code) = init_tracing(&config) {
				return code;
			}

			match explain::explain(stage, &rql) {
				Ok(text) => {
					print!("{text}");
					ExitCode::SUCCESS
				}
				Err(err) => {
					eprint!("{err}");
					ExitCode::FAILURE
				}
			}
		}
		Command::Query {
			rx,
			json,
			rql,
		} => match open(config) {
			Ok(db) => query(&db, rx, json, &rql),
			Err(code) => code,
		},
		Command::Shell {
			rx,
		} => {
			let db = match open(config) {
				Ok(db) => db,
				Err(code) => return code,
			};

			let stdin = BufReader::new(io::stdin().lock());
			match shell::run(&db, rx, stdin, io::stdout().lock(), io::stderr().lock()) {
				Ok(0) => ExitCode::SUCCESS,
				Ok(_) => ExitCode::FAILURE,
				Err(err) => {
					report(&err);
					ExitCode::FAILURE
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;
	use reifydb::ArithmeticPolicy;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_query() {
		let cli = Cli::parse_from(["reifydb", "query", "--json", "map 1"]);
		assert!(matches!(cli.command, Command::Query { json: true, rx: false, .. }));
	}

	#[test]
	fn test_log_flags_enable_tracing() {
		let cli =
			Cli::parse_from(["reifydb", "--log-level", "debug", "--log-format", "json", "explain", "ast", "map 1"]);
		let config = cli.database_config().unwrap();
		let tracing = config.tracing.unwrap();
		assert_eq!(tracing.level, "debug");
		assert_eq!(tracing.format, LogFormat::Json);
	}

	#[test]
	fn test_config_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");
		std::fs::write(&path, r#"{"engine": {"arithmetic": "undefined"}}"#).unwrap();

		let cli = Cli::parse_from(["reifydb", "--config", path.to_str().unwrap(), "shell"]);
		let config = cli.database_config().unwrap();
		assert_eq!(config.engine.arithmetic, ArithmeticPolicy::Undefined);
		assert!(config.tracing.is_none());
	}

	#[test]
	fn test_explain_installs_configured_tracing() {
		let cli = Cli::parse_from(["reifydb", "--log-level", "reifydb=loud", "explain", "ast", "map 1"]);
		let config = cli.database_config().unwrap();
		assert!(init_tracing(&config).is_err());
	}
}
