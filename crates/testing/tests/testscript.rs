// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{error::Error, fmt::Write, path::Path};

use reifydb_testing::testscript::{Command, Runner, run_path};
use test_each_file::test_each_path;

test_each_path! { in "crates/testing/tests/scripts" as scripts => run_test }

fn run_test(path: &Path) {
	run_path(&mut EchoRunner::default(), path).expect("test failed")
}

#[derive(Default)]
struct EchoRunner {
	count: usize,
}

impl Runner for EchoRunner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		match command.name.as_str() {
			// echo ARGS...
			"echo" => {
				let args: Vec<String> = command
					.args
					.iter()
					.map(|a| match &a.key {
						Some(key) => format!("{key}={}", a.value),
						None => a.value.clone(),
					})
					.collect();
				writeln!(output, "{}", args.join(" "))?;
			}
			// count [by=N]
			"count" => {
				let mut args = command.consume_args();
				let by = args.lookup_parse::<usize>("by")?.unwrap_or(1);
				args.reject_rest()?;
				self.count += by;
				writeln!(output, "{}", self.count)?;
			}
			// fail MESSAGE
			"fail" => {
				let mut args = command.consume_args();
				let message = args.next_pos().ok_or("message not given")?.value.clone();
				args.reject_rest()?;
				return Err(message.into());
			}
			name => return Err(format!("invalid command {name}").into()),
		}
		Ok(output)
	}
}
