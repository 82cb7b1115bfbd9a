// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{error::Error, fmt::Write, path::Path};

use reifydb_rql::explain::{explain_ast, explain_plan, explain_tokenize};
use reifydb_testing::testscript::{Command, Runner, run_path};
use test_each_file::test_each_path;

test_each_path! { in "crates/rql/tests/scripts/tokenize" as tokenize => run_test }
test_each_path! { in "crates/rql/tests/scripts/ast" as ast => run_test }
test_each_path! { in "crates/rql/tests/scripts/plan" as plan => run_test }

fn run_test(path: &Path) {
	run_path(&mut TestRunner {}, path).expect("test failed")
}

pub struct TestRunner {}

impl Runner for TestRunner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		let mut args = command.consume_args();
		let query = args.next_pos().ok_or("args not given")?.value.as_str();
		args.reject_rest()?;

		let result = match command.name.as_str() {
			// tokenize QUERY
			"tokenize" => explain_tokenize(query)?,
			// ast QUERY
			"ast" => explain_ast(query)?,
			// plan QUERY
			"plan" => explain_plan(query)?,
			name => return Err(format!("invalid command {name}").into()),
		};

		write!(output, "{}", result)?;
		Ok(output)
	}
}
