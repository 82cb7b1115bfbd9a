// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker
//
// The original Apache License can be found at:
//   http://www.apache.org/licenses/LICENSE-2.0

use std::{error::Error, io::Write as _};

use crate::testscript::{Command, parser::parse};

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a testscript command, returning its output, or an error if the
	/// command fails.
	///
	/// Arguments can be accessed directly via [`Command::args`], or by
	/// using the [`Command::consume_args`] helper for more convenient
	/// processing.
	///
	/// Error cases are typically tested by running the command with a `!`
	/// prefix (expecting a failure), in which case the error's display text
	/// becomes the command output. The runner can also handle errors itself
	/// and return an `Ok` result with appropriate output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called at the start of a testscript. Used e.g. for initial setup.
	/// Can't return output, since it's not called in the context of a
	/// block.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the end of a testscript. Used e.g. for state assertions.
	/// Can't return output, since it's not called in the context of a
	/// block.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the start of a block. Used e.g. to output initial state.
	/// Any output is prepended to the block's output.
	fn start_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the end of a block. Used e.g. to output final state.
	/// Any output is appended to the block's output.
	fn end_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the start of a command. Used e.g. for setup. Any output is
	/// prepended to the command's output, and is affected by the command's
	/// `prefix:` like the output of [`Runner::run`]. It is still emitted
	/// when a `!` command fails as expected.
	#[allow(unused_variables)]
	fn start_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the end of a command. Used e.g. for cleanup. Any output is
	/// appended to the command's output, and is affected by the command's
	/// `prefix:` like the output of [`Runner::run`]. Not called when a
	/// command fails unexpectedly, since the script aborts.
	#[allow(unused_variables)]
	fn end_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}
}

/// Runs a testscript at the given path.
///
/// Panics if the script output differs from the current input file. Errors on
/// IO, parser, or runner failure. If the environment variable
/// `UPDATE_GOLDENFILES=1` is set, the new output file will replace the input
/// file.
pub fn run_path<R: Runner, P: AsRef<std::path::Path>>(runner: &mut R, path: P) -> std::io::Result<()> {
	let path = path.as_ref();
	let Some(dir) = path.parent() else {
		return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid path '{path:?}'")));
	};
	let Some(filename) = path.file_name() else {
		return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid path '{path:?}'")));
	};

	if filename.to_string_lossy().ends_with(".skip") {
		return Ok(());
	}

	let input = std::fs::read_to_string(dir.join(filename))?;
	let output = generate(runner, &input)?;

	goldenfile::Mint::new(dir).new_goldenfile(filename)?.write_all(output.as_bytes())
}

fn hook_error(hook: &str, line: Option<u32>, error: Box<dyn Error>) -> std::io::Error {
	match line {
		Some(line) => std::io::Error::other(format!("{hook} failed at line {line}: {error}")),
		None => std::io::Error::other(format!("{hook} failed: {error}")),
	}
}

/// Generates output for a testscript input, without comparing them.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> std::io::Result<String> {
	let mut output = String::with_capacity(input.len()); // common case: output == input

	// Detect end-of-line format.
	let eol = match input.find("\r\n") {
		Some(_) => "\r\n",
		None => "\n",
	};

	// Parse the script.
	let blocks = parse(input).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

	runner.start_script().map_err(|e| hook_error("start_script", None, e))?;

	for (i, block) in blocks.iter().enumerate() {
		// A trailing block of bare comments keeps its literal contents.
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		// Process each command in the block.
		let mut block_output = String::new();

		block_output.push_str(&ensure_eol(
			runner.start_block().map_err(|e| hook_error("start_block", Some(block.line_number), e))?,
			eol,
		));

		for command in &block.commands {
			let mut command_output = String::new();

			command_output.push_str(&ensure_eol(
				runner.start_command(command)
					.map_err(|e| hook_error("start_command", Some(command.line_number), e))?,
				eol,
			));

			// Commands are assumed to be unwind-safe.
			let run = std::panic::AssertUnwindSafe(|| runner.run(command));
			command_output.push_str(&match std::panic::catch_unwind(run) {
				Ok(Ok(output)) if command.fail => {
					return Err(std::io::Error::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {output}",
						command.name, command.line_number
					)));
				}

				Ok(Ok(output)) => output,

				Ok(Err(e)) if command.fail => format!("{e}"),

				Ok(Err(e)) => {
					return Err(std::io::Error::other(format!(
						"command '{}' failed at line {}: {e}",
						command.name, command.line_number
					)));
				}

				Err(panic) if command.fail => {
					let message = panic
						.downcast_ref::<&str>()
						.map(|s| s.to_string())
						.or_else(|| panic.downcast_ref::<String>().cloned())
						.unwrap_or_else(|| std::panic::resume_unwind(panic));
					format!("Panic: {message}")
				}

				Err(panic) => std::panic::resume_unwind(panic),
			});

			command_output = ensure_eol(trim_trailing_newlines(command_output), eol);

			command_output.push_str(&ensure_eol(
				runner.end_command(command)
					.map_err(|e| hook_error("end_command", Some(command.line_number), e))?,
				eol,
			));

			if let Some(prefix) = &command.prefix {
				if !command_output.is_empty() {
					command_output = format!(
						"{prefix}: {}{eol}",
						command_output
							.strip_suffix(eol)
							.unwrap_or(command_output.as_str())
							.replace('\n', &format!("\n{prefix}: "))
					);
				}
			}

			block_output.push_str(&command_output);
		}

		block_output.push_str(&ensure_eol(
			runner.end_block().map_err(|e| hook_error("end_block", Some(block.line_number), e))?,
			eol,
		));

		if block_output.is_empty() {
			block_output.push_str("ok\n")
		}

		// Blank lines would end the output section, so such output gets a `> ` prefix.
		if block_output.starts_with('\n')
			|| block_output.starts_with("\r\n")
			|| block_output.contains("\n\n")
			|| block_output.contains("\n\r\n")
		{
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			// block output ends with a newline, drop the dangling "> "
			block_output.pop();
			block_output.pop();
		}

		output.push_str(&format!("{}---{eol}{}", block.literal, block_output));
		if i < blocks.len() - 1 {
			output.push_str(eol);
		}
	}

	runner.end_script().map_err(|e| hook_error("end_script", None, e))?;

	Ok(output)
}

fn trim_trailing_newlines(mut s: String) -> String {
	while s.ends_with('\n') || s.ends_with('\r') {
		s.pop();
	}
	s
}

/// Appends a newline if the string is not empty and doesn't already have one.
fn ensure_eol(mut s: String, eol: &str) -> String {
	if let Some(c) = s.chars().next_back() {
		if c != '\n' {
			s.push_str(eol)
		}
	}
	s
}
