// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::io::{self, BufRead, Write};

use reifydb::EmbeddedBlocking;
use tracing::debug;

use crate::output::render_tables;

/// Runs every non-empty line of `input` as its own transaction. Returns the number of failed lines.
pub fn run(
	db: &EmbeddedBlocking,
	rx: bool,
	input: impl BufRead,
	mut out: impl Write,
	mut err: impl Write,
) -> io::Result<usize> {
	let mut failed = 0;

	for line in input.lines() {
		let line = line?;
		let rql = line.trim();
		if rql.is_empty() || rql.starts_with('#') {
			continue;
		}

		debug!(rql, "shell statement");
		let result = if rx {
			db.rx(rql)
		} else {
			db.tx(rql)
		};

		match result {
			Ok(frames) => write!(out, "{}", render_tables(&frames))?,
			Err(error) => {
				failed += 1;
				write!(err, "{}", error)?;
			}
		}
	}

	Ok(failed)
}
