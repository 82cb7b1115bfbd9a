// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(&mut output, d, 0);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

fn get_line(source: &str, line: u32) -> Option<&str> {
	if line == 0 {
		return None;
	}
	source.lines().nth((line - 1) as usize)
}

fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

	if let Some(fragment) = d.fragment.as_ref().filter(|f| !f.is_internal()) {
		let source_line = d.statement.as_deref().and_then(|s| get_line(s, fragment.line));
		let line_number_width = fragment.line.to_string().len().max(2);

		let _ = writeln!(
			output,
			"{indent}  --> line {}, column {}",
			fragment.line, fragment.column
		);

		if let Some(source_line) = source_line {
			let _ = writeln!(
				output,
				"{indent} {0:>width$} │ {1}",
				fragment.line,
				source_line,
				width = line_number_width
			);

			// the fragment may span several lines, underline what is visible on the first one
			let visible = source_line.chars().count().saturating_sub(fragment.column.saturating_sub(1) as usize);
			let carets = fragment.length.clamp(1, visible.max(1));
			let _ = writeln!(
				output,
				"{indent} {0:>width$} │ {1}{2}",
				"",
				" ".repeat(fragment.column.saturating_sub(1) as usize),
				"^".repeat(carets),
				width = line_number_width
			);
		}

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent} {0:>width$} = {1}", "", label, width = line_number_width);
		}
	} else if let Some(label) = &d.label {
		let _ = writeln!(output, "{indent}  = {}", label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "{indent}help: {}", help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "{indent}note: {}", note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "{indent}caused by:");
		render_into(output, cause, depth + 1);
	}
}
