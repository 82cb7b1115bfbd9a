// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb::Frame;

/// Frames as tables, separated by a blank line.
pub fn render_tables(frames: &[Frame]) -> String {
	frames.iter().map(ToString::to_string).filter(|table| !table.is_empty()).collect::<Vec<_>>().join("\n")
}

pub fn render_json(frames: &[Frame]) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(frames)
}
