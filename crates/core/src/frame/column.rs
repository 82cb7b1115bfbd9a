// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use reifydb_type::{Type, Value};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameColumn {
	pub name: String,
	pub ty: Type,
	pub data: Vec<Value>,
}

impl FrameColumn {
	pub fn new(name: impl Into<String>, ty: Type, data: Vec<Value>) -> Self {
		Self {
			name: name.into(),
			ty,
			data,
		}
	}

	/// Display text of the value in row `index`, `Undefined` past the end of the column.
	pub fn as_string(&self, index: usize) -> String {
		self.data.get(index).map_or_else(|| "Undefined".to_string(), |v| v.to_string())
	}
}

impl Deref for FrameColumn {
	type Target = [Value];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}
