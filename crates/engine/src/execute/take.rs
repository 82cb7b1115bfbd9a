// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{columnar::Columns, execute::Executor};

impl Executor<'_> {
	pub(crate) fn take(&mut self, input: Columns, take: usize) -> Columns {
		input.take(take)
	}
}
