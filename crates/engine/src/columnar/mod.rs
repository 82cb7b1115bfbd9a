// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub use column::Column;
pub use columns::Columns;

mod column;
mod columns;
