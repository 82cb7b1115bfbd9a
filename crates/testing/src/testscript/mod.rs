// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Golden scripts: blocks of commands followed by `---` and their expected output.
//!
//! ```text
//! # comment
//! tx map 1
//! ---
//! +-------+
//! |   1   |
//! +-------+
//! |   1   |
//! +-------+
//! ```
//!
//! A command prefixed with `!` is expected to fail and its error becomes the output.
//! A command prefixed with `name:` has every output line prefixed with `name: `.
//! Set `UPDATE_GOLDENFILES=1` to rewrite scripts with the actual output.

pub mod command;
mod error;
mod parser;
pub mod runner;

pub use command::{Argument, ArgumentConsumer, Block, Command};
pub use error::ParseError;
pub use parser::parse;
pub use runner::{Runner, generate, run_path};
