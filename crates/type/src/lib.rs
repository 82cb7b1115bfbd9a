// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{
	Error, Result,
	diagnostic::{self, DefaultRenderer, Diagnostic, DiagnosticRenderer},
};
pub use fragment::Fragment;
pub use param::Params;
pub use value::{GetType, OrderedF32, OrderedF64, Type, Value, number};

pub mod error;
mod fragment;
mod param;
pub mod value;
