// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use frame::{Frame, FrameColumn};
pub use principal::{Principal, PrincipalId};
pub use reifydb_type::{Error, Result};

mod frame;
mod principal;
