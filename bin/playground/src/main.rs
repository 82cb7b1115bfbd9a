// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

use reifydb::{EmbeddedBlocking, Error};

fn main() -> Result<(), Error> {
	let db = EmbeddedBlocking::new();

	for rql in ["map 1, 1 + 4", "select 1, 1 + 4"] {
		for frame in db.tx(rql)? {
			println!("{}", frame);
		}
	}

	Ok(())
}
