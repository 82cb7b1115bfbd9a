// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Installs the process-wide `tracing` subscriber for an embedded database.
//!
//! ```no_run
//! use reifydb_sub_tracing::{LogFormat, TracingBuilder};
//!
//! TracingBuilder::new().with_level("debug").with_format(LogFormat::Compact).build().init().unwrap();
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::TracingBuilder;
pub use config::{LogFormat, TracingConfig};
pub use error::TracingError;
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
pub use subsystem::TracingSubsystem;

mod builder;
mod config;
mod error;
mod factory;
mod subsystem;
