// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # netsy-observability
//!
//! Logging setup shared by the netsy tools, with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: JSON log files in timestamped run folders

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// netsy crates that accept `--debug-{name}`
pub const KNOWN_CRATES: &[&str] = &["netsy-neural", "netsy-network", "netsy-run"];

/// Tracing targets emitted by a crate
///
/// Crate names use dashes while tracing targets use module paths, and some
/// crates log under an explicit target as well.
pub fn crate_targets(crate_name: &str) -> Vec<String> {
    let module = crate_name.replace('-', "_");
    match crate_name {
        "netsy-neural" => vec![module, "netsy::neuron".to_string()],
        "netsy-network" => vec![module, "netsy::propagation".to_string()],
        _ => vec![module],
    }
}
