// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-netsy-network` to raise one crate to debug
//! while everything else stays at the base level.

use std::collections::BTreeSet;
use std::env;

use crate::{crate_targets, KNOWN_CRATES};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}`; `--debug-all`
    /// enables every known crate.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
            } else if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enabled_crates.insert(crate_name.to_string());
            }
        }
        flags
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// `DEBUG` for enabled crates, `INFO` otherwise
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// `EnvFilter` directives: every target of an enabled crate at debug,
    /// then `base_level` for the rest
    pub fn to_filter_string(&self, base_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .flat_map(|name| crate_targets(name))
            .map(|target| format!("{}=debug", target))
            .collect();
        filters.push(base_level.to_lowercase());
        filters.join(",")
    }

    /// Add the crates named in `NETSY_DEBUG` (comma-separated names or `all`)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(env_var) = env::var("NETSY_DEBUG") {
            if env_var == "all" {
                self.enable_all();
            } else {
                for crate_name in env_var.split(',') {
                    let crate_name = crate_name.trim();
                    if !crate_name.is_empty() {
                        self.enabled_crates.insert(crate_name.to_string());
                    }
                }
            }
        }
        self
    }
}

/// Debug flags from the process arguments plus `NETSY_DEBUG`
pub fn parse_debug_flags() -> CrateDebugFlags {
    CrateDebugFlags::from_args(env::args()).with_env_overrides()
}

/// Help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for a specific crate

Available crates:
  {}

Environment Variable:
  NETSY_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  NETSY_DEBUG=all                               Enable debug for all crates
"#,
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-netsy-network".to_string()]);
        assert!(flags.is_enabled("netsy-network"));
        assert!(!flags.is_enabled("netsy-neural"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_non_flag_arguments_are_ignored() {
        let flags = CrateDebugFlags::from_args(vec![
            "netsy-run".to_string(),
            "--steps".to_string(),
            "10".to_string(),
        ]);
        assert!(!flags.any_enabled());
        assert_eq!(flags.to_filter_string("warn"), "warn");
    }

    #[test]
    fn test_filter_string_uses_tracing_targets() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-netsy-neural".to_string()]);
        assert_eq!(
            flags.to_filter_string("INFO"),
            "netsy_neural=debug,netsy::neuron=debug,info"
        );
    }

    #[test]
    fn test_log_level() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-netsy-run".to_string()]);
        assert_eq!(flags.log_level("netsy-run"), tracing::Level::DEBUG);
        assert_eq!(flags.log_level("netsy-network"), tracing::Level::INFO);
    }
}
