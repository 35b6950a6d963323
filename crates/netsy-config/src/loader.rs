// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later tiers win:
//! 1. TOML file (base values)
//! 2. Environment variables
//! 3. CLI arguments

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{ConfigError, ConfigResult, NetsyConfig};

const CONFIG_FILE_NAME: &str = "netsy.toml";

/// Find the netsy configuration file
///
/// Search order:
/// 1. `NETSY_CONFIG_PATH` environment variable
/// 2. Current working directory: `./netsy.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("NETSY_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by NETSY_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        for ancestor in cwd.ancestors().skip(1).take(5) {
            search_paths.push(ancestor.join(CONFIG_FILE_NAME));
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet NETSY_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML and apply overrides
///
/// # Arguments
///
/// * `config_path` - Optional path to the config file. If `None`, the file is searched for.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns an error if the file is missing, contains invalid TOML or an
/// override does not parse. Values are not range-checked here; call
/// [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<NetsyConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: NetsyConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config)?;
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `NETSY_STEPS` -> `simulation.steps`
/// - `NETSY_SEED` -> `simulation.seed`
/// - `NETSY_SAMPLE_EVERY` -> `simulation.sample_every`
/// - `NETSY_PARALLEL` -> `simulation.parallel`
/// - `NETSY_LOG_LEVEL` -> `logging.level`
/// - `NETSY_SCENARIO` -> `scenario.kind`
/// - `NETSY_OUTPUT` -> `output.path`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming the variable if a value does
/// not parse.
pub fn apply_environment_overrides(config: &mut NetsyConfig) -> ConfigResult<()> {
    if let Ok(value) = env::var("NETSY_STEPS") {
        config.simulation.steps = Some(parse_value("NETSY_STEPS", &value)?);
    }
    if let Ok(value) = env::var("NETSY_SEED") {
        config.simulation.seed = Some(parse_value("NETSY_SEED", &value)?);
    }
    if let Ok(value) = env::var("NETSY_SAMPLE_EVERY") {
        config.simulation.sample_every = parse_value("NETSY_SAMPLE_EVERY", &value)?;
    }
    if let Ok(value) = env::var("NETSY_PARALLEL") {
        config.simulation.parallel = parse_flag("NETSY_PARALLEL", &value)?;
    }
    if let Ok(value) = env::var("NETSY_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("NETSY_SCENARIO") {
        config.scenario.kind = parse_value("NETSY_SCENARIO", &value)?;
    }
    if let Ok(value) = env::var("NETSY_OUTPUT") {
        config.output.path = Some(PathBuf::from(value));
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Parsed arguments, e.g. `{"steps": "500", "scenario": "hopfield"}`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming the argument if a value does
/// not parse.
pub fn apply_cli_overrides(
    config: &mut NetsyConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    if let Some(value) = cli_args.get("steps") {
        config.simulation.steps = Some(parse_value("--steps", value)?);
    }
    if let Some(value) = cli_args.get("seed") {
        config.simulation.seed = Some(parse_value("--seed", value)?);
    }
    if let Some(value) = cli_args.get("sample_every") {
        config.simulation.sample_every = parse_value("--sample-every", value)?;
    }
    if let Some(value) = cli_args.get("parallel") {
        config.simulation.parallel = parse_flag("--parallel", value)?;
    }
    if let Some(value) = cli_args.get("scenario") {
        config.scenario.kind = parse_value("--scenario", value)?;
    }
    if let Some(value) = cli_args.get("output") {
        config.output.path = Some(PathBuf::from(value));
    }
    if let Some(value) = cli_args.get("format") {
        config.output.format = parse_value("--format", value)?;
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        config.logging.format = value.clone();
    }
    Ok(())
}

fn parse_value<T>(source: &str, value: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|err: T::Err| {
        ConfigError::InvalidValue(format!("{} = '{}': {}", source, value, err))
    })
}

fn parse_flag(source: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(format!(
            "{} = '{}': expected true or false",
            source, value
        ))),
    }
}
