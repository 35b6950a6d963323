// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Collects every problem before failing so one run reports all of them.

use crate::{ConfigError, ConfigResult, NetsyConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    OutOfRange { field: String, reason: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { field, reason } => {
                write!(f, "{} is out of range: {}", field, reason)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

fn out_of_range(errors: &mut Vec<ConfigValidationError>, field: &str, reason: impl Into<String>) {
    errors.push(ConfigValidationError::OutOfRange {
        field: field.to_string(),
        reason: reason.into(),
    });
}

fn invalid(errors: &mut Vec<ConfigValidationError>, field: &str, reason: impl Into<String>) {
    errors.push(ConfigValidationError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    });
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &NetsyConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_simulation(config, &mut errors);
    validate_logging(config, &mut errors);
    validate_phase_space(config, &mut errors);
    validate_hopfield(config, &mut errors);
    validate_noise_cascade(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_simulation(config: &NetsyConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.simulation.steps == Some(0) {
        out_of_range(errors, "simulation.steps", "must be at least 1");
    }
    if config.simulation.sample_every == 0 {
        out_of_range(errors, "simulation.sample_every", "must be at least 1");
    }
}

fn validate_logging(config: &NetsyConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        invalid(
            errors,
            "logging.level",
            format!("'{}' is not one of {:?}", config.logging.level, LOG_LEVELS),
        );
    }
    let format = config.logging.format.to_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        invalid(
            errors,
            "logging.format",
            format!("'{}' is not one of {:?}", config.logging.format, LOG_FORMATS),
        );
    }
}

fn validate_phase_space(config: &NetsyConfig, errors: &mut Vec<ConfigValidationError>) {
    let ps = &config.phase_space;
    for (field, value) in [
        ("phase_space.jee", ps.jee),
        ("phase_space.j", ps.j),
        ("phase_space.thee", ps.thee),
        ("phase_space.thei", ps.thei),
        ("phase_space.bias", ps.bias),
        ("phase_space.init", ps.init),
    ] {
        if !value.is_finite() {
            invalid(errors, field, "must be finite");
        }
    }
    if !(ps.der_step > 0.0 && ps.der_step.is_finite()) {
        out_of_range(errors, "phase_space.der_step", "must be positive");
    }
}

fn validate_hopfield(config: &NetsyConfig, errors: &mut Vec<ConfigValidationError>) {
    let hf = &config.hopfield;
    if hf.neurons == 0 {
        out_of_range(errors, "hopfield.neurons", "must be at least 1");
    }
    if hf.patterns == 0 {
        out_of_range(errors, "hopfield.patterns", "must be at least 1");
    }
    if !(0.0..=1.0).contains(&hf.pattern_probability) {
        out_of_range(errors, "hopfield.pattern_probability", "must be within [0, 1]");
    }
    if !(hf.der_step > 0.0 && hf.der_step.is_finite()) {
        out_of_range(errors, "hopfield.der_step", "must be positive");
    }
    if let Some(cue) = hf.cue_pattern {
        if cue >= hf.patterns {
            out_of_range(
                errors,
                "hopfield.cue_pattern",
                format!("{} but only {} patterns are stored", cue, hf.patterns),
            );
        }
    }
    if !hf.cue_magnitude.is_finite() {
        invalid(errors, "hopfield.cue_magnitude", "must be finite");
    }
    if !(hf.noise >= 0.0 && hf.noise.is_finite()) {
        out_of_range(errors, "hopfield.noise", "must be finite and non-negative");
    }
}

fn validate_noise_cascade(config: &NetsyConfig, errors: &mut Vec<ConfigValidationError>) {
    let nc = &config.noise_cascade;
    if nc.noise_size == 0 {
        out_of_range(errors, "noise_cascade.noise_size", "must be at least 1");
    }
    if nc.layer_size == 0 {
        out_of_range(errors, "noise_cascade.layer_size", "must be at least 1");
    }
    if !(nc.noise_mean >= 0.0 && nc.noise_mean.is_finite()) {
        out_of_range(errors, "noise_cascade.noise_mean", "must be finite and non-negative");
    }
    let [low, high] = nc.noise_range;
    if !(low.is_finite() && high.is_finite() && low <= high) {
        invalid(
            errors,
            "noise_cascade.noise_range",
            format!("[{}, {}] is not an ordered finite range", low, high),
        );
    }
    if !nc.top_threshold.is_finite() {
        invalid(errors, "noise_cascade.top_threshold", "must be finite");
    }
    if !nc.top_weight.is_finite() {
        invalid(errors, "noise_cascade.top_weight", "must be finite");
    }
}
