// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Scenario runner.
//!
//! Loads `netsy.toml` (if any), applies environment and CLI overrides, builds
//! the configured scenario, runs it and writes the recorded activations as
//! CSV or JSON to stdout or `--output`. Logs go to stderr.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use netsy::config::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    validate_config, NetsyConfig, OutputConfig, OutputFormat, ScenarioKind,
};
use netsy::network::{similarity_to_all, ActivationSeries};
use netsy::observability::{debug_flags_help, init_logging, CrateDebugFlags, ObservabilityConfig};
use netsy::scenarios;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "netsy-run",
    version,
    about = "Run a netsy scenario and write the recorded activations",
    long_about = None,
    after_help = debug_flags_help()
)]
struct Args {
    /// Configuration file (default: search for netsy.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scenario to run: phase_space, hopfield or noise_cascade
    #[arg(short, long)]
    scenario: Option<String>,

    /// Ticks to run (default: scenario default)
    #[arg(long)]
    steps: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Metric sampling interval in ticks
    #[arg(long)]
    sample_every: Option<usize>,

    /// Tick neurons on the rayon pool
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Write activations here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: csv or json
    #[arg(long)]
    format: Option<String>,

    /// trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,

    /// Console log format: text or json
    #[arg(long)]
    log_format: Option<String>,

    /// Run log folder (file-logging feature)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Debug logging for every netsy crate
    #[arg(long, default_value_t = false)]
    debug_all: bool,

    #[arg(long, default_value_t = false)]
    debug_netsy_neural: bool,

    #[arg(long, default_value_t = false)]
    debug_netsy_network: bool,

    #[arg(long, default_value_t = false)]
    debug_netsy_run: bool,
}

impl Args {
    /// CLI tier of the configuration, keyed as `apply_cli_overrides` expects
    fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                overrides.insert(key.to_string(), value);
            }
        };
        put("scenario", self.scenario.clone());
        put("steps", self.steps.map(|v| v.to_string()));
        put("seed", self.seed.map(|v| v.to_string()));
        put("sample_every", self.sample_every.map(|v| v.to_string()));
        put("parallel", self.parallel.then(|| "true".to_string()));
        put(
            "output",
            self.output.as_ref().map(|p| p.to_string_lossy().into_owned()),
        );
        put("format", self.format.clone());
        put("log_level", self.log_level.clone());
        put("log_format", self.log_format.clone());
        overrides
    }

    fn debug_flags(&self) -> CrateDebugFlags {
        let flags = [
            ("--debug-all", self.debug_all),
            ("--debug-netsy-neural", self.debug_netsy_neural),
            ("--debug-netsy-network", self.debug_netsy_network),
            ("--debug-netsy-run", self.debug_netsy_run),
        ];
        CrateDebugFlags::from_args(
            flags
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(flag, _)| flag.to_string()),
        )
        .with_env_overrides()
    }
}

fn resolve_config(args: &Args) -> Result<NetsyConfig> {
    let overrides = args.overrides();
    if let Some(path) = &args.config {
        return load_config(Some(path), Some(&overrides))
            .with_context(|| format!("Failed to load {}", path.display()));
    }
    match find_config_file() {
        Ok(path) => load_config(Some(&path), Some(&overrides))
            .with_context(|| format!("Failed to load {}", path.display())),
        Err(_) => {
            let mut config = NetsyConfig::default();
            apply_environment_overrides(&mut config)?;
            apply_cli_overrides(&mut config, &overrides)?;
            Ok(config)
        }
    }
}

/// Recorded activations plus any sampled metric rows
struct Report {
    series: ActivationSeries,
    metrics: Vec<Vec<f64>>,
}

fn run_scenario(config: &NetsyConfig) -> Result<Report> {
    let steps = config.effective_steps();
    let seed = config.simulation.seed;

    match config.scenario.kind {
        ScenarioKind::PhaseSpace => {
            let mut ps = scenarios::phase_space(&config.phase_space, seed)?;
            ps.network.set_parallel(config.simulation.parallel);
            let series = ps.network.run(steps)?;
            if let Some(last) = series.last() {
                info!(
                    excitatory = last[ps.excitatory.index()],
                    inhibitory = last[ps.inhibitory.index()],
                    "Final phase-space point"
                );
            }
            Ok(Report {
                series,
                metrics: Vec::new(),
            })
        }
        ScenarioKind::Hopfield => {
            let scenarios::Hopfield {
                mut network,
                population,
                patterns,
            } = scenarios::hopfield(&config.hopfield, seed)?;
            network.set_parallel(config.simulation.parallel);

            let (samples, series) =
                network.run_and_get_results(steps, config.simulation.sample_every, |net| {
                    similarity_to_all(net, &population, &patterns)
                })?;
            let metrics = samples.into_iter().collect::<netsy::neural::Result<Vec<_>>>()?;
            if let Some(last) = metrics.last() {
                info!(similarities = ?last, "Final pattern similarities");
            }
            Ok(Report { series, metrics })
        }
        ScenarioKind::NoiseCascade => {
            let mut nc = scenarios::noise_cascade(&config.noise_cascade, seed)?;
            nc.network.set_parallel(config.simulation.parallel);
            let series = nc.network.run(steps)?;
            let top_spikes = series
                .neuron(nc.top)?
                .iter()
                .filter(|signal| **signal > 0.0)
                .count();
            info!(top_spikes, "Noise cascade finished");
            Ok(Report {
                series,
                metrics: Vec::new(),
            })
        }
    }
}

fn write_report(output: &OutputConfig, report: &Report) -> Result<()> {
    let writer: Box<dyn Write> = match &output.path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match output.format {
        OutputFormat::Csv => {
            if !report.metrics.is_empty() {
                warn!("CSV output carries activations only; use --format json for metrics");
            }
            report.series.write_csv(writer)?;
        }
        OutputFormat::Json => {
            let activations: Vec<&[f64]> = report.series.iter().collect();
            let body = serde_json::json!({
                "names": report.series.names(),
                "activations": activations,
                "metrics": report.metrics,
            });
            let mut writer = writer;
            serde_json::to_writer(&mut writer, &body)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    validate_config(&config)?;

    let observability = ObservabilityConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.parse()?,
        log_dir: args.log_dir.clone(),
        ..Default::default()
    };
    let _logging = init_logging(&args.debug_flags(), &observability)?;

    info!(
        scenario = %config.scenario.kind,
        steps = config.effective_steps(),
        seed = ?config.simulation.seed,
        parallel = config.simulation.parallel,
        "Starting netsy-run"
    );

    let report = run_scenario(&config)?;
    write_report(&config.output, &report)?;

    info!(ticks = report.series.len(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_arguments_become_overrides() {
        let args = Args::try_parse_from([
            "netsy-run",
            "--scenario",
            "hopfield",
            "--steps",
            "140",
            "--parallel",
            "--output",
            "run.json",
            "--format",
            "json",
        ])
        .unwrap();

        let mut config = NetsyConfig::default();
        apply_cli_overrides(&mut config, &args.overrides()).unwrap();

        assert_eq!(config.scenario.kind, ScenarioKind::Hopfield);
        assert_eq!(config.simulation.steps, Some(140));
        assert!(config.simulation.parallel);
        assert_eq!(config.output.path, Some(PathBuf::from("run.json")));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn test_bad_values_fail_instead_of_defaulting() {
        assert!(Args::try_parse_from(["netsy-run", "--steps", "1O0"]).is_err());
        assert!(Args::try_parse_from(["netsy-run", "--bogus"]).is_err());

        let args = Args::try_parse_from(["netsy-run", "--scenario", "hopfeld"]).unwrap();
        let mut config = NetsyConfig::default();
        assert!(apply_cli_overrides(&mut config, &args.overrides()).is_err());
    }

    #[test]
    fn test_debug_flags() {
        let args = Args::try_parse_from(["netsy-run", "--debug-netsy-network"]).unwrap();
        let flags = args.debug_flags();
        assert!(flags.is_enabled("netsy-network"));

        let args = Args::try_parse_from(["netsy-run", "--debug-all"]).unwrap();
        let flags = args.debug_flags();
        assert!(flags.is_enabled("netsy-neural"));
        assert!(flags.is_enabled("netsy-run"));
    }
}
