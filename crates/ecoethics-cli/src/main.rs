// SPDX-License-Identifier: PMPL-1.0-or-later

//! # EcoEthics CLI
//!
//! Estimates the carbon, energy, water and cost footprint of training and
//! serving an AI model, with a coarse ethical risk score.

mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::{Config, LogConfig, LogFormat};
use ecoethics_engine::{calculate_all, CalculationInput, Scenario};
use ecoethics_report::{
    export_csv, export_json, generate_recommendations, ExportFormat, ScenarioComparison,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ecoethics")]
#[command(about = "AI Model Eco & Ethics Calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the footprint of one configuration
    Calculate {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write output to this file, or into this directory under a
        /// timestamped name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare a configuration against an alternative
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Alternative data center location
        #[arg(long)]
        alt_location: Option<String>,

        /// Alternative accelerator
        #[arg(long)]
        alt_hardware: Option<String>,

        /// Alternative model architecture
        #[arg(long)]
        alt_model_type: Option<String>,

        /// Alternative power usage effectiveness
        #[arg(long)]
        alt_pue: Option<f64>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List locations, hardware and model types
    Tables,

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to .ecoethics/config.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Input values; any flag given overrides the scenario file and config
#[derive(Debug, Default, Args)]
struct InputArgs {
    /// Scenario file (TOML or YAML)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Model size in billions of parameters
    #[arg(long = "params")]
    params_billions: Option<f64>,

    /// Model architecture (dense, moe)
    #[arg(long)]
    model_type: Option<String>,

    /// Training accelerator-hours
    #[arg(long)]
    training_hours: Option<u64>,

    /// Tokens served per day
    #[arg(long)]
    tokens_per_day: Option<u64>,

    /// Days of inference serving
    #[arg(long)]
    inference_days: Option<u32>,

    /// Data center location (e.g. eu-north, "US-West (Oregon)")
    #[arg(long)]
    location: Option<String>,

    /// Accelerator (a100, h100, v100, tpu-v4, tpu-v5)
    #[arg(long)]
    hardware: Option<String>,

    /// Power usage effectiveness, 1.0 to 3.0
    #[arg(long)]
    pue: Option<f64>,
}

impl InputArgs {
    /// Layer config defaults, scenario file and flags into one input
    fn resolve(&self, base: &Scenario) -> Result<CalculationInput> {
        let mut scenario = match self.scenario {
            Some(ref path) => config::load_scenario(path, base)?,
            None => base.clone(),
        };

        let flags = config::ScenarioOverrides {
            params_billions: self.params_billions,
            model_type: self.model_type.clone(),
            training_hours: self.training_hours,
            tokens_per_day: self.tokens_per_day,
            inference_days: self.inference_days,
            location: self.location.clone(),
            hardware: self.hardware.clone(),
            pue: self.pue,
        };
        flags.apply(&mut scenario);

        Ok(scenario.resolve()?)
    }
}

fn init_logging(verbose: bool, log: &LogConfig) {
    let level = if verbose { "debug" } else { log.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Full => builder.init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)?;

    // The subscriber depends on [log], so the config is reported once it exists
    init_logging(cli.verbose, &config.log);
    if config_path.exists() {
        debug!(path = %config_path.display(), ?config, "Loaded configuration");
    } else {
        debug!(path = %config_path.display(), "Config file not found, using defaults");
    }

    match cli.command {
        Commands::Calculate {
            input,
            format,
            output,
        } => {
            let input = input.resolve(&config.scenario)?;
            run_calculate(&input, format, output.as_deref(), &config)?;
        }

        Commands::Compare {
            input,
            alt_location,
            alt_hardware,
            alt_model_type,
            alt_pue,
            format,
        } => {
            let baseline = input.resolve(&config.scenario)?;

            let mut alternative = Scenario::from(&baseline);
            config::ScenarioOverrides {
                location: alt_location,
                hardware: alt_hardware,
                model_type: alt_model_type,
                pue: alt_pue,
                ..Default::default()
            }
            .apply(&mut alternative);
            let alternative = alternative.resolve()?;

            let comparison = ScenarioComparison::between(&baseline, &alternative)?;
            match format {
                OutputFormat::Text => print!("{}", render::comparison_text(&comparison)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&comparison)?)
                }
                OutputFormat::Csv => bail!("CSV output is not available for compare"),
            }
        }

        Commands::Tables => {
            print!("{}", render::tables_text());
        }

        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            config::write_default_config(&path)?;
            println!("Configuration written to: {}", path.display());
        }
    }

    Ok(())
}

fn run_calculate(
    input: &CalculationInput,
    format: OutputFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    info!(?format, location = %input.location, hardware = %input.hardware, "Calculating");
    let result = calculate_all(input)?;

    let (text, export) = match format {
        OutputFormat::Text => {
            let recommendations = generate_recommendations(&result, input);
            (
                render::calculation_text(input, &result, &recommendations),
                None,
            )
        }
        OutputFormat::Json => (
            export_json(input, &result, &config.export)?,
            Some(ExportFormat::Json),
        ),
        OutputFormat::Csv => (export_csv(input, &result)?, Some(ExportFormat::Csv)),
    };

    match output {
        Some(path) => {
            let path = output_path(path, export, &result)?;
            fs::write(&path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Output written to: {}", path.display());
        }
        None => print!("{}", with_trailing_newline(text)),
    }

    Ok(())
}

/// A directory target gets the timestamped export file name
fn output_path(
    path: &Path,
    export: Option<ExportFormat>,
    result: &ecoethics_engine::CalculationResult,
) -> Result<PathBuf> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }
    match export {
        Some(format) => Ok(path.join(format.file_name(result.timestamp))),
        None => bail!(
            "{} is a directory; text output needs a file path",
            path.display()
        ),
    }
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
