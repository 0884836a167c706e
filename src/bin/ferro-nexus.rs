// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-nexus command-line interface
//!
//! Validate variant identifiers and show their Genome Nexus annotations the
//! way the variant page renders them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::error;

use ferro_nexus::logging::init_from_config;
use ferro_nexus::resolve::AnnotationView;
use ferro_nexus::search::{History, SearchController, SearchOutcome};
use ferro_nexus::variant::parse_genomic_variant;
use ferro_nexus::{GenomeNexusClient, NexusConfig, NexusError};

#[derive(Parser)]
#[command(name = "ferro-nexus")]
#[command(about = "Genomic variant search and annotation lookup via Genome Nexus")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check variant identifiers and print their normalized form
    Validate {
        /// Variant identifiers (e.g. 17:g.41242962_41242963insGA)
        #[arg(required = true)]
        variants: Vec<String>,
    },

    /// Fetch and display the annotation of one variant
    Annotate {
        /// Variant identifier
        variant: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Override the Genome Nexus base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Describe the knowledge base behind each field (text output)
        #[arg(long)]
        explain: bool,
    },

    /// Generate a sample configuration file
    Config {
        /// Output path for configuration file
        #[arg(short, long, default_value = ".ferro-nexus.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateOutput<'a> {
    variant: &'a str,
    #[serde(flatten)]
    view: &'a AnnotationView,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.detailed_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, NexusError> {
    if let Commands::Config { output, force } = &cli.command {
        return config_command(output, *force);
    }

    let config = NexusConfig::load(cli.config.as_deref())?;
    let mut logging = config.logging.clone();
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    logging.json |= cli.json_logs;
    init_from_config(&logging)?;

    match cli.command {
        Commands::Validate { variants } => Ok(validate_command(&variants)),
        Commands::Annotate {
            variant,
            format,
            base_url,
            explain,
        } => annotate_command(config, &variant, format, base_url, explain).await,
        Commands::Config { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn validate_command(variants: &[String]) -> ExitCode {
    let mut all_valid = true;

    for input in variants {
        match parse_genomic_variant(input) {
            Ok(variant) => println!("{}", variant),
            Err(e) => {
                all_valid = false;
                eprintln!("{}", e.detailed_message());
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn annotate_command(
    mut config: NexusConfig,
    variant: &str,
    format: OutputFormat,
    base_url: Option<String>,
    explain: bool,
) -> Result<ExitCode, NexusError> {
    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let client = GenomeNexusClient::new(&config.api)?;
    let controller = SearchController::new(client, History::new());

    let outcome = controller.search(variant).await;
    let SearchOutcome::Found(record) = &outcome else {
        let state = controller.store().snapshot();
        if let Some(message) = state.alert_message() {
            eprintln!("{}: {}", message, variant.trim());
        }
        if let SearchOutcome::NoResult { reason } = &outcome {
            eprintln!("  {}", reason);
        }
        return Ok(ExitCode::FAILURE);
    };

    let view = AnnotationView::resolve(Some(record.as_ref()));
    match format {
        OutputFormat::Json => {
            let output = AnnotateOutput {
                variant: &record.variant,
                view: &view,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_view(&record.variant, &view, explain),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_view(variant: &str, view: &AnnotationView, explain: bool) {
    println!("{}", variant);
    for (family, field) in view.fields() {
        let class = field
            .category_class
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        println!(
            "  {:<22} {}{}  {}",
            format!("{}:", family.label()),
            field.display_value,
            class,
            field.reference_url
        );
        if explain {
            println!("  {:<22} {}", "", family.tooltip());
        }
    }
}

fn config_command(output: &std::path::Path, force: bool) -> Result<ExitCode, NexusError> {
    if output.exists() && !force {
        eprintln!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output, NexusConfig::sample())?;
    println!("Sample configuration written to: {}", output.display());
    Ok(ExitCode::SUCCESS)
}
