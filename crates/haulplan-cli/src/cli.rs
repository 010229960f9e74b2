//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl From<haulplan_app::OutputFormat> for OutputFormat {
    fn from(value: haulplan_app::OutputFormat) -> Self {
        match value {
            haulplan_app::OutputFormat::Table => OutputFormat::Table,
            haulplan_app::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<OutputFormat> for haulplan_app::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => haulplan_app::OutputFormat::Table,
            OutputFormat::Json => haulplan_app::OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "haulplan")]
#[command(version)]
#[command(about = "Load planning for equipment dismantling and inland freight quotes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan trailer loads for a cargo manifest
    Plan {
        /// Path to a cargo manifest (.csv or .json)
        manifest: PathBuf,

        /// Write the full plan as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Custom trailer catalog file (JSON array of trucks)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Recommend a trailer for a manifest without computing placements
    Check {
        /// Path to a cargo manifest (.csv or .json)
        manifest: PathBuf,

        /// Custom trailer catalog file (JSON array of trucks)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the trailer catalog
    Catalog {
        /// Filter by category (e.g. FLATBED, STEP_DECK, RGN)
        #[arg(long)]
        category: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the legal length limit in feet
        #[arg(long)]
        set_max_length: Option<f64>,

        /// Set the legal width limit in feet
        #[arg(long)]
        set_max_width: Option<f64>,

        /// Set the legal cargo height limit in feet
        #[arg(long)]
        set_max_height: Option<f64>,

        /// Set the legal gross weight limit in pounds
        #[arg(long)]
        set_max_weight: Option<f64>,

        /// Set the per-axle weight threshold in pounds
        #[arg(long)]
        set_axle_limit: Option<f64>,

        /// Set the default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set a custom trailer catalog file (empty string clears it)
        #[arg(long)]
        set_catalog: Option<PathBuf>,
    },
}
