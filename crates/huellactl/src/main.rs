//! Huella Control - CLI for the Huella pet age engine
//!
//! Runs the same calculation the owner portal runs in its registration and
//! profile forms, so support staff can reproduce what an owner sees.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huellactl")]
#[command(about = "Huella - Pet age and care recommendation tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a pet's age and care recommendations
    Age {
        /// Birth date (ISO 8601, e.g. 2023-05-01)
        #[arg(long, conflicts_with_all = ["years", "months"])]
        birth_date: Option<String>,

        /// Whole years, for pets with an unknown birth date
        #[arg(long)]
        years: Option<u32>,

        /// Extra months on top of --years
        #[arg(long, requires = "years")]
        months: Option<u32>,

        /// Species: dog or cat
        #[arg(long)]
        species: String,

        /// Dog size: small, medium or large (ignored for cats)
        #[arg(long)]
        size: Option<String>,

        /// Emit raw JSON instead of the formatted card
        #[arg(long)]
        json: bool,
    },

    /// Show the life-stage thresholds per species
    Stages,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Age {
            birth_date,
            years,
            months,
            species,
            size,
            json,
        } => commands::age(birth_date, years, months, &species, size.as_deref(), json),
        Commands::Stages => commands::stages(),
    }
}
