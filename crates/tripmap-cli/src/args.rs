use clap::{Parser, Subcommand};

/// CLI arguments for tripmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "tripmap",
    version,
    about = "CLI for inspecting a travel tracker country snapshot"
)]
pub struct CliArgs {
    /// Path to the countries JSON snapshot (default: data/countries.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show visit statistics for the snapshot
    Stats,

    /// List all countries with their visit status
    Countries,

    /// Resolve a boundary-dataset name to a country
    Resolve {
        /// Boundary name as it appears in the dataset (e.g. "United States of America")
        name: String,
    },

    /// Show the computed map style for a boundary name
    Style {
        /// Boundary name as it appears in the dataset
        name: String,

        /// Code of the currently selected country, if any
        #[arg(long)]
        selected: Option<String>,
    },

    /// List the alias spellings registered for a country code
    Aliases {
        /// Country code (e.g. US)
        code: String,
    },
}
