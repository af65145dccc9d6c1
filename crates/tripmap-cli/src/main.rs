//! tripmap-cli — Command-line interface for tripmap-core
//!
//! This binary inspects a travel tracker country snapshot from your
//! terminal. It supports printing visit statistics, listing countries,
//! resolving boundary-dataset names against the registry, and showing the
//! map style a boundary would be painted with.
//!
//! Usage examples
//! --------------
//!
//! - Show visit statistics
//!   $ tripmap-cli stats
//!
//! - List all countries with status
//!   $ tripmap-cli countries
//!
//! - Resolve a boundary name (alias table first, then display name)
//!   $ tripmap-cli resolve "United States of America"
//!
//! - Show the style a boundary would get, with FR selected
//!   $ tripmap-cli style France --selected FR
//!
//! - List alias spellings for a code
//!   $ tripmap-cli aliases US
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `data/countries.json` bundled with this crate;
//! use `--input <path>` to point at a snapshot exported from your own
//! tracker backend.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tripmap_core::alias::AliasTable;
use tripmap_core::model::load_countries_from_path;
use tripmap_core::resolve::Registry;
use tripmap_core::stats::TravelStats;
use tripmap_core::style::style_for;
use tripmap_core::VisitStatus;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let input_path = args.input.unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/countries.json").to_string()
    });

    let countries = load_countries_from_path(&input_path)?;
    let registry = Registry::with_builtin_aliases(&countries);

    match args.command {
        Commands::Stats => {
            let stats = TravelStats::from_countries(&countries);
            println!("Travel statistics:");
            println!("  Countries: {}", stats.total);
            println!("  Visited: {}", stats.visited);
            println!("  Upcoming: {}", stats.upcoming);
            println!("  Unvisited: {}", stats.unvisited);
            println!("  Visited share: {:.1}%", stats.percent_visited());
        }

        Commands::Countries => {
            for c in &countries {
                let marker = match c.status {
                    VisitStatus::Visited => "✓",
                    VisitStatus::Upcoming => "…",
                    VisitStatus::Unvisited => " ",
                };
                match &c.visited_date {
                    Some(date) => println!("[{marker}] {} ({}) — {date}", c.name(), c.code()),
                    None => println!("[{marker}] {} ({})", c.name(), c.code()),
                }
            }
        }

        Commands::Resolve { name } => match registry.resolve(&name) {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Code: {}", c.code());
                println!("Status: {:?}", c.status());
                if let Some(date) = &c.visited_date {
                    println!("Visited: {date}");
                }
            }
            None => {
                println!("Unmapped boundary: {name}");
            }
        },

        Commands::Style { name, selected } => {
            let selected_id = selected
                .as_deref()
                .and_then(|code| registry.find_by_code(code))
                .map(|c| c.id);
            let country = registry.resolve(&name);
            let style = style_for(country, selected_id);
            println!("{}", serde_json::to_string_pretty(&style)?);
        }

        Commands::Aliases { code } => {
            let aliases = AliasTable::builtin().aliases_for(&code);
            if aliases.is_empty() {
                eprintln!("No aliases registered for: {code}");
            } else {
                for alias in aliases {
                    println!("{alias}");
                }
            }
        }
    }

    Ok(())
}
