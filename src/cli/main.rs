//! Offline operator tool: validate datasets and run the tools from a shell.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daas::catalog::load_catalog;
use daas::config::Config;
use daas::flood::FloodDataResponse;
use daas::locator::{KindFilter, LocatorOutcome};
use daas::Toolkit;

#[derive(Parser, Debug)]
#[command(name = "daas")]
#[command(about = "Query the disaster-response datasets")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Places dataset (overrides config)
    #[arg(long, global = true)]
    places: Option<PathBuf>,

    /// Facilities dataset (overrides config)
    #[arg(long, global = true)]
    facilities: Option<PathBuf>,

    /// Safety tips dataset (overrides config)
    #[arg(long, global = true)]
    tips: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every dataset and report record counts
    Check,

    /// All facilities within a radius of a place, nearest first (JSON)
    Nearby {
        place: String,

        /// Search radius in kilometers
        #[arg(long)]
        max_distance_km: Option<f64>,
    },

    /// Nearest shelters or hospitals, as shown to a user
    Shelters {
        place: String,

        /// any, shelter, or hospital
        #[arg(long, default_value = "any")]
        kind: KindFilter,

        #[arg(long)]
        radius_km: Option<f64>,

        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of display lines
        #[arg(long)]
        json: bool,
    },

    /// Flood intensity recorded for a place
    Flood {
        place: String,

        /// Print the user-facing severity description instead of JSON
        #[arg(long)]
        describe: bool,
    },

    /// Safety tips for one or more categories
    Tips {
        #[arg(required = true)]
        categories: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(places) = args.places {
        config.datasets.places = places;
    }
    if let Some(facilities) = args.facilities {
        config.datasets.facilities = facilities;
    }
    if let Some(tips) = args.tips {
        config.datasets.tips = tips;
    }

    let catalog = load_catalog(&config.datasets).context("Failed to load datasets")?;
    let toolkit = Toolkit::new(catalog, config.locator.clone());

    match args.command {
        Command::Check => {
            let catalog = toolkit.catalog();
            println!("places:     {}", catalog.places.len());
            println!("facilities: {}", catalog.facilities.len());
            println!("tips:       {}", catalog.tips.len());
        }
        Command::Nearby {
            place,
            max_distance_km,
        } => {
            let results = toolkit.find_nearby_facilities(&place, max_distance_km);
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Shelters {
            place,
            kind,
            radius_km,
            limit,
            json,
        } => {
            let outcome = toolkit.locate_shelters(&place, kind, radius_km, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(outcome.results())?);
            } else {
                match &outcome {
                    LocatorOutcome::PlaceNotFound => {
                        println!("Place '{}' not found.", place)
                    }
                    LocatorOutcome::NoneInRange => {
                        println!("No matching facility found near '{}'.", place)
                    }
                    LocatorOutcome::Found(_) => {
                        for line in outcome.lines() {
                            println!("--> {}", line);
                        }
                    }
                }
            }
        }
        Command::Flood { place, describe } => {
            let response = toolkit.flood_data_tool(&place);
            if describe {
                match &response {
                    FloodDataResponse::Success { intensity } => match intensity.severity() {
                        Some(severity) => println!("{}", severity.description()),
                        None => println!("Flood intensity '{}' is not recognised.", intensity),
                    },
                    FloodDataResponse::Error { error_message } => println!("{}", error_message),
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::Tips { categories } => {
            for tip in toolkit.get_tips_by_categories(&categories) {
                println!("- {}", tip);
            }
        }
    }

    Ok(())
}
