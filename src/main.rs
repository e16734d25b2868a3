use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;

use islands_sampling::algorithm::DEFAULT_RESPONSE_RATE;
use islands_sampling::analysis::{StudyReport, load_observations};
use islands_sampling::{RosterConfig, estimate_houses_needed, generate_study_plan, read_participants};

/// Sampling plans and reporting statistics for the island mobility study
#[derive(Debug, Parser)]
#[command(name = "islands-sampling", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the demographically informed sampling plan for every village
    Plan {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        target: usize,
        #[arg(long, default_value_t = DEFAULT_RESPONSE_RATE)]
        response_rate: f64,
    },
    /// Estimate how many houses to draw in a village
    Estimate {
        #[arg(long)]
        houses: u32,
        #[arg(long)]
        population: u32,
        #[arg(long, default_value_t = 20)]
        target: usize,
        #[arg(long, default_value_t = DEFAULT_RESPONSE_RATE)]
        response_rate: f64,
    },
    /// Compute the chart statistics of a finalized dataset
    Report { dataset: PathBuf },
    /// Summarize a previously exported roster
    Status { export: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = RosterConfig::default();
    match cli.command {
        Commands::Plan {
            seed,
            target,
            response_rate,
        } => {
            let config = RosterConfig::builder()
                .study_seed(seed)
                .target_per_group(target)
                .build();
            let plans =
                generate_study_plan(&config, response_rate).context("failed to generate plan")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
            } else {
                for plan in &plans {
                    println!("{plan}");
                }
            }
        }
        Commands::Estimate {
            houses,
            population,
            target,
            response_rate,
        } => {
            let strategy = estimate_houses_needed(houses, population, target, response_rate)
                .context("invalid estimator input")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&strategy)?);
            } else {
                println!(
                    "Average residents per house: {:.2}\nHouses to sample: {}",
                    strategy.avg_per_house, strategy.houses_needed
                );
            }
        }
        Commands::Report { dataset } => {
            let observations = load_observations(&dataset)
                .with_context(|| format!("failed to load {}", dataset.display()))?;
            info!("Loaded {} observations", observations.len());
            let report = StudyReport::build(&observations, &config.groups);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::Status { export } => {
            let participants = read_participants(&export)
                .with_context(|| format!("failed to read {}", export.display()))?;
            let by_group = participants.iter().into_group_map_by(|p| p.group.as_str());
            println!("Total participants: {}", participants.len());
            for group in config
                .groups
                .iter()
                .map(String::as_str)
                .chain(by_group.keys().copied().sorted())
                .unique()
            {
                let rows = by_group.get(group).map_or(&[][..], Vec::as_slice);
                let houses = rows.iter().map(|p| p.house.as_str()).unique().count();
                println!(
                    "{group}: {} participants from {houses} houses (target {})",
                    rows.len(),
                    config.target_per_group
                );
            }
        }
    }

    Ok(())
}
