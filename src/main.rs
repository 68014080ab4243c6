mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use card_forge::{
    build_card_with_factor, CardRenderer, DistributionPlotter, Histogram, SimulationConfig, Simulator, StatDistribution,
    TextCardRenderer,
};
use cli::{Cli, Commands};

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            SimulationConfig::from_toml_str(&text).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_forge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Simulate {
            packs,
            seed,
            distribution,
            mean,
            std_dev,
            samples,
            verbose,
            plot,
            parallel,
            json,
        } => {
            if let Some(packs) = packs {
                config.pack_count = packs;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(name) = distribution {
                config.sampler.distribution = name.parse::<StatDistribution>()?;
            }
            if let Some(mean) = mean {
                config.sampler.mean = mean;
            }
            if let Some(std_dev) = std_dev {
                config.sampler.std_dev = std_dev;
            }
            if let Some(samples) = samples {
                config.pack.sample_count = samples;
            }

            let simulator = Simulator::new(config).context("Invalid simulation config")?;
            let cfg = simulator.config();
            info!(
                packs = cfg.pack_count,
                seed = cfg.seed,
                distribution = %cfg.sampler.distribution,
                "Starting simulation"
            );

            let mut histogram = Histogram::default();
            let tally = if verbose || plot {
                simulator.run_session_observed(|index, pack| {
                    if verbose {
                        println!("Pack {}", index + 1);
                        for card in pack.iter() {
                            println!("  {card}");
                        }
                    }
                    if plot {
                        histogram.plot(&pack.samples, &format!("Pack {index} health"));
                    }
                })
            } else if parallel {
                simulator.run_session_parallel()
            } else {
                simulator.run_session()
            }
            .context("Simulation failed")?;

            let summary = tally.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }

            if plot {
                println!();
                print!("{histogram}");
            }
        }

        Commands::Card { health, attack, factor } => {
            let card = build_card_with_factor(&config.card, health, attack, factor);
            println!("{card}");
            println!("{}", TextCardRenderer.render(&card));
        }

        Commands::DefaultConfig => {
            print!("{}", toml::to_string_pretty(&SimulationConfig::default())?);
        }
    }

    Ok(())
}
