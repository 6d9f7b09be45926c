mod persona;
mod render;

use anyhow::{Context, Result};
use cerebra_core::config::LoggingConfig;
use cerebra_core::{random_profile, CerebraConfig, OutputFormat, ProfileExport};
use cerebra_cortex::{Region, Simulation};
use clap::{Args, Parser, Subcommand};
use persona::PersonaArgs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cerebra", author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (TOML)
    #[arg(short, long, global = true, env = "CEREBRA_CONFIG", default_value = "cerebra.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Narrate how each brain region reads a scenario
    Run(RunArgs),
    /// Save the persona as a reusable JSON document
    Export {
        #[command(flatten)]
        persona: PersonaArgs,

        /// Directory to write into (prints the document when omitted)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Generate a random persona export document
    Randomize {
        /// Seed for a reproducible persona
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the persona summary without running a scenario
    Describe(PersonaArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario to simulate
    scenario: Option<String>,

    /// Read the scenario from a file instead
    #[arg(long, value_name = "FILE", conflicts_with = "scenario")]
    scenario_file: Option<PathBuf>,

    #[command(flatten)]
    persona: PersonaArgs,

    /// Print the full run as JSON
    #[arg(long)]
    json: bool,

    /// Pause between stages as configured under [pacing]
    #[arg(long)]
    paced: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config loading logs before the configured filter is known.
    let bootstrap_filter =
        std::env::var("CEREBRA_LOG").unwrap_or_else(|_| LoggingConfig::default().filter);
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&bootstrap_filter))
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        CerebraConfig::load_or_default(&cli.config)
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(args) => run(args, &config).await,
        Command::Export { persona, out } => {
            let export = ProfileExport::new(persona.resolve()?);
            match out {
                Some(dir) => println!("{}", export.save_to_dir(&dir)?.display()),
                None => println!("{}", export.to_json_pretty()?),
            }
            Ok(())
        }
        Command::Randomize { seed } => {
            let profile = match seed {
                Some(seed) => random_profile(&mut StdRng::seed_from_u64(seed)),
                None => random_profile(&mut rand::thread_rng()),
            };
            info!("Generated {} persona", profile.age_group().as_str());
            println!("{}", ProfileExport::new(profile).to_json_pretty()?);
            Ok(())
        }
        Command::Describe(persona) => {
            println!("{}", persona.resolve()?.describe());
            Ok(())
        }
    }
}

/// `RUST_LOG` wins over the configured directive.
fn log_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

async fn run(args: RunArgs, config: &CerebraConfig) -> Result<()> {
    let scenario = match (&args.scenario, &args.scenario_file) {
        (_, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?,
        (Some(text), None) => text.clone(),
        (None, None) => String::new(),
    };
    let profile = args.persona.resolve()?;

    let mut sim = match Simulation::new(&scenario, profile) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let json = args.json || config.output.format == OutputFormat::Json;
    let mut pacing = config.pacing.clone();
    pacing.enabled |= args.paced;
    // JSON is written in one piece, so there is nothing to pace.
    pacing.enabled &= !json;

    info!("Running scenario through {} regions", Region::SEQUENCE.len());
    if !json {
        println!("{}", sim.profile().describe());
        println!();
        for entry in sim.stream() {
            println!("{}", render::stream_line(entry));
        }
        println!();
    }

    while let Some(outcome) = sim.step() {
        let delay = pacing.delay_after(outcome.region == Region::Prefrontal);
        if !json {
            println!("{}", render::stage_block(outcome));
            // The stage's own line in the stream.
            if let Some(entry) = sim.stream().last() {
                println!("{}", render::stream_line(entry));
            }
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let report = sim.run();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        print!("{}", render::summary_block(&report));
    }
    Ok(())
}
