use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lcg_recover::{
    Lcg, LcgRecoverer, RecoveredParameters, SampleWindow, SearchConfig, SearchOutcome,
};

/// Window searched when no command is given
const DEMO_WINDOW: [i64; 5] = [157, 5054, 25789, 13214, 16605];

/// Recover LCG parameters from five consecutive outputs
#[derive(Parser, Debug)]
#[command(name = "lcg-recover")]
#[command(about = "Recover LCG parameters and predict the next output", long_about = None)]
#[command(version)]
struct Cli {
    /// Search configuration file (YAML)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Largest candidate modulus (overrides config)
    #[arg(short = 'b', long, global = true)]
    bound: Option<i64>,

    /// Number of parallel search workers (overrides config)
    #[arg(short = 'w', long, global = true)]
    workers: Option<usize>,

    /// Stop all workers as soon as one finds a match
    #[arg(long, global = true)]
    early_exit: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict the output following five samples
    Predict {
        /// Five consecutive outputs x0..x4
        #[arg(num_args = 5, value_name = "SAMPLE", required = true)]
        samples: Vec<i64>,
    },

    /// Print the recovered (a, c, m) with search statistics
    Recover {
        /// Five consecutive outputs x0..x4
        #[arg(num_args = 5, value_name = "SAMPLE", required = true)]
        samples: Vec<i64>,
    },

    /// Print consecutive outputs of a known generator, seed first
    Generate {
        #[arg(long)]
        multiplier: i64,

        #[arg(long)]
        increment: i64,

        #[arg(long)]
        modulus: i64,

        #[arg(long)]
        seed: i64,

        /// Number of outputs to print
        #[arg(long, default_value = "5")]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Some(Command::Predict { samples }) => run_predict(config, &samples),
        Some(Command::Recover { samples }) => run_recover(config, &samples),
        Some(Command::Generate {
            multiplier,
            increment,
            modulus,
            seed,
            count,
        }) => {
            let params = RecoveredParameters::new(multiplier, increment, modulus);
            run_generate(params, seed, count)
        }
        None => run_predict(config, &DEMO_WINDOW),
    }
}

/// Config file (or defaults) with command line overrides applied
fn resolve_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    if let Some(bound) = cli.bound {
        config.bound = bound;
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if cli.early_exit {
        config.early_exit = true;
    }

    config.validate()?;
    Ok(config)
}

fn run_predict(config: SearchConfig, samples: &[i64]) -> Result<()> {
    let window = SampleWindow::from_slice(samples)?;
    let recoverer = LcgRecoverer::new(config)?;

    match recoverer.predict_next(window) {
        Some(next) => println!("Next number: {}", next),
        None => println!("No valid parameters found"),
    }

    Ok(())
}

fn run_recover(config: SearchConfig, samples: &[i64]) -> Result<()> {
    let window = SampleWindow::from_slice(samples)?;
    let recoverer = LcgRecoverer::new(config)?;
    let report = recoverer.find_parameters_with_stats(window);

    match report.outcome {
        SearchOutcome::Found(params) => {
            println!("{}", params);
            println!("Next number: {}", params.step(window.last()));
        }
        SearchOutcome::NotFound => println!("No valid parameters found"),
    }

    let stats = report.stats;
    println!(
        "Searched {} moduli, {} workers: {} degenerate, {} no inverse, {} rejected, {} matched",
        stats.tested,
        stats.workers,
        stats.degenerate,
        stats.not_invertible,
        stats.rejected,
        stats.matched
    );

    Ok(())
}

fn run_generate(params: RecoveredParameters, seed: i64, count: usize) -> Result<()> {
    let outputs: Vec<String> = Lcg::new(params, seed)?
        .take(count)
        .map(|x| x.to_string())
        .collect();
    println!("{}", outputs.join(" "));
    Ok(())
}
