//! expensetracker main entry point

mod console;
mod seed;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use expensetracker_config::{Config, ConfigError};
use expensetracker_core::ExpenseTrackerModel;
use log::{info, warn};

use console::ConsoleListener;
use seed::SeedFile;

#[derive(Parser, Debug)]
#[command(name = "expensetracker")]
#[command(version = "0.1.0")]
#[command(about = "Replay expenses through an observable model and print the table", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Seed file to replay (overrides data.transactions_file)
    #[arg(short, long)]
    transactions: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, missing_config) = match Config::load(&args.config) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            return Err(e).with_context(|| format!("loading {}", args.config.display()));
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if missing_config {
        warn!(
            "Config file {} not found, using defaults",
            args.config.display()
        );
    }

    let seed_path = args
        .transactions
        .unwrap_or_else(|| config.data.transactions_file.clone());
    info!("Loading transactions from {}", seed_path.display());
    let seed = SeedFile::load(&seed_path)?;

    let mut model = ExpenseTrackerModel::new();
    model.register(Rc::new(ConsoleListener::new(config.currency.clone())));

    let summary = seed.replay(&mut model)?;
    if summary.rejected > 0 {
        warn!("{} seed entries were rejected", summary.rejected);
    }

    Ok(())
}
