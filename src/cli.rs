use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::search::search;
use crate::space::build_value_space;
use crate::{bench, first_solution};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - solve the Countdown numbers round exhaustively
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every arithmetic combination of the source numbers hitting the target")]
#[command(version)]
pub struct CliArgs {
    /// Source numbers followed by the target (e.g. `25 50 3 6 7 8 952`).
    /// With no numbers at all, runs randomized benchmark trials instead.
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Stop after the first solution
    #[arg(short, long)]
    pub first: bool,

    /// Number of benchmark trials when no numbers are given
    #[arg(long, default_value_t = 100)]
    pub trials: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    if args.numbers.is_empty() {
        return bench::run(args.trials);
    }

    let (target, items) = match args.numbers.split_last() {
        Some((&target, items)) if !items.is_empty() => (target, items),
        _ => bail!("need at least one source number and a target"),
    };

    info!("searching for {} from {:?}", target, items);

    if args.first {
        match first_solution(items, target).context("search failed")? {
            Some(claim) => println!("{}", claim),
            None => println!("Not possible!"),
        }
        return Ok(());
    }

    let space = build_value_space(items).context("invalid source numbers")?;
    let mut found = 0usize;
    for claim in search(&space, target) {
        let claim = claim.context("search failed")?;
        println!("{}", claim);
        found += 1;
    }
    if found == 0 {
        println!("Not possible!");
    } else {
        info!("{} claims found", found);
    }
    Ok(())
}
