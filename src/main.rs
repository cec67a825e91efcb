use std::{convert::Infallible, io};

use anyhow::Ok;
use barbell_rs::{
    Barbell, PlateError, PlateSet, bar::DEFAULT_BAR_WEIGHT, plate::format_weight,
    warmup::DEFAULT_WARMUP_SETS,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Work out which plates to load on a barbell")]
struct Args {
    /// Weight of the empty bar
    #[arg(long, global = true, default_value_t = DEFAULT_BAR_WEIGHT)]
    bar: f64,

    /// Plate weights available for each side, heaviest first
    #[arg(long, global = true, default_value_t = PlateSet::default())]
    plates: PlateSet,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plates needed for a single total
    Plates {
        #[arg(value_parser = lenient_weight, allow_hyphen_values = true)]
        total: f64,
    },
    /// Warmup totals building up to a working weight, with plates for each
    Warmup {
        #[arg(value_parser = lenient_weight, allow_hyphen_values = true)]
        start: f64,
        #[arg(value_parser = lenient_weight, allow_hyphen_values = true)]
        working: f64,
        /// Number of warmup sets before the working set
        #[arg(long, default_value_t = DEFAULT_WARMUP_SETS)]
        sets: usize,
    },
}

// Unparsable input is passed on as NaN so the planner reports it like any other bad weight.
fn lenient_weight(s: &str) -> Result<f64, Infallible> {
    Result::Ok(s.trim().parse::<f64>().unwrap_or(f64::NAN))
}

fn hint_unmatchable(barbell: &Barbell, error: PlateError) {
    if error == PlateError::Unmatchable {
        eprintln!(
            "The heaviest total this bar can be loaded to is {} lb.",
            format_weight(barbell.max_total())
        );
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let barbell = Barbell::new(args.bar, args.plates)?;
    info!(%barbell, "configured barbell");

    match args.command {
        Command::Plates { total } => {
            let selection = barbell
                .select(total)
                .inspect_err(|error| hint_unmatchable(&barbell, *error))?;
            println!("{selection}");
        }
        Command::Warmup {
            start,
            working,
            sets,
        } => {
            let plan = barbell
                .plan(start, working, sets)
                .inspect_err(|error| hint_unmatchable(&barbell, error.cause()))?;
            println!("{plan}");
        }
    }

    Ok(())
}
