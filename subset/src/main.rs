//! subset - command-line entry point.
//!
//! Usage:
//!   subset <K> [--seed <SEED>] [--log-level <FILTER>] < input.txt

use std::io::{self, BufWriter};

use clap::Parser;
use subset::SubsetArgs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = SubsetArgs::parse();
    init_tracing(args.log_level.as_deref());

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    subset::run(&args, input, output)?;
    Ok(())
}

fn init_tracing(directive: Option<&str>) {
    let filter = directive.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
