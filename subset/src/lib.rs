//! subset - prints `k` tokens chosen uniformly at random from its input.
//!
//! Every whitespace-separated token read from the input is enqueued on a
//! [`RandomizedQueue`]; then `k` of them are dequeued and written one per
//! line. Each token is printed at most once.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use randqueue::randomized::RandomizedQueue;

#[derive(Debug, Parser)]
#[command(name = "subset")]
#[command(about = "Prints k tokens chosen uniformly at random from standard input")]
pub struct SubsetArgs {
    /// Number of tokens to print
    pub count: usize,

    /// Seed for the random source; entropy-seeded when absent
    #[arg(long, env = "SUBSET_SEED")]
    pub seed: Option<u64>,

    /// Log filter directive, overriding `RUST_LOG`
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Reads every token from `input` and writes `args.count` of them to
/// `output`, returning how many were read.
///
/// # Errors
///
/// Fails if reading or writing fails, or if fewer than `args.count` tokens
/// were read. Nothing is written in the latter case.
pub fn run<R: BufRead, W: Write>(args: &SubsetArgs, input: R, mut output: W) -> anyhow::Result<usize> {
    let mut queue = args
        .seed
        .map_or_else(RandomizedQueue::new, RandomizedQueue::with_seed);

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        queue.extend(line.split_whitespace().map(str::to_owned));
    }
    let available = queue.len();
    tracing::debug!(available, count = args.count, seed = ?args.seed, "input read");

    if args.count > available {
        bail!(
            "cannot choose {} tokens: only {available} available",
            args.count
        );
    }

    for _ in 0..args.count {
        let token = queue.dequeue()?;
        writeln!(output, "{token}").context("failed to write output")?;
    }
    output.flush().context("failed to flush output")?;

    tracing::debug!(remaining = queue.len(), "subset written");
    Ok(available)
}
