//! feedgen: synthetic LOB order-flow dataset generator

use anyhow::{Context, Result};
use clap::Parser;
use feedgen::{DEFAULT_MESSAGE_COUNT, DEFAULT_SEED, GeneratorConfig, derive_output_path, write_dataset};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a reproducible order-flow CSV for matching-engine stress tests
#[derive(Parser, Debug)]
#[command(name = "feedgen", version, about)]
struct Cli {
    /// Total number of messages to generate
    #[arg(default_value_t = DEFAULT_MESSAGE_COUNT)]
    count: u64,

    /// RNG seed; the same seed and count reproduce the file byte-for-byte
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Directory the dataset file is written into
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Log level filter
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_target(false)
        .compact()
        .init();

    let path = derive_output_path(&cli.out_dir, cli.count);
    info!(
        "generating {} messages (seed {}) -> {}",
        cli.count,
        cli.seed,
        path.display()
    );

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output directory {}", cli.out_dir.display()))?;
    let file =
        File::create(&path).with_context(|| format!("create output file {}", path.display()))?;

    let config = GeneratorConfig::with_seed(cli.seed);
    let started = Instant::now();
    write_dataset(config, cli.count, BufWriter::new(file))
        .with_context(|| format!("write dataset to {}", path.display()))?;
    let elapsed = started.elapsed();

    let size_bytes = fs::metadata(&path)
        .with_context(|| format!("stat output file {}", path.display()))?
        .len();
    info!(
        "generated {} messages in {:.2}s ({:.0} messages/sec)",
        cli.count,
        elapsed.as_secs_f64(),
        cli.count as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    info!(
        "output: {} ({:.2} MB)",
        path.display(),
        size_bytes as f64 / (1024.0 * 1024.0)
    );
    Ok(())
}
