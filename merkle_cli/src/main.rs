//! Print the Merkle root of a file split into fixed-size blocks.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use merkle_root::MerkleTree;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute the binary Merkle tree root of a file")]
struct Args {
    /// File to hash
    file_path: PathBuf,

    /// Leaf block size in bytes
    block_size: u64,

    /// Log level (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            args.log_level,
        ))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

/// One-line message for a failed run. Error messages already embed their
/// source, so the cause chain is not repeated.
fn diagnostic(err: &anyhow::Error) -> String {
    format!("Error: {err}").replace('\n', " ")
}

fn run(args: &Args) -> Result<()> {
    let cfg = config::validate(&args.file_path, args.block_size)?;
    debug!(
        file = %cfg.file_path.display(),
        file_size = cfg.file_size,
        block_size = cfg.block_size,
        "inputs validated"
    );

    let mut tree = MerkleTree::new();
    tree.make(&cfg.file_path, cfg.block_size)?;

    let root = tree
        .root_hash()
        .ok_or_else(|| anyhow::anyhow!("no root was produced"))?;
    println!("Root: {root}");
    Ok(())
}
