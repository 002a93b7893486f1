//! tocprune: drop deleted files from a table of contents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tocprune::{config, pipeline, Error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tocprune")]
#[command(about = "Prune table-of-contents entries that point at deleted paths", long_about = None)]
struct Args {
    /// Deleted files or directories, applied in order
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<String>,

    /// Summary JSON to read (defaults to stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Path separator used by article paths
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// Write compact JSON instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    // Command line args take precedence over tocprune.toml
    let cfg = config::Config::load()?.with_overrides(args.separator, args.compact);

    let input = if let Some(path) = &args.summary {
        fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let json = pipeline::run(&cfg, &args.paths, &input)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(())
}
