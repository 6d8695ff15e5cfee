use anyhow::Context;
use clap::Parser;
use idpack_collision_report::{CollisionReport, collect_identifiers};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Measures how often identifier ids collide over a list of names.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed passed to every hash function.
    #[arg(short, long, default_value_t = 777)]
    seed: u32,

    /// Keep names containing `_` (skipped by default).
    #[arg(long)]
    keep_underscored: bool,

    /// File with one identifier per line; stdin when omitted.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let lines = read_lines(args.input.as_deref())?;
    let set = collect_identifiers(&lines, args.keep_underscored);

    if set.skipped_invalid > 0 {
        tracing::warn!(
            count = set.skipped_invalid,
            "skipped names with characters outside a-z, 0-9, _"
        );
    }
    tracing::info!(
        identifiers = set.identifiers.len(),
        skipped_underscored = set.skipped_underscored,
        seed = args.seed,
        "measuring collisions"
    );

    let report = CollisionReport::build(&set.identifiers, args.seed)
        .context("failed to hash a collected identifier")?;

    print!("{report}");
    Ok(())
}

fn read_lines(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read identifiers")
}
