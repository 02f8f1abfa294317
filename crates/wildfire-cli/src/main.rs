mod config;

use clap::Parser;
use config::{parse_cell, resolve_params};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wildfire::{create_initial_grid, step, Census, DEFAULT_GRID_SIZE, INITIAL_TREE_PROBABILITY};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Grid side length N (NxN)
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Number of steps to run
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// RNG seed (reproducibility)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Chance each cell starts as a tree
    #[arg(long, default_value_t = INITIAL_TREE_PROBABILITY)]
    tree_probability: f64,

    /// JSON file with simulation parameters; flags below override it
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    growth_probability: Option<f64>,

    /// Heading the wind blows toward, degrees
    #[arg(long)]
    wind_direction: Option<f64>,

    #[arg(long)]
    wind_strength: Option<f64>,

    /// Percent
    #[arg(long)]
    humidity: Option<f64>,

    /// Combine burning neighbours into one draw instead of scanning
    #[arg(long)]
    union_spread: bool,

    /// Cell to set on fire before the first step, ROW,COL (repeatable; default: centre)
    #[arg(long, value_parser = parse_cell)]
    ignite: Vec<(usize, usize)>,

    /// Output JSON lines here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Stop once nothing is burning
    #[arg(long)]
    stop_when_extinct: bool,
}

#[derive(Serialize)]
struct CensusRow {
    step: u64,
    #[serde(flatten)]
    census: Census,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let census = match &args.out {
        Some(path) => run(&args, &mut BufWriter::new(File::create(path)?))?,
        None => run(&args, &mut BufWriter::new(io::stdout().lock()))?,
    };
    tracing::info!(?census, "run finished");
    Ok(())
}

/// Seed, ignite, then step, writing one census row per step to `out`.
/// Returns the census after the last step taken.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<Census, Box<dyn std::error::Error>> {
    if args.size == 0 {
        return Err("size must be > 0".into());
    }
    let params = resolve_params(args)?;
    tracing::info!(?params, size = args.size, seed = args.seed, "starting run");

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut grid = create_initial_grid(args.size, args.tree_probability, &mut rng)?;

    let ignitions = if args.ignite.is_empty() {
        vec![(args.size / 2, args.size / 2)]
    } else {
        args.ignite.clone()
    };
    for (row, col) in ignitions {
        if !grid.in_bounds(row, col) {
            tracing::warn!(row, col, "ignition outside the grid ignored");
        }
        grid.ignite(row, col);
    }

    let mut census = grid.census();
    write_row(out, 0, census)?;
    for step_idx in 1..=args.steps {
        grid = step(&grid, &params, &mut rng)?;
        census = grid.census();
        write_row(out, step_idx, census)?;
        if args.stop_when_extinct && census.burning == 0 {
            tracing::info!(step = step_idx, "fire extinct");
            break;
        }
    }
    out.flush()?;
    Ok(census)
}

fn write_row<W: Write>(w: &mut W, step: u64, census: Census) -> io::Result<()> {
    serde_json::to_writer(&mut *w, &CensusRow { step, census })?;
    w.write_all(b"\n")
}
