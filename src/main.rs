mod monte_carlo;
mod percolation;
mod stats;
mod union_find;

use anyhow::Result;
use clap::Parser;

use crate::monte_carlo::MonteCarloExperiment;

/// percolate - Monte Carlo estimation of the percolation threshold
///
/// Runs independent trials on an n-by-n grid, opening random sites until a
/// top-to-bottom path of open sites exists, and reports the mean fraction of
/// open sites at that moment with a 95% confidence interval.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length (the grid is n-by-n)
    #[clap(value_name = "N")]
    n: usize,

    /// Number of independent trials
    #[clap(value_name = "TRIALS")]
    trials: usize,

    /// Fixed base seed for reproducible runs (entropy-seeded if omitted)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Number of threads for parallel trials (0 = rayon default)
    #[clap(short = 't', long = "threads", default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    let mut experiment = MonteCarloExperiment::new(args.n, args.trials)?;
    match args.seed {
        Some(seed) => experiment.run_seeded(seed)?,
        None => experiment.run()?,
    }

    println!("mean                    = {}", experiment.mean());
    println!("stddev                  = {}", experiment.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        experiment.confidence_lo(),
        experiment.confidence_hi()
    );

    Ok(())
}
