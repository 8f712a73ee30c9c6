//! lrudemo - drives the lrucache public API for manual verification

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lrucache::{LruCache, SharedCache, StatsSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 3)]
    capacity: usize,

    /// Workload to run
    #[arg(short, long, value_enum, default_value_t = Workload::Scenario)]
    workload: Workload,

    /// Operations to issue in the random workload
    #[arg(long, default_value_t = 10_000)]
    ops: u64,

    /// Number of distinct keys in the random workload
    #[arg(long, default_value_t = 64)]
    key_space: u64,

    /// RNG seed for the random workload
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print final statistics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Workload {
    /// Fixed get/set sequence with known results
    Scenario,
    /// Seeded mix of gets and sets over a bounded key space
    Random,
}

/// One step of the scripted scenario
#[derive(Debug, Clone, Copy)]
enum Step {
    Set(i32, i32),
    Get(i32),
}

const SCENARIO: &[Step] = &[
    Step::Set(2, 3),
    Step::Set(3, 4),
    Step::Set(4, 5),
    Step::Get(2),
    Step::Set(5, 6),
    Step::Get(2),
    Step::Get(3),
    Step::Get(4),
    Step::Set(6, 7),
    Step::Set(7, 8),
    Step::Get(4),
    Step::Get(2),
];

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("lrudemo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    match args.workload {
        Workload::Scenario => {
            for result in run_scenario(args.capacity)? {
                match result {
                    Some(value) => println!("{}", value),
                    None => println!("absent"),
                }
            }
        }
        Workload::Random => {
            let stats = run_random(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("hits:      {}", stats.hits);
                println!("misses:    {}", stats.misses);
                println!("inserts:   {}", stats.inserts);
                println!("updates:   {}", stats.updates);
                println!("evictions: {}", stats.evictions);
                println!("hit ratio: {:.3}", stats.hit_ratio);
            }
        }
    }

    Ok(())
}

/// Replay the scripted steps, collecting the result of every `get`
fn run_scenario(capacity: usize) -> Result<Vec<Option<i32>>> {
    let mut cache = LruCache::new(capacity).context("failed to create cache")?;
    let mut results = Vec::new();

    for step in SCENARIO {
        match *step {
            Step::Set(key, value) => cache.set(key, value),
            Step::Get(key) => results.push(cache.get(&key).copied()),
        }
        debug!(?step, state = ?cache, "applied step");
    }

    Ok(results)
}

fn run_random(args: &Args) -> Result<StatsSnapshot> {
    anyhow::ensure!(args.key_space > 0, "key space must be at least 1");

    let cache = SharedCache::new(args.capacity).context("failed to create cache")?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    for op in 0..args.ops {
        let key = rng.gen_range(0..args.key_space);
        if rng.gen_bool(0.5) {
            cache.get(&key);
        } else {
            cache.set(key, op);
        }
    }

    info!(
        resident = cache.len(),
        ops = args.ops,
        "random workload finished"
    );
    Ok(cache.stats().snapshot())
}
