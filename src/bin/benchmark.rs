//! Headless driver: run every algorithm step by step to completion and report.
//!
//! Usage: benchmark [SIZE...] [--seed N] [--config PATH]

use serde::Serialize;
use sort_engine::{is_sorted, EngineConfig, SortEngine, SortError};
use std::time::Instant;

#[derive(Serialize)]
struct RunResult {
    algorithm: String,
    size: usize,
    steps: u64,
    ticks: u64,
    comparisons: u64,
    swaps: u64,
    elapsed_seconds: f64,
    sorted: bool,
}

#[derive(Serialize)]
struct FullResults {
    seed: Option<u64>,
    results: Vec<RunResult>,
    correctness: bool,
}

struct Args {
    sizes: Vec<usize>,
    config: EngineConfig,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut sizes = Vec::new();
    let mut config = EngineConfig::default();
    let mut seed = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse()?);
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = EngineConfig::from_json(&std::fs::read_to_string(path)?)?;
            }
            other => sizes.push(other.parse()?),
        }
    }

    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if sizes.is_empty() {
        sizes = vec![100, 500, 1000, 2000];
    }
    Ok(Args { sizes, config })
}

/// Drive the current algorithm tick by tick, the way a render loop would.
fn run(engine: &mut SortEngine) -> (u64, u64) {
    engine.begin_sort();
    let (mut steps, mut ticks) = (0u64, 0u64);
    while engine.is_sorting() {
        steps += engine.tick() as u64;
        ticks += 1;
    }
    (steps, ticks)
}

/// Run every registered algorithm over the same generated input of `size` elements.
fn bench_size(config: &EngineConfig, size: usize) -> Result<Vec<RunResult>, SortError> {
    let mut engine = SortEngine::with_config(config.clone().with_size(size))?;
    let input = engine.array_snapshot().to_vec();
    let mut results = Vec::new();

    for name in engine.algorithm_names() {
        if !engine.select_algorithm(name) {
            log::warn!("Skipping {}: not registered", name);
            continue;
        }
        engine.set_values(input.clone());
        eprintln!("  {} (n={})", name, size);

        let start = Instant::now();
        let (steps, ticks) = run(&mut engine);
        let wall = start.elapsed().as_secs_f64();

        let metrics = engine.metrics();
        let sorted = is_sorted(engine.array_snapshot());
        log::info!(
            "{} n={} steps={} comparisons={} swaps={} wall={:.4}s",
            name,
            size,
            steps,
            metrics.comparisons,
            metrics.swaps,
            wall
        );

        results.push(RunResult {
            algorithm: name.to_string(),
            size,
            steps,
            ticks,
            comparisons: metrics.comparisons,
            swaps: metrics.swaps,
            elapsed_seconds: metrics.elapsed_seconds,
            sorted,
        });
    }
    Ok(results)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args()?;
    let mut results = Vec::new();
    for &size in &args.sizes {
        results.extend(bench_size(&args.config, size)?);
    }
    let all_correct = results.iter().all(|r| r.sorted);

    let full = FullResults {
        seed: args.config.seed,
        results,
        correctness: all_correct,
    };
    println!("{}", serde_json::to_string(&full)?);
    Ok(())
}
