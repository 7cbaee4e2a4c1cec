//! Query benchmark: tree-form range tree vs fractional cascading
//!
//! Two workloads of 100 square queries each, timing every query individually:
//! - fixed n, query side growing from 1% to 20% of the domain
//! - fixed side (5% of the domain), n doubling from 2,000 to 1,024,000
//!
//! Prints average and standard deviation of the per-query time in milliseconds.

use rand::Rng;
use rand::SeedableRng;
use rangetree::prelude::*;
use std::time::Instant;

/// Coordinates are drawn from [1, M]
const M: i64 = 1_000_000;
const QUERIES_PER_WORKLOAD: usize = 100;

fn sorted_point_set<R: Rng>(rng: &mut R, n: usize) -> Vec<Point> {
    let mut points: Vec<Point> = (0..n)
        .map(|id| Point::with_id(rng.random_range(1..=M), rng.random_range(1..=M), id as u64))
        .collect();
    points.sort_by_key(|p| p.x);
    points
}

/// Square queries of side `side`, fully inside the domain
fn workload<R: Rng>(rng: &mut R, side: i64) -> Vec<Query> {
    (0..QUERIES_PER_WORKLOAD)
        .map(|id| {
            let low = Point::new(rng.random_range(1..=M - side), rng.random_range(1..=M - side));
            Query {
                id: id as u64,
                ..Query::square(low, side)
            }
        })
        .collect()
}

fn avg(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn std_dev(samples: &[f64]) -> f64 {
    let mean = avg(samples);
    let squared: f64 = samples.iter().map(|v| (v - mean) * (v - mean)).sum();
    (squared / samples.len() as f64).sqrt()
}

/// Runs every query once, returning per-query times in milliseconds
fn time_queries(
    queries: &[Query],
    mut run: impl FnMut(&Query, &mut Vec<Point>) -> Result<(), RangeTreeError>,
) -> Result<Vec<f64>, RangeTreeError> {
    let mut results = Vec::new();
    let mut times = Vec::with_capacity(queries.len());
    for query in queries {
        let start = Instant::now();
        run(query, &mut results)?;
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    Ok(times)
}

fn bench_pair(
    label: f64,
    tree: &RangeTree,
    cascaded: &CascadedRangeTree,
    queries: &[Query],
) -> Result<(), RangeTreeError> {
    let tree_times = time_queries(queries, |q, out| tree.query_into(&q.low, &q.high, out))?;
    let cascade_times = time_queries(queries, |q, out| cascaded.query_into(&q.low, &q.high, out))?;
    println!(
        "{:>9.0} {:>12.4} {:>14.4} {:>10.5} {:>11.5}",
        label,
        avg(&tree_times),
        avg(&cascade_times),
        std_dev(&tree_times),
        std_dev(&cascade_times)
    );
    Ok(())
}

fn print_header() {
    println!(
        "{:>9} {:>12} {:>14} {:>10} {:>11}",
        "Size", "AverageYTree", "AverageCascade", "StdYTree", "StdCascade"
    );
}

fn main() -> Result<(), RangeTreeError> {
    env_logger::init();

    println!("Range Tree Query Benchmark");
    println!("==========================\n");

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    // Fixed n, growing query side
    let n = 1_000_000;
    let points = sorted_point_set(&mut rng, n);
    let build_start = Instant::now();
    let tree = RangeTree::build(&points, BuildStrategy::Sorted)?;
    let cascaded = CascadedRangeTree::build(&points)?;
    println!(
        "built both indexes over {} points: {:.2}ms\n",
        n,
        build_start.elapsed().as_secs_f64() * 1000.0
    );

    println!("Fixed n = {n}, varying query side");
    print_header();
    for fraction in [0.01, 0.02, 0.05, 0.1, 0.2] {
        let side = (M as f64 * fraction) as i64;
        let queries = workload(&mut rng, side);
        bench_pair(side as f64, &tree, &cascaded, &queries)?;
    }

    // Fixed side, growing n
    let side = M / 20;
    let queries = workload(&mut rng, side);
    println!("\nFixed query side = {side}, varying n");
    print_header();
    for exp in 1..=10 {
        let n = (1_usize << exp) * 1_000;
        let points = sorted_point_set(&mut rng, n);
        let tree = RangeTree::build(&points, BuildStrategy::Sorted)?;
        let cascaded = CascadedRangeTree::build(&points)?;
        bench_pair(n as f64, &tree, &cascaded, &queries)?;
    }

    Ok(())
}
