//! Criterion benchmarks for Dijkstra path search on the built-in maze.
//!
//! The `longest` case walks from the bottom-left corner (1,21) to the
//! top-right corner (35,1), the farthest pair of cells in the maze.
//!
//! Run with: cargo bench -p trollmaze-paths --bench find_path

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use trollmaze_core::{DEFAULT_MAZE, Location, Maze};
use trollmaze_paths::{PathFinder, bfs_distance, find_path};

const ROUTES: &[(&str, Location, Location)] = &[
    ("short", Location::new(1, 1), Location::new(1, 5)),
    ("medium", Location::new(17, 11), Location::new(1, 1)),
    ("longest", Location::new(1, 21), Location::new(35, 1)),
];

fn bench_cached_engine(c: &mut Criterion) {
    let maze = Maze::parse(DEFAULT_MAZE).expect("built-in maze");
    let mut pf = PathFinder::new(maze.width(), maze.height());
    let mut group = c.benchmark_group("find_path_cached");

    for &(name, from, to) in ROUTES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(from, to), |b, &(from, to)| {
            b.iter(|| black_box(pf.find_path(&maze, black_box(from), black_box(to))))
        });
    }

    group.finish();
}

fn bench_fresh_engine(c: &mut Criterion) {
    let maze = Maze::parse(DEFAULT_MAZE).expect("built-in maze");
    let (_, from, to) = ROUTES[2];
    c.bench_function("find_path_fresh/longest", |b| {
        b.iter(|| black_box(find_path(&maze, black_box(from), black_box(to))))
    });
}

fn bench_bfs_oracle(c: &mut Criterion) {
    let maze = Maze::parse(DEFAULT_MAZE).expect("built-in maze");
    let (_, from, to) = ROUTES[2];
    c.bench_function("bfs_distance/longest", |b| {
        b.iter(|| black_box(bfs_distance(&maze, black_box(from), black_box(to))))
    });
}

criterion_group!(
    benches,
    bench_cached_engine,
    bench_fresh_engine,
    bench_bfs_oracle
);
criterion_main!(benches);
