//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth] [rules.toml]
//!
//! Examples:
//!   # Default: depth 7 over the built-in positions, default rules
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth and rule file
//!   cargo flamegraph --example perft_bench -p checkers_core -- 8 rules/flying.toml

use checkers_core::{Board, GameState, RuleConfig, Side, perft};
use std::env;
use std::time::{Duration, Instant};

/// Benchmark positions, White to move
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        ".b.b.b.b\nb.b.b.b.\n.b.b.b.b\n........\n........\nw.w.w.w.\n.w.w.w.w\nw.w.w.w.",
    ),
    (
        "Kings midgame",
        ".b...b..\n........\n...b.b..\n..W.....\n...w....\n..w.....\n.....B..\nw.......",
    ),
    (
        "Open kings",
        "........\n..B.....\n........\n....b...\n...W....\n........\n.....W..\n........",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let rules = match args.get(2) {
        Some(path) => match RuleConfig::load(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => RuleConfig::default(),
    };

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!("Rules: {rules:?}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, diagram) in TEST_POSITIONS {
        let board = match Board::from_diagram(diagram) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Skipping {name}: {e}");
                continue;
            }
        };
        let state = GameState::with_board(board, Side::White, rules);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
