//! Checkers CLI
//!
//! Replay scripted games, count positions with perft and print rule files.

use anyhow::{Context, Result, bail};
use checkers_cli::ReplayScript;
use checkers_core::{GameState, RuleConfig, perft};
use std::env;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Checkers rules engine");
    println!();
    println!("Usage:");
    println!("  checkers replay <script.toml> [--json]");
    println!("  checkers perft <depth> [--rules <file.toml>]");
    println!("  checkers rules");
    println!();
    println!("Examples:");
    println!("  checkers replay demos/penalty.toml");
    println!("  checkers perft 6 --rules demos/flying.toml");
    println!("  RUST_LOG=debug checkers replay demos/opening.toml --json");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_replay(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        print_usage();
        bail!("replay requires a script path");
    };
    let json = args[1..].iter().any(|a| a == "--json" || a == "-j");

    let script = ReplayScript::load(path).with_context(|| format!("loading {path}"))?;
    let table = script
        .replay()
        .with_context(|| format!("replaying {path}"))?;
    let state = table.snapshot();
    info!(moves = script.moves.len(), "replay finished");

    if json {
        println!("{}", table.snapshot_json()?);
    } else {
        print!("{}", state.board);
        println!();
        match state.winner {
            Some(winner) => println!("Winner: {winner}"),
            None => println!("{} to move", state.turn),
        }
    }
    Ok(())
}

fn run_perft(args: &[String]) -> Result<()> {
    let Some(depth) = args.first() else {
        print_usage();
        bail!("perft requires a depth");
    };
    let depth: u8 = depth
        .parse()
        .with_context(|| format!("invalid depth: {depth}"))?;

    let mut rules = RuleConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" | "-r" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--rules requires a file");
                };
                rules = RuleConfig::load(path).with_context(|| format!("loading {path}"))?;
                i += 1;
            }
            other => bail!("unexpected argument: {other}"),
        }
        i += 1;
    }

    let state = GameState::new(rules);
    println!("Rules: {rules:?}");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&state, d);
        println!("depth {d:>2}: {nodes:>12} nodes in {:>10.3?}", start.elapsed());
    }
    Ok(())
}

fn run_rules() -> Result<()> {
    print!("{}", RuleConfig::default().to_toml_string()?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "replay" => run_replay(&args[1..]),
        "perft" => run_perft(&args[1..]),
        "rules" => run_rules(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
