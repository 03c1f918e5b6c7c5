use std::time::Instant;

use rayon::prelude::*;

use checkers_core::{Board, GameState, RuleConfig, Side, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 50_000;

const MIDGAME: &str = "
    .b...b..
    ........
    ...b.b..
    ..W.....
    ...w....
    ..w.....
    .....B..
    w.......
";

fn penalty() -> RuleConfig {
    RuleConfig {
        must_capture: true,
        skip_capture_penalty_remove_moved: true,
        ..Default::default()
    }
}

fn backward() -> RuleConfig {
    RuleConfig {
        men_backward_capture: true,
        ..Default::default()
    }
}

fn flying() -> RuleConfig {
    RuleConfig {
        flying_king_move: true,
        flying_king_capture: true,
        ..Default::default()
    }
}

struct Case {
    name: &'static str,
    state: GameState,
    depths: &'static [(u8, u64)],
}

fn cases() -> Vec<Case> {
    let mid = Board::from_diagram(MIDGAME).unwrap();
    vec![
        Case {
            name: "start/default",
            state: GameState::new(RuleConfig::default()),
            depths: &[(1, 7), (2, 49), (3, 379), (4, 2872), (5, 23582), (6, 189143)],
        },
        Case {
            name: "start/penalty",
            state: GameState::new(penalty()),
            depths: &[(1, 7), (2, 49), (3, 379), (4, 2888), (5, 23771), (6, 191229)],
        },
        Case {
            name: "start/backward",
            state: GameState::new(backward()),
            depths: &[(4, 2872), (5, 23611), (6, 189661)],
        },
        Case {
            name: "midgame/default",
            state: GameState::with_board(mid, Side::White, RuleConfig::default()),
            depths: &[(1, 6), (2, 69), (3, 449), (4, 4630)],
        },
        Case {
            name: "midgame/penalty",
            state: GameState::with_board(mid, Side::White, penalty()),
            depths: &[(1, 6), (2, 70), (3, 358), (4, 3292)],
        },
        Case {
            name: "midgame/backward",
            state: GameState::with_board(mid, Side::White, backward()),
            depths: &[(1, 6), (2, 70), (3, 458), (4, 4770)],
        },
        Case {
            name: "midgame/flying",
            state: GameState::with_board(mid, Side::White, flying()),
            depths: &[(1, 8), (2, 115), (3, 948), (4, 12630)],
        },
    ]
}

#[test]
fn perft_reference_counts() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    cases().par_iter().for_each(|case| {
        let case_start = Instant::now();
        let mut ran_depths = Vec::new();

        for &(depth, expected) in case.depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for {} (expected {} nodes); set {}=1 to run all.",
                    depth, case.name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&case.state, depth);
            assert!(
                got == expected,
                "Perft mismatch for {} at depth {}: expected {}, got {}",
                case.name,
                depth,
                expected,
                got
            );
            ran_depths.push(depth);
        }

        eprintln!(
            "{}: depths {:?} ok in {:?}",
            case.name,
            ran_depths,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_divide_sums_to_perft() {
    for case in cases() {
        for depth in 1..=3 {
            let divided: u64 = perft_divide(&case.state, depth).iter().map(|(_, n)| n).sum();
            assert_eq!(divided, perft(&case.state, depth), "{} depth {}", case.name, depth);
        }
    }
}

#[test]
fn perft_of_decided_game_is_one_leaf() {
    let board = Board::from_diagram(
        "
        ........
        ........
        ........
        ........
        ........
        w.......
        ........
        ........
        ",
    )
    .unwrap();
    let mut state = GameState::with_board(board, Side::Black, RuleConfig::default());
    state.winner = Some(Side::White);
    assert_eq!(perft(&state, 3), 1);
    assert!(perft_divide(&state, 3).is_empty());
}
