use crate::{game::GameState, movegen::all_moves, types::Move};

/// Pure perft node count.
/// Counts the states reachable in exactly `depth` accepted moves; decided
/// games are counted as leaves and not expanded further.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 || state.is_over() {
        return 1;
    }
    all_moves(&state.board, state.turn, &state.rules)
        .into_iter()
        .map(|mv| perft(&state.apply_move(mv), depth - 1))
        .sum()
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 || state.is_over() {
        return Vec::new();
    }
    all_moves(&state.board, state.turn, &state.rules)
        .into_iter()
        .map(|mv| (mv, perft(&state.apply_move(mv), depth - 1)))
        .collect()
}
