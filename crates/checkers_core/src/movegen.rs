use crate::{board::Board, rules::RuleConfig, types::*};

/// Non-capturing moves for the piece on `from`. Empty for an empty or
/// off-board square.
pub fn legal_simple_moves(board: &Board, from: Square, rules: &RuleConfig) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    simple_moves_into(board, from, rules, &mut out);
    out
}

/// Captures for the piece on `from`, one entry per landing square.
pub fn legal_captures(board: &Board, from: Square, rules: &RuleConfig) -> Vec<Capture> {
    let mut out = Vec::with_capacity(8);
    captures_into(board, from, rules, &mut out);
    out
}

/// Every square the piece on `from` may move to, captures first.
pub fn legal_targets(board: &Board, from: Square, rules: &RuleConfig) -> Vec<Square> {
    legal_captures(board, from, rules)
        .into_iter()
        .map(|c| c.to)
        .chain(legal_simple_moves(board, from, rules).into_iter().map(|m| m.to))
        .collect()
}

/// Generate simple moves into the provided buffer, appending to it.
pub fn simple_moves_into(board: &Board, from: Square, rules: &RuleConfig, out: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    match piece.rank {
        Rank::Man => gen_man_steps(board, from, piece.side, out),
        Rank::King if rules.flying_king_move => gen_king_slides(board, from, out),
        Rank::King => gen_king_steps(board, from, out),
    }
}

/// Generate captures into the provided buffer, appending to it.
pub fn captures_into(board: &Board, from: Square, rules: &RuleConfig, out: &mut Vec<Capture>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    match piece.rank {
        Rank::Man => gen_man_jumps(board, from, piece.side, rules, out),
        Rank::King if rules.flying_king_capture => gen_king_long_jumps(board, from, piece.side, out),
        Rank::King => {
            for (dr, dc) in DIAGONALS {
                gen_short_jump(board, from, piece.side, dr, dc, out);
            }
        }
    }
}

/// True iff some piece of `side` has a legal capture.
pub fn any_capture_available(board: &Board, side: Side, rules: &RuleConfig) -> bool {
    let mut buf = Vec::with_capacity(8);
    board.squares_of(side).any(|sq| {
        buf.clear();
        captures_into(board, sq, rules, &mut buf);
        !buf.is_empty()
    })
}

/// True iff `side` has at least one capture or simple move.
pub fn has_any_move(board: &Board, side: Side, rules: &RuleConfig) -> bool {
    let mut captures = Vec::with_capacity(8);
    let mut moves = Vec::with_capacity(16);
    board.squares_of(side).any(|sq| {
        captures.clear();
        captures_into(board, sq, rules, &mut captures);
        if !captures.is_empty() {
            return true;
        }
        moves.clear();
        simple_moves_into(board, sq, rules, &mut moves);
        !moves.is_empty()
    })
}

/// All legal moves for `side`: every capture, then every simple move.
pub fn all_moves(board: &Board, side: Side, rules: &RuleConfig) -> Vec<Move> {
    let mut captures = Vec::with_capacity(16);
    let mut simple = Vec::with_capacity(32);
    for sq in board.squares_of(side) {
        captures_into(board, sq, rules, &mut captures);
        simple_moves_into(board, sq, rules, &mut simple);
    }
    captures
        .into_iter()
        .map(Capture::as_move)
        .chain(simple)
        .collect()
}

fn is_enemy(cell: Cell, side: Side) -> bool {
    cell.is_some_and(|p| p.side != side)
}

// Men step forward only; the backward-capture rule never applies here.
fn gen_man_steps(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    let dr = side.forward_direction();
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dr, dc)
            && board.is_empty(to)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_man_jumps(
    board: &Board,
    from: Square,
    side: Side,
    rules: &RuleConfig,
    out: &mut Vec<Capture>,
) {
    let forward = side.forward_direction();
    let backward = rules.men_backward_capture.then_some(-forward);
    for dr in std::iter::once(forward).chain(backward) {
        for dc in [-1, 1] {
            gen_short_jump(board, from, side, dr, dc, out);
        }
    }
}

fn gen_short_jump(board: &Board, from: Square, side: Side, dr: i8, dc: i8, out: &mut Vec<Capture>) {
    if let Some(over) = from.offset(dr, dc)
        && let Some(to) = over.offset(dr, dc)
        && is_enemy(board.get(over), side)
        && board.is_empty(to)
    {
        out.push(Capture { from, over, to });
    }
}

fn gen_king_steps(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        if let Some(to) = from.offset(dr, dc)
            && board.is_empty(to)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_king_slides(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut next = from.offset(dr, dc);
        while let Some(to) = next {
            if !board.is_empty(to) {
                break;
            }
            out.push(Move::new(from, to));
            next = to.offset(dr, dc);
        }
    }
}

// One enemy per ray: the first piece met must be an enemy, and every empty
// square after it, up to the next piece or the edge, is a landing square.
fn gen_king_long_jumps(board: &Board, from: Square, side: Side, out: &mut Vec<Capture>) {
    for (dr, dc) in DIAGONALS {
        let Some(over) = first_piece_on_ray(board, from, dr, dc) else {
            continue;
        };
        if !is_enemy(board.get(over), side) {
            continue;
        }
        let mut next = over.offset(dr, dc);
        while let Some(to) = next {
            if !board.is_empty(to) {
                break;
            }
            out.push(Capture { from, over, to });
            next = to.offset(dr, dc);
        }
    }
}

fn first_piece_on_ray(board: &Board, from: Square, dr: i8, dc: i8) -> Option<Square> {
    let mut next = from.offset(dr, dc);
    while let Some(sq) = next {
        if board.get(sq).is_some() {
            return Some(sq);
        }
        next = sq.offset(dr, dc);
    }
    None
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
