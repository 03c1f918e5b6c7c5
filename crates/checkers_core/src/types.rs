use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    /// Sign used by the integer cell encoding: White is positive.
    pub fn sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
    /// Row delta of a man's forward step. Black starts at the top (row 0).
    pub fn forward_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
    /// Farthest row, where a man of this side is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub fn man(side: Side) -> Self {
        Self {
            side,
            rank: Rank::Man,
        }
    }
    pub fn king(side: Side) -> Self {
        Self {
            side,
            rank: Rank::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }
    /// Signed integer code: magnitude 1 for a man, 2 for a king.
    pub fn code(self) -> i8 {
        let magnitude = match self.rank {
            Rank::Man => 1,
            Rank::King => 2,
        };
        magnitude * self.side.sign()
    }
}

/// Contents of one board square.
pub type Cell = Option<Piece>;

pub fn cell_code(cell: Cell) -> i8 {
    cell.map_or(0, Piece::code)
}

/// Decode a signed cell code. Returns `None` for codes outside -2..=2.
pub fn cell_from_code(code: i8) -> Option<Cell> {
    match code {
        0 => Some(None),
        1 => Some(Some(Piece::man(Side::White))),
        2 => Some(Some(Piece::king(Side::White))),
        -1 => Some(Some(Piece::man(Side::Black))),
        -2 => Some(Some(Piece::king(Side::Black))),
        _ => None,
    }
}

// Helpers
pub fn sign(cell: Cell) -> i8 {
    cell.map_or(0, |p| p.side.sign())
}
pub fn is_king(cell: Cell) -> bool {
    cell.is_some_and(Piece::is_king)
}
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// The four diagonal directions as (row delta, column delta).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A board coordinate, row 0 at the top. May hold out-of-bounds values
/// when it comes from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    #[serde(rename = "r")]
    pub row: i8,
    #[serde(rename = "c")]
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
    pub fn in_bounds(self) -> bool {
        in_bounds(self.row, self.col)
    }
    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 == 1
    }
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row.checked_add(dr)?;
        let col = self.col.checked_add(dc)?;
        in_bounds(row, col).then_some(Square { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A single jump: `from` over the enemy on `over`, landing on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub from: Square,
    pub over: Square,
    pub to: Square,
}

impl Capture {
    pub fn as_move(self) -> Move {
        Move::new(self.from, self.to)
    }
}
