use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseBoardError;
use crate::types::*;

/// 8x8 grid of cells, row-major, row 0 at the top.
///
/// Boards are plain values: copying one is a deep copy, and every move
/// produces a new board instead of editing a shared one. Serialized as an
/// 8x8 array of signed cell codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[i8; 8]; 8]", into = "[[i8; 8]; 8]")]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard setup: Black on the dark squares of rows 0-2, White on rows 5-7.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for row in 0..8i8 {
            let side = match row {
                0..=2 => Side::Black,
                5..=7 => Side::White,
                _ => continue,
            };
            for col in 0..8i8 {
                let sq = Square::new(row, col);
                if sq.is_playable() {
                    b.set(sq, Some(Piece::man(side)));
                }
            }
        }
        b
    }

    /// Parse a text diagram: 8 rows of 8 symbols, `.` empty, `w`/`W` white
    /// man/king, `b`/`B` black man/king. Whitespace inside rows and blank
    /// lines are ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != 8 {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = match symbol {
                    '.' => None,
                    'w' => Some(Piece::man(Side::White)),
                    'W' => Some(Piece::king(Side::White)),
                    'b' => Some(Piece::man(Side::Black)),
                    'B' => Some(Piece::king(Side::Black)),
                    _ => return Err(ParseBoardError::UnknownSymbol { row, col, symbol }),
                };
                b.cells[row][col] = cell;
            }
        }
        Ok(b)
    }

    /// Contents of a square; off-board squares read as empty.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        if sq.in_bounds() {
            self.cells[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Writes to off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        if sq.in_bounds() {
            self.cells[sq.row as usize][sq.col as usize] = cell;
        }
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, None);
    }

    /// True for on-board squares holding no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.in_bounds() && self.get(sq).is_none()
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some_and(|p| p.side == side))
            .count()
    }

    /// Squares holding a piece of `side`, in row-major order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        (0..8i8)
            .flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
            .filter(move |&sq| self.get(sq).is_some_and(|p| p.side == side))
    }

    pub fn to_codes(&self) -> [[i8; 8]; 8] {
        let mut codes = [[0i8; 8]; 8];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                codes[row][col] = cell_code(cell);
            }
        }
        codes
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl From<Board> for [[i8; 8]; 8] {
    fn from(b: Board) -> Self {
        b.to_codes()
    }
}

impl TryFrom<[[i8; 8]; 8]> for Board {
    type Error = ParseBoardError;

    fn try_from(codes: [[i8; 8]; 8]) -> Result<Self, Self::Error> {
        let mut b = Board::empty();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                b.cells[row][col] =
                    cell_from_code(code).ok_or(ParseBoardError::UnknownCode { row, col, code })?;
            }
        }
        Ok(b)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for cell in cells {
                let ch = match cell {
                    None => '.',
                    Some(p) => match (p.side, p.rank) {
                        (Side::White, Rank::Man) => 'w',
                        (Side::White, Rank::King) => 'W',
                        (Side::Black, Rank::Man) => 'b',
                        (Side::Black, Rank::King) => 'B',
                    },
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
