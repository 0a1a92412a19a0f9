//! Board cells and board extents.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CellError;

/// A grid coordinate. Row 0 is the top row (dark's home side).
///
/// Coordinates are signed so generators can step off the board; the
/// legality filter drops anything outside the configured extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i16,
    pub column: i16,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(row: i16, column: i16) -> Self {
        Cell { row, column }
    }

    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i16, d_column: i16) -> Self {
        Cell {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Tile shade on the checkered grid; the top-left tile is light.
    #[inline]
    #[must_use]
    pub const fn is_dark_tile(self) -> bool {
        (self.row + self.column) % 2 == 1
    }

    /// Algebraic name, files from `a` and ranks counted from the bottom row.
    #[must_use]
    pub fn to_algebraic(self, dims: Dimensions) -> String {
        let file = (b'a' + self.column as u8) as char;
        format!("{file}{}", dims.rows - self.row)
    }

    /// Parse an algebraic cell name such as `e4` or `j10`.
    pub fn from_algebraic(notation: &str, dims: Dimensions) -> Result<Cell, CellError> {
        let invalid = || CellError::InvalidNotation {
            notation: notation.to_string(),
        };
        let mut chars = notation.chars();
        let file = chars
            .next()
            .filter(char::is_ascii_lowercase)
            .ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row = digits
            .parse::<u16>()
            .ok()
            .and_then(|rank| i16::try_from(rank).ok())
            .and_then(|rank| dims.rows.checked_sub(rank))
            .ok_or_else(invalid)?;
        let cell = Cell::new(row, (file as u8 - b'a') as i16);
        if dims.contains(cell) {
            Ok(cell)
        } else {
            Err(CellError::OutOfBounds {
                notation: notation.to_string(),
                rows: dims.rows,
                columns: dims.columns,
            })
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Configured board extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub rows: i16,
    pub columns: i16,
}

impl Dimensions {
    pub const STANDARD: Dimensions = Dimensions {
        rows: 8,
        columns: 8,
    };

    #[must_use]
    pub const fn new(rows: i16, columns: i16) -> Self {
        Dimensions { rows, columns }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.column >= 0 && cell.column < self.columns
    }

    #[inline]
    #[must_use]
    pub const fn area(self) -> usize {
        (self.rows as usize) * (self.columns as usize)
    }

    /// Flat index of an in-bounds cell.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self, cell: Cell) -> usize {
        (cell.row as usize) * (self.columns as usize) + cell.column as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn cell(self, index: usize) -> Cell {
        let columns = self.columns as usize;
        Cell::new((index / columns) as i16, (index % columns) as i16)
    }

    /// Home row of a side's back rank.
    #[inline]
    #[must_use]
    pub const fn back_row(self, light: bool) -> i16 {
        if light {
            self.rows - 1
        } else {
            0
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.area()).map(move |i| self.cell(i))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::STANDARD
    }
}

/// How far from each board edge a castled king lands.
///
/// Queen side: king on column `left`, rook right beside it.
/// King side: king on `columns - right - 1`, rook on its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleInsets {
    pub left: i16,
    pub right: i16,
}

impl Default for CastleInsets {
    fn default() -> Self {
        CastleInsets { left: 2, right: 1 }
    }
}
