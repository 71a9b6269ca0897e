//! Typed square identifiers for the 8×8 board.

use crate::error::{ClientError, ClientErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Board file (column), `a` through `h`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum File {
    /// File a.
    A,
    /// File b.
    B,
    /// File c.
    C,
    /// File d.
    D,
    /// File e.
    E,
    /// File f.
    F,
    /// File g.
    G,
    /// File h.
    H,
}

impl File {
    /// Zero-based column index, `a` = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the file at the given column index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses a lowercase file letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Self::from_index((c as u8 - b'a') as usize),
            _ => None,
        }
    }
}

/// Board rank (row), `1` through `8`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
)]
pub enum Rank {
    /// Rank 1.
    One,
    /// Rank 2.
    Two,
    /// Rank 3.
    Three,
    /// Rank 4.
    Four,
    /// Rank 5.
    Five,
    /// Rank 6.
    Six,
    /// Rank 7.
    Seven,
    /// Rank 8.
    Eight,
}

impl Rank {
    /// The rank digit, 1 through 8.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the rank for a digit 1 through 8.
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::iter().nth(i as usize))
    }

    /// Parses a rank digit.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::from_number(d as u8))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the 64 board cells, named by file letter and rank digit.
///
/// The two-character form (`"e2"`) is both the view lookup key and the
/// server protocol key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// All squares in view order: rank 8 down to rank 1, file a to h
    /// within each rank.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::iter()
            .rev()
            .flat_map(|rank| File::iter().map(move |file| Square::new(file, rank)))
    }

    /// Position of this square in view order (0 = a8, 63 = h1).
    pub fn view_index(self) -> usize {
        (7 - self.rank as usize) * 8 + self.file.index()
    }

    /// Inverse of [`Square::view_index`].
    pub fn from_view_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        let file = File::from_index(index % 8)?;
        let rank = Rank::from_number(8 - (index / 8) as u8)?;
        Some(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ClientError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => match (File::from_char(f), Rank::from_char(r)) {
                (Some(file), Some(rank)) => Ok(Square::new(file, rank)),
                _ => Err(ClientError::new(ClientErrorKind::InvalidSquare(s.to_string()))),
            },
            _ => Err(ClientError::new(ClientErrorKind::InvalidSquare(s.to_string()))),
        }
    }
}

impl TryFrom<String> for Square {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

/// Color classification of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SquareColor {
    /// Light square.
    White,
    /// Dark square.
    Black,
}

impl SquareColor {
    /// The other color.
    pub fn flipped(self) -> Self {
        match self {
            SquareColor::White => SquareColor::Black,
            SquareColor::Black => SquareColor::White,
        }
    }
}

/// Colors for all 64 cells in view order, starting from `seed`.
///
/// Color alternates along a rank, but the first cell of every rank keeps
/// the color of the cell before it instead of flipping.
pub fn square_colors(seed: SquareColor) -> [SquareColor; 64] {
    let mut colors = [seed; 64];
    let mut current = seed;
    for (index, color) in colors.iter_mut().enumerate() {
        if index % 8 != 0 {
            current = current.flipped();
        }
        *color = current;
    }
    colors
}
