use std::fmt;
use std::str::FromStr;

use super::piece::Color;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A single square on the board.
///
/// Coordinates are absolute:
/// - file 0 = a, file 7 = h
/// - rank 0 = White's back rank, rank 7 = Black's back rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    file: u8,
    rank: u8,
}

impl Point {
    /// Creates a point from on-board coordinates.
    ///
    /// # Panics
    /// If either coordinate is outside `0..8`. Use [`Point::try_new`] for computed values.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        assert!(file < BOARD_SIZE && rank < BOARD_SIZE, "point off the board");
        Self { file, rank }
    }

    /// Creates a point if both coordinates are on the board.
    #[inline]
    pub const fn try_new(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < BOARD_SIZE as i8 && rank >= 0 && rank < BOARD_SIZE as i8 {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The point shifted by the given deltas, if it stays on the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::try_new(self.file as i8 + file_delta, self.rank as i8 + rank_delta)
    }

    /// Signed file and rank distance from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Point) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }

    /// Mirror the point vertically for Black, leave it unchanged for White.
    ///
    /// Converts between the absolute frame and the frame of a player sitting
    /// behind `color`'s pieces, where that player's back rank is row 0.
    #[inline]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => Self {
                file: self.file,
                rank: BOARD_SIZE - 1 - self.rank,
            },
        }
    }

    /// All 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Point { file, rank }))
    }
}

/// Parse a square name like "e4".
///
/// # Examples
/// ```
/// # use chess_referee::game_state::Point;
/// let point: Point = "e4".parse().unwrap();
/// assert_eq!((point.file(), point.rank()), (4, 3));
/// ```
impl FromStr for Point {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(SquareParseError::BadRank)?;

        Ok(Point::new(file as u8 - b'a', rank as u8 - 1))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// Error type for parsing square names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    #[error("file must be a-h")]
    BadFile,
    #[error("rank must be 1-8")]
    BadRank,
}
