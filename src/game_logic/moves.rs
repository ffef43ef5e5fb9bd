use std::ops::{Index, IndexMut};

use crate::game_state::Point;

/// Kind of move available on a target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Move {
    #[default]
    None,
    Normal,
    PawnPromotion,
    EnPassant,
    QueenSideCastle,
    KingSideCastle,
}

/// Dense 8×8 answer to "where can this piece go?".
///
/// Every square holds [`Move::None`] unless the selected piece may legally
/// move there. Castling is reported on the corner square of the castling rook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveGrid {
    cells: [[Move; 8]; 8],
}

impl MoveGrid {
    /// A grid with no available moves.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Available destinations with their move kind.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Move)> + '_ {
        Point::all()
            .map(|point| (point, self[point]))
            .filter(|(_, mv)| *mv != Move::None)
    }

    /// Number of available destinations.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl Index<Point> for MoveGrid {
    type Output = Move;

    #[inline]
    fn index(&self, point: Point) -> &Move {
        &self.cells[point.rank() as usize][point.file() as usize]
    }
}

impl IndexMut<Point> for MoveGrid {
    #[inline]
    fn index_mut(&mut self, point: Point) -> &mut Move {
        &mut self.cells[point.rank() as usize][point.file() as usize]
    }
}
