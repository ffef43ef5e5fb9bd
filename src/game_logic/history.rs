use std::collections::HashMap;

use super::special::{CastleSide, has_castling_right};
use crate::game_state::{Board, Color, Point, Role};

/// Snapshot of everything that makes two positions "the same" for repetition.
///
/// Owns its own copy of the cells as (role, color) pairs, so it never aliases
/// the live board and ignores `has_moved` except through the derived castling
/// rights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    cells: [[Option<(Role, Color)>; 8]; 8],
    side_to_move: Color,
    en_passant: Option<Point>,
    castling: [bool; 4],
}

impl PositionKey {
    pub fn new(board: &Board, en_passant: Option<Point>) -> Self {
        let mut cells = [[None; 8]; 8];
        for (point, piece) in board.pieces() {
            cells[point.rank() as usize][point.file() as usize] =
                Some((piece.role(), piece.color()));
        }

        let mut castling = [false; 4];
        let rights = Color::ALL
            .into_iter()
            .flat_map(|color| CastleSide::ALL.map(|side| (color, side)));
        for (slot, (color, side)) in castling.iter_mut().zip(rights) {
            *slot = has_castling_right(board, color, side);
        }

        Self {
            cells,
            side_to_move: board.side_to_move(),
            en_passant,
            castling,
        }
    }
}

/// How a completed ply affects the draw bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlyKind {
    /// Piece move without capture. Advances the clock.
    Quiet,
    /// Castling. Advances the clock but earlier positions can no longer recur.
    Castle,
    /// Pawn move or capture. Resets the clock and forgets earlier positions.
    PawnOrCapture,
}

/// Position occurrence counts and the half-move clock.
#[derive(Debug, Clone, Default)]
pub struct History {
    seen: HashMap<PositionKey, u8>,
    quiet_plies: u32,
    /// Occurrences of the most recently recorded position.
    current: u8,
}

impl History {
    /// History whose only entry is the starting position.
    pub fn new(board: &Board, en_passant: Option<Point>) -> Self {
        let mut history = Self::default();
        history.remember(board, en_passant);
        history
    }

    /// Account for a completed ply and record the resulting position.
    ///
    /// Returns how many times that position has now occurred.
    pub fn record(&mut self, board: &Board, en_passant: Option<Point>, kind: PlyKind) -> u8 {
        match kind {
            PlyKind::Quiet => self.quiet_plies += 1,
            PlyKind::Castle => {
                self.quiet_plies += 1;
                self.seen.clear();
            }
            PlyKind::PawnOrCapture => {
                self.quiet_plies = 0;
                self.seen.clear();
            }
        }
        self.remember(board, en_passant)
    }

    fn remember(&mut self, board: &Board, en_passant: Option<Point>) -> u8 {
        let count = self
            .seen
            .entry(PositionKey::new(board, en_passant))
            .or_insert(0);
        *count = count.saturating_add(1);
        self.current = *count;
        self.current
    }

    /// How many times the current position has occurred.
    #[inline]
    pub fn current_repetitions(&self) -> u8 {
        self.current
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    /// Number of distinct positions currently remembered.
    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
