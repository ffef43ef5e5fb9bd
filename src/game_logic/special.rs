//! Castling, en passant and promotion.
//!
//! Castling rights are never stored: they follow from whether the king and
//! the rook are still unmoved on their home squares. The en passant target is
//! turn-scoped state owned by [`crate::game_logic::Game`] and passed in here.

use super::attacks::{is_king_in_check, is_square_attacked};
use super::moves::Move;
use crate::game_state::{Board, Color, Piece, Point, Role};

const KING_FILE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    QueenSide,
    KingSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::QueenSide, CastleSide::KingSide];

    const fn rook_file(self) -> u8 {
        match self {
            CastleSide::QueenSide => 0,
            CastleSide::KingSide => 7,
        }
    }

    const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::QueenSide => 2,
            CastleSide::KingSide => 6,
        }
    }

    const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::QueenSide => 3,
            CastleSide::KingSide => 5,
        }
    }

    const fn direction(self) -> i8 {
        match self {
            CastleSide::QueenSide => -1,
            CastleSide::KingSide => 1,
        }
    }

    /// Corner square of the rook, where the move grid reports this castle.
    #[inline]
    pub const fn rook_square(self, color: Color) -> Point {
        Point::new(self.rook_file(), color.back_rank())
    }

    #[inline]
    pub const fn king_square(color: Color) -> Point {
        Point::new(KING_FILE, color.back_rank())
    }

    /// Where the king ends up after castling.
    #[inline]
    pub const fn king_target(self, color: Color) -> Point {
        Point::new(self.king_target_file(), color.back_rank())
    }

    #[inline]
    pub const fn move_kind(self) -> Move {
        match self {
            CastleSide::QueenSide => Move::QueenSideCastle,
            CastleSide::KingSide => Move::KingSideCastle,
        }
    }
}

/// King and rook both unmoved on their home squares.
///
/// This is the castling right alone; it says nothing about blockers or attacks.
pub fn has_castling_right(board: &Board, color: Color, side: CastleSide) -> bool {
    let unmoved = |point: Point, role: Role| {
        board
            .piece_at(point)
            .is_some_and(|piece| piece.is(role, color) && !piece.has_moved())
    };
    unmoved(CastleSide::king_square(color), Role::King)
        && unmoved(side.rook_square(color), Role::Rook)
}

/// Full castling legality for the side to move.
///
/// Requires the right, empty squares between king and rook, and that the king
/// stands on, passes through and lands on unattacked squares.
pub fn can_castle(board: &Board, side: CastleSide) -> bool {
    let color = board.side_to_move();
    if !has_castling_right(board, color, side) {
        return false;
    }

    let rank = color.back_rank();
    let (low, high) = if side.rook_file() < KING_FILE {
        (side.rook_file(), KING_FILE)
    } else {
        (KING_FILE, side.rook_file())
    };
    if !(low + 1..high).all(|file| board.is_empty(Point::new(file, rank))) {
        return false;
    }

    let enemy = color.opposite();
    (0..=2).all(|step| {
        let file = KING_FILE as i8 + step * side.direction();
        Point::try_new(file, rank as i8)
            .is_some_and(|point| !is_square_attacked(board, point, enemy))
    })
}

/// Move king and rook in one ply, marking both as moved.
pub(crate) fn castle(board: &mut Board, side: CastleSide) {
    let color = board.side_to_move();
    let rank = color.back_rank();
    let king_from = CastleSide::king_square(color);
    let rook_from = side.rook_square(color);

    let king = board
        .piece_at(king_from)
        .expect("castling requires the king on its home square");
    let rook = board
        .piece_at(rook_from)
        .expect("castling requires the rook on its home square");

    board.relocate(king.moved(), king_from, side.king_target(color));
    board.relocate(rook.moved(), rook_from, Point::new(side.rook_target_file(), rank));
}

/// Square of the pawn captured by an en passant move onto `target`.
#[inline]
pub fn en_passant_victim(target: Point, from: Point) -> Point {
    Point::new(target.file(), from.rank())
}

/// Whether the side to move's piece on `from` may capture en passant onto
/// the current target.
pub fn can_en_passant(board: &Board, en_passant: Option<Point>, from: Point) -> bool {
    let Some(target) = en_passant else {
        return false;
    };
    let Some(pawn) = board.allied_piece_at(from) else {
        return false;
    };
    if pawn.role() != Role::Pawn {
        return false;
    }

    let (df, dr) = from.delta_to(target);
    if df.abs() != 1 || dr != pawn.color().forward() || !board.is_empty(target) {
        return false;
    }
    let victim = en_passant_victim(target, from);
    if !board
        .piece_at(victim)
        .is_some_and(|piece| piece.is(Role::Pawn, pawn.color().opposite()))
    {
        return false;
    }

    let mut after = board.clone();
    apply_en_passant(&mut after, from, target);
    !is_king_in_check(&after, pawn.color())
}

/// Move the capturing pawn onto `target` and remove the pawn it passed.
///
/// Returns the captured pawn.
pub(crate) fn apply_en_passant(board: &mut Board, from: Point, target: Point) -> Piece {
    let pawn = board
        .piece_at(from)
        .expect("en passant requires a capturing pawn");
    board.relocate(pawn.moved(), from, target);
    board
        .take(en_passant_victim(target, from))
        .expect("en passant requires a pawn to capture")
}

/// Square skipped by a double pawn push from `from` to `to`, if it was one.
pub(crate) fn double_push_target(piece: Piece, from: Point, to: Point) -> Option<Point> {
    let (df, dr) = from.delta_to(to);
    if piece.role() == Role::Pawn && df == 0 && dr.abs() == 2 {
        from.offset(0, piece.color().forward())
    } else {
        None
    }
}

/// A pawn arriving on the far edge must be promoted.
#[inline]
pub fn is_promotion(piece: Piece, to: Point) -> bool {
    piece.role() == Role::Pawn && to.rank() == piece.color().promotion_rank()
}
