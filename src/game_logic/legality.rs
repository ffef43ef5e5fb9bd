//! King-safety filter over the per-piece movement rules.
//!
//! Hypothetical moves are played on a throwaway copy of the board, so the
//! live board is never touched and nothing needs restoring.

use super::attacks::is_king_in_check;
use super::moves::{Move, MoveGrid};
use super::special::{self, CastleSide};
use crate::game_state::{Board, Piece, Point};

/// Fully legal ordinary move: pseudo-legal for the piece and the mover's king
/// is not attacked afterwards.
pub fn is_legal(board: &Board, from: Point, to: Point) -> bool {
    board
        .allied_piece_at(from)
        .is_some_and(|piece| is_legal_for(board, piece, from, to))
}

fn is_legal_for(board: &Board, piece: Piece, from: Point, to: Point) -> bool {
    piece.is_pseudo_legal(board, from, to) && leaves_king_safe(board, piece, from, to)
}

/// Place `piece` on `to`, clear `from`, and test the mover's king on the copy.
fn leaves_king_safe(board: &Board, piece: Piece, from: Point, to: Point) -> bool {
    let mut after = board.clone();
    after.relocate(piece, from, to);
    !is_king_in_check(&after, piece.color())
}

/// Every legal destination of the side to move's piece on `from`.
///
/// Returns an empty grid when `from` is empty or holds an enemy piece.
pub fn legal_moves_from(board: &Board, en_passant: Option<Point>, from: Point) -> MoveGrid {
    let mut grid = MoveGrid::new();
    let Some(piece) = board.allied_piece_at(from) else {
        return grid;
    };

    for to in Point::all() {
        if is_legal_for(board, piece, from, to) {
            grid[to] = if special::is_promotion(piece, to) {
                Move::PawnPromotion
            } else {
                Move::Normal
            };
        }
    }

    if from == CastleSide::king_square(piece.color()) {
        for side in CastleSide::ALL {
            if special::can_castle(board, side) {
                grid[side.rook_square(piece.color())] = side.move_kind();
            }
        }
    }

    if let Some(target) = en_passant
        && special::can_en_passant(board, en_passant, from)
    {
        grid[target] = Move::EnPassant;
    }

    grid
}

/// Whether the side to move has at least one legal move.
///
/// Stops at the first legal move found. Castling is not searched: a legal
/// castle implies the king may also step onto the adjacent transit square.
pub fn has_any_legal_move(board: &Board, en_passant: Option<Point>) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == board.side_to_move())
        .any(|(from, piece)| {
            Point::all().any(|to| is_legal_for(board, piece, from, to))
                || special::can_en_passant(board, en_passant, from)
        })
}

/// Total number of legal moves for the side to move, one per grid entry.
pub fn count_legal_moves(board: &Board, en_passant: Option<Point>) -> usize {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == board.side_to_move())
        .map(|(from, _)| legal_moves_from(board, en_passant, from).count())
        .sum()
}
