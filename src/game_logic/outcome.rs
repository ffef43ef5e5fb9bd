use std::fmt;

use super::attacks::is_king_in_check;
use super::legality::has_any_legal_move;
use crate::config::RuleConfig;
use crate::game_state::{Board, Color, Point, Role};

/// Result of evaluating the position after a ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The side to move is in check but has a way out. Advisory only.
    InCheck,
    WhiteWins,
    BlackWins,
    Stalemate,
    /// 50 moves per side without a pawn move or capture.
    TooManyMoves,
    /// The same position occurred three times.
    TooManyRepetitions,
    /// Neither side can force mate with the remaining material.
    InsufficientMating,
}

impl GameStatus {
    /// Terminal statuses end the game.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::InCheck)
    }

    /// Whether a front-end should bring this status to the players' attention.
    #[inline]
    pub const fn must_warn_user(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// The winning side, for checkmates.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "game in progress",
            GameStatus::InCheck => "check",
            GameStatus::WhiteWins => "checkmate, white wins",
            GameStatus::BlackWins => "checkmate, black wins",
            GameStatus::Stalemate => "stalemate",
            GameStatus::TooManyMoves => "draw by the 50-move rule",
            GameStatus::TooManyRepetitions => "draw by threefold repetition",
            GameStatus::InsufficientMating => "draw by insufficient mating material",
        };
        f.write_str(text)
    }
}

/// Evaluate the position for the side to move.
///
/// Precedence: checkmate, stalemate, 50-move rule, repetition, insufficient
/// material, check.
pub fn evaluate(
    board: &Board,
    en_passant: Option<Point>,
    quiet_plies: u32,
    repetitions: u8,
    config: &RuleConfig,
) -> GameStatus {
    let side = board.side_to_move();
    let in_check = is_king_in_check(board, side);
    let stuck = !has_any_legal_move(board, en_passant);

    if stuck {
        return if in_check {
            GameStatus::win_for(side.opposite())
        } else {
            GameStatus::Stalemate
        };
    }
    if quiet_plies >= config.max_quiet_plies {
        return GameStatus::TooManyMoves;
    }
    if repetitions >= config.max_repetitions {
        return GameStatus::TooManyRepetitions;
    }
    if is_insufficient_material(board) {
        return GameStatus::InsufficientMating;
    }
    if in_check {
        GameStatus::InCheck
    } else {
        GameStatus::Ongoing
    }
}

/// Lone king against a lone king or a single minor piece, or exactly one
/// knight per side.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut material: [Vec<Role>; 2] = [Vec::new(), Vec::new()];
    for (_, piece) in board.pieces().filter(|(_, p)| p.role() != Role::King) {
        material[piece.color().index()].push(piece.role());
    }

    match (material[0].as_slice(), material[1].as_slice()) {
        ([], []) => true,
        ([], [lone]) | ([lone], []) => lone.is_minor(),
        ([Role::Knight], [Role::Knight]) => true,
        _ => false,
    }
}
