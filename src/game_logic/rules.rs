use super::attacks::{KING_STEPS, is_square_attacked};
use crate::game_state::{Board, Color, Piece, Point, Role};

impl Piece {
    /// Movement geometry and occupancy for this piece's role.
    ///
    /// `from` must hold this piece. The result ignores whether the move
    /// leaves the mover's own king in check (see [`super::legality`]), and
    /// never includes castling or en passant.
    pub fn is_pseudo_legal(&self, board: &Board, from: Point, to: Point) -> bool {
        if from == to {
            return false;
        }
        match self.role() {
            Role::Pawn => pawn_move(board, self, from, to),
            Role::Knight => knight_move(board, self.color(), from, to),
            Role::Bishop => bishop_move(board, self.color(), from, to),
            Role::Rook => rook_move(board, self.color(), from, to),
            Role::Queen => {
                let (df, dr) = from.delta_to(to);
                if df.abs() == dr.abs() {
                    bishop_move(board, self.color(), from, to)
                } else {
                    rook_move(board, self.color(), from, to)
                }
            }
            Role::King => king_move(board, self.color(), from, to),
        }
    }
}

/// Straight ahead onto empty squares, one step or two from the starting
/// square; diagonally ahead only to capture.
fn pawn_move(board: &Board, pawn: &Piece, from: Point, to: Point) -> bool {
    let forward = pawn.color().forward();
    let (df, dr) = from.delta_to(to);

    if df == 0 && dr == forward {
        return board.is_empty(to);
    }
    if df == 0 && dr == 2 * forward && !pawn.has_moved() {
        let Some(between) = from.offset(0, forward) else {
            return false;
        };
        return board.is_empty(between) && board.is_empty(to);
    }
    df.abs() == 1 && dr == forward && board.is_enemy(to, pawn.color())
}

fn knight_move(board: &Board, color: Color, from: Point, to: Point) -> bool {
    let (df, dr) = from.delta_to(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)) && board.is_empty_or_enemy(to, color)
}

fn bishop_move(board: &Board, color: Color, from: Point, to: Point) -> bool {
    let (df, dr) = from.delta_to(to);
    df != 0
        && df.abs() == dr.abs()
        && path_is_clear(board, from, to)
        && board.is_empty_or_enemy(to, color)
}

fn rook_move(board: &Board, color: Color, from: Point, to: Point) -> bool {
    let (df, dr) = from.delta_to(to);
    (df == 0) != (dr == 0)
        && path_is_clear(board, from, to)
        && board.is_empty_or_enemy(to, color)
}

/// One step in any direction, never next to the other king and never onto
/// an attacked square.
fn king_move(board: &Board, color: Color, from: Point, to: Point) -> bool {
    let (df, dr) = from.delta_to(to);
    if df.abs() > 1 || dr.abs() > 1 || !board.is_empty_or_enemy(to, color) {
        return false;
    }
    if is_next_to_enemy_king(board, color, to) {
        return false;
    }

    // The king must not shield the destination from a slider behind it.
    let mut without_king = board.clone();
    without_king.set(from, None);
    !is_square_attacked(&without_king, to, color.opposite())
}

fn is_next_to_enemy_king(board: &Board, color: Color, point: Point) -> bool {
    KING_STEPS.iter().any(|&(df, dr)| {
        point
            .offset(df, dr)
            .and_then(|p| board.piece_at(p))
            .is_some_and(|piece| piece.is(Role::King, color.opposite()))
    })
}

/// Every square strictly between `from` and `to` on a straight or diagonal
/// line is empty.
fn path_is_clear(board: &Board, from: Point, to: Point) -> bool {
    let (df, dr) = from.delta_to(to);
    let step = (df.signum(), dr.signum());
    let mut current = from.offset(step.0, step.1);
    while let Some(point) = current {
        if point == to {
            return true;
        }
        if !board.is_empty(point) {
            return false;
        }
        current = point.offset(step.0, step.1);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(name: &str) -> Point {
        name.parse().expect("valid square")
    }

    fn position(side: Color, pieces: &[(&str, Role, Color)]) -> Board {
        Board::from_pieces(
            side,
            pieces
                .iter()
                .map(|&(name, role, color)| (sq(name), Piece::new(role, color))),
        )
        .expect("valid position")
    }

    fn pseudo_legal(board: &Board, from: &str, to: &str) -> bool {
        let piece = board.piece_at(sq(from)).expect("piece on from square");
        piece.is_pseudo_legal(board, sq(from), sq(to))
    }

    #[test]
    fn test_no_piece_may_stay_in_place() {
        let board = Board::new();
        for (point, piece) in board.pieces() {
            assert!(!piece.is_pseudo_legal(&board, point, point), "{point}");
        }
    }

    #[test_case("e2", "e3", true; "single step")]
    #[test_case("e2", "e4", true; "double step")]
    #[test_case("e2", "e5", false; "triple step")]
    #[test_case("e2", "e1", false; "backward")]
    #[test_case("e2", "d3", false; "diagonal without capture")]
    #[test_case("e7", "e5", true; "black double step")]
    #[test_case("e7", "e8", false; "black backward")]
    fn test_pawn_from_start(from: &str, to: &str, expected: bool) {
        assert_eq!(pseudo_legal(&Board::new(), from, to), expected);
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        let board = position(
            Color::White,
            &[
                ("e1", Role::King, Color::White),
                ("e8", Role::King, Color::Black),
                ("d2", Role::Pawn, Color::White),
                ("d3", Role::Knight, Color::Black),
                ("e2", Role::Pawn, Color::White),
                ("e4", Role::Bishop, Color::Black),
                ("f3", Role::Rook, Color::Black),
            ],
        );

        assert!(!pseudo_legal(&board, "d2", "d3"), "no capture straight ahead");
        assert!(!pseudo_legal(&board, "d2", "d4"), "cannot jump a blocker");
        assert!(pseudo_legal(&board, "e2", "e3"));
        assert!(!pseudo_legal(&board, "e2", "e4"), "double step onto piece");
        assert!(pseudo_legal(&board, "e2", "d3"));
        assert!(pseudo_legal(&board, "e2", "f3"));
    }

    #[test]
    fn test_moved_pawn_cannot_double_step() {
        let mut board = Board::new();
        let pawn = board.take(sq("a2")).expect("pawn on a2").moved();
        board.set(sq("a3"), Some(pawn));

        assert!(pseudo_legal(&board, "a3", "a4"));
        assert!(!pseudo_legal(&board, "a3", "a5"));
    }

    #[test_case("g1", "f3", true; "jump over pawns")]
    #[test_case("g1", "h3", true; "to the edge")]
    #[test_case("g1", "e2", false; "onto own pawn")]
    #[test_case("g1", "g3", false; "straight")]
    fn test_knight(from: &str, to: &str, expected: bool) {
        assert_eq!(pseudo_legal(&Board::new(), from, to), expected);
    }

    #[test]
    fn test_sliders_need_clear_path() {
        let board = position(
            Color::White,
            &[
                ("a1", Role::King, Color::White),
                ("h8", Role::King, Color::Black),
                ("d4", Role::Queen, Color::White),
                ("d6", Role::Pawn, Color::Black),
                ("f6", Role::Pawn, Color::White),
            ],
        );

        assert!(pseudo_legal(&board, "d4", "d6"), "capture first blocker");
        assert!(!pseudo_legal(&board, "d4", "d7"), "through a blocker");
        assert!(pseudo_legal(&board, "d4", "e5"));
        assert!(!pseudo_legal(&board, "d4", "f6"), "onto own piece");
        assert!(!pseudo_legal(&board, "d4", "g7"));
        assert!(pseudo_legal(&board, "d4", "h4"));
        assert!(pseudo_legal(&board, "d4", "a7"));
        assert!(!pseudo_legal(&board, "d4", "e6"), "knight shape");
    }

    #[test]
    fn test_rook_and_bishop_geometry() {
        let board = position(
            Color::White,
            &[
                ("a1", Role::King, Color::White),
                ("h8", Role::King, Color::Black),
                ("d4", Role::Rook, Color::White),
                ("e4", Role::Bishop, Color::White),
            ],
        );

        assert!(pseudo_legal(&board, "d4", "d8"));
        assert!(!pseudo_legal(&board, "d4", "e5"));
        assert!(!pseudo_legal(&board, "d4", "h4"), "own bishop in the way");
        assert!(pseudo_legal(&board, "e4", "h7"));
        assert!(!pseudo_legal(&board, "e4", "e5"));
    }

    #[test]
    fn test_king_avoids_attacked_and_adjacent_squares() {
        let board = position(
            Color::White,
            &[
                ("e1", Role::King, Color::White),
                ("g2", Role::King, Color::Black),
                ("a2", Role::Rook, Color::Black),
            ],
        );

        assert!(!pseudo_legal(&board, "e1", "f1"), "next to enemy king");
        assert!(!pseudo_legal(&board, "e1", "d2"), "attacked by rook");
        assert!(!pseudo_legal(&board, "e1", "e2"));
        assert!(pseudo_legal(&board, "e1", "d1"));
        assert!(!pseudo_legal(&board, "e1", "c1"), "two squares");
    }

    #[test]
    fn test_king_cannot_retreat_along_checking_ray() {
        let board = position(
            Color::White,
            &[
                ("e2", Role::King, Color::White),
                ("h8", Role::King, Color::Black),
                ("e8", Role::Rook, Color::Black),
            ],
        );

        assert!(!pseudo_legal(&board, "e2", "e1"));
        assert!(pseudo_legal(&board, "e2", "d1"));
    }
}
