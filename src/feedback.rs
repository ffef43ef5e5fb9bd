use crate::game_logic::{GameStatus, Move, MoveGrid};
use crate::game_state::{Board, Point};

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece
    Origin,
    /// Legal destination of the selected piece
    Destination,
    /// Moving here captures an opponent piece
    Capture,
    /// Castling: click the rook's corner to castle
    Special,
    /// King of the side to move, while in check
    Check,
    /// Enemy piece giving check
    Checker,
}

/// Set of squares and their associated feedback for the current game state.
///
/// Computed by [`compute_feedback`] and consumed by a [`crate::BoardDisplay`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Point, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    #[inline]
    pub fn squares(&self) -> &[(Point, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, point: Point) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(p, _)| *p == point)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any earlier entry.
    pub fn set(&mut self, point: Point, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(p, _)| *p == point) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((point, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Point, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Point, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Game state information needed to compute feedback
pub trait FeedbackSource {
    fn board(&self) -> &Board;

    /// Square of the selected piece, if any
    fn selected(&self) -> Option<Point>;

    /// Legal moves of the selected piece
    fn moves(&self) -> &MoveGrid;

    fn status(&self) -> GameStatus;
}

/// Compute visual feedback based on current game state.
///
/// - Check: the threatened king and the pieces attacking it
/// - Piece selected: its square and every legal destination, split into
///   captures, castling and plain moves
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let mut feedback = BoardFeedback::new();
    let board = source.board();

    if shows_check(source.status()) {
        let side = board.side_to_move();
        let king = board.king(side);
        feedback.set(king, SquareFeedback::Check);
        for (from, _) in board
            .pieces()
            .filter(|(_, piece)| piece.color() != side)
            .filter(|(from, piece)| piece.is_pseudo_legal(board, *from, king))
        {
            feedback.set(from, SquareFeedback::Checker);
        }
    }

    if let Some(from) = source.selected() {
        feedback.set(from, SquareFeedback::Origin);
        for (to, mv) in source.moves().iter() {
            feedback.set(to, classify_move(board, to, mv));
        }
    }

    feedback
}

fn shows_check(status: GameStatus) -> bool {
    matches!(
        status,
        GameStatus::InCheck | GameStatus::WhiteWins | GameStatus::BlackWins
    )
}

/// Classify a move as a capture, castling, or a regular destination
fn classify_move(board: &Board, to: Point, mv: Move) -> SquareFeedback {
    match mv {
        Move::EnPassant => SquareFeedback::Capture,
        Move::QueenSideCastle | Move::KingSideCastle => SquareFeedback::Special,
        _ if board.is_enemy(to, board.side_to_move()) => SquareFeedback::Capture,
        _ => SquareFeedback::Destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::Game;
    use crate::game_state::{Color, Piece, Role};

    struct MockFeedbackSource {
        game: Game,
        selected: Option<Point>,
        moves: MoveGrid,
    }

    impl MockFeedbackSource {
        fn new(game: Game, selected: Option<&str>) -> Self {
            let selected = selected.map(sq);
            let moves = selected
                .map(|from| game.available_moves(from))
                .unwrap_or_default();
            Self {
                game,
                selected,
                moves,
            }
        }
    }

    impl FeedbackSource for MockFeedbackSource {
        fn board(&self) -> &Board {
            self.game.board()
        }

        fn selected(&self) -> Option<Point> {
            self.selected
        }

        fn moves(&self) -> &MoveGrid {
            &self.moves
        }

        fn status(&self) -> GameStatus {
            self.game.status()
        }
    }

    fn sq(name: &str) -> Point {
        name.parse().expect("valid square")
    }

    fn game_after(moves: &[(&str, &str)]) -> Game {
        let mut game = Game::new();
        for &(from, to) in moves {
            game.normal_move(sq(from), sq(to));
        }
        game
    }

    fn position(side: Color, pieces: &[(&str, Role, Color)]) -> Game {
        let board = Board::from_pieces(
            side,
            pieces
                .iter()
                .map(|&(name, role, color)| (sq(name), Piece::new(role, color))),
        )
        .expect("valid position");
        Game::from_board(board)
    }

    #[test]
    fn test_no_feedback_when_nothing_selected() {
        let source = MockFeedbackSource::new(Game::new(), None);

        let feedback = compute_feedback(&source);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_show_destinations_when_piece_selected() {
        let source = MockFeedbackSource::new(Game::new(), Some("e2"));

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("e2")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(sq("e3")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("e4")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("d2")), None);
        assert_eq!(feedback.squares().len(), 3);
    }

    #[test]
    fn test_distinguish_captures() {
        let game = game_after(&[("e2", "e4"), ("d7", "d5")]);
        let source = MockFeedbackSource::new(game, Some("e4"));

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("e4")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(sq("e5")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("d5")), Some(SquareFeedback::Capture));
    }

    #[test]
    fn test_en_passant_is_a_capture() {
        let game = game_after(&[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
        let source = MockFeedbackSource::new(game, Some("e5"));

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("d6")), Some(SquareFeedback::Capture));
        assert_eq!(feedback.get(sq("e6")), Some(SquareFeedback::Destination));
    }

    #[test]
    fn test_castling_is_special() {
        let game = position(
            Color::White,
            &[
                ("e1", Role::King, Color::White),
                ("h1", Role::Rook, Color::White),
                ("e8", Role::King, Color::Black),
            ],
        );
        let source = MockFeedbackSource::new(game, Some("e1"));

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("h1")), Some(SquareFeedback::Special));
        assert_eq!(feedback.get(sq("f1")), Some(SquareFeedback::Destination));
    }

    #[test]
    fn test_check_marks_king_and_checker() {
        let game = game_after(&[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
        let source = MockFeedbackSource::new(game, None);

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("e8")), Some(SquareFeedback::Check));
        assert_eq!(feedback.get(sq("h5")), Some(SquareFeedback::Checker));
        assert_eq!(feedback.squares().len(), 2);
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut feedback = BoardFeedback::new();
        feedback.set(sq("e4"), SquareFeedback::Destination);
        feedback.set(sq("e4"), SquareFeedback::Capture);

        assert_eq!(feedback.get(sq("e4")), Some(SquareFeedback::Capture));
        assert_eq!(feedback.squares().len(), 1);
    }
}
