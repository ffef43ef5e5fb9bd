use super::{Game, GameStatus, Move, MoveGrid};
use crate::PromotionPicker;
use crate::feedback::FeedbackSource;
use crate::game_state::{Board, Point};

/// Snapshot of the game as seen by feedback and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    selected: Option<Point>,
    moves: MoveGrid,
    status: GameStatus,
}

impl GameState {
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn selected(&self) -> Option<Point> {
        self.selected
    }

    #[inline]
    pub fn moves(&self) -> &MoveGrid {
        &self.moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl FeedbackSource for GameState {
    fn board(&self) -> &Board {
        &self.board
    }

    fn selected(&self) -> Option<Point> {
        self.selected
    }

    fn moves(&self) -> &MoveGrid {
        &self.moves
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}

/// Turns square clicks into moves.
///
/// The first click selects one of the side to move's pieces, the second picks
/// a highlighted destination. Castling is chosen by clicking the rook's corner
/// with the king selected.
#[derive(Debug, Default)]
pub struct GameEngine {
    game: Game,
    selected: Option<Point>,
    moves: MoveGrid,
}

impl GameEngine {
    #[inline]
    pub fn new() -> Self {
        Self::from_game(Game::new())
    }

    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            selected: None,
            moves: MoveGrid::new(),
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square of the currently selected piece, if any.
    #[inline]
    pub fn selected(&self) -> Option<Point> {
        self.selected
    }

    /// Start over from the standard position, keeping the rule configuration.
    pub fn reset(&mut self) {
        let config = *self.game.config();
        *self = Self::from_game(Game::new().with_config(config));
    }

    pub fn state(&self) -> GameState {
        GameState {
            board: self.game.board().clone(),
            selected: self.selected,
            moves: self.moves.clone(),
            status: self.game.status(),
        }
    }

    /// Process a click on `point`.
    ///
    /// `picker` is asked for a role, and the game waits for its answer, only
    /// when the click completes a pawn promotion.
    pub fn click(&mut self, point: Point, picker: &mut impl PromotionPicker) -> GameState {
        if self.game.status().is_game_over() {
            log::trace!("click on {point} ignored, game is over");
            return self.state();
        }

        match self.selected {
            Some(from) if self.moves[point] != Move::None => {
                let kind = self.moves[point];
                self.clear_selection();
                self.dispatch(from, point, kind, picker);
            }
            Some(from) if from != point && self.game.allied_piece_at(point).is_some() => {
                self.select(point);
            }
            Some(_) => self.clear_selection(),
            None => self.select(point),
        }
        self.state()
    }

    fn select(&mut self, point: Point) {
        let moves = self.game.available_moves(point);
        if moves.is_empty() {
            log::trace!("nothing to select on {point}");
            self.clear_selection();
        } else {
            log::trace!("selected {point} with {} moves", moves.count());
            self.selected = Some(point);
            self.moves = moves;
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.moves = MoveGrid::new();
    }

    fn dispatch(
        &mut self,
        from: Point,
        to: Point,
        kind: Move,
        picker: &mut impl PromotionPicker,
    ) -> GameStatus {
        match kind {
            Move::Normal => self.game.normal_move(from, to),
            Move::PawnPromotion => {
                let role = picker.pick_promotion(self.game.side_to_move());
                self.game.pawn_promotion(role, from, to)
            }
            Move::EnPassant => self.game.en_passant(from),
            Move::QueenSideCastle => self.game.queen_side_castle(),
            Move::KingSideCastle => self.game.king_side_castle(),
            Move::None => unreachable!("dispatch requires an available move"),
        }
    }
}
