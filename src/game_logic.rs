pub mod attacks;
pub mod engine;
pub mod history;
pub mod legality;
pub mod moves;
pub mod outcome;
mod rules;
pub mod special;

pub use engine::{GameEngine, GameState};
pub use moves::{Move, MoveGrid};
pub use outcome::GameStatus;
pub use special::CastleSide;

use crate::config::RuleConfig;
use crate::game_state::{Board, Color, Piece, Point, PromotionRole, Role};
use history::{History, PlyKind};

/// One game of chess: the board plus the turn-scoped state the rules need.
///
/// Moves are applied through the typed operations below. Callers consult
/// [`Game::available_moves`] first; an illegal move is a caller bug, not an
/// error value.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Square skipped by the previous ply's double pawn push.
    en_passant: Option<Point>,
    history: History,
    config: RuleConfig,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a game from an arbitrary position, with no en passant target.
    pub fn from_board(board: Board) -> Self {
        board.assert_kings();
        let history = History::new(&board, None);
        let mut game = Self {
            board,
            en_passant: None,
            history,
            config: RuleConfig::default(),
            status: GameStatus::Ongoing,
        };
        game.status = game.evaluate(game.history.current_repetitions());
        game
    }

    /// Replace the draw thresholds and re-evaluate the current position.
    pub fn with_config(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self.status = self.evaluate(self.history.current_repetitions());
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Status computed after the last ply.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Point> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn quiet_plies(&self) -> u32 {
        self.history.quiet_plies()
    }

    /// The piece at `point` if it belongs to the side to move.
    #[inline]
    pub fn allied_piece_at(&self, point: Point) -> Option<Piece> {
        self.board.allied_piece_at(point)
    }

    #[inline]
    pub fn is_light_tile(&self, point: Point) -> bool {
        self.board.is_light_tile(point)
    }

    /// Legal destinations of the side to move's piece on `from`.
    ///
    /// Empty when `from` holds no allied piece or the game is over.
    pub fn available_moves(&self, from: Point) -> MoveGrid {
        if self.status.is_game_over() {
            return MoveGrid::new();
        }
        legality::legal_moves_from(&self.board, self.en_passant, from)
    }

    /// Whether the side to move has no legal move at all.
    pub fn is_move_impossible(&self) -> bool {
        !legality::has_any_legal_move(&self.board, self.en_passant)
    }

    pub fn legal_move_count(&self) -> usize {
        legality::count_legal_moves(&self.board, self.en_passant)
    }

    /// Ordinary move or capture, including a pawn's double step.
    ///
    /// # Panics
    /// If the game is over or `from` holds no allied piece.
    pub fn normal_move(&mut self, from: Point, to: Point) -> GameStatus {
        let piece = self.mover(from);
        debug_assert_eq!(self.available_moves(from)[to], Move::Normal);

        let captured = self.board.relocate(piece.moved(), from, to);
        log::debug!("{} {from}{to}", piece.char());

        let kind = if piece.role() == Role::Pawn || captured.is_some() {
            PlyKind::PawnOrCapture
        } else {
            PlyKind::Quiet
        };
        self.finish_ply(kind, special::double_push_target(piece, from, to))
    }

    /// Move a pawn onto its last rank and replace it with `role`.
    ///
    /// # Panics
    /// If the game is over or `from` holds no allied piece.
    pub fn pawn_promotion(&mut self, role: PromotionRole, from: Point, to: Point) -> GameStatus {
        let pawn = self.mover(from);
        debug_assert_eq!(self.available_moves(from)[to], Move::PawnPromotion);

        let promoted = Piece::new(role.into(), pawn.color()).moved();
        self.board.relocate(promoted, from, to);
        log::debug!("{} {from}{to}={}", pawn.char(), promoted.char());

        self.finish_ply(PlyKind::PawnOrCapture, None)
    }

    /// Capture en passant with the pawn on `from`.
    ///
    /// # Panics
    /// If the game is over, `from` holds no allied piece, or there is no
    /// en passant target.
    pub fn en_passant(&mut self, from: Point) -> GameStatus {
        let pawn = self.mover(from);
        let target = self
            .en_passant
            .expect("en passant requires a target from the previous ply");
        debug_assert_eq!(self.available_moves(from)[target], Move::EnPassant);

        special::apply_en_passant(&mut self.board, from, target);
        log::debug!("{} {from}{target} e.p.", pawn.char());

        self.finish_ply(PlyKind::PawnOrCapture, None)
    }

    pub fn queen_side_castle(&mut self) -> GameStatus {
        self.castle(CastleSide::QueenSide)
    }

    pub fn king_side_castle(&mut self) -> GameStatus {
        self.castle(CastleSide::KingSide)
    }

    fn castle(&mut self, side: CastleSide) -> GameStatus {
        let color = self.side_to_move();
        self.mover(CastleSide::king_square(color));
        debug_assert!(special::can_castle(&self.board, side));

        special::castle(&mut self.board, side);
        log::debug!("{color} castles {side:?}");

        self.finish_ply(PlyKind::Castle, None)
    }

    /// The allied piece about to move.
    fn mover(&self, from: Point) -> Piece {
        assert!(
            !self.status.is_game_over(),
            "game is already over: {}",
            self.status
        );
        self.board
            .allied_piece_at(from)
            .unwrap_or_else(|| panic!("no {} piece on {from}", self.side_to_move()))
    }

    /// Hand over the turn and re-evaluate the position.
    fn finish_ply(&mut self, kind: PlyKind, en_passant: Option<Point>) -> GameStatus {
        self.en_passant = en_passant;
        self.board.pass_turn();
        self.board.assert_kings();

        let repetitions = self.history.record(&self.board, self.en_passant, kind);
        assert!(
            self.history.quiet_plies() <= self.config.max_quiet_plies,
            "half-move clock passed its limit of {}",
            self.config.max_quiet_plies
        );

        self.status = self.evaluate(repetitions);
        if self.status.is_game_over() {
            log::info!("game over: {}", self.status);
        } else {
            log::debug!("{} to move, {}", self.side_to_move(), self.status);
        }
        self.status
    }

    fn evaluate(&self, repetitions: u8) -> GameStatus {
        outcome::evaluate(
            &self.board,
            self.en_passant,
            self.history.quiet_plies(),
            repetitions,
            &self.config,
        )
    }
}
