pub mod piece;
pub mod point;

use crate::game_logic::attacks::is_king_in_check;

pub use piece::{Color, Piece, PromotionRole, Role};
pub use point::{BOARD_SIZE, Point, SquareParseError};

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Reasons a custom position cannot be set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} has no king")]
    MissingKing(Color),
    #[error("{0} has more than one king")]
    DuplicateKing(Color),
    #[error("two pieces placed on {0}")]
    Occupied(Point),
    #[error("pawn placed on back rank at {0}")]
    PawnOnBackRank(Point),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

/// The 8×8 grid of pieces, the cached king squares, and the side to move.
///
/// Exactly one king of each color is on the board at all times. Breaking that
/// is an internal error and panics rather than being reported as a game result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    kings: [Point; 2],
    side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        let mut cells = [[None; 8]; 8];
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_rank() as usize;
            for (file, role) in BACK_RANK.into_iter().enumerate() {
                cells[back][file] = Some(Piece::new(role, color));
                cells[pawns][file] = Some(Piece::new(Role::Pawn, color));
            }
        }

        Self {
            cells,
            kings: [
                Point::new(4, Color::White.back_rank()),
                Point::new(4, Color::Black.back_rank()),
            ],
            side_to_move: Color::White,
        }
    }

    /// Build an arbitrary position from a list of placements.
    ///
    /// Pieces are placed unmoved, so a king and rook on their starting squares
    /// keep their castling rights. Pawns away from their starting rank are
    /// placed as moved and lose the double step. The side not to move must not
    /// be in check, which also rules out adjacent kings.
    pub fn from_pieces(
        side_to_move: Color,
        pieces: impl IntoIterator<Item = (Point, Piece)>,
    ) -> Result<Self, SetupError> {
        let mut cells = [[None; 8]; 8];
        let mut kings: [Option<Point>; 2] = [None, None];

        for (point, piece) in pieces {
            let cell = &mut cells[point.rank() as usize][point.file() as usize];
            if cell.is_some() {
                return Err(SetupError::Occupied(point));
            }
            match piece.role() {
                Role::Pawn if point.rank() == 0 || point.rank() == BOARD_SIZE - 1 => {
                    return Err(SetupError::PawnOnBackRank(point));
                }
                Role::King => {
                    let slot = &mut kings[piece.color().index()];
                    if slot.is_some() {
                        return Err(SetupError::DuplicateKing(piece.color()));
                    }
                    *slot = Some(point);
                }
                _ => {}
            }
            let off_start = piece.role() == Role::Pawn && point.rank() != piece.color().pawn_rank();
            *cell = Some(if off_start { piece.moved() } else { piece });
        }

        let [Some(white), Some(black)] = kings else {
            let missing = if kings[0].is_none() {
                Color::White
            } else {
                Color::Black
            };
            return Err(SetupError::MissingKing(missing));
        };

        let board = Self {
            cells,
            kings: [white, black],
            side_to_move,
        };
        let opponent = side_to_move.opposite();
        if is_king_in_check(&board, opponent) {
            return Err(SetupError::OpponentInCheck(opponent));
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, point: Point) -> Option<Piece> {
        self.cells[point.rank() as usize][point.file() as usize]
    }

    /// The piece at `point` if it belongs to the side to move.
    #[inline]
    pub fn allied_piece_at(&self, point: Point) -> Option<Piece> {
        self.piece_at(point).filter(|p| p.color() == self.side_to_move)
    }

    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        self.piece_at(point).is_none()
    }

    /// Whether `point` holds a piece of the color opposing `color`.
    #[inline]
    pub fn is_enemy(&self, point: Point, color: Color) -> bool {
        self.piece_at(point).is_some_and(|p| p.color() != color)
    }

    /// Empty, or holding an enemy piece that may be captured.
    #[inline]
    pub fn is_empty_or_enemy(&self, point: Point, color: Color) -> bool {
        self.piece_at(point).is_none_or(|p| p.color() != color)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached square of `color`'s king.
    #[inline]
    pub fn king(&self, color: Color) -> Point {
        self.kings[color.index()]
    }

    /// Light squares are those where file + rank is odd (h1 is light).
    #[inline]
    pub fn is_light_tile(&self, point: Point) -> bool {
        (point.file() + point.rank()) % 2 == 1
    }

    /// All occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Point, Piece)> + '_ {
        Point::all().filter_map(|point| self.piece_at(point).map(|piece| (point, piece)))
    }

    /// Raw placement. Does not touch the king cache or any move bookkeeping.
    #[inline]
    pub(crate) fn set(&mut self, point: Point, piece: Option<Piece>) {
        self.cells[point.rank() as usize][point.file() as usize] = piece;
    }

    /// Remove and return whatever occupies `point`.
    #[inline]
    pub(crate) fn take(&mut self, point: Point) -> Option<Piece> {
        self.cells[point.rank() as usize][point.file() as usize].take()
    }

    /// Move `piece` from `from` to `to`, replacing any occupant of `to`.
    ///
    /// Keeps the king cache in step when a king moves. Returns the displaced
    /// occupant of `to`.
    pub(crate) fn relocate(&mut self, piece: Piece, from: Point, to: Point) -> Option<Piece> {
        self.set(from, None);
        let previous = self.take(to);
        self.set(to, Some(piece));
        if piece.role() == Role::King {
            self.kings[piece.color().index()] = to;
        }
        previous
    }

    /// Hand the move to the other side.
    #[inline]
    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Verify exactly one king per color sits on its cached square.
    ///
    /// # Panics
    /// If a king is missing, duplicated, or not where the cache says.
    pub fn assert_kings(&self) {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|(_, piece)| piece.is(Role::King, color))
                .count();
            assert_eq!(count, 1, "board must hold exactly one {color} king");
            self.assert_king_at(color, self.king(color));
        }
    }

    /// # Panics
    /// If `point` does not hold `color`'s king.
    pub(crate) fn assert_king_at(&self, color: Color, point: Point) {
        assert!(
            self.piece_at(point).is_some_and(|p| p.is(Role::King, color)),
            "{color} king not where specified: {point}"
        );
    }
}
