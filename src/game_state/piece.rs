use std::fmt;

use super::point::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the side's pieces start on.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Rank the side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        (self.back_rank() as i8 + self.forward()) as u8
    }

    /// Far edge of the board, where this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// Uppercase letter used by the terminal display.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// Knights and bishops.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, Role::Knight | Role::Bishop)
    }
}

/// Roles a pawn may be promoted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionRole {
    Queen,
    Knight,
    Rook,
    Bishop,
}

impl PromotionRole {
    pub const ALL: [PromotionRole; 4] = [
        PromotionRole::Queen,
        PromotionRole::Knight,
        PromotionRole::Rook,
        PromotionRole::Bishop,
    ];
}

impl From<PromotionRole> for Role {
    fn from(role: PromotionRole) -> Self {
        match role {
            PromotionRole::Queen => Role::Queen,
            PromotionRole::Knight => Role::Knight,
            PromotionRole::Rook => Role::Rook,
            PromotionRole::Bishop => Role::Bishop,
        }
    }
}

/// A piece on the board.
///
/// Role and color are fixed for the piece's lifetime. A promoted pawn is
/// replaced by a new piece rather than changing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    role: Role,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(role: Role, color: Color) -> Self {
        Self {
            role,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether the piece has completed at least one move.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub(crate) const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn is(&self, role: Role, color: Color) -> bool {
        self.role as u8 == role as u8 && self.color as u8 == color as u8
    }

    /// Letter for display: uppercase for White, lowercase for Black.
    pub fn char(&self) -> char {
        match self.color {
            Color::White => self.role.char(),
            Color::Black => self.role.char().to_ascii_lowercase(),
        }
    }
}
