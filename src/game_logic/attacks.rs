use crate::game_state::{Board, Color, Point, Role};

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True iff `square` is attacked by any piece of color `by`.
///
/// Evaluated from scratch against the board as it stands; callers testing a
/// hypothetical move must apply it to a copy first.
pub fn is_square_attacked(board: &Board, square: Point, by: Color) -> bool {
    attacked_along_rays(board, square, by, &DIAGONALS, Role::Bishop)
        || attacked_along_rays(board, square, by, &ORTHOGONALS, Role::Rook)
        || attacked_by_pawn(board, square, by)
        || attacked_by_jump(board, square, by, &KNIGHT_JUMPS, Role::Knight)
        || attacked_by_jump(board, square, by, &KING_STEPS, Role::King)
}

/// Whether `color`'s king currently stands on an attacked square.
///
/// # Panics
/// If the cached king square does not hold `color`'s king.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let king = board.king(color);
    board.assert_king_at(color, king);
    is_square_attacked(board, king, color.opposite())
}

/// Walk each ray until the first occupant; a hit is an enemy `slider` or queen.
fn attacked_along_rays(
    board: &Board,
    square: Point,
    by: Color,
    directions: &[(i8, i8)],
    slider: Role,
) -> bool {
    directions.iter().any(|&(df, dr)| {
        let mut current = square.offset(df, dr);
        while let Some(point) = current {
            if let Some(piece) = board.piece_at(point) {
                return piece.color() == by
                    && (piece.role() == slider || piece.role() == Role::Queen);
            }
            current = point.offset(df, dr);
        }
        false
    })
}

/// Enemy pawns attack diagonally forward, so look one step backward from
/// their point of view.
fn attacked_by_pawn(board: &Board, square: Point, by: Color) -> bool {
    let behind = -by.forward();
    [-1, 1].into_iter().any(|df| {
        square
            .offset(df, behind)
            .and_then(|point| board.piece_at(point))
            .is_some_and(|piece| piece.is(Role::Pawn, by))
    })
}

fn attacked_by_jump(
    board: &Board,
    square: Point,
    by: Color,
    offsets: &[(i8, i8)],
    role: Role,
) -> bool {
    offsets.iter().any(|&(df, dr)| {
        square
            .offset(df, dr)
            .and_then(|point| board.piece_at(point))
            .is_some_and(|piece| piece.is(role, by))
    })
}
