use chess_referee::config::RuleConfig;
use chess_referee::game_logic::{Game, GameStatus, Move};
use chess_referee::game_state::{Board, Color, Piece, Point, Role};

fn sq(name: &str) -> Point {
    name.parse().expect("valid square")
}

fn play(game: &mut Game, moves: &[(&str, &str)]) -> GameStatus {
    let mut status = game.status();
    for &(from, to) in moves {
        status = game.normal_move(sq(from), sq(to));
    }
    status
}

fn setup(side: Color, pieces: &[(&str, Role, Color)]) -> Game {
    let board = Board::from_pieces(
        side,
        pieces
            .iter()
            .map(|&(name, role, color)| (sq(name), Piece::new(role, color))),
    )
    .expect("valid position");
    Game::from_board(board)
}

const KNIGHT_SHUFFLE: [(&str, &str); 4] = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];

#[test]
fn initial_position_has_twenty_moves() {
    let game = Game::new();
    assert_eq!(game.legal_move_count(), 20);

    let pawn_moves: usize = (0..8)
        .map(|file| game.available_moves(Point::new(file, 1)).count())
        .sum();
    assert_eq!(pawn_moves, 16);
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );

    assert_eq!(status, GameStatus::WhiteWins);
    assert!(status.is_game_over());
    assert!(game.is_move_impossible());
    assert_eq!(game.legal_move_count(), 0);
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(status, GameStatus::BlackWins);
}

#[test]
fn queen_move_stalemates_lone_king() {
    let mut game = setup(
        Color::White,
        &[
            ("a8", Role::King, Color::Black),
            ("b5", Role::Queen, Color::White),
            ("c1", Role::King, Color::White),
        ],
    );

    let status = game.normal_move(sq("b5"), sq("b6"));

    assert_eq!(status, GameStatus::Stalemate);
    assert!(game.is_move_impossible());
}

#[test]
fn pinned_rook_cannot_leave_file() {
    let game = setup(
        Color::White,
        &[
            ("e1", Role::King, Color::White),
            ("e2", Role::Rook, Color::White),
            ("e8", Role::Rook, Color::Black),
            ("a8", Role::King, Color::Black),
        ],
    );

    let grid = game.available_moves(sq("e2"));
    assert_eq!(grid[sq("d2")], Move::None);
    assert_eq!(grid[sq("a2")], Move::None);
    assert_eq!(grid[sq("e5")], Move::Normal);
    assert_eq!(grid[sq("e8")], Move::Normal);
}

#[test]
fn threefold_repetition() {
    let mut game = Game::new();
    play(&mut game, &KNIGHT_SHUFFLE);
    let status = play(&mut game, &KNIGHT_SHUFFLE[..3]);
    assert_eq!(status, GameStatus::Ongoing);

    let status = play(&mut game, &KNIGHT_SHUFFLE[3..]);
    assert_eq!(status, GameStatus::TooManyRepetitions);
}

#[test]
fn pawn_move_resets_repetition_count() {
    let mut game = Game::new();
    play(&mut game, &KNIGHT_SHUFFLE);
    play(&mut game, &[("e2", "e3"), ("e7", "e6")]);
    assert_eq!(game.quiet_plies(), 0);

    // The start position was seen twice, but that history is gone.
    let status = play(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(status, GameStatus::Ongoing);

    let status = play(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(status, GameStatus::TooManyRepetitions);
}

#[test]
fn fifty_move_rule() {
    let config = RuleConfig {
        max_quiet_plies: 6,
        max_repetitions: 10,
    };
    let mut game = Game::new().with_config(config);
    play(&mut game, &KNIGHT_SHUFFLE);
    let status = play(&mut game, &KNIGHT_SHUFFLE[..2]);
    assert_eq!(status, GameStatus::TooManyMoves);
    assert_eq!(game.quiet_plies(), 6);
}

#[test]
fn capture_leaving_bare_kings_is_insufficient() {
    let mut game = setup(
        Color::White,
        &[
            ("d4", Role::King, Color::White),
            ("d5", Role::Queen, Color::Black),
            ("h8", Role::King, Color::Black),
        ],
    );
    assert_eq!(game.status(), GameStatus::InCheck);

    let status = game.normal_move(sq("d4"), sq("d5"));
    assert_eq!(status, GameStatus::InsufficientMating);
}

#[test]
fn king_and_rook_is_not_insufficient() {
    let mut game = setup(
        Color::White,
        &[
            ("e1", Role::King, Color::White),
            ("a1", Role::Rook, Color::White),
            ("e8", Role::King, Color::Black),
        ],
    );
    let status = game.normal_move(sq("e1"), sq("d1"));
    assert_eq!(status, GameStatus::Ongoing);
}

#[test]
fn en_passant_only_on_following_ply() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    assert_eq!(game.available_moves(sq("e5"))[sq("d6")], Move::EnPassant);

    play(&mut game, &[("h2", "h3"), ("h7", "h6")]);
    assert_eq!(game.available_moves(sq("e5"))[sq("d6")], Move::None);
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn castling_refused_through_attacked_square() {
    let game = setup(
        Color::White,
        &[
            ("e1", Role::King, Color::White),
            ("a1", Role::Rook, Color::White),
            ("h1", Role::Rook, Color::White),
            ("f8", Role::Rook, Color::Black),
            ("b8", Role::King, Color::Black),
        ],
    );

    let grid = game.available_moves(sq("e1"));
    assert_eq!(grid[sq("h1")], Move::None, "f1 is attacked");
    assert_eq!(grid[sq("a1")], Move::QueenSideCastle);
}

#[test]
fn castling_lost_after_king_moves_back() {
    let mut game = setup(
        Color::White,
        &[
            ("e1", Role::King, Color::White),
            ("h1", Role::Rook, Color::White),
            ("a8", Role::King, Color::Black),
        ],
    );
    play(
        &mut game,
        &[("e1", "e2"), ("a8", "b8"), ("e2", "e1"), ("b8", "a8")],
    );

    assert_eq!(game.available_moves(sq("e1"))[sq("h1")], Move::None);
}

#[test]
fn castling_moves_both_pieces() {
    let mut game = setup(
        Color::Black,
        &[
            ("e1", Role::King, Color::White),
            ("e8", Role::King, Color::Black),
            ("a8", Role::Rook, Color::Black),
        ],
    );

    game.queen_side_castle();

    let board = game.board();
    assert!(board.piece_at(sq("c8")).is_some_and(|p| p.is(Role::King, Color::Black)));
    assert!(board.piece_at(sq("d8")).is_some_and(|p| p.is(Role::Rook, Color::Black)));
    assert_eq!(game.side_to_move(), Color::White);
}
