use std::io::{self, Write};

use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::game_state::{BOARD_SIZE, Board, Point};

const RESET: &str = "\x1b[0m";
const LIGHT_TILE: &str = "\x1b[107;30m";
const DARK_TILE: &str = "\x1b[100;97m";

/// Terminal-based board display for development and testing.
///
/// Renders the board as an 8×8 grid seen from the side to move, with
/// ANSI color-coded squares matching the feedback type.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback)
    }
}

/// Render to any writer. Extracted for testability.
fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    let side = board.side_to_move();
    for row in (0..BOARD_SIZE).rev() {
        let rank = Point::new(0, row).relative_to(side).rank();
        write!(w, " {} ", rank + 1)?;
        for file in 0..BOARD_SIZE {
            let point = Point::new(file, rank);
            let symbol = board.piece_at(point).map_or('·', |piece| piece.char());
            let background = feedback
                .get(point)
                .map_or_else(|| tile(board, point), feedback_color);
            write!(w, "{background} {symbol} {RESET}")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

fn tile(board: &Board, point: Point) -> &'static str {
    if board.is_light_tile(point) {
        LIGHT_TILE
    } else {
        DARK_TILE
    }
}

/// Map a feedback variant to an ANSI background.
fn feedback_color(feedback: SquareFeedback) -> &'static str {
    match feedback {
        SquareFeedback::Destination => "\x1b[44m",
        SquareFeedback::Capture => "\x1b[41m",
        SquareFeedback::Origin => "\x1b[42m",
        SquareFeedback::Special => "\x1b[46m",
        SquareFeedback::Check => "\x1b[45m",
        SquareFeedback::Checker => "\x1b[43m",
    }
}
