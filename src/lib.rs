pub mod config;
pub mod feedback;
pub mod game_logic;
pub mod game_state;
pub mod mock;

use game_state::{Board, Color, PromotionRole};

/// Trait for choosing the role a promoting pawn becomes.
///
/// Called synchronously by [`game_logic::GameEngine`] when a click completes a
/// promotion; the ply is not applied until it returns. Abstracts over
/// interactive prompts and scripted choices.
pub trait PromotionPicker {
    fn pick_promotion(&mut self, color: Color) -> PromotionRole;
}

/// Trait for displaying the board and its feedback to the players.
///
/// Abstracts over terminal rendering and any other front-end, providing a
/// uniform interface for the output side of the game loop. Mirrors
/// [`PromotionPicker`] on the input side.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given highlights.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants to their own
    /// output (terminal colors, etc.).
    fn show(
        &mut self,
        board: &Board,
        feedback: &feedback::BoardFeedback,
    ) -> Result<(), Self::Error>;
}
