/// Draw thresholds applied by the outcome evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    /// Half-moves without a pawn move or capture before the game is drawn.
    pub max_quiet_plies: u32,
    /// Occurrences of one position before the game is drawn.
    pub max_repetitions: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_quiet_plies: 100,
            max_repetitions: 3,
        }
    }
}
