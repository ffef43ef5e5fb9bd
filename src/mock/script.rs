use std::collections::VecDeque;

use thiserror::Error;

use crate::PromotionPicker;
use crate::game_state::{Color, Point, PromotionRole};

/// Error when parsing a click script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseError(String);

/// Scripted square clicks, replayed in batches.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClicks {
    pending_batches: VecDeque<Vec<Point>>,
}

impl ScriptedClicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional script.
    ///
    /// Format:
    /// - Squares are 2 characters (e.g., "e2", "a1")
    /// - Spaces separate squares in the same batch
    /// - Periods (". ") end a batch
    ///
    /// Examples:
    /// - `"e2e4."` - Click e2 then e4
    /// - `"e2 e4."` - Same (explicit space)
    /// - `"e2.  e4."` - Same clicks, as two batches
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let batches = parse_script(script)?;
        self.pending_batches.extend(batches);
        Ok(())
    }

    /// Next pending batch of clicks, if any.
    pub fn next_batch(&mut self) -> Option<Vec<Point>> {
        self.pending_batches.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending_batches.is_empty()
    }

    /// Replay all pending clicks in order.
    pub fn drain<F>(&mut self, mut on_click: F)
    where
        F: FnMut(Point),
    {
        while let Some(batch) = self.next_batch() {
            batch.into_iter().for_each(&mut on_click);
        }
    }
}

/// Parse a click script into batches of squares.
fn parse_script(script: &str) -> Result<Vec<Vec<Point>>, ParseError> {
    let mut batches: Vec<Vec<Point>> = vec![Vec::new()];
    let mut current_token = String::new();

    for ch in script.chars() {
        match ch {
            '.' => {
                flush_token(&mut current_token, &mut batches)?;
                batches.push(Vec::new());
            }
            c if c.is_whitespace() => {
                flush_token(&mut current_token, &mut batches)?;
            }
            _ => {
                current_token.push(ch);

                // Squares are exactly 2 characters (e.g., "e2", "a1")
                if current_token.chars().count() == 2 {
                    flush_token(&mut current_token, &mut batches)?;
                }
            }
        }
    }

    flush_token(&mut current_token, &mut batches)?;

    batches.retain(|b| !b.is_empty());
    Ok(batches)
}

/// Add current token to the last batch and clear it.
fn flush_token(token: &mut String, batches: &mut [Vec<Point>]) -> Result<(), ParseError> {
    if !token.is_empty() {
        let point: Point = token.parse().map_err(|_| ParseError(token.clone()))?;
        if let Some(batch) = batches.last_mut() {
            batch.push(point);
        }
        token.clear();
    }
    Ok(())
}

/// Promotion choices answered from a queue.
///
/// Falls back to a queen once the queue runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPromotion {
    roles: VecDeque<PromotionRole>,
}

impl ScriptedPromotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roles(roles: impl IntoIterator<Item = PromotionRole>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn push(&mut self, role: PromotionRole) {
        self.roles.push_back(role);
    }

    /// Whether every queued choice has been used.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl PromotionPicker for ScriptedPromotion {
    fn pick_promotion(&mut self, color: Color) -> PromotionRole {
        let role = self.roles.pop_front().unwrap_or(PromotionRole::Queen);
        log::trace!("{color} promotes to {role:?}");
        role
    }
}
