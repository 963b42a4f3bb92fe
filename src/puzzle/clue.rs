//! Clue prompts attached to words.

use super::types::Direction;

/// An opaque prompt for one word.
///
/// Direction and order are assigned by the [`Word`](super::Word) that takes
/// ownership of the clue; the text never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    text: String,
    direction: Direction,
    order: usize,
}

impl Clue {
    /// Creates an unplaced clue (across, order 0).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direction: Direction::Across,
            order: 0,
        }
    }

    /// Returns the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the direction of the owning word.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the ordering key: the owning word's row when across, its column when down.
    pub fn order(&self) -> usize {
        self.order
    }

    pub(super) fn place(&mut self, direction: Direction, order: usize) {
        self.direction = direction;
        self.order = order;
    }
}
