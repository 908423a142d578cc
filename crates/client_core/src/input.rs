//! Raw input model: the text being edited, the selected mode, and the
//! declared size, with the grow-only size synchronization applied on
//! loss-of-focus and mode switches.

use shared::domain::{InputMode, MAX_SIZE, MIN_SIZE};

use crate::{
    controller::DrawInput,
    validation::{
        parse_cover_relations, parse_linear_orders, synced_size_for_linear_orders,
        synced_size_for_poset, validate, ValidationOutcome,
    },
};

#[derive(Debug, Clone)]
pub struct RawInput {
    mode: InputMode,
    text: String,
    size: usize,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            mode: InputMode::LinearOrders,
            text: String::new(),
            size: 4,
        }
    }
}

impl RawInput {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Mutated on every edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The explicit slider path; clamped to the slider's [2, 6] range.
    pub fn set_size(&mut self, size: usize) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    /// Switching modes re-synchronizes the size against the current text.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            self.sync_size();
        }
    }

    /// Loss-of-focus hook. Linear Orders adopt the first line's length;
    /// Poset sizes only ever grow to the largest referenced element.
    pub fn sync_size(&mut self) {
        match self.mode {
            InputMode::LinearOrders => {
                if let Some(size) = synced_size_for_linear_orders(&self.text) {
                    self.size = size;
                }
            }
            InputMode::Poset => {
                self.size = synced_size_for_poset(self.size, &self.text);
            }
        }
    }

    pub fn validate(&self) -> ValidationOutcome {
        validate(self.mode, self.size, &self.text)
    }

    /// Parses the current text into the Draw action's input, dispatching on
    /// the selected mode. The error is the first offending line's message.
    pub fn draw_input(&self) -> Result<DrawInput, String> {
        match self.mode {
            InputMode::LinearOrders => Ok(DrawInput::LinearOrders(parse_linear_orders(&self.text))),
            InputMode::Poset => parse_cover_relations(&self.text).map(DrawInput::Poset),
        }
    }

    /// The linear orders to cover, for the Solve action. Only meaningful in
    /// Linear Orders mode.
    pub fn upsilon(&self) -> Vec<String> {
        parse_linear_orders(&self.text)
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
