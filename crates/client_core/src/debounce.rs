//! Trailing-edge coalescing for validation of rapidly edited input.
//!
//! Every edit schedules a check; only the most recently scheduled one runs
//! once the quiescence delay elapses. Superseded schedules are discarded,
//! never executed. Purely time-based, no I/O.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use shared::domain::InputMode;
use tokio::sync::watch;

use crate::validation::{validate, ValidationOutcome};

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(500);

pub struct DebouncedValidator {
    delay: Duration,
    generation: Arc<AtomicU64>,
    outcome: Arc<watch::Sender<ValidationOutcome>>,
}

impl DebouncedValidator {
    pub fn new(delay: Duration) -> Self {
        let (outcome, _) = watch::channel(ValidationOutcome::ok());
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            outcome: Arc::new(outcome),
        }
    }

    /// Receiver of the latest published outcome; gates the action triggers.
    pub fn subscribe(&self) -> watch::Receiver<ValidationOutcome> {
        self.outcome.subscribe()
    }

    /// Schedules a check of `text` against `mode`/`size`. Must be called
    /// from within a tokio runtime.
    pub fn schedule(&self, mode: InputMode, size: usize, text: impl Into<String>) {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let outcome = Arc::clone(&self.outcome);
        let delay = self.delay;
        let text = text.into();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) != scheduled {
                return;
            }
            let _ = outcome.send(validate(mode, size, &text));
        });
    }
}

impl Default for DebouncedValidator {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
