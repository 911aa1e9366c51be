//! Transition configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitionError};
use crate::interp::{Interpolation, Timing};

/// Default typing speed for rate-based transitions, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 166.0;
/// Characters per "word" when converting a rate to characters per second.
pub const DEFAULT_AVERAGE_WORD_LENGTH: f64 = 5.0;
/// Share of a typewriter transition spent reaching the placeholder mask.
pub const DEFAULT_TYPEWRITER_SPLIT: f64 = 1.0 / 3.0;

/// Defaults applied by `TextTransitions` when a call leaves them out.
/// Passed in explicitly; there is no global instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fraction of a typewriter duration used by the mask phase, in [0,1].
    pub typewriter_split: f64,
    pub average_word_length: f64,
    pub words_per_minute: f64,
    pub timing: Timing,
    pub interpolation: Interpolation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typewriter_split: DEFAULT_TYPEWRITER_SPLIT,
            average_word_length: DEFAULT_AVERAGE_WORD_LENGTH,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            timing: Timing::default(),
            interpolation: Interpolation::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.typewriter_split) {
            return Err(invalid("typewriter_split", "must lie in [0, 1]"));
        }
        if !(self.average_word_length.is_finite() && self.average_word_length > 0.0) {
            return Err(invalid("average_word_length", "must be positive and finite"));
        }
        if !(self.words_per_minute.is_finite() && self.words_per_minute > 0.0) {
            return Err(invalid("words_per_minute", "must be positive and finite"));
        }
        Ok(())
    }

    /// Typing speed in grapheme clusters per second.
    #[inline]
    pub fn characters_per_second(&self, words_per_minute: f64) -> f64 {
        words_per_minute * self.average_word_length / 60.0
    }
}

fn invalid(field: &str, reason: &str) -> TransitionError {
    TransitionError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
