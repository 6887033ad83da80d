//! Rule presets for common configurations.

use crate::{SendWithoutSelect, UnbufferedChannel};
use chanlint_core::RuleBox;

/// Preset configurations for chanlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Both channel rules with their default severities.
    Recommended,
    /// Only the blocking-send warning, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `send-without-select` (CH001) - sends outside any select
/// - `unbuffered-channel` (CH002) - `make(chan T)` without capacity
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(SendWithoutSelect::new()),
        Box::new(UnbufferedChannel::new()),
    ]
}

/// Returns the minimal set of rules: `send-without-select` only.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(SendWithoutSelect::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
