use serde::{Deserialize, Serialize};

/// Minimum percentage needed to pass when nothing else is configured.
pub const DEFAULT_PASS_THRESHOLD: u8 = 80;

/// Tunable assessment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Percentage (0-100) at or above which an attempt passes.
    pub pass_threshold: u8,
}

impl AssessmentConfig {
    pub fn with_pass_threshold(mut self, pass_threshold: u8) -> Self {
        self.pass_threshold = pass_threshold.min(100);
        self
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}
