//! Engine configuration types
//!
//! This module defines the knobs a host can turn on the engine. Defaults give
//! a 12-character display, 6 exponent digits, 7-decimal result rounding and a
//! 3 second error display.

use crate::types::Mode;
use serde::{Deserialize, Serialize};

/// Configuration for the calculator engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial mode (survives `AC`)
    #[serde(default)]
    pub mode: Mode,

    /// How long an error message stays visible, in milliseconds
    #[serde(default = "default_error_timeout")]
    pub error_timeout_ms: u64,

    /// Longest input rendered verbatim before switching to exponential notation
    #[serde(default = "default_display_max_len")]
    pub display_max_len: usize,

    /// Fractional digits used by the exponential display form
    #[serde(default = "default_exponent_digits")]
    pub exponent_digits: usize,

    /// Decimal places kept after an operator chain or `=`
    #[serde(default = "default_result_decimals")]
    pub result_decimals: usize,

    /// Raise an error instead of showing NaN/Infinity from scientific functions
    #[serde(default = "default_true")]
    pub report_domain_errors: bool,

    /// Optional: keep at most this many completed calculations in the log
    #[serde(default)]
    pub history_limit: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_error_timeout() -> u64 {
    3000
}

fn default_display_max_len() -> usize {
    12
}

fn default_exponent_digits() -> usize {
    6
}

fn default_result_decimals() -> usize {
    7
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            error_timeout_ms: default_error_timeout(),
            display_max_len: default_display_max_len(),
            exponent_digits: default_exponent_digits(),
            result_decimals: default_result_decimals(),
            report_domain_errors: default_true(),
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the initial mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set the error display timeout
    pub fn with_error_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.error_timeout_ms = timeout_ms;
        self
    }

    /// Builder method: set the verbatim display length
    pub fn with_display_max_len(mut self, max_len: usize) -> Self {
        self.display_max_len = max_len;
        self
    }

    /// Builder method: enable or disable domain error reporting
    pub fn with_domain_errors(mut self, enabled: bool) -> Self {
        self.report_domain_errors = enabled;
        self
    }

    /// Builder method: cap the history log
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
