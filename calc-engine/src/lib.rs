//! Calculator Engine Library
//!
//! A reusable state engine for an interactive arithmetic calculator driven by
//! discrete input tokens (digits, decimal point, operators, equals, clear, sign
//! toggle, percent and a fixed set of scientific functions).
//!
//! # Architecture
//!
//! This library is intentionally focused on calculation state:
//! - Classifies raw input symbols into tokens, gated by mode
//! - Applies each token to the accumulator/operator state
//! - Produces display text, history text and a transient error message
//!
//! The library does NOT:
//! - Render anything or know about buttons and keyboards
//! - Parse multi-operator expressions
//! - Persist history across sessions
//!
//! Reading tokens from a terminal lives in the application layer (calc-cli).
//!
//! # Example Usage
//!
//! ```
//! use calc_engine::{Calculator, EngineConfig, Mode};
//!
//! let config = EngineConfig::new()
//!     .with_mode(Mode::Scientific)
//!     .with_error_timeout_ms(3000);
//! let mut calc = Calculator::with_config(config);
//!
//! for symbol in ["1", "6", "sqrt", "+", "2", "="] {
//!     calc.submit_symbol(symbol);
//! }
//!
//! assert_eq!(calc.display_text(), "6");
//! assert_eq!(calc.history_text(), "4 + 2 = 6");
//! assert_eq!(calc.error_text(), None);
//! ```

// Public modules
pub mod arithmetic;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error_slot;
pub mod format;
pub mod number;
pub mod types;

// Re-export main types for convenience
pub use classifier::{classify, classify_for};
pub use config::EngineConfig;
pub use engine::Calculator;
pub use error_slot::{ErrorSlot, TransientError};
pub use types::{
    BinaryOp, CalcError, HistoryEntry, Mode, Result, ScientificFunction, Snapshot, Timestamp,
    Token,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a fresh calculator shows zero
        let calc = Calculator::new();
        assert_eq!(calc.display_text(), "0");
        assert_eq!(calc.history_text(), "");
        assert_eq!(calc.error_text(), None);
    }
}
