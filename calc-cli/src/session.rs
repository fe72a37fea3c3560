//! Interactive session driver
//!
//! Owns one calculator and turns input lines into output records. Lines
//! starting with `:` are host directives (mode switching, history listing);
//! every other line is a token symbol handed to the engine.

use crate::config::OutputConfig;
use crate::report::{render_history, render_snapshot};
use anyhow::Result;
use calc_engine::{Calculator, EngineConfig, Mode};

/// Host-side controls that are not calculator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Flip between basic and scientific mode
    ToggleMode,
    /// Switch to a specific mode
    SetMode(Mode),
    /// Print the completed calculations
    History,
}

impl Directive {
    /// Parse a `:directive` line
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.strip_prefix(':')?.trim();
        let mut words = body.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("mode"), None, None) => Some(Directive::ToggleMode),
            (Some("mode"), Some("basic"), None) => Some(Directive::SetMode(Mode::Basic)),
            (Some("mode"), Some("scientific"), None) => Some(Directive::SetMode(Mode::Scientific)),
            (Some("history"), None, None) => Some(Directive::History),
            _ => None,
        }
    }
}

/// One calculator plus its output settings
pub struct Session {
    calc: Calculator,
    output: OutputConfig,
}

impl Session {
    /// Create a new session
    pub fn new(engine: EngineConfig, output: OutputConfig) -> Self {
        Self {
            calc: Calculator::with_config(engine),
            output,
        }
    }

    /// Handle one input line
    ///
    /// Returns the text to print, or `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.starts_with(':') {
            return self.handle_directive(line).map(Some);
        }

        if self.calc.submit_symbol(line).is_none() {
            log::debug!("Ignored input {:?}", line);
        }

        render_snapshot(&self.calc.snapshot(), line, &self.output).map(Some)
    }

    fn handle_directive(&mut self, line: &str) -> Result<String> {
        match Directive::parse(line) {
            Some(Directive::ToggleMode) => {
                self.calc.toggle_mode();
                render_snapshot(&self.calc.snapshot(), line, &self.output)
            }
            Some(Directive::SetMode(mode)) => {
                self.calc.set_mode(mode);
                render_snapshot(&self.calc.snapshot(), line, &self.output)
            }
            Some(Directive::History) => render_history(self.calc.history_log(), self.output.format),
            None => {
                log::warn!("Unknown directive: {}", line);
                render_snapshot(&self.calc.snapshot(), line, &self.output)
            }
        }
    }

    /// The underlying calculator
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(EngineConfig::default(), OutputConfig::default())
    }

    fn feed(session: &mut Session, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| session.handle_line(line).unwrap())
            .collect()
    }

    #[test]
    fn test_directive_parsing() {
        assert_eq!(Directive::parse(":mode"), Some(Directive::ToggleMode));
        assert_eq!(
            Directive::parse(": mode scientific"),
            Some(Directive::SetMode(Mode::Scientific))
        );
        assert_eq!(Directive::parse(":history"), Some(Directive::History));
        assert_eq!(Directive::parse(":mode graphing"), None);
        assert_eq!(Directive::parse("mode"), None);
    }

    #[test]
    fn test_one_record_per_line() {
        let mut session = session();
        let out = feed(&mut session, &["2", "", "+", "3", "="]);
        assert_eq!(out, vec!["2", "2 | 2 +", "3 | 2 +", "5 | 2 + 3 = 5"]);
    }

    #[test]
    fn test_unknown_tokens_still_print() {
        let mut session = session();
        let out = feed(&mut session, &["7", "what", "sin"]);
        assert_eq!(out, vec!["7", "7", "7"]);
    }

    #[test]
    fn test_mode_directive_enables_functions() {
        let mut session = session();
        feed(&mut session, &["8", "1", ":mode scientific", "sqrt"]);
        assert_eq!(session.calculator().current_input(), "9");
        assert_eq!(session.calculator().mode(), Mode::Scientific);

        feed(&mut session, &[":mode"]);
        assert_eq!(session.calculator().mode(), Mode::Basic);
    }

    #[test]
    fn test_history_directive() {
        let mut session = session();
        feed(&mut session, &["1", "+", "2", "="]);
        let out = feed(&mut session, &[":history"]);
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("  1. 1 + 2 = 3"));
    }

    #[test]
    fn test_error_record() {
        let mut session = session();
        let out = feed(&mut session, &["4", "/", "0", "="]);
        assert_eq!(out[3], "0 | 4 ÷ | error: Cannot divide by zero");
    }
}
