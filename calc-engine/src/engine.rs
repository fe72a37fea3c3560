//! Calculator state engine
//!
//! This module provides the primary interface for the engine library.
//! `Calculator` owns all mutable calculation state, consumes one token per
//! `submit` call and exposes the resulting display, history and error text as
//! plain strings. It holds no reference to any presentation layer; the
//! presentation layer owns the calculator.

use crate::arithmetic::{apply, evaluate_function, evaluate_function_checked};
use crate::classifier::classify_for;
use crate::config::EngineConfig;
use crate::error_slot::ErrorSlot;
use crate::format::format_display;
use crate::number::{number_to_text, parse_number, round_to_decimals};
use crate::types::{
    BinaryOp, CalcError, HistoryEntry, Mode, ScientificFunction, Snapshot, Timestamp, Token,
};
use chrono::Utc;

const INITIAL_INPUT: &str = "0";

/// The calculator - entry point for all input handling
///
/// # Example
/// ```
/// use calc_engine::Calculator;
///
/// let mut calc = Calculator::new();
/// for symbol in ["2", "+", "3", "="] {
///     calc.submit_symbol(symbol);
/// }
/// assert_eq!(calc.display_text(), "5");
/// assert_eq!(calc.history_text(), "2 + 3 = 5");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    config: EngineConfig,
    /// Value being typed or last computed
    current_input: String,
    /// Left operand of a pending binary operation
    previous_input: Option<f64>,
    /// Pending binary operator
    operator: Option<BinaryOp>,
    /// Next digit starts a fresh number instead of appending
    waiting_for_operand: bool,
    /// Last rendered history annotation
    history_text: String,
    /// Completed calculations, oldest first
    history_log: Vec<HistoryEntry>,
    errors: ErrorSlot,
    mode: Mode,
}

impl Calculator {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a calculator with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_input: None,
            operator: None,
            waiting_for_operand: false,
            history_text: String::new(),
            history_log: Vec::new(),
            errors: ErrorSlot::new(config.error_timeout_ms),
            mode: config.mode,
            config,
        }
    }

    /// Classify a raw symbol with the current mode and submit it
    ///
    /// Returns the accepted token, or `None` when the symbol was dropped
    /// (unknown, or a scientific function while in basic mode).
    pub fn submit_symbol(&mut self, symbol: &str) -> Option<Token> {
        match classify_for(symbol, self.mode) {
            Some(token) => {
                self.submit(token);
                Some(token)
            }
            None => {
                log::trace!("Dropping symbol {:?} in {} mode", symbol, self.mode);
                None
            }
        }
    }

    /// Submit one token
    pub fn submit(&mut self, token: Token) {
        self.submit_at(token, Utc::now());
    }

    /// Submit one token at an explicit point in time
    ///
    /// `now` only matters for error expiry and history timestamps.
    pub fn submit_at(&mut self, token: Token, now: Timestamp) {
        self.errors.clear();

        match token {
            Token::Digit(digit) => self.input_digit(digit),
            Token::DecimalPoint => self.input_decimal(),
            Token::Operator(op) => self.input_operator(op, now),
            Token::Equals => self.calculate(now),
            Token::Clear => self.clear(),
            Token::SignToggle => self.toggle_sign(),
            Token::Percent => self.percentage(),
            Token::Function(func) => self.scientific_function(func, now),
            Token::Backspace => self.backspace(),
        }

        log::debug!(
            "Token {} -> input {:?}, pending {:?} {:?}, waiting {}",
            token,
            self.current_input,
            self.previous_input,
            self.operator,
            self.waiting_for_operand
        );
    }

    fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            log::trace!("Ignoring out-of-range digit {}", digit);
            return;
        }
        let digit = char::from(b'0' + digit);
        if self.waiting_for_operand {
            self.current_input = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.current_input == INITIAL_INPUT {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.current_input = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    fn input_operator(&mut self, next: BinaryOp, now: Timestamp) {
        let value = parse_number(&self.current_input);

        match (self.previous_input, self.operator) {
            (None, _) => self.previous_input = Some(value),
            (Some(previous), Some(pending)) => {
                // A NaN left operand counts as zero when chaining
                let left = if previous.is_nan() { 0.0 } else { previous };
                match apply(left, value, pending) {
                    Ok(result) => {
                        self.current_input = self.rounded_text(result);
                        self.previous_input = Some(result);
                    }
                    // Operands stay put; the new operator is still installed
                    Err(err) => self.raise(err, now),
                }
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.operator = Some(next);

        let previous = self.previous_input.unwrap_or(value);
        self.history_text = format!("{} {}", number_to_text(previous), next.symbol());
    }

    fn calculate(&mut self, now: Timestamp) {
        let (Some(previous), Some(op)) = (self.previous_input, self.operator) else {
            log::trace!("Equals without a pending operation");
            return;
        };

        let value = parse_number(&self.current_input);
        let result = match apply(previous, value, op) {
            Ok(result) => result,
            Err(err) => {
                self.raise(err, now);
                return;
            }
        };

        let expression = format!(
            "{} {} {} = {}",
            number_to_text(previous),
            op.symbol(),
            number_to_text(value),
            number_to_text(result)
        );
        log::info!("Calculated {}", expression);

        self.record(HistoryEntry {
            expression: expression.clone(),
            result,
            recorded_at: now,
        });
        self.history_text = expression;

        self.current_input = self.rounded_text(result);
        self.previous_input = None;
        self.operator = None;
        self.waiting_for_operand = true;
    }

    /// Reset to the initial state; mode and the history log survive
    fn clear(&mut self) {
        self.current_input = INITIAL_INPUT.to_string();
        self.previous_input = None;
        self.operator = None;
        self.waiting_for_operand = false;
        self.errors.clear();
        self.history_text.clear();
    }

    fn toggle_sign(&mut self) {
        if self.current_input == INITIAL_INPUT {
            return;
        }
        self.current_input = match self.current_input.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current_input),
        };
    }

    /// Divide by 100 without the result rounding applied after operators
    fn percentage(&mut self) {
        self.current_input = number_to_text(parse_number(&self.current_input) / 100.0);
    }

    fn scientific_function(&mut self, func: ScientificFunction, now: Timestamp) {
        if func.is_constant() {
            self.current_input = number_to_text(evaluate_function(func, 0.0));
            return;
        }

        let value = parse_number(&self.current_input);
        let result = if self.config.report_domain_errors {
            match evaluate_function_checked(func, value) {
                Ok(result) => result,
                Err(err) => {
                    self.raise(err, now);
                    return;
                }
            }
        } else {
            evaluate_function(func, value)
        };

        self.current_input = number_to_text(result);
    }

    fn backspace(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = INITIAL_INPUT.to_string();
        }
    }

    fn rounded_text(&self, value: f64) -> String {
        number_to_text(round_to_decimals(value, self.config.result_decimals))
    }

    fn raise(&mut self, err: CalcError, now: Timestamp) {
        self.errors.show(err.to_string(), now);
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history_log.push(entry);
        if let Some(limit) = self.config.history_limit {
            if self.history_log.len() > limit {
                let excess = self.history_log.len() - limit;
                self.history_log.drain(..excess);
            }
        }
    }

    /// Formatted display text
    pub fn display_text(&self) -> String {
        format_display(
            &self.current_input,
            self.config.display_max_len,
            self.config.exponent_digits,
        )
    }

    /// Last history annotation, empty after `AC`
    pub fn history_text(&self) -> &str {
        &self.history_text
    }

    /// Live error message, if any
    pub fn error_text(&self) -> Option<&str> {
        self.error_text_at(Utc::now())
    }

    /// Error message visible at `now`
    pub fn error_text_at(&self, now: Timestamp) -> Option<&str> {
        self.errors.text_at(now)
    }

    /// When the live error message will disappear
    pub fn pending_error_expiry(&self) -> Option<Timestamp> {
        self.errors.pending_expiry()
    }

    /// Drop the error message if its deadline has passed
    pub fn expire_error(&mut self, now: Timestamp) -> bool {
        self.errors.expire(now)
    }

    /// Raw current input (unformatted)
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Left operand of the pending operation
    pub fn pending_operand(&self) -> Option<f64> {
        self.previous_input
    }

    /// Pending binary operator
    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.operator
    }

    /// True right after an operator or `=` was accepted
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Completed calculations, oldest first
    pub fn history_log(&self) -> &[HistoryEntry] {
        &self.history_log
    }

    /// Forget all completed calculations
    pub fn clear_history_log(&mut self) {
        self.history_log.clear();
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode; does not touch any calculation state
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Flip between basic and scientific mode
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Everything a presentation layer needs to render
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(Utc::now())
    }

    /// Render state as seen at `now`
    pub fn snapshot_at(&self, now: Timestamp) -> Snapshot {
        Snapshot {
            display: self.display_text(),
            history: self.history_text.clone(),
            error: self.error_text_at(now).map(str::to_string),
            mode: self.mode,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
