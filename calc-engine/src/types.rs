//! Core types for the calculator engine
//!
//! This module defines the input tokens the engine consumes, the error kinds it
//! can raise, and the plain-data snapshot it hands back to a presentation layer.
//! Nothing here knows about buttons, keyboards or any visual surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the engine
pub type Timestamp = DateTime<Utc>;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// A classified unit of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A single decimal digit (0-9)
    Digit(u8),
    /// The decimal point
    DecimalPoint,
    /// One of the four binary operators
    Operator(BinaryOp),
    /// Resolve the pending operation
    Equals,
    /// Full reset (`AC`)
    Clear,
    /// Toggle the leading minus sign (`±`)
    SignToggle,
    /// Divide the current value by 100
    Percent,
    /// A unary scientific function or constant
    Function(ScientificFunction),
    /// Drop the last typed character
    Backspace,
}

impl Token {
    /// True for tokens that only exist in scientific mode
    pub fn is_scientific(&self) -> bool {
        matches!(self, Token::Function(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{}", d),
            Token::DecimalPoint => write!(f, "."),
            Token::Operator(op) => write!(f, "{}", op.input_symbol()),
            Token::Equals => write!(f, "="),
            Token::Clear => write!(f, "AC"),
            Token::SignToggle => write!(f, "±"),
            Token::Percent => write!(f, "%"),
            Token::Function(func) => write!(f, "{}", func.symbol()),
            Token::Backspace => write!(f, "Backspace"),
        }
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Parse an operator from its input symbol (`+ - * /`) or its display glyph
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" | "−" => Some(BinaryOp::Subtract),
            "*" | "×" => Some(BinaryOp::Multiply),
            "/" | "÷" => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    /// ASCII symbol used on input
    pub fn input_symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }

    /// Glyph used in history text
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary scientific functions and constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScientificFunction {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Natural logarithm
    Ln,
    /// Base-10 logarithm
    Log,
    /// Square root
    Sqrt,
    /// Self-square (`x²`)
    Square,
    /// The constant π
    Pi,
    /// Euler's number
    E,
}

impl ScientificFunction {
    /// Every function, in the order a keypad would list them
    pub const ALL: [ScientificFunction; 9] = [
        ScientificFunction::Sin,
        ScientificFunction::Cos,
        ScientificFunction::Tan,
        ScientificFunction::Ln,
        ScientificFunction::Log,
        ScientificFunction::Sqrt,
        ScientificFunction::Square,
        ScientificFunction::Pi,
        ScientificFunction::E,
    ];

    /// Parse a function from its input symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|func| func.symbol() == symbol)
    }

    /// Canonical input symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ScientificFunction::Sin => "sin",
            ScientificFunction::Cos => "cos",
            ScientificFunction::Tan => "tan",
            ScientificFunction::Ln => "ln",
            ScientificFunction::Log => "log",
            ScientificFunction::Sqrt => "sqrt",
            ScientificFunction::Square => "x²",
            ScientificFunction::Pi => "π",
            ScientificFunction::E => "e",
        }
    }

    /// Constants replace the current input instead of transforming it
    pub fn is_constant(&self) -> bool {
        matches!(self, ScientificFunction::Pi | ScientificFunction::E)
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Calculator mode - decides which tokens the classifier lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::Basic => Mode::Scientific,
            Mode::Scientific => Mode::Basic,
        }
    }

    /// Check whether a token is legal in this mode
    pub fn accepts(self, token: &Token) -> bool {
        match self {
            Mode::Basic => !token.is_scientific(),
            Mode::Scientific => true,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => write!(f, "Basic"),
            Mode::Scientific => write!(f, "Scientific"),
        }
    }
}

/// Recoverable errors raised while evaluating input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid input for {function}")]
    Domain {
        function: ScientificFunction,
        input: f64,
    },
}

/// A completed calculation recorded by `=`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Full expression text, e.g. `2 + 3 = 5`
    pub expression: String,
    /// Unrounded result of the calculation
    pub result: f64,
    /// When the calculation completed
    pub recorded_at: Timestamp,
}

/// Plain data handed to a presentation layer after each submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Formatted display text
    pub display: String,
    /// Current history annotation (empty after `AC`)
    pub history: String,
    /// Live error message, if any
    pub error: Option<String>,
    /// Current mode
    pub mode: Mode,
}
