//! Token classification
//!
//! Maps raw input symbols to tokens. Classification is pure and stateless;
//! unrecognised symbols yield `None` and are dropped by the caller without
//! raising an error.

use crate::types::{BinaryOp, Mode, ScientificFunction, Token};

/// Classify a raw input symbol
///
/// # Example
/// ```
/// use calc_engine::classifier::classify;
/// use calc_engine::{BinaryOp, Token};
///
/// assert_eq!(classify("7"), Some(Token::Digit(7)));
/// assert_eq!(classify("*"), Some(Token::Operator(BinaryOp::Multiply)));
/// assert_eq!(classify("?"), None);
/// ```
pub fn classify(symbol: &str) -> Option<Token> {
    let symbol = symbol.trim();

    if let [byte] = symbol.as_bytes() {
        if byte.is_ascii_digit() {
            return Some(Token::Digit(byte - b'0'));
        }
    }

    if let Some(op) = BinaryOp::from_symbol(symbol) {
        return Some(Token::Operator(op));
    }

    if let Some(func) = ScientificFunction::from_symbol(symbol) {
        return Some(Token::Function(func));
    }

    match symbol {
        "." => Some(Token::DecimalPoint),
        "=" => Some(Token::Equals),
        "AC" => Some(Token::Clear),
        "±" => Some(Token::SignToggle),
        "%" => Some(Token::Percent),
        "Backspace" | "⌫" => Some(Token::Backspace),
        _ => None,
    }
}

/// Classify a symbol and gate it on the capabilities of `mode`
///
/// Scientific functions are only let through in scientific mode.
pub fn classify_for(symbol: &str, mode: Mode) -> Option<Token> {
    classify(symbol).filter(|token| mode.accepts(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..=9u8 {
            assert_eq!(classify(&d.to_string()), Some(Token::Digit(d)));
        }
        assert_eq!(classify("12"), None);
    }

    #[test]
    fn test_controls() {
        assert_eq!(classify("."), Some(Token::DecimalPoint));
        assert_eq!(classify("="), Some(Token::Equals));
        assert_eq!(classify("AC"), Some(Token::Clear));
        assert_eq!(classify("±"), Some(Token::SignToggle));
        assert_eq!(classify("%"), Some(Token::Percent));
        assert_eq!(classify("Backspace"), Some(Token::Backspace));
        assert_eq!(classify("⌫"), Some(Token::Backspace));
    }

    #[test]
    fn test_operators_and_glyphs() {
        assert_eq!(classify("-"), Some(Token::Operator(BinaryOp::Subtract)));
        assert_eq!(classify("−"), Some(Token::Operator(BinaryOp::Subtract)));
        assert_eq!(classify(" / "), Some(Token::Operator(BinaryOp::Divide)));
    }

    #[test]
    fn test_scientific_functions() {
        assert_eq!(classify("sqrt"), Some(Token::Function(ScientificFunction::Sqrt)));
        assert_eq!(classify("x²"), Some(Token::Function(ScientificFunction::Square)));
        assert_eq!(classify("π"), Some(Token::Function(ScientificFunction::Pi)));
        assert_eq!(classify("e"), Some(Token::Function(ScientificFunction::E)));
    }

    #[test]
    fn test_unknown_symbols_dropped() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("ac"), None);
        assert_eq!(classify("Enter"), None);
        assert_eq!(classify("^"), None);
    }

    #[test]
    fn test_mode_gate() {
        assert_eq!(classify_for("sin", Mode::Basic), None);
        assert_eq!(
            classify_for("sin", Mode::Scientific),
            Some(Token::Function(ScientificFunction::Sin))
        );
        assert_eq!(classify_for("5", Mode::Basic), Some(Token::Digit(5)));
        assert_eq!(classify_for("%", Mode::Scientific), Some(Token::Percent));
    }
}
