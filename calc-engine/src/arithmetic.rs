//! Arithmetic evaluator
//!
//! Pure functions for binary operators and unary scientific functions.
//! All math is plain IEEE-754 `f64`; no precedence, no parsing.

use crate::types::{BinaryOp, CalcError, Result, ScientificFunction};
use std::f64::consts::{E, PI};

/// Apply a binary operator
///
/// # Arguments
/// * `a` - Left operand (the pending operand)
/// * `b` - Right operand (the current input)
/// * `op` - Operator to apply
///
/// # Returns
/// * `Ok(value)` - The IEEE-754 result
/// * `Err(CalcError::DivisionByZero)` - Dividing by zero; the caller keeps `a`
pub fn apply(a: f64, b: f64, op: BinaryOp) -> Result<f64> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Subtract => Ok(a - b),
        BinaryOp::Multiply => Ok(a * b),
        BinaryOp::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Evaluate a scientific function on `value`
///
/// Trigonometric functions take degrees. Constants ignore `value`.
pub fn evaluate_function(func: ScientificFunction, value: f64) -> f64 {
    match func {
        ScientificFunction::Sin => (value * PI / 180.0).sin(),
        ScientificFunction::Cos => (value * PI / 180.0).cos(),
        ScientificFunction::Tan => (value * PI / 180.0).tan(),
        ScientificFunction::Ln => value.ln(),
        ScientificFunction::Log => value.log10(),
        ScientificFunction::Sqrt => value.sqrt(),
        ScientificFunction::Square => value * value,
        ScientificFunction::Pi => PI,
        ScientificFunction::E => E,
    }
}

/// Evaluate a scientific function, rejecting NaN and infinite results
pub fn evaluate_function_checked(func: ScientificFunction, value: f64) -> Result<f64> {
    let result = evaluate_function(func, value);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Domain {
            function: func,
            input: value,
        })
    }
}
