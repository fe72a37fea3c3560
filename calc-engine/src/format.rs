//! Display formatting
//!
//! A pure display transform: long inputs switch to exponential notation,
//! everything else is shown verbatim. The input string is never modified.

use crate::number::{parse_number, to_exponential};

/// Format the current input for display
///
/// # Arguments
/// * `input` - The current input string
/// * `max_len` - Longest input shown verbatim
/// * `exponent_digits` - Fractional digits in the exponential form
pub fn format_display(input: &str, max_len: usize, exponent_digits: usize) -> String {
    if input.chars().count() > max_len {
        to_exponential(parse_number(input), exponent_digits)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_verbatim() {
        assert_eq!(format_display("0", 12, 6), "0");
        assert_eq!(format_display("0.", 12, 6), "0.");
        assert_eq!(format_display("-12345678901", 12, 6), "-12345678901");
        assert_eq!(format_display("123456789012", 12, 6), "123456789012");
    }

    #[test]
    fn test_long_input_exponential() {
        assert_eq!(format_display("1234567890123", 12, 6), "1.234568e+12");
        assert_eq!(format_display("3.141592653589793", 12, 6), "3.141593e+0");
        assert_eq!(format_display("0.30000000000000004", 12, 6), "3.000000e-1");
    }

    #[test]
    fn test_long_negative_input() {
        assert_eq!(format_display("-98765432109876", 12, 6), "-9.876543e+13");
    }
}
