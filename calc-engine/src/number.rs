//! Number/text conversion
//!
//! Display strings and history text must carry exact, stable digits, so
//! conversions do not go through the `Display` impl of `f64` (which never
//! switches to exponent form and prints `inf`). Instead:
//!
//! - `number_to_text` prints the shortest round-trip digits, in plain decimal
//!   form for decimal exponents in `[-7, 21)` and as `d.ddde+N` otherwise
//! - `round_to_decimals` and `to_exponential` round half away from zero on the
//!   *exact* binary value, using the exact decimal expansion of the double
//! - `parse_number` reads the longest numeric prefix of a string

/// Magnitudes at and above this are never rounded to fixed decimals
const FIXED_LIMIT: f64 = 1e21;

/// Enough precision to print every significant digit of any finite `f64`
const EXACT_PRECISION: usize = 800;

/// Split `d.ddd...e<exp>` into its digit string and decimal exponent
///
/// Trailing zeros are dropped; the value is `d0.d1d2... × 10^exp`.
fn split_scientific(text: &str) -> (String, i32) {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let mut digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exponent.parse().unwrap_or(0))
}

/// Shortest digits that round-trip to `magnitude`
fn shortest_digits(magnitude: f64) -> (String, i32) {
    split_scientific(&format!("{:e}", magnitude))
}

/// Exact decimal expansion of `magnitude`
fn exact_digits(magnitude: f64) -> (String, i32) {
    split_scientific(&format!("{:.*e}", EXACT_PRECISION, magnitude))
}

/// Keep the first `keep` significant digits, rounding half away from zero
///
/// Returns `None` when the value rounds to zero. The returned digit string has
/// exactly `keep` digits (at least one).
fn round_digits(digits: &str, exponent: i32, keep: i32) -> Option<(String, i32)> {
    if keep < 0 {
        return None;
    }
    if keep == 0 {
        // Only the rounding digit is left
        return if digits.as_bytes()[0] >= b'5' {
            Some(("1".to_string(), exponent + 1))
        } else {
            None
        };
    }

    let keep = keep as usize;
    if digits.len() <= keep {
        let mut padded = digits.to_string();
        padded.extend(std::iter::repeat('0').take(keep - digits.len()));
        return Some((padded, exponent));
    }

    let mut kept: Vec<u8> = digits.as_bytes()[..keep].to_vec();
    if digits.as_bytes()[keep] < b'5' {
        return Some((String::from_utf8_lossy(&kept).into_owned(), exponent));
    }

    // Round up with carry
    for pos in (0..keep).rev() {
        if kept[pos] == b'9' {
            kept[pos] = b'0';
        } else {
            kept[pos] += 1;
            return Some((String::from_utf8_lossy(&kept).into_owned(), exponent));
        }
    }

    // All nines: 999 -> 100 with one more digit of magnitude
    let mut carried = String::with_capacity(keep);
    carried.push('1');
    carried.extend(std::iter::repeat('0').take(keep - 1));
    Some((carried, exponent + 1))
}

/// Render a number the way the calculator shows it
///
/// # Example
/// ```
/// use calc_engine::number::number_to_text;
///
/// assert_eq!(number_to_text(0.5), "0.5");
/// assert_eq!(number_to_text(1e21), "1e+21");
/// assert_eq!(number_to_text(f64::NAN), "NaN");
/// ```
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if n - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }

    out
}

/// Round to `places` fractional digits and read the result back as a number
///
/// This is what turns `2.0000000001` into `2` after an operator chain or `=`.
pub fn round_to_decimals(value: f64, places: usize) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return value;
    }
    if value == 0.0 {
        return 0.0;
    }

    let (digits, exponent) = exact_digits(value.abs());
    let keep = exponent + 1 + places as i32;

    let magnitude = match round_digits(&digits, exponent, keep) {
        Some((rounded, exp)) => {
            let scale = exp - (rounded.len() as i32 - 1);
            format!("{}e{}", rounded, scale).parse().unwrap_or(value.abs())
        }
        None => 0.0,
    };

    if value < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Render a number in exponential form with exactly `fraction_digits` digits
/// after the point, e.g. `1.234568e+12`
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_text(value);
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    let (digits, exponent) = if value == 0.0 {
        ("0".repeat(fraction_digits + 1), 0)
    } else {
        let (exact, exp) = exact_digits(value.abs());
        // keep >= 1, so rounding never collapses to zero
        round_digits(&exact, exp, fraction_digits as i32 + 1).unwrap_or((exact, exp))
    };

    out.push_str(&digits[..1]);
    if fraction_digits > 0 {
        out.push('.');
        out.push_str(&digits[1..]);
    }
    out.push('e');
    out.push(if exponent >= 0 { '+' } else { '-' });
    out.push_str(&exponent.abs().to_string());

    out
}

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped. Returns NaN when no number can be read, for
/// example from a lone `-` left behind by backspace.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut has_digits = pos > int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if has_digits || end > frac_start {
            has_digits = true;
            pos = end;
        }
    }

    if !has_digits {
        return f64::NAN;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let exp_digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_digits_start {
            pos = end;
        }
    }

    text[..pos].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_text_plain() {
        assert_eq!(number_to_text(5.0), "5");
        assert_eq!(number_to_text(-12.25), "-12.25");
        assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(123456789012.0), "123456789012");
        assert_eq!(number_to_text(1e20), "100000000000000000000");
    }

    #[test]
    fn test_number_to_text_exponent_forms() {
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e22), "1.5e+22");
        assert_eq!(number_to_text(0.000001), "0.000001");
        assert_eq!(number_to_text(0.0000001), "1e-7");
        assert_eq!(number_to_text(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_number_to_text_special_values() {
        assert_eq!(number_to_text(f64::NAN), "NaN");
        assert_eq!(number_to_text(f64::INFINITY), "Infinity");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_constants_text() {
        assert_eq!(number_to_text(std::f64::consts::PI), "3.141592653589793");
        assert_eq!(number_to_text(std::f64::consts::E), "2.718281828459045");
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(2.0000000001, 7), 2.0);
        assert_eq!(round_to_decimals(0.1 + 0.2, 7), 0.3);
        assert_eq!(round_to_decimals(1.0 / 3.0, 7), 0.3333333);
        assert_eq!(round_to_decimals(-2.0 / 3.0, 7), -0.6666667);
        assert_eq!(round_to_decimals(0.00000004, 7), 0.0);
        assert_eq!(round_to_decimals(0.00000006, 7), 0.0000001);
        assert_eq!(round_to_decimals(9.99999999, 7), 10.0);
    }

    #[test]
    fn test_round_to_decimals_exact_tie_goes_up() {
        // 1/256 = 0.00390625 exactly
        assert_eq!(round_to_decimals(0.00390625, 7), 0.0039063);
        assert_eq!(round_to_decimals(-0.00390625, 7), -0.0039063);
    }

    #[test]
    fn test_round_to_decimals_passthrough() {
        assert_eq!(round_to_decimals(1e21, 7), 1e21);
        assert!(round_to_decimals(f64::NAN, 7).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 7), f64::INFINITY);
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(1234567890123.0, 6), "1.234568e+12");
        assert_eq!(to_exponential(-0.000123456789, 6), "-1.234568e-4");
        assert_eq!(to_exponential(0.0, 6), "0.000000e+0");
        assert_eq!(to_exponential(9999999.9, 6), "1.000000e+7");
        assert_eq!(to_exponential(f64::NAN, 6), "NaN");
    }

    #[test]
    fn test_to_exponential_exact_tie_goes_up() {
        // Representable exactly; 7th significant digit is followed by a bare 5
        assert_eq!(to_exponential(1234566500000.0, 6), "1.234567e+12");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("-3.5"), -3.5);
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("1e+"), 1.0);
        assert_eq!(parse_number("  7abc"), 7.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("-").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("").is_nan());
    }
}
