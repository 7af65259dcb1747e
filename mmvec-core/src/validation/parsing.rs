//! Numeric token parsing for the text format

use crate::error::{FormatError, Result};

/// Parse one dimension token from an array size line.
///
/// Dimensions are positive decimal integers. Rejects empty strings,
/// non-digit characters, and zero; overflow is reported rather than
/// wrapped.
pub fn parse_dimension(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Err(FormatError::InvalidSizeLine);
    }

    let mut result: u64 = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(FormatError::InvalidSizeLine);
        }

        let digit = (byte - b'0') as u64;

        if result > (u64::MAX - digit) / 10 {
            return Err(FormatError::DimensionOverflow);
        }

        result = result * 10 + digit;
    }

    if result == 0 {
        return Err(FormatError::InvalidSizeLine);
    }

    Ok(result)
}

/// Parse one decimal floating-point token.
///
/// Scientific notation is accepted. Non-finite spellings ("nan", "inf")
/// are not valid data in the text format, and literals that overflow to
/// infinity are rejected with them.
pub fn parse_real(s: &str) -> Result<f64> {
    let value: f64 = s.parse().map_err(|_| FormatError::InvalidValue)?;
    if !value.is_finite() {
        return Err(FormatError::InvalidValue);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("1"), Ok(1));
        assert_eq!(parse_dimension("123"), Ok(123));
        assert_eq!(parse_dimension("18446744073709551615"), Ok(u64::MAX));

        assert_eq!(parse_dimension(""), Err(FormatError::InvalidSizeLine));
        assert_eq!(parse_dimension("0"), Err(FormatError::InvalidSizeLine));
        assert_eq!(parse_dimension("12a"), Err(FormatError::InvalidSizeLine));
        assert_eq!(parse_dimension("-5"), Err(FormatError::InvalidSizeLine));
        assert_eq!(parse_dimension("+5"), Err(FormatError::InvalidSizeLine));
        assert_eq!(
            parse_dimension("18446744073709551616"),
            Err(FormatError::DimensionOverflow)
        );
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real("1.0"), Ok(1.0));
        assert_eq!(parse_real("-3.25"), Ok(-3.25));
        assert_eq!(parse_real("2"), Ok(2.0));
        assert_eq!(parse_real("6.02e23"), Ok(6.02e23));
        assert_eq!(parse_real("-1.5E-8"), Ok(-1.5e-8));

        assert_eq!(parse_real(""), Err(FormatError::InvalidValue));
        assert_eq!(parse_real("abc"), Err(FormatError::InvalidValue));
        assert_eq!(parse_real("1.0x"), Err(FormatError::InvalidValue));
        assert_eq!(parse_real("nan"), Err(FormatError::InvalidValue));
        assert_eq!(parse_real("inf"), Err(FormatError::InvalidValue));
        assert_eq!(parse_real("1e999"), Err(FormatError::InvalidValue));
    }
}
