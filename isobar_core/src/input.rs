//! # Text Input Parsing
//!
//! Converts user-entered text (form fields, CLI arguments) into numbers.
//! Every failure becomes a single [`CalcError::InvalidInput`] naming the field,
//! so a shell can report it once and stay re-enterable.
//!
//! ```rust
//! use isobar_core::input::{parse_number, parse_list};
//!
//! assert_eq!(parse_number("load_kn", " 100 ").unwrap(), 100.0);
//! assert_eq!(parse_list("boundaries_m", "0, 2,5").unwrap(), vec![0.0, 2.0, 5.0]);
//! assert!(parse_number("load_kn", "cien").is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Parse a single finite number.
pub fn parse_number(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, text, "Value is required"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, text, "Not a number"))?;

    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, text, "Value must be finite"));
    }
    Ok(value)
}

/// Parse a comma- or whitespace-separated list of numbers.
///
/// Empty text yields an empty list; emptiness is checked by the consumer.
pub fn parse_list(field: &str, text: &str) -> CalcResult<Vec<f64>> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_number(&format!("{}[{}]", field, i), token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("P", "12.5").unwrap(), 12.5);
        assert_eq!(parse_number("P", "-3").unwrap(), -3.0);
        assert_eq!(parse_number("P", "1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_number_rejects_text() {
        let err = parse_number("P", "abc").unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("P", "abc", "Not a number")
        );
        assert!(parse_number("P", "").is_err());
        assert!(parse_number("P", "inf").is_err());
        assert!(parse_number("P", "NaN").is_err());
    }

    #[test]
    fn test_parse_list_separators() {
        assert_eq!(parse_list("z", "0 2 5").unwrap(), vec![0.0, 2.0, 5.0]);
        assert_eq!(parse_list("z", "0;2;5").unwrap(), vec![0.0, 2.0, 5.0]);
        assert_eq!(parse_list("z", "0,,2").unwrap(), vec![0.0, 2.0]);
        assert!(parse_list("z", "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_names_bad_element() {
        match parse_list("mu", "0.3, x").unwrap_err() {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "mu[1]");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
