//! Cell value coercion
//!
//! Every numeric cell goes through [`number`]: an empty cell is exactly `0`,
//! anything else must parse as an `f64`.

use crate::error::{ImportError, ImportResult};

/// Parse a float, treating an empty string as 0
///
/// "Not recorded" and "recorded as zero" are deliberately collapsed here.
pub fn parse_float(s: &str) -> Result<f64, std::num::ParseFloatError> {
    if s.is_empty() {
        return Ok(0.0);
    }
    s.parse::<f64>()
}

/// Coerce a numeric cell, attributing failures to `field`
pub fn number(field: &'static str, value: &str) -> ImportResult<f64> {
    parse_float(value).map_err(|source| ImportError::Coercion {
        field,
        value: value.to_string(),
        source,
    })
}

/// Split a composite "123.4 g" cell into its quantity and unit
///
/// Splits on the first whitespace run. The unit is everything after it, kept verbatim.
pub fn quantity_with_unit(field: &'static str, value: &str) -> ImportResult<(f64, String)> {
    let (quantity, unit) = value
        .split_once(char::is_whitespace)
        .ok_or_else(|| ImportError::AmountFormat {
            value: value.to_string(),
        })?;
    let unit = unit.trim_start_matches(char::is_whitespace);

    Ok((number(field, quantity)?, unit.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_float("").unwrap(), 0.0);
        assert_eq!(number("energy", "").unwrap(), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(number("energy", "12.5").unwrap(), 12.5);
        assert_eq!(number("energy", "-3").unwrap(), -3.0);
        assert_eq!(number("energy", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_non_numeric_keeps_field_and_value() {
        let err = number("minutes", "abc").unwrap_err();
        match err {
            ImportError::Coercion { field, value, .. } => {
                assert_eq!(field, "minutes");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_exponent_fails() {
        assert!(number("fat", "1e").is_err());
        assert!(number("fat", " 1").is_err());
    }

    #[test]
    fn test_quantity_with_unit() {
        let (value, unit) = quantity_with_unit("quantity", "123.4 g").unwrap();
        assert_eq!(value, 123.4);
        assert_eq!(unit, "g");
    }

    #[test]
    fn test_quantity_unit_keeps_inner_spaces() {
        let (value, unit) = quantity_with_unit("quantity", "2.00 tbsp (20g)").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(unit, "tbsp (20g)");
    }

    #[test]
    fn test_quantity_splits_on_whitespace_run() {
        let (value, unit) = quantity_with_unit("quantity", "1\t  cup").unwrap();
        assert_eq!(value, 1.0);
        assert_eq!(unit, "cup");
    }

    #[test]
    fn test_quantity_without_unit_is_format_error() {
        let err = quantity_with_unit("quantity", "123.4").unwrap_err();
        assert!(matches!(err, ImportError::AmountFormat { value } if value == "123.4"));
    }

    #[test]
    fn test_quantity_with_bad_number() {
        let err = quantity_with_unit("quantity", "abc g").unwrap_err();
        assert!(matches!(err, ImportError::Coercion { field: "quantity", value, .. } if value == "abc"));
    }
}
