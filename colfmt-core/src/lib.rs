//! colfmt Core - Fundamental types
//!
//! This crate provides the core types used by report column formats:
//! - `Value`: cell values (numbers, text, booleans, datetimes, null)
//! - `Number`: exact decimals with half-away-from-zero rounding
//! - `Culture`: currency and grouping conventions
//! - `FormatError`: structured errors for the host

mod number;
mod value;
mod error;
mod culture;
pub mod datetime;

pub use number::{Number, NumberError, group_digits};
pub use value::{Value, DataType, ConvertError};
pub use error::{FormatError, codes};
pub use culture::Culture;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, Value, DataType, Culture, ConvertError, FormatError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        fn num(s: &str) -> Number {
            Number::from_str(s).unwrap()
        }

        #[test]
        fn test_from_str_integer() {
            assert_eq!(num("123"), Number::from_i64(123));
        }

        #[test]
        fn test_from_str_signs_and_whitespace() {
            assert_eq!(num("  +7 "), Number::from_i64(7));
            assert_eq!(num("-42"), Number::from_i64(-42));
        }

        #[test]
        fn test_from_str_scientific() {
            assert_eq!(num("15e2"), Number::from_i64(1500));
            assert_eq!(num("25e-1").to_string(), "2.5");
        }

        #[test]
        fn test_from_str_huge_exponent_overflows() {
            assert_eq!(Number::from_str("1e2000000000"), Err(NumberError::Overflow));
            assert_eq!(Number::from_str("-7e1001"), Err(NumberError::Overflow));
            assert!(Number::from_str("1.5e2000000000").is_err());
        }

        #[test]
        fn test_from_str_exponent_at_limit() {
            let n = num("1e1000");
            assert_eq!(n.to_string().len(), 1001);
            assert_eq!(n.to_f64(), None);
        }

        #[test]
        fn test_from_str_tiny_exponent_is_zero() {
            assert_eq!(num("1e-2000000000"), Number::from_i64(0));
            assert_eq!(num("1e-2000000000").round_half_away(), dashu_int::IBig::ZERO);
        }

        #[test]
        fn test_from_str_rejects_text() {
            assert!(Number::from_str("abc").is_err());
            assert!(Number::from_str("").is_err());
        }

        #[test]
        fn test_round_half_away_from_zero() {
            let cases = [
                ("1234.5", 1235),
                ("1234.49", 1234),
                ("-1234.5", -1235),
                ("0.5", 1),
                ("-0.4", 0),
                ("2.5", 3),
                ("1000", 1000),
            ];
            for (input, expected) in cases {
                let n = Number::from_str(input).unwrap();
                assert_eq!(n.round_half_away(), dashu_int::IBig::from(expected), "{}", input);
            }
        }

        #[test]
        fn test_to_f64() {
            assert_eq!(num("90.25").to_f64(), Some(90.25));
            assert_eq!(num("-3").to_f64(), Some(-3.0));
        }

        #[test]
        fn test_to_f64_underflows_to_zero() {
            let subnormal = num("1e-320").to_f64().unwrap();
            assert!((0.0..1e-300).contains(&subnormal));
            assert_eq!(num("5e-999").to_f64(), Some(0.0));
            assert_eq!(num("-123456789e-990").to_f64(), Some(-0.0));
        }

        #[test]
        fn test_to_f64_overflows() {
            assert_eq!(num("1e400").to_f64(), None);
        }

        #[test]
        fn test_plain_string() {
            assert_eq!(Number::from_str("1234.50").unwrap().to_string(), "1234.5");
            assert_eq!(Number::from_str("0.05").unwrap().to_string(), "0.05");
            assert_eq!(Number::from_str("-3").unwrap().to_string(), "-3");
            assert_eq!(Number::from_i64(0).to_string(), "0");
        }

        #[test]
        fn test_group_digits() {
            assert_eq!(group_digits("1234567", ',', 1), "1,234,567");
            assert_eq!(group_digits("123", ',', 1), "123");
            assert_eq!(group_digits("5", ',', 2), "05");
            assert_eq!(group_digits("0", ',', 2), "00");
            assert_eq!(group_digits("1000", ',', 2), "1,000");
        }
    }

    mod culture_tests {
        use super::*;

        #[test]
        fn test_currency_en_gb() {
            let n = Number::from_str("1234.5").unwrap();
            assert_eq!(Culture::EN_GB.format_currency_whole(&n), "£1,235");
        }

        #[test]
        fn test_currency_negative() {
            let n = Number::from_str("-1234.5").unwrap();
            assert_eq!(Culture::EN_GB.format_currency_whole(&n), "-£1,235");
            assert_eq!(Culture::JA_JP.format_currency_whole(&n), "-¥1,235");
        }

        #[test]
        fn test_grouped_whole_drops_sign_of_zero() {
            let n = Number::from_str("-0.2").unwrap();
            assert_eq!(Culture::INVARIANT.format_grouped_whole(&n, 2), "00");
        }

        #[test]
        fn test_currency_zero_has_no_sign() {
            let n = Number::from_str("-0.4").unwrap();
            assert_eq!(Culture::EN_GB.format_currency_whole(&n), "£0");
        }
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_to_decimal_coercions() {
            assert_eq!(Value::from("1,234.5").to_decimal().unwrap(), Number::from_str("1234.5").unwrap());
            assert_eq!(Value::Bool(true).to_decimal().unwrap(), Number::from_i64(1));
            assert_eq!(Value::Null.to_decimal().unwrap(), Number::from_i64(0));
        }

        #[test]
        fn test_to_decimal_rejects_datetime() {
            let dt = datetime::parse_datetime("2020-01-01").unwrap();
            let err = Value::DateTime(dt).to_decimal().unwrap_err();
            assert_eq!(err, ConvertError::Type { expected: "Number", got: "DateTime" });
        }

        #[test]
        fn test_to_datetime_rejects_number() {
            let err = Value::from(5_i64).to_datetime().unwrap_err();
            let fe: FormatError = err.into();
            assert_eq!(fe.code, codes::TYPE_ERROR);
        }

        #[test]
        fn test_to_datetime_null_is_earliest() {
            assert_eq!(Value::Null.to_datetime().unwrap(), datetime::min_datetime());
            assert!(Value::Bool(true).to_datetime().is_err());
        }

        #[test]
        fn test_huge_exponent_text_overflows() {
            let err: FormatError = Value::from("1e2000000000").to_decimal().unwrap_err().into();
            assert_eq!(err.code, codes::OVERFLOW);
        }

        #[test]
        fn test_default_is_null() {
            assert!(Value::default().is_null());
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::from(42_i64).to_string(), "42");
            assert_eq!(Value::Bool(false).to_string(), "False");
            assert_eq!(Value::Null.to_string(), "");
            assert_eq!(Value::from("abc").to_string(), "abc");
        }

        #[test]
        fn test_from_json() {
            let json: serde_json::Value = serde_json::json!([1234.5, "2020-1", null, true]);
            let cells: Vec<Value> = json.as_array().unwrap().iter().map(Value::from_json).collect();
            assert_eq!(cells[0], Value::Number(Number::from_str("1234.5").unwrap()));
            assert_eq!(cells[1], Value::from("2020-1"));
            assert!(cells[2].is_null());
            assert_eq!(cells[3], Value::Bool(true));
        }

        #[test]
        fn test_serde_tagged() {
            let json = serde_json::to_string(&Value::from("x")).unwrap();
            assert_eq!(json, r#"{"type":"Text","value":"x"}"#);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_display_with_suggestion() {
            let err = FormatError::unknown_format("wk").with_suggestion("Similar: week");
            assert_eq!(err.to_string(), "[UNKNOWN_FORMAT] Unknown format: wk (suggestion: Similar: week)");
        }

        #[test]
        fn test_from_number_error() {
            let err: FormatError = NumberError::ParseError("abc".to_string()).into();
            assert_eq!(err.code, codes::PARSE_ERROR);
        }
    }
}
