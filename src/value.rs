//! Rendering typed values into slot text and parsing them back.

use std::fmt;

use crate::error::{PositionalError, Result};
use crate::layout::FieldLayout;

/// Digits kept after the decimal point when rendering floats.
pub const FLOAT_DECIMALS: usize = 2;

/// Semantic kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::SignedInt => "signed integer",
            ValueKind::UnsignedInt => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A field value read from, or about to be written to, a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    SignedInt(i64),
    UnsignedInt(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::SignedInt(_) => ValueKind::SignedInt,
            Value::UnsignedInt(_) => ValueKind::UnsignedInt,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

/// Render a value to unpadded slot text.
///
/// Floats always carry two decimals. With `no_float_point` set the first `.`
/// is removed from the text; the number itself is not scaled. Infinities
/// render as `+Inf` / `-Inf` and NaN as `NaN`.
pub fn render(value: &Value, layout: &FieldLayout) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::SignedInt(i) => i.to_string(),
        Value::UnsignedInt(u) => u.to_string(),
        Value::Float(f) if f.is_infinite() => {
            let text = if f.is_sign_positive() { "+Inf" } else { "-Inf" };
            text.to_string()
        }
        Value::Float(f) => {
            let text = format!("{f:.FLOAT_DECIMALS$}");
            if layout.no_float_point {
                text.replacen('.', "", 1)
            } else {
                text
            }
        }
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
    }
}

/// Parse slot text as `kind`. Surrounding whitespace is trimmed first;
/// leading zeros are kept as part of numeric literals.
pub fn parse_slot(field: &str, text: &str, kind: ValueKind) -> Result<Value> {
    match kind {
        ValueKind::Text => Ok(Value::Text(parse_text(text))),
        ValueKind::SignedInt => parse_i64(field, text).map(Value::SignedInt),
        ValueKind::UnsignedInt => parse_u64(field, text).map(Value::UnsignedInt),
        ValueKind::Float => parse_f64(field, text).map(Value::Float),
        ValueKind::Bool => parse_bool(field, text).map(Value::Bool),
    }
}

pub(crate) fn parse_text(text: &str) -> String {
    text.trim().to_string()
}

pub(crate) fn parse_i64(field: &str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|e| invalid_number(field, trimmed, e))
}

/// Unsigned slots carry no sign, so a leading `+` is rejected.
pub(crate) fn parse_u64(field: &str, text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.starts_with('+') {
        return Err(PositionalError::InvalidNumber {
            field: field.to_string(),
            text: trimmed.to_string(),
            source: "unsigned value must not carry a sign".into(),
        });
    }
    trimmed
        .parse()
        .map_err(|e| invalid_number(field, trimmed, e))
}

pub(crate) fn parse_f64(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|e| invalid_number(field, trimmed, e))
}

pub(crate) fn parse_bool(field: &str, text: &str) -> Result<bool> {
    match text.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(PositionalError::InvalidBoolean {
            field: field.to_string(),
            text: other.to_string(),
        }),
    }
}

pub(crate) fn invalid_number<E>(field: &str, text: &str, source: E) -> PositionalError
where
    E: std::error::Error + Send + Sync + 'static,
{
    PositionalError::InvalidNumber {
        field: field.to_string(),
        text: text.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> FieldLayout {
        FieldLayout::default()
    }

    fn no_float() -> FieldLayout {
        FieldLayout {
            no_float_point: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&Value::SignedInt(123), &plain()), "123");
        assert_eq!(render(&Value::SignedInt(-42), &plain()), "-42");
        assert_eq!(render(&Value::UnsignedInt(7), &plain()), "7");
        assert_eq!(render(&Value::Text("a\nb".into()), &plain()), "a\nb");
        assert_eq!(render(&Value::Bool(false), &plain()), "0");
        assert_eq!(render(&Value::Bool(true), &plain()), "1");
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render(&Value::Float(123.70), &plain()), "123.70");
        assert_eq!(render(&Value::Float(456.0), &plain()), "456.00");
        assert_eq!(render(&Value::Float(123.70), &no_float()), "12370");
        assert_eq!(render(&Value::Float(1234.5), &no_float()), "123450");
        assert_eq!(render(&Value::Float(-0.5), &no_float()), "-050");
    }

    #[test]
    fn test_parse_trims_and_keeps_leading_zeros() {
        assert_eq!(
            parse_slot("f", "  hello ", ValueKind::Text).unwrap(),
            Value::Text("hello".into())
        );
        assert_eq!(
            parse_slot("f", "0000000123", ValueKind::SignedInt).unwrap(),
            Value::SignedInt(123)
        );
        assert_eq!(
            parse_slot("f", "  00042", ValueKind::UnsignedInt).unwrap(),
            Value::UnsignedInt(42)
        );
        assert_eq!(
            parse_slot("f", "0123.70   ", ValueKind::Float).unwrap(),
            Value::Float(123.7)
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_slot("count", "abcde", ValueKind::SignedInt).unwrap_err();
        match err {
            PositionalError::InvalidNumber { field, text, .. } => {
                assert_eq!(field, "count");
                assert_eq!(text, "abcde");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }

        assert!(matches!(
            parse_slot("f", "0000123.70", ValueKind::SignedInt),
            Err(PositionalError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_slot("f", "-1", ValueKind::UnsignedInt),
            Err(PositionalError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_slot("f", "", ValueKind::Float),
            Err(PositionalError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_bool_literals() {
        for text in ["1", "t", "T", "TRUE", "true", "True", " 1 "] {
            assert_eq!(
                parse_slot("f", text, ValueKind::Bool).unwrap(),
                Value::Bool(true)
            );
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(
                parse_slot("f", text, ValueKind::Bool).unwrap(),
                Value::Bool(false)
            );
        }
        for text in ["yes", "01", "", "tRuE"] {
            assert!(matches!(
                parse_slot("f", text, ValueKind::Bool),
                Err(PositionalError::InvalidBoolean { .. })
            ));
        }
    }

    #[test]
    fn test_no_float_text_reads_back_scaled() {
        let rendered = render(&Value::Float(123.70), &no_float());
        assert_eq!(
            parse_slot("f", &rendered, ValueKind::Float).unwrap(),
            Value::Float(12370.0)
        );
    }

    #[test]
    fn test_unsigned_rejects_sign() {
        let err = parse_slot("units", "  +7", ValueKind::UnsignedInt).unwrap_err();
        match err {
            PositionalError::InvalidNumber { field, text, .. } => {
                assert_eq!(field, "units");
                assert_eq!(text, "+7");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
        assert_eq!(
            parse_slot("f", "+7", ValueKind::SignedInt).unwrap(),
            Value::SignedInt(7)
        );
    }

    #[test]
    fn test_render_non_finite_float() {
        assert_eq!(render(&Value::Float(f64::INFINITY), &plain()), "+Inf");
        assert_eq!(render(&Value::Float(f64::NEG_INFINITY), &no_float()), "-Inf");
        assert_eq!(render(&Value::Float(f64::NAN), &plain()), "NaN");
        assert_eq!(
            parse_slot("f", "   +Inf", ValueKind::Float).unwrap(),
            Value::Float(f64::INFINITY)
        );
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Float(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::Text(String::new()).kind().to_string(), "text");
    }
}
