//! Scalar coercion.
//!
//! Excel applies different rules to the same stored scalar depending on how it reached a
//! function. All of those rules live in the single `match` in [`coerce`]:
//!
//! | raw value | `Literal`               | `RangeElement` | `ArrayElement` |
//! |-----------|-------------------------|----------------|----------------|
//! | error     | unchanged               | unchanged      | unchanged      |
//! | blank     | `0`                     | `0`            | `0`            |
//! | number    | unchanged               | unchanged      | unchanged      |
//! | date      | serial                  | serial         | serial         |
//! | logical   | `1` / `0`               | `1` / `0`      | kept logical   |
//! | text      | number, date or #VALUE! | kept text      | kept text      |
//!
//! Kept logicals and kept text are not numbers: reducers decide whether they count toward a
//! divisor or are skipped.

use crate::date::{datetime_to_serial, parse_datetime_text};
use crate::eval::EvaluationSettings;
use crate::functions::RawValue;
use crate::value::{parse_number, ErrorKind, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoercionPolicy {
    /// A value written directly into the formula, or a scalar function's sole cell.
    Literal,
    /// A cell read out of a range reference.
    RangeElement,
    /// An element of an in-place array constant.
    ArrayElement,
}

pub fn coerce(raw: &RawValue, policy: CoercionPolicy, settings: &EvaluationSettings) -> Value {
    use CoercionPolicy::{ArrayElement, Literal, RangeElement};

    match (raw, policy) {
        (RawValue::Error(e), _) => Value::Error(*e),
        (RawValue::Blank, _) => Value::Number(0.0),
        (RawValue::Number(n), _) => Value::Number(*n),
        (RawValue::DateTime(dt), _) => match datetime_to_serial(*dt, settings.date_system) {
            Ok(serial) => Value::Number(serial),
            Err(e) => Value::Error(e.into()),
        },
        (RawValue::Bool(b), Literal | RangeElement) => Value::Number(if *b { 1.0 } else { 0.0 }),
        (RawValue::Bool(b), ArrayElement) => Value::Bool(*b),
        (RawValue::Text(s), Literal) => match text_to_number(s, settings) {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e),
        },
        (RawValue::Text(s), RangeElement | ArrayElement) => Value::Text(s.clone()),
    }
}

/// Coerce and require a number.
pub fn coerce_to_number(
    raw: &RawValue,
    policy: CoercionPolicy,
    settings: &EvaluationSettings,
) -> Result<f64, ErrorKind> {
    number_or_error(&coerce(raw, policy, settings))
}

/// `Number` passes, `Error` propagates, anything else is `#VALUE!`.
pub fn number_or_error(value: &Value) -> Result<f64, ErrorKind> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(*e),
        Value::Text(_) | Value::Bool(_) | Value::Blank => Err(ErrorKind::Value),
    }
}

/// Literal text → number: numeric text first, then date/time text.
pub fn text_to_number(text: &str, settings: &EvaluationSettings) -> Result<f64, ErrorKind> {
    let locale = settings.value_locale;
    parse_number(text, locale.number_locale()).or_else(|_| {
        parse_datetime_text(text, locale, settings.date_system).map_err(|_| ErrorKind::Value)
    })
}
