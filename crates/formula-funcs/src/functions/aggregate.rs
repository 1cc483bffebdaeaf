//! Collection resolution and the reducers shared by the aggregate built-ins.

use crate::coercion::{coerce, coerce_to_number, CoercionPolicy};
use crate::eval::EvaluationSettings;
use crate::functions::{Collection, RawArgument, RawValue};
use crate::value::{ErrorKind, Value};

/// Flatten a collection row-major, coercing each element under the collection's policy.
///
/// Never-written range cells are not enumerated. The first error element is returned.
pub fn resolve(
    collection: &Collection,
    settings: &EvaluationSettings,
) -> Result<Vec<Value>, ErrorKind> {
    let policy = collection.policy();
    collection
        .elements()
        .map(|raw| match coerce(raw, policy, settings) {
            Value::Error(e) => Err(e),
            v => Ok(v),
        })
        .collect()
}

/// Total number of elements the arguments flatten to.
pub fn flattened_len(args: &[RawArgument]) -> usize {
    args.iter().map(RawArgument::flattened_len).sum()
}

/// Opt-in argument ceiling: more than `limit` flattened elements is `#N/A`.
pub fn check_arg_limit(args: &[RawArgument], limit: usize) -> Result<(), ErrorKind> {
    if flattened_len(args) > limit {
        return Err(ErrorKind::NA);
    }
    Ok(())
}

/// The number a stored cell contributes to a numeric-only reducer, if any.
///
/// Only stored numbers and dates count. Logicals, text and blanks in references are skipped.
fn stored_number(raw: &RawValue, settings: &EvaluationSettings) -> Option<Result<f64, ErrorKind>> {
    match raw {
        RawValue::Error(e) => Some(Err(*e)),
        RawValue::Number(_) | RawValue::DateTime(_) => {
            Some(coerce_to_number(raw, CoercionPolicy::RangeElement, settings))
        }
        RawValue::Bool(_) | RawValue::Text(_) | RawValue::Blank => None,
    }
}

/// Numeric view of an argument list, as used by `MIN`, `MAX`, `MEDIAN`, `SMALL` and `LARGE`.
///
/// Literal arguments coerce under [`CoercionPolicy::Literal`] (so non-numeric text is
/// `#VALUE!`). Cells and range elements contribute only stored numbers and dates. Array elements
/// contribute only numbers; logicals and text in arrays are skipped.
pub fn numeric_values(
    args: &[RawArgument],
    settings: &EvaluationSettings,
) -> Result<Vec<f64>, ErrorKind> {
    let mut out = Vec::new();
    for arg in args {
        match arg {
            RawArgument::Literal(raw) => match coerce(raw, CoercionPolicy::Literal, settings) {
                Value::Number(n) => out.push(n),
                Value::Error(e) => return Err(e),
                Value::Text(_) | Value::Bool(_) | Value::Blank => return Err(ErrorKind::Value),
            },
            RawArgument::CellReference(raw) => {
                if let Some(n) = stored_number(raw, settings) {
                    out.push(n?);
                }
            }
            RawArgument::Collection(Collection::Range(range)) => {
                for (_, raw) in range.written() {
                    if let Some(n) = stored_number(raw, settings) {
                        out.push(n?);
                    }
                }
            }
            RawArgument::Collection(array @ Collection::Array(_)) => {
                for value in resolve(array, settings)? {
                    if let Value::Number(n) = value {
                        out.push(n);
                    }
                }
            }
        }
    }
    Ok(out)
}

#[derive(Debug, Default, Clone)]
struct Average {
    numbers: Vec<f64>,
    count: u64,
}

impl Average {
    fn include(&mut self, value: Value) -> Result<(), ErrorKind> {
        match value {
            Value::Number(n) => {
                self.numbers.push(n);
                self.count += 1;
            }
            Value::Text(_) => self.count += 1,
            Value::Error(e) => return Err(e),
            Value::Bool(_) | Value::Blank => {}
        }
        Ok(())
    }

    fn mean(&self) -> Result<f64, ErrorKind> {
        if self.count == 0 {
            return Err(ErrorKind::Num);
        }
        let count = self.count as f64;
        let sum: f64 = self.numbers.iter().sum();
        let mean = if sum.is_finite() {
            sum / count
        } else {
            // The plain sum overflowed; the mean itself is bounded by the largest magnitude.
            self.numbers.iter().map(|n| n / count).sum()
        };
        if mean.is_finite() {
            Ok(mean)
        } else {
            Err(ErrorKind::Num)
        }
    }
}

/// Sum of numeric elements divided by the count of includable elements (`AVERAGEA`).
///
/// - literals coerce under [`CoercionPolicy::Literal`] and always count,
/// - range cells: numbers, dates and logicals (as 1/0) are summed and counted; text of any kind
///   counts toward the divisor only,
/// - array elements: numbers are summed and counted; text counts toward the divisor only;
///   logicals are skipped entirely.
///
/// Fails with `#NUM!` when nothing is includable.
pub fn average_with_divisor(
    args: &[RawArgument],
    settings: &EvaluationSettings,
) -> Result<f64, ErrorKind> {
    let mut avg = Average::default();

    for arg in args {
        match arg {
            RawArgument::Literal(raw) => {
                avg.include(coerce(raw, CoercionPolicy::Literal, settings))?;
            }
            RawArgument::CellReference(RawValue::Blank) => {}
            RawArgument::CellReference(raw) => {
                avg.include(coerce(raw, CoercionPolicy::RangeElement, settings))?;
            }
            RawArgument::Collection(c) => {
                for value in resolve(c, settings)? {
                    avg.include(value)?;
                }
            }
        }
    }

    avg.mean()
}

/// Cells that were never written, or were written as empty text.
///
/// Literal and array arguments are not references and fail with `#VALUE!`.
pub fn count_blank(arg: &RawArgument) -> Result<u64, ErrorKind> {
    match arg {
        RawArgument::Collection(Collection::Range(range)) => {
            let non_blank = range
                .written()
                .filter(|(_, raw)| !raw.is_blank_like())
                .count() as u64;
            Ok(range.size() - non_blank)
        }
        RawArgument::CellReference(raw) => Ok(u64::from(raw.is_blank_like())),
        RawArgument::Literal(_) | RawArgument::Collection(Collection::Array(_)) => {
            Err(ErrorKind::Value)
        }
    }
}
