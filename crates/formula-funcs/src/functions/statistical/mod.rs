//! Order statistics over the numeric view of an argument list.

use crate::error::{ExcelError, ExcelResult};

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// 1-indexed rank from a worksheet `k`. The fractional part is truncated.
fn rank(k: f64, len: usize) -> ExcelResult<usize> {
    if !k.is_finite() {
        return Err(ExcelError::Num);
    }
    let k = k.trunc();
    if k < 1.0 || k > len as f64 {
        return Err(ExcelError::Num);
    }
    Ok(k as usize)
}

/// MEDIAN(number1, [number2], ...)
pub fn median(values: &[f64]) -> ExcelResult<f64> {
    if values.is_empty() {
        return Err(ExcelError::Num);
    }
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        // Halve before adding so two huge neighbours cannot overflow.
        Ok(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    }
}

/// SMALL(array, k): the k-th smallest value.
pub fn nth_smallest(values: &[f64], k: f64) -> ExcelResult<f64> {
    let k = rank(k, values.len())?;
    Ok(sorted(values)[k - 1])
}

/// LARGE(array, k): the k-th largest value.
pub fn nth_largest(values: &[f64], k: f64) -> ExcelResult<f64> {
    let k = rank(k, values.len())?;
    let sorted = sorted(values);
    Ok(sorted[sorted.len() - k])
}

/// MIN over the numeric view; an empty set is 0.
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// MAX over the numeric view; an empty set is 0.
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}
