mod combinatorics;
mod random;
mod trig;

pub use combinatorics::fact;
pub use random::{rand, randbetween};
pub use trig::{degrees, radians};

use crate::error::{ExcelError, ExcelResult};

fn checked_out(out: f64) -> ExcelResult<f64> {
    if out.is_finite() {
        Ok(out)
    } else {
        Err(ExcelError::Num)
    }
}

/// ABS(number)
pub fn abs(number: f64) -> ExcelResult<f64> {
    checked_out(number.abs())
}

/// SIGN(number)
pub fn sign(number: f64) -> ExcelResult<f64> {
    if !number.is_finite() {
        return Err(ExcelError::Num);
    }
    Ok(if number > 0.0 {
        1.0
    } else if number < 0.0 {
        -1.0
    } else {
        0.0
    })
}

/// INT(number): rounds down toward negative infinity.
pub fn int(number: f64) -> ExcelResult<f64> {
    checked_out(number.floor())
}

/// LN(number)
pub fn ln(number: f64) -> ExcelResult<f64> {
    if number <= 0.0 || !number.is_finite() {
        return Err(ExcelError::Num);
    }
    checked_out(number.ln())
}

/// LOG10(number)
pub fn log10(number: f64) -> ExcelResult<f64> {
    if number <= 0.0 || !number.is_finite() {
        return Err(ExcelError::Num);
    }
    checked_out(number.log10())
}

/// EXP(number)
pub fn exp(number: f64) -> ExcelResult<f64> {
    if !number.is_finite() {
        return Err(ExcelError::Num);
    }
    checked_out(number.exp())
}

/// SQRT(number)
pub fn sqrt(number: f64) -> ExcelResult<f64> {
    if number < 0.0 || !number.is_finite() {
        return Err(ExcelError::Num);
    }
    checked_out(number.sqrt())
}

/// PI()
#[must_use]
pub fn pi() -> f64 {
    std::f64::consts::PI
}
