use crate::error::{ExcelError, ExcelResult};

/// FACT(number): the fractional part is truncated before computing.
pub fn fact(number: f64) -> ExcelResult<f64> {
    if !number.is_finite() || number < 0.0 {
        return Err(ExcelError::Num);
    }
    let n = number.trunc();
    // FACT values beyond 170 overflow IEEE doubles.
    if n > 170.0 {
        return Err(ExcelError::Num);
    }
    let mut acc = 1.0;
    for i in 2..=(n as u32) {
        acc *= f64::from(i);
    }
    Ok(acc)
}
