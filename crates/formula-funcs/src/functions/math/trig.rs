use std::f64::consts::PI;

use crate::error::{ExcelError, ExcelResult};

use super::checked_out;

fn convert_angle(angle: f64, from_half_turn: f64, to_half_turn: f64) -> ExcelResult<f64> {
    if !angle.is_finite() {
        return Err(ExcelError::Num);
    }
    checked_out(angle * to_half_turn / from_half_turn)
}

/// RADIANS(angle)
pub fn radians(angle: f64) -> ExcelResult<f64> {
    convert_angle(angle, 180.0, PI)
}

/// DEGREES(angle)
pub fn degrees(angle: f64) -> ExcelResult<f64> {
    convert_angle(angle, PI, 180.0)
}
