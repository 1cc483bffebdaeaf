use crate::date::SerialRange;
use crate::error::{ExcelError, ExcelResult};
use crate::eval::RandomSource;

/// Largest span for which every integer in the range is exactly representable as `f64`.
const MAX_EXACT_SPAN: f64 = 9_007_199_254_740_992.0; // 2^53

/// RAND(): uniform in `[0, 1)`.
pub fn rand(random: &RandomSource) -> f64 {
    random.next_f64()
}

/// RANDBETWEEN(low, high)
///
/// Whole-number bounds draw a uniform integer in `[low, high]`. Any fractional bound (a time of
/// day, for instance) switches to a continuous draw over the same interval.
pub fn randbetween(low: f64, high: f64, random: &RandomSource) -> ExcelResult<f64> {
    let range = SerialRange::new(low, high)?;
    if range.is_point() {
        return Ok(range.low());
    }

    if range.low().fract() == 0.0 && range.high().fract() == 0.0 {
        let span = range.high() - range.low() + 1.0;
        if span > MAX_EXACT_SPAN {
            return Err(ExcelError::Num);
        }
        let offset = random.next_below(span as u64);
        return Ok(range.low() + offset as f64);
    }

    let out = range.low() + random.next_f64() * (range.high() - range.low());
    Ok(out.clamp(range.low(), range.high()))
}
