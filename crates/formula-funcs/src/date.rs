//! Excel date serials.
//!
//! A serial is a floating day count: the integer part selects the calendar day relative to the
//! workbook's epoch and the fraction is the time of day (`0.5` is noon).
//!
//! The 1900 system reproduces the Lotus 1-2-3 bug where 1900 is treated as a leap year, so
//! serial 60 is the fictitious `1900-02-29` and every later serial is one day ahead of a true
//! day count.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ExcelError, ExcelResult};
use crate::locale::{DateOrder, ValueLocaleConfig};

const SECONDS_PER_DAY: f64 = 86_400.0;
const MINUTES_PER_DAY: i64 = 1_440;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExcelDateSystem {
    /// Serial 1 is `1900-01-01`.
    Excel1900 { lotus_compat: bool },
    /// Serial 0 is `1904-01-01`.
    Excel1904,
}

impl ExcelDateSystem {
    pub const EXCEL_1900: ExcelDateSystem = ExcelDateSystem::Excel1900 { lotus_compat: true };
}

impl Default for ExcelDateSystem {
    fn default() -> Self {
        Self::EXCEL_1900
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExcelDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ExcelDate {
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

fn naive(year: i32, month: u32, day: u32) -> ExcelResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ExcelError::Num)
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Convert a calendar date to its serial.
pub fn ymd_to_serial(date: ExcelDate, system: ExcelDateSystem) -> ExcelResult<i32> {
    if !(1..=MAX_YEAR).contains(&date.year) {
        return Err(ExcelError::Num);
    }
    let serial = match system {
        ExcelDateSystem::Excel1900 { lotus_compat } => {
            if lotus_compat && date.year == 1900 && date.month == 2 && date.day == 29 {
                return Ok(60);
            }
            let d = naive(date.year, date.month.into(), date.day.into())?;
            let base = naive(1899, 12, 31)?;
            let mut serial = days_between(base, d);
            if lotus_compat && d >= naive(1900, 3, 1)? {
                serial += 1;
            }
            if serial < 1 {
                return Err(ExcelError::Num);
            }
            serial
        }
        ExcelDateSystem::Excel1904 => {
            let d = naive(date.year, date.month.into(), date.day.into())?;
            days_between(naive(1904, 1, 1)?, d)
        }
    };
    if serial < 0 {
        return Err(ExcelError::Num);
    }
    i32::try_from(serial).map_err(|_| ExcelError::Num)
}

/// Convert a serial day number back to its calendar date.
pub fn serial_to_ymd(serial: i32, system: ExcelDateSystem) -> ExcelResult<ExcelDate> {
    let date = match system {
        ExcelDateSystem::Excel1900 { lotus_compat } => {
            if serial < 1 {
                return Err(ExcelError::Num);
            }
            if lotus_compat && serial == 60 {
                return Ok(ExcelDate::new(1900, 2, 29));
            }
            let offset = if lotus_compat && serial > 60 {
                serial - 1
            } else {
                serial
            };
            naive(1899, 12, 31)?
                .checked_add_signed(chrono::Duration::days(offset.into()))
                .ok_or(ExcelError::Num)?
        }
        ExcelDateSystem::Excel1904 => {
            if serial < 0 {
                return Err(ExcelError::Num);
            }
            naive(1904, 1, 1)?
                .checked_add_signed(chrono::Duration::days(serial.into()))
                .ok_or(ExcelError::Num)?
        }
    };
    if date.year() > MAX_YEAR {
        return Err(ExcelError::Num);
    }
    Ok(ExcelDate::new(date.year(), date.month() as u8, date.day() as u8))
}

/// Serial for a stored date-time cell value.
pub fn datetime_to_serial(value: NaiveDateTime, system: ExcelDateSystem) -> ExcelResult<f64> {
    let date = value.date();
    let day = ymd_to_serial(
        ExcelDate::new(date.year(), date.month() as u8, date.day() as u8),
        system,
    )?;
    let seconds = f64::from(value.time().num_seconds_from_midnight());
    Ok(f64::from(day) + seconds / SECONDS_PER_DAY)
}

/// Calendar value for a serial, rounded to the nearest second.
///
/// The 1900 system's fictitious leap day has no calendar value and fails with `#NUM!`.
pub fn serial_to_datetime(serial: f64, system: ExcelDateSystem) -> ExcelResult<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return Err(ExcelError::Num);
    }
    let total_seconds = (serial * SECONDS_PER_DAY).round() as i64;
    let seconds_per_day = SECONDS_PER_DAY as i64;
    let day = i32::try_from(total_seconds.div_euclid(seconds_per_day))
        .map_err(|_| ExcelError::Num)?;
    let seconds = total_seconds.rem_euclid(seconds_per_day) as u32;

    let date = serial_to_ymd(day, system)?;
    let date = NaiveDate::from_ymd_opt(date.year, date.month.into(), date.day.into())
        .ok_or(ExcelError::Num)?;
    let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .ok_or(ExcelError::Num)?;
    Ok(date.and_time(time))
}

/// Parse date and/or time text into a serial.
///
/// Accepted shapes:
/// - dates: `M/D/Y`, `M-D-Y` (day first for [`DateOrder::Dmy`] locales) and ISO `Y-M-D`,
/// - times: `h:mm`, `h:mm:ss`, optionally followed by `am` / `pm`,
/// - a date followed by whitespace and a time.
///
/// A bare time is a fraction of a day anchored at serial 0.
pub fn parse_datetime_text(
    text: &str,
    cfg: ValueLocaleConfig,
    system: ExcelDateSystem,
) -> ExcelResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExcelError::Value);
    }

    if let Some(fraction) = parse_time(text) {
        return Ok(fraction);
    }

    let (date_part, time_part) = match text.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (text, None),
    };
    let date = parse_date(date_part, cfg.date_order).ok_or(ExcelError::Value)?;
    let day = ymd_to_serial(date, system).map_err(|_| ExcelError::Value)?;
    let fraction = match time_part {
        Some(t) => parse_time(t).ok_or(ExcelError::Value)?,
        None => 0.0,
    };
    Ok(f64::from(day) + fraction)
}

fn parse_component(s: &str, max_len: usize) -> Option<u32> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn expand_year(raw: &str) -> Option<i32> {
    let y = parse_component(raw, 4)? as i32;
    match raw.len() {
        1 | 2 if y < 30 => Some(2000 + y),
        1 | 2 => Some(1900 + y),
        4 => Some(y),
        _ => None,
    }
}

fn parse_date(text: &str, order: DateOrder) -> Option<ExcelDate> {
    let sep = if text.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = text.split(sep).collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if a.len() == 4 {
        (expand_year(a)?, parse_component(b, 2)?, parse_component(c, 2)?)
    } else {
        let (month, day) = match order {
            DateOrder::Mdy => (parse_component(a, 2)?, parse_component(b, 2)?),
            DateOrder::Dmy => (parse_component(b, 2)?, parse_component(a, 2)?),
        };
        (expand_year(c)?, month, day)
    };

    if !(1..=12).contains(&month) || day == 0 {
        return None;
    }
    let date = ExcelDate::new(year, month as u8, day as u8);
    // Let chrono reject impossible days, except the 1900 leap-day Excel accepts.
    let lotus_leap_day = date == ExcelDate::new(1900, 2, 29);
    if !lotus_leap_day && NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return None;
    }
    Some(date)
}

/// Returns the time of day as a fraction in `[0, 1)`.
fn parse_time(text: &str) -> Option<f64> {
    let lower = text.trim().to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let mut parts = clock.split(':');
    let hour = parse_component(parts.next()?, 2)?;
    let minute = parse_component(parts.next()?, 2)?;
    let second = match parts.next() {
        Some(s) => parse_component(s, 2)?,
        None => 0,
    };
    if parts.next().is_some() || minute > 59 || second > 59 {
        return None;
    }

    let hour = match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
        None if hour > 23 => return None,
        None => hour,
    };

    let seconds = hour * 3600 + minute * 60 + second;
    Some(f64::from(seconds) / SECONDS_PER_DAY)
}

/// Render a serial as `M/D/YYYY h:mm AM`, rounded to the nearest minute.
///
/// Whole-day serials render without a time and serials below one day render as a bare time, so
/// the output always parses back through [`parse_datetime_text`].
pub fn format_serial(serial: f64, system: ExcelDateSystem) -> ExcelResult<String> {
    if !serial.is_finite() || serial < 0.0 {
        return Err(ExcelError::Num);
    }
    let total_minutes = (serial * MINUTES_PER_DAY as f64).round() as i64;
    let day = total_minutes.div_euclid(MINUTES_PER_DAY);
    let minutes = total_minutes.rem_euclid(MINUTES_PER_DAY);

    let time = {
        let (h, m) = (minutes / 60, minutes % 60);
        let (h12, suffix) = match h {
            0 => (12, "AM"),
            1..=11 => (h, "AM"),
            12 => (12, "PM"),
            _ => (h - 12, "PM"),
        };
        format!("{h12}:{m:02} {suffix}")
    };

    if day == 0 {
        return Ok(time);
    }
    let day = i32::try_from(day).map_err(|_| ExcelError::Num)?;
    let date = serial_to_ymd(day, system)?;
    let date_text = format!("{}/{}/{}", date.month, date.day, date.year);
    if minutes == 0 {
        Ok(date_text)
    } else {
        Ok(format!("{date_text} {time}"))
    }
}

/// An inclusive `[low, high]` interval of serials (or plain numbers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SerialRange {
    low: f64,
    high: f64,
}

impl SerialRange {
    /// Fails with `#VALUE!` when `low` exceeds `high`. Equal bounds collapse to a single point.
    pub fn new(low: f64, high: f64) -> ExcelResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ExcelError::Num);
        }
        if low > high {
            return Err(ExcelError::Value);
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn is_point(&self) -> bool {
        self.low == self.high
    }
}
