use formula_funcs::date::ExcelDateSystem;
use formula_funcs::locale::ValueLocaleConfig;
use formula_funcs::{ErrorKind, EvaluationSettings, Value};

use super::harness::{array, assert_number, cell, lit, TestCall};

fn settings(value_locale: ValueLocaleConfig, date_system: ExcelDateSystem) -> EvaluationSettings {
    EvaluationSettings {
        value_locale,
        date_system,
    }
}

#[test]
fn literal_text_parses_numbers_with_grouping_currency_and_percent() {
    let t = TestCall::new();
    assert_number(&t.call("ABS", &[lit("1,234.5")]), 1234.5);
    assert_number(&t.call("ABS", &[lit("($12)")]), 12.0);
    assert_number(&t.call("ABS", &[lit("50%")]), 0.5);
    assert_number(&t.call("ABS", &[lit(" 1e3 ")]), 1000.0);
    assert_eq!(t.call("ABS", &[lit("1,23")]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("ABS", &[lit("")]), Value::Error(ErrorKind::Value));
}

#[test]
fn literal_text_parses_dates_and_times() {
    let t = TestCall::new();
    assert_number(&t.call("ABS", &[lit("5/5/2013")]), 41399.0);
    assert_number(&t.call("ABS", &[lit("2013-05-05")]), 41399.0);
    assert_number(&t.call("ABS", &[lit("6:00 PM")]), 0.75);
    assert_number(&t.call("ABS", &[lit("5/5/2013 6:00")]), 41399.25);
    assert_eq!(t.call("ABS", &[lit("5/5")]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("ABS", &[lit("2/30/2013")]), Value::Error(ErrorKind::Value));
}

#[test]
fn cell_text_coerces_like_a_literal_for_scalar_functions() {
    let t = TestCall::new();
    assert_number(&t.call("SQRT", &[cell("16")]), 4.0);
    assert_eq!(t.call("SQRT", &[cell("sixteen")]), Value::Error(ErrorKind::Value));
}

#[test]
fn day_first_locale_reads_dates_day_first() {
    let t = TestCall::with_settings(settings(
        ValueLocaleConfig::en_gb(),
        ExcelDateSystem::EXCEL_1900,
    ));
    // 5 June 2013
    assert_number(&t.call("ABS", &[lit("5/6/2013")]), 41430.0);
}

#[test]
fn comma_decimal_locale() {
    let t = TestCall::with_settings(settings(
        ValueLocaleConfig::de_de(),
        ExcelDateSystem::EXCEL_1900,
    ));
    assert_number(&t.call("FACT", &[lit("4,9")]), 24.0);
    assert_number(&t.call("ABS", &[lit("1.234,5")]), 1234.5);
}

#[test]
fn date_system_1904_shifts_serials() {
    let t = TestCall::with_settings(settings(
        ValueLocaleConfig::en_us(),
        ExcelDateSystem::Excel1904,
    ));
    assert_number(&t.call("ABS", &[lit("1/2/1904")]), 1.0);
    assert_number(&t.call("ABS", &[lit("5/5/2013")]), 41399.0 - 1462.0);
}

#[test]
fn lotus_leap_day_is_serial_60() {
    let t = TestCall::new();
    assert_number(&t.call("ABS", &[lit("2/29/1900")]), 60.0);
    assert_number(&t.call("ABS", &[lit("3/1/1900")]), 61.0);
}

#[test]
fn array_text_is_never_parsed() {
    let t = TestCall::new();
    let arg = array(vec!["7".into(), 1.0.into()]);
    assert_number(&t.call("MAX", &[arg]), 1.0);
}

#[test]
fn overflowing_numeric_text_is_value_error() {
    let t = TestCall::new();
    assert_eq!(t.call("ABS", &[lit("1e400")]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("FACT", &[lit("-1e999")]), Value::Error(ErrorKind::Value));
    assert_eq!(
        t.call("AVERAGEA", &[lit("1e400"), lit(1.0)]),
        Value::Error(ErrorKind::Value)
    );
}
