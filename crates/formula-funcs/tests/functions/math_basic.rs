use formula_funcs::{ErrorKind, Value};

use super::harness::{assert_number, cell, lit, range, TestCall};

#[test]
fn fact_truncates_and_rejects_out_of_domain() {
    let t = TestCall::new();
    assert_number(&t.call("FACT", &[lit(4.0)]), 24.0);
    assert_number(&t.call("FACT", &[lit(4.9)]), 24.0);
    assert_number(&t.call("FACT", &[lit(0.0)]), 1.0);
    assert_eq!(t.call("FACT", &[lit(-1.0)]), Value::Error(ErrorKind::Num));
    assert_eq!(t.call("FACT", &[lit("word")]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("FACT", &[lit(171.0)]), Value::Error(ErrorKind::Num));
}

#[test]
fn abs_and_sign() {
    let t = TestCall::new();
    assert_number(&t.call("ABS", &[lit(-12.5)]), 12.5);
    assert_number(&t.call("ABS", &[lit("-3")]), 3.0);
    assert_number(&t.call("SIGN", &[lit(-0.001)]), -1.0);
    assert_number(&t.call("SIGN", &[lit(0.0)]), 0.0);
    assert_number(&t.call("SIGN", &[lit(42.0)]), 1.0);
}

#[test]
fn int_rounds_down() {
    let t = TestCall::new();
    assert_number(&t.call("INT", &[lit(8.9)]), 8.0);
    assert_number(&t.call("INT", &[lit(-8.9)]), -9.0);
    assert_number(&t.call("INT", &[lit("1/2/1900 12:00")]), 2.0);
}

#[test]
fn logarithms() {
    let t = TestCall::new();
    assert_number(&t.call("LN", &[lit(1.0)]), 0.0);
    assert_number(&t.call("LN", &[lit(std::f64::consts::E)]), 1.0);
    assert_number(&t.call("LOG10", &[lit(100_000.0)]), 5.0);
    assert_eq!(t.call("LN", &[lit(0.0)]), Value::Error(ErrorKind::Num));
    assert_eq!(t.call("LOG10", &[lit(-10.0)]), Value::Error(ErrorKind::Num));
}

#[test]
fn angle_conversions() {
    let t = TestCall::new();
    assert_number(&t.call("DEGREES", &[lit(std::f64::consts::FRAC_PI_2)]), 90.0);
    assert_number(&t.call("RADIANS", &[lit(270.0)]), 3.0 * std::f64::consts::FRAC_PI_2);
}

#[test]
fn sqrt_exp_and_pi() {
    let t = TestCall::new();
    assert_number(&t.call("SQRT", &[lit(2.25)]), 1.5);
    assert_eq!(t.call("SQRT", &[lit(-4.0)]), Value::Error(ErrorKind::Num));
    assert_number(&t.call("EXP", &[lit(1.0)]), std::f64::consts::E);
    assert_number(&t.call("PI", &[]), std::f64::consts::PI);
}

#[test]
fn blank_cell_is_zero_for_scalar_functions() {
    let t = TestCall::new();
    assert_number(&t.call("ABS", &[cell(formula_funcs::RawValue::Blank)]), 0.0);
    assert_number(&t.call("FACT", &[cell(formula_funcs::RawValue::Blank)]), 1.0);
}

#[test]
fn single_cell_range_feeds_scalar_function() {
    let t = TestCall::new();
    let one = range("C3", vec![("C3", 9.0.into())]);
    assert_number(&t.call("SQRT", &[one]), 3.0);

    let empty = range("C3", vec![]);
    assert_number(&t.call("FACT", &[empty]), 1.0);

    let wide = range("A1:B1", vec![("A1", 1.0.into())]);
    assert_eq!(t.call("SQRT", &[wide]), Value::Error(ErrorKind::Value));
}
