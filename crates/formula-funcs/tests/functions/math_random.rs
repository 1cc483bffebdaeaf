use chrono::{NaiveDate, NaiveTime};
use formula_funcs::functions::RawValue;
use formula_funcs::{ErrorKind, RandomSource, Value};

use super::harness::{lit, range, TestCall};

#[test]
fn rand_stays_in_unit_interval() {
    let t = TestCall::seeded(1);
    for _ in 0..500 {
        let v = t.number("RAND", &[]);
        assert!((0.0..1.0).contains(&v), "RAND() = {v}");
    }
}

#[test]
fn randbetween_stays_within_integer_bounds() {
    let t = TestCall::seeded(2);
    for _ in 0..1_000 {
        let v = t.number("RANDBETWEEN", &[lit(-5.0), lit(5.0)]);
        assert_eq!(v.fract(), 0.0);
        assert!((-5.0..=5.0).contains(&v), "RANDBETWEEN(-5,5) = {v}");
    }
}

#[test]
fn randbetween_reversed_bounds_is_value_error() {
    let t = TestCall::new();
    assert_eq!(
        t.call("RANDBETWEEN", &[lit(10.0), lit(1.0)]),
        Value::Error(ErrorKind::Value)
    );
}

#[test]
fn randbetween_accepts_time_bounds() {
    let t = TestCall::seeded(3);
    let six_am = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
    let six_pm = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    let day = NaiveDate::from_ymd_opt(2013, 5, 5).unwrap();
    let low = RawValue::DateTime(day.and_time(six_am));
    let high = RawValue::DateTime(day.and_time(six_pm));

    for _ in 0..200 {
        let v = t.number("RANDBETWEEN", &[lit(low.clone()), lit(high.clone())]);
        assert!((41399.25..=41399.75).contains(&v), "{v}");
    }
}

#[test]
fn randbetween_equal_bounds_returns_bound() {
    let t = TestCall::new();
    let midnight = NaiveDate::from_ymd_opt(2013, 5, 5).unwrap();
    assert_eq!(
        t.call("RANDBETWEEN", &[lit(midnight), lit(midnight)]),
        Value::Number(41399.0)
    );
}

#[test]
fn randbetween_reads_bounds_from_cells() {
    let t = TestCall::seeded(4);
    let low = range("A1", vec![("A1", 3.0.into())]);
    let high = range("B1", vec![("B1", 4.0.into())]);
    let v = t.number("RANDBETWEEN", &[low, high]);
    assert!(v == 3.0 || v == 4.0, "{v}");
}

#[test]
fn reseeding_replays_the_stream() {
    let t = TestCall::seeded(77);
    let first: Vec<f64> = (0..8).map(|_| t.number("RAND", &[])).collect();
    t.context().random().reseed(77);
    let second: Vec<f64> = (0..8).map(|_| t.number("RAND", &[])).collect();
    assert_eq!(first, second);
}

#[test]
fn contexts_for_other_cells_share_one_stream() {
    let random = RandomSource::seeded(5);
    let reference = RandomSource::seeded(5);
    let ctx = formula_funcs::EvaluationContext::new(random);
    let other = ctx.for_cell("Sheet2", formula_funcs::CellAddr::new(3, 4));

    let a = formula_funcs::call_function(&ctx, "RAND", &[]).number().unwrap();
    let b = formula_funcs::call_function(&other, "RAND", &[]).number().unwrap();
    assert_eq!(a, reference.next_f64());
    assert_eq!(b, reference.next_f64());
}
