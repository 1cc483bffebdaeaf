use formula_funcs::functions::RawArgument;
use formula_funcs::{ErrorKind, Value};

use super::harness::{array, cell, lit, range, TestCall};

/// Every built-in that takes arguments, with a valid argument list.
fn valid_calls() -> Vec<(&'static str, Vec<RawArgument>)> {
    let seq = || array(vec![4.0.into(), 1.0.into(), 3.0.into()]);
    vec![
        ("ABS", vec![lit(-1.0)]),
        ("SIGN", vec![lit(-1.0)]),
        ("INT", vec![lit(1.5)]),
        ("LN", vec![lit(2.0)]),
        ("LOG10", vec![lit(10.0)]),
        ("EXP", vec![lit(1.0)]),
        ("SQRT", vec![lit(4.0)]),
        ("FACT", vec![lit(3.0)]),
        ("DEGREES", vec![lit(1.0)]),
        ("RADIANS", vec![lit(90.0)]),
        ("RANDBETWEEN", vec![lit(1.0), lit(6.0)]),
        ("MIN", vec![lit(1.0), lit(2.0), seq()]),
        ("MAX", vec![lit(1.0), lit(2.0), seq()]),
        ("MEDIAN", vec![lit(1.0), lit(2.0), seq()]),
        ("AVERAGEA", vec![lit(1.0), lit(2.0), seq()]),
        ("SMALL", vec![seq(), lit(1.0)]),
        ("LARGE", vec![seq(), lit(1.0)]),
        ("COUNTBLANK", vec![range("A1:A2", vec![])]),
    ]
}

#[test]
fn valid_calls_do_not_error() {
    let t = TestCall::new();
    for (name, args) in valid_calls() {
        let v = t.call(name, &args);
        assert!(!v.is_error(), "{name} returned {v:?}");
    }
}

#[test]
fn literal_and_cell_errors_pass_through_unchanged() {
    let t = TestCall::new();
    for (name, args) in valid_calls() {
        for position in 0..args.len() {
            for kind in ErrorKind::ALL {
                for error_arg in [lit(kind), cell(kind)] {
                    let mut args = args.clone();
                    args[position] = error_arg;
                    assert_eq!(
                        t.call(name, &args),
                        Value::Error(kind),
                        "{name} with {kind} at position {position}"
                    );
                }
            }
        }
    }
}

#[test]
fn errors_inside_collections_propagate() {
    let t = TestCall::new();
    for name in ["MIN", "MAX", "MEDIAN", "AVERAGEA"] {
        let arg = range(
            "A1:A3",
            vec![("A1", 1.0.into()), ("A2", ErrorKind::Ref.into())],
        );
        assert_eq!(t.call(name, &[arg]), Value::Error(ErrorKind::Ref), "{name}");

        let arg = array(vec![1.0.into(), ErrorKind::Null.into()]);
        assert_eq!(t.call(name, &[arg]), Value::Error(ErrorKind::Null), "{name}");
    }
}

#[test]
fn first_error_left_to_right_wins() {
    let t = TestCall::new();
    let args = [
        lit(1.0),
        lit(ErrorKind::Div0),
        range("A1", vec![("A1", ErrorKind::NA.into())]),
    ];
    assert_eq!(t.call("MIN", &args), Value::Error(ErrorKind::Div0));

    let row_major = range(
        "A1:B2",
        vec![("A2", ErrorKind::Num.into()), ("B1", ErrorKind::Name.into())],
    );
    assert_eq!(t.call("AVERAGEA", &[row_major]), Value::Error(ErrorKind::Name));
}

#[test]
fn errors_win_over_domain_checks() {
    let t = TestCall::new();
    assert_eq!(
        t.call("RANDBETWEEN", &[lit(9.0), lit(ErrorKind::Div0)]),
        Value::Error(ErrorKind::Div0)
    );
    assert_eq!(
        t.call("SMALL", &[lit(ErrorKind::NA), lit(-1.0)]),
        Value::Error(ErrorKind::NA)
    );
}
