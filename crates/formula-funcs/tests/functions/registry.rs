use formula_funcs::functions::{iter_function_specs, Volatility};
use formula_funcs::{lookup_function, ErrorKind, Value};

use super::harness::{lit, TestCall};

const BUILTINS: &[&str] = &[
    "ABS",
    "SIGN",
    "LN",
    "LOG10",
    "FACT",
    "INT",
    "DEGREES",
    "RADIANS",
    "MEDIAN",
    "MIN",
    "SMALL",
    "COUNTBLANK",
    "AVERAGEA",
    "RAND",
    "RANDBETWEEN",
    "MAX",
    "LARGE",
    "SQRT",
    "EXP",
    "PI",
];

#[test]
fn every_builtin_is_registered() {
    for name in BUILTINS {
        assert!(lookup_function(name).is_some(), "{name} is not registered");
    }
    assert_eq!(iter_function_specs().count(), BUILTINS.len());
}

#[test]
fn lookup_is_case_insensitive_and_accepts_xlfn_prefix() {
    assert_eq!(lookup_function("median").map(|s| s.name), Some("MEDIAN"));
    assert_eq!(lookup_function("_xlfn.Fact").map(|s| s.name), Some("FACT"));
    assert!(lookup_function("NOPE").is_none());
}

#[test]
fn only_random_functions_are_volatile() {
    for spec in iter_function_specs() {
        let expected = matches!(spec.name, "RAND" | "RANDBETWEEN");
        assert_eq!(
            spec.volatility == Volatility::Volatile,
            expected,
            "{}",
            spec.name
        );
    }
}

#[test]
fn only_min_opts_into_the_argument_ceiling() {
    for spec in iter_function_specs() {
        let expected = if spec.name == "MIN" { Some(255) } else { None };
        assert_eq!(spec.arg_limit, expected, "{}", spec.name);
    }
}

#[test]
fn unknown_function_is_name_error() {
    let t = TestCall::new();
    assert_eq!(t.call("NOSUCHFN", &[lit(1.0)]), Value::Error(ErrorKind::Name));
}

#[test]
fn wrong_arity_is_value_error() {
    let t = TestCall::new();
    assert_eq!(t.call("FACT", &[]), Value::Error(ErrorKind::Value));
    assert_eq!(
        t.call("FACT", &[lit(1.0), lit(2.0)]),
        Value::Error(ErrorKind::Value)
    );
    assert_eq!(t.call("RAND", &[lit(1.0)]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("RANDBETWEEN", &[lit(1.0)]), Value::Error(ErrorKind::Value));
    assert_eq!(t.call("AVERAGEA", &[]), Value::Error(ErrorKind::Value));
}
