use std::collections::HashMap;
use std::sync::OnceLock;

use crate::coercion::{coerce, number_or_error, CoercionPolicy};
use crate::eval::EvaluationContext;
use crate::value::{ErrorKind, Value};

pub mod aggregate;
mod args;
pub mod math;
pub mod statistical;

pub use args::{ArrayLiteral, Collection, RangeError, RangeSnapshot, RawArgument, RawValue};

// Built-in registrations live in dedicated modules.
mod builtins_math;
mod builtins_statistical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    NonVolatile,
    Volatile,
}

/// Which arguments are scanned for errors before the implementation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScan {
    /// Literals, cells and every collection element.
    AllArguments,
    /// Only errors carried directly by literal or cell arguments. Used by functions that
    /// inspect collection cells without evaluating them (e.g. `COUNTBLANK`).
    ScalarArguments,
}

pub type FunctionImpl = fn(&EvaluationContext, &[RawArgument]) -> Value;

#[derive(Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub volatility: Volatility,
    pub error_scan: ErrorScan,
    /// Ceiling on the flattened argument count, enforced with `#N/A`. Opt-in per function.
    pub arg_limit: Option<usize>,
    pub implementation: FunctionImpl,
}

inventory::collect!(FunctionSpec);

/// Iterate all [`FunctionSpec`] registrations collected via [`inventory`].
pub fn iter_function_specs() -> impl Iterator<Item = &'static FunctionSpec> {
    inventory::iter::<FunctionSpec>.into_iter()
}

fn registry() -> &'static HashMap<String, &'static FunctionSpec> {
    static REGISTRY: OnceLock<HashMap<String, &'static FunctionSpec>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        iter_function_specs()
            .map(|spec| (spec.name.to_ascii_uppercase(), spec))
            .collect()
    })
}

pub fn lookup_function(name: &str) -> Option<&'static FunctionSpec> {
    let upper = name.to_ascii_uppercase();
    if let Some(spec) = registry().get(&upper).copied() {
        return Some(spec);
    }

    // Newer functions are stored with an `_xlfn.` prefix; treat those as aliases.
    upper
        .strip_prefix("_XLFN.")
        .and_then(|stripped| registry().get(stripped).copied())
}

/// The outcome of a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResult {
    value: Value,
}

impl FunctionResult {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The numeric result, or the error the call produced. Non-numeric results are `#VALUE!`.
    pub fn number(&self) -> Result<f64, ErrorKind> {
        number_or_error(&self.value)
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.value.as_error()
    }

    pub fn is_error(&self) -> bool {
        self.value.is_error()
    }
}

impl From<Value> for FunctionResult {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

/// Call the built-in `name` with already-resolved arguments.
///
/// Checks run in this order: the name (`#NAME?`), arity (`#VALUE!`), argument errors scanned left
/// to right (first one wins, returned unchanged), the optional flattened-argument ceiling
/// (`#N/A`), then the function's own domain checks.
pub fn call_function(ctx: &EvaluationContext, name: &str, args: &[RawArgument]) -> FunctionResult {
    let Some(spec) = lookup_function(name) else {
        log::debug!("unknown worksheet function {name:?}");
        return Value::Error(ErrorKind::Name).into();
    };
    call_spec(ctx, spec, args)
}

pub fn call_spec(
    ctx: &EvaluationContext,
    spec: &FunctionSpec,
    args: &[RawArgument],
) -> FunctionResult {
    // A function with an argument ceiling reports overflow as `#N/A` rather than an arity error.
    let over_max = args.len() > spec.max_args && spec.arg_limit.is_none();
    if args.len() < spec.min_args || over_max {
        return Value::Error(ErrorKind::Value).into();
    }

    let first_error = args.iter().find_map(|arg| match spec.error_scan {
        ErrorScan::AllArguments => arg.first_error(),
        ErrorScan::ScalarArguments => arg.direct_error(),
    });
    if let Some(e) = first_error {
        return Value::Error(e).into();
    }

    if let Some(limit) = spec.arg_limit {
        if let Err(e) = aggregate::check_arg_limit(args, limit) {
            log::debug!("{} rejected: more than {limit} flattened arguments", spec.name);
            return Value::Error(e).into();
        }
    }

    (spec.implementation)(ctx, args).into()
}

/// Resolve an argument to the single scalar a scalar function needs.
///
/// Literals and cells coerce under [`CoercionPolicy::Literal`]; a 1x1 collection contributes its
/// only element; larger collections are `#VALUE!`.
pub(crate) fn scalar_value(ctx: &EvaluationContext, arg: &RawArgument) -> Value {
    let settings = ctx.settings();
    match arg {
        RawArgument::Literal(v) | RawArgument::CellReference(v) => {
            coerce(v, CoercionPolicy::Literal, settings)
        }
        RawArgument::Collection(c) => match c.single_element() {
            Some(v) => coerce(&v, CoercionPolicy::Literal, settings),
            None => Value::Error(ErrorKind::Value),
        },
    }
}

pub(crate) fn scalar_number(ctx: &EvaluationContext, arg: &RawArgument) -> Result<f64, ErrorKind> {
    number_or_error(&scalar_value(ctx, arg))
}
