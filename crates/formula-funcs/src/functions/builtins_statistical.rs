use crate::error::ExcelResult;
use crate::eval::EvaluationContext;
use crate::functions::aggregate::{average_with_divisor, count_blank, numeric_values};
use crate::functions::{
    scalar_number, statistical, ErrorScan, FunctionSpec, RawArgument, Volatility,
};
use crate::value::{ErrorKind, Value};
use crate::EXCEL_MAX_ARGS;

const VAR_ARGS: usize = EXCEL_MAX_ARGS;

fn reduce_numbers(
    ctx: &EvaluationContext,
    args: &[RawArgument],
    f: impl FnOnce(&[f64]) -> ExcelResult<f64>,
) -> Value {
    match numeric_values(args, ctx.settings()) {
        Ok(values) => match f(&values) {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e.into()),
        },
        Err(e) => Value::Error(e),
    }
}

inventory::submit! {
    FunctionSpec {
        name: "MIN",
        min_args: 1,
        max_args: VAR_ARGS,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: Some(EXCEL_MAX_ARGS),
        implementation: min_fn,
    }
}

fn min_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    reduce_numbers(ctx, args, |values| Ok(statistical::min(values)))
}

inventory::submit! {
    FunctionSpec {
        name: "MAX",
        min_args: 1,
        max_args: VAR_ARGS,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: max_fn,
    }
}

fn max_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    reduce_numbers(ctx, args, |values| Ok(statistical::max(values)))
}

inventory::submit! {
    FunctionSpec {
        name: "MEDIAN",
        min_args: 1,
        max_args: VAR_ARGS,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: median_fn,
    }
}

fn median_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    reduce_numbers(ctx, args, statistical::median)
}

fn nth(
    ctx: &EvaluationContext,
    args: &[RawArgument],
    pick: fn(&[f64], f64) -> ExcelResult<f64>,
) -> Value {
    let [values, k] = args else {
        return Value::Error(ErrorKind::Value);
    };
    let k = match scalar_number(ctx, k) {
        Ok(k) => k,
        Err(e) => return Value::Error(e),
    };
    reduce_numbers(ctx, std::slice::from_ref(values), |values| pick(values, k))
}

inventory::submit! {
    FunctionSpec {
        name: "SMALL",
        min_args: 2,
        max_args: 2,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: small_fn,
    }
}

fn small_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    nth(ctx, args, statistical::nth_smallest)
}

inventory::submit! {
    FunctionSpec {
        name: "LARGE",
        min_args: 2,
        max_args: 2,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: large_fn,
    }
}

fn large_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    nth(ctx, args, statistical::nth_largest)
}

inventory::submit! {
    FunctionSpec {
        name: "AVERAGEA",
        min_args: 1,
        max_args: VAR_ARGS,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: averagea_fn,
    }
}

fn averagea_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    match average_with_divisor(args, ctx.settings()) {
        Ok(n) => Value::Number(n),
        Err(e) => Value::Error(e),
    }
}

inventory::submit! {
    FunctionSpec {
        name: "COUNTBLANK",
        min_args: 1,
        max_args: 1,
        volatility: Volatility::NonVolatile,
        // Error cells inside the range are simply not blank.
        error_scan: ErrorScan::ScalarArguments,
        arg_limit: None,
        implementation: countblank_fn,
    }
}

fn countblank_fn(_ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    let Some(arg) = args.first() else {
        return Value::Error(ErrorKind::Value);
    };
    match count_blank(arg) {
        Ok(n) => Value::Number(n as f64),
        Err(e) => Value::Error(e),
    }
}
