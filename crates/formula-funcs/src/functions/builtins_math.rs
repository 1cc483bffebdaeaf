use crate::error::ExcelResult;
use crate::eval::EvaluationContext;
use crate::functions::{math, scalar_number, ErrorScan, FunctionSpec, RawArgument, Volatility};
use crate::value::{ErrorKind, Value};

fn number_result(result: ExcelResult<f64>) -> Value {
    match result {
        Ok(n) => Value::Number(n),
        Err(e) => Value::Error(ErrorKind::from(e)),
    }
}

fn unary(ctx: &EvaluationContext, args: &[RawArgument], f: fn(f64) -> ExcelResult<f64>) -> Value {
    let Some(arg) = args.first() else {
        return Value::Error(ErrorKind::Value);
    };
    match scalar_number(ctx, arg) {
        Ok(n) => number_result(f(n)),
        Err(e) => Value::Error(e),
    }
}

macro_rules! unary_builtin {
    ($name:literal, $fn_name:ident, $math:path) => {
        inventory::submit! {
            FunctionSpec {
                name: $name,
                min_args: 1,
                max_args: 1,
                volatility: Volatility::NonVolatile,
                error_scan: ErrorScan::AllArguments,
                arg_limit: None,
                implementation: $fn_name,
            }
        }

        fn $fn_name(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
            unary(ctx, args, $math)
        }
    };
}

unary_builtin!("ABS", abs_fn, math::abs);
unary_builtin!("SIGN", sign_fn, math::sign);
unary_builtin!("INT", int_fn, math::int);
unary_builtin!("LN", ln_fn, math::ln);
unary_builtin!("LOG10", log10_fn, math::log10);
unary_builtin!("EXP", exp_fn, math::exp);
unary_builtin!("SQRT", sqrt_fn, math::sqrt);
unary_builtin!("FACT", fact_fn, math::fact);
unary_builtin!("DEGREES", degrees_fn, math::degrees);
unary_builtin!("RADIANS", radians_fn, math::radians);

inventory::submit! {
    FunctionSpec {
        name: "PI",
        min_args: 0,
        max_args: 0,
        volatility: Volatility::NonVolatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: pi_fn,
    }
}

fn pi_fn(_ctx: &EvaluationContext, _args: &[RawArgument]) -> Value {
    Value::Number(math::pi())
}

inventory::submit! {
    FunctionSpec {
        name: "RAND",
        min_args: 0,
        max_args: 0,
        volatility: Volatility::Volatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: rand_fn,
    }
}

fn rand_fn(ctx: &EvaluationContext, _args: &[RawArgument]) -> Value {
    Value::Number(math::rand(ctx.random()))
}

inventory::submit! {
    FunctionSpec {
        name: "RANDBETWEEN",
        min_args: 2,
        max_args: 2,
        volatility: Volatility::Volatile,
        error_scan: ErrorScan::AllArguments,
        arg_limit: None,
        implementation: randbetween_fn,
    }
}

fn randbetween_fn(ctx: &EvaluationContext, args: &[RawArgument]) -> Value {
    let [low, high] = args else {
        return Value::Error(ErrorKind::Value);
    };
    let low = match scalar_number(ctx, low) {
        Ok(n) => n,
        Err(e) => return Value::Error(e),
    };
    let high = match scalar_number(ctx, high) {
        Ok(n) => n,
        Err(e) => return Value::Error(e),
    };
    number_result(math::randbetween(low, high, ctx.random()))
}
