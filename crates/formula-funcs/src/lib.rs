#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Argument resolution, value coercion and shared aggregation for Excel-compatible math and
//! statistical worksheet functions.
//!
//! The host (parser + recalculation scheduler) hands every call a resolved argument list of
//! [`RawArgument`]s together with an [`EvaluationContext`]. Each argument is coerced under the
//! [`CoercionPolicy`] that matches how it arrived:
//!
//! - literals typed into the formula ([`CoercionPolicy::Literal`]) parse numeric and date text,
//! - cells and ranges ([`CoercionPolicy::RangeElement`]) never parse text but count logicals,
//! - array constants ([`CoercionPolicy::ArrayElement`]) drop logicals entirely.
//!
//! Built-in functions are registered through [`inventory`] and dispatched by name via
//! [`call_function`]. Errors flow through [`Value::Error`] and the first error encountered while
//! scanning arguments left to right is returned unchanged.
//!
//! ## Random numbers
//!
//! `RAND` / `RANDBETWEEN` draw from the context's [`RandomSource`], a lock-guarded generator
//! shared by every clone of the context. Hosts reseed it at the start of a full recalculation to
//! get reproducible runs (see [`RandomSource::reseed`]).

pub mod coercion;
pub mod date;
pub mod error;
pub mod eval;
pub mod functions;
pub mod locale;
pub mod value;

/// Excel's hard limit for the maximum number of arguments in a single function call.
///
/// Functions opt in to enforcing it over their *flattened* argument list via
/// [`functions::FunctionSpec::arg_limit`].
pub const EXCEL_MAX_ARGS: usize = 255;

pub use crate::coercion::CoercionPolicy;
pub use crate::error::{ExcelError, ExcelResult};
pub use crate::eval::{CellAddr, EvaluationContext, EvaluationSettings, RandomSource};
pub use crate::functions::{
    call_function, lookup_function, ArrayLiteral, Collection, FunctionResult, FunctionSpec,
    RangeSnapshot, RawArgument, RawValue,
};
pub use crate::value::{ErrorKind, Value};
