mod address;
mod context;

pub use address::{parse_a1, parse_range_a1, AddressParseError, CellAddr};
pub use context::{EvaluationContext, EvaluationSettings, RandomSource};
