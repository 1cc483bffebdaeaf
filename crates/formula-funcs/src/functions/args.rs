use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::coercion::CoercionPolicy;
use crate::eval::{parse_range_a1, AddressParseError, CellAddr};
use crate::value::ErrorKind;

/// A scalar as the host stores it in a cell or writes it as a formula literal.
///
/// Unlike [`crate::Value`] this can carry a date-typed value; coercion turns it into a serial.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    Blank,
    Error(ErrorKind),
}

impl RawValue {
    /// Blank for `COUNTBLANK`: never written, or written as empty text.
    pub fn is_blank_like(&self) -> bool {
        match self {
            RawValue::Blank => true,
            RawValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<ErrorKind> for RawValue {
    fn from(value: ErrorKind) -> Self {
        RawValue::Error(value)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(value: NaiveDateTime) -> Self {
        RawValue::DateTime(value)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        RawValue::DateTime(value.and_time(chrono::NaiveTime::MIN))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error(transparent)]
    Address(#[from] AddressParseError),
    #[error("cell {0} lies outside the range")]
    OutsideRange(CellAddr),
}

/// A read-only rectangular snapshot of worksheet cells.
///
/// Only cells that were ever written are stored. Writing [`RawValue::Blank`] clears a cell, so
/// the snapshot never holds an explicit blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeSnapshot {
    start: CellAddr,
    end: CellAddr,
    cells: BTreeMap<CellAddr, RawValue>,
}

impl RangeSnapshot {
    /// An unwritten region spanning `start..=end` (corners in any order).
    #[must_use]
    pub fn new(start: CellAddr, end: CellAddr) -> Self {
        Self {
            start: CellAddr::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddr::new(start.row.max(end.row), start.col.max(end.col)),
            cells: BTreeMap::new(),
        }
    }

    pub fn from_a1(range: &str) -> Result<Self, RangeError> {
        let (start, end) = parse_range_a1(range)?;
        Ok(Self::new(start, end))
    }

    pub fn start(&self) -> CellAddr {
        self.start
    }

    pub fn end(&self) -> CellAddr {
        self.end
    }

    pub fn contains(&self, addr: CellAddr) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    /// Number of cells covered by the region, written or not.
    pub fn size(&self) -> u64 {
        let rows = u64::from(self.end.row - self.start.row) + 1;
        let cols = u64::from(self.end.col - self.start.col) + 1;
        rows.saturating_mul(cols)
    }

    pub fn set(&mut self, addr: CellAddr, value: impl Into<RawValue>) -> Result<(), RangeError> {
        if !self.contains(addr) {
            return Err(RangeError::OutsideRange(addr));
        }
        match value.into() {
            RawValue::Blank => {
                self.cells.remove(&addr);
            }
            value => {
                self.cells.insert(addr, value);
            }
        }
        Ok(())
    }

    pub fn set_a1(&mut self, addr: &str, value: impl Into<RawValue>) -> Result<(), RangeError> {
        let addr = crate::eval::parse_a1(addr)?;
        self.set(addr, value)
    }

    /// Builder-style [`RangeSnapshot::set_a1`].
    pub fn with(mut self, addr: &str, value: impl Into<RawValue>) -> Result<Self, RangeError> {
        self.set_a1(addr, value)?;
        Ok(self)
    }

    pub fn get(&self, addr: CellAddr) -> Option<&RawValue> {
        self.cells.get(&addr)
    }

    /// Written cells in row-major order.
    pub fn written(&self) -> impl Iterator<Item = (CellAddr, &RawValue)> + '_ {
        self.cells.iter().map(|(addr, v)| (*addr, v))
    }

    pub fn written_count(&self) -> usize {
        self.cells.len()
    }

    fn single_cell(&self) -> Option<RawValue> {
        if self.size() != 1 {
            return None;
        }
        Some(self.get(self.start).cloned().unwrap_or(RawValue::Blank))
    }
}

/// An in-place array constant such as `{1,2;"a",TRUE}`, stored row by row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayLiteral {
    rows: Vec<Vec<RawValue>>,
}

impl ArrayLiteral {
    #[must_use]
    pub fn new(rows: Vec<Vec<RawValue>>) -> Self {
        Self { rows }
    }

    /// A single-row array.
    #[must_use]
    pub fn row<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        Self::new(vec![values.into_iter().map(Into::into).collect()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawValue> + '_ {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Range(RangeSnapshot),
    Array(ArrayLiteral),
}

impl Collection {
    pub fn policy(&self) -> CoercionPolicy {
        match self {
            Collection::Range(_) => CoercionPolicy::RangeElement,
            Collection::Array(_) => CoercionPolicy::ArrayElement,
        }
    }

    /// Enumerated elements in row-major order. Never-written range cells are skipped.
    pub fn elements(&self) -> Box<dyn Iterator<Item = &RawValue> + '_> {
        match self {
            Collection::Range(range) => Box::new(range.written().map(|(_, v)| v)),
            Collection::Array(array) => Box::new(array.iter()),
        }
    }

    pub fn element_count(&self) -> usize {
        match self {
            Collection::Range(range) => range.written_count(),
            Collection::Array(array) => array.len(),
        }
    }

    /// The sole element of a 1x1 collection.
    pub fn single_element(&self) -> Option<RawValue> {
        match self {
            Collection::Range(range) => range.single_cell(),
            Collection::Array(array) if array.len() == 1 => array.iter().next().cloned(),
            Collection::Array(_) => None,
        }
    }
}

/// One uncoerced argument, tagged by how it reached the call.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArgument {
    Literal(RawValue),
    CellReference(RawValue),
    Collection(Collection),
}

impl RawArgument {
    pub fn literal(value: impl Into<RawValue>) -> Self {
        RawArgument::Literal(value.into())
    }

    pub fn cell(value: impl Into<RawValue>) -> Self {
        RawArgument::CellReference(value.into())
    }

    pub fn range(range: RangeSnapshot) -> Self {
        RawArgument::Collection(Collection::Range(range))
    }

    pub fn array(array: ArrayLiteral) -> Self {
        RawArgument::Collection(Collection::Array(array))
    }

    /// The error carried directly by a literal or cell argument.
    pub fn direct_error(&self) -> Option<ErrorKind> {
        match self {
            RawArgument::Literal(RawValue::Error(e))
            | RawArgument::CellReference(RawValue::Error(e)) => Some(*e),
            _ => None,
        }
    }

    /// The first error reachable from this argument, scanning collections row-major.
    pub fn first_error(&self) -> Option<ErrorKind> {
        match self {
            RawArgument::Collection(c) => c.elements().find_map(|v| match v {
                RawValue::Error(e) => Some(*e),
                _ => None,
            }),
            other => other.direct_error(),
        }
    }

    /// Elements this argument contributes to a flattened argument list.
    pub fn flattened_len(&self) -> usize {
        match self {
            RawArgument::Literal(_) | RawArgument::CellReference(_) => 1,
            RawArgument::Collection(c) => c.element_count(),
        }
    }
}
