use std::fmt;

use thiserror::Error;

const MAX_COLS: u32 = 16_384;
const MAX_ROWS: u32 = 1_048_576;

/// A 0-indexed worksheet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellAddr {
    pub row: u32,
    pub col: u32,
}

impl CellAddr {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        for c in letters.iter().rev() {
            write!(f, "{c}")?;
        }
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("invalid A1 address: {0}")]
    InvalidA1(String),
    #[error("column out of range")]
    ColumnOutOfRange,
    #[error("row out of range")]
    RowOutOfRange,
}

/// Parse an A1-style address like `A1` or `$B$12` into a 0-indexed [`CellAddr`].
pub fn parse_a1(input: &str) -> Result<CellAddr, AddressParseError> {
    let input = input.trim();
    let invalid = || AddressParseError::InvalidA1(input.to_string());

    let rest = input.strip_prefix('$').unwrap_or(input);
    let letters_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (letters, rest) = rest.split_at(letters_end);
    let digits = rest.strip_prefix('$').unwrap_or(rest);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let col = letters.bytes().try_fold(0u32, |acc, b| {
        let digit = u32::from(b.to_ascii_uppercase() - b'A' + 1);
        acc.checked_mul(26).and_then(|v| v.checked_add(digit))
    });
    let col = match col {
        Some(c) if (1..=MAX_COLS).contains(&c) => c,
        _ => return Err(AddressParseError::ColumnOutOfRange),
    };
    let row = match digits.parse::<u32>() {
        Ok(r) if (1..=MAX_ROWS).contains(&r) => r,
        _ => return Err(AddressParseError::RowOutOfRange),
    };

    Ok(CellAddr::new(row - 1, col - 1))
}

/// Parse `A1:B4` (or a single `A1`) into normalized top-left / bottom-right corners.
pub fn parse_range_a1(input: &str) -> Result<(CellAddr, CellAddr), AddressParseError> {
    let (a, b) = match input.split_once(':') {
        Some((a, b)) => (parse_a1(a)?, parse_a1(b)?),
        None => {
            let a = parse_a1(input)?;
            (a, a)
        }
    };
    Ok((
        CellAddr::new(a.row.min(b.row), a.col.min(b.col)),
        CellAddr::new(a.row.max(b.row), a.col.max(b.col)),
    ))
}
