use thiserror::Error;

use crate::value::ErrorKind;

/// Errors raised by the pure numeric helpers in [`crate::functions::math`],
/// [`crate::functions::statistical`] and [`crate::date`].
///
/// Only the kinds these helpers originate. `#N/A` from the argument ceiling is produced directly
/// as an [`ErrorKind`]; every other kind arrives inside [`crate::Value::Error`] and is passed
/// through untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcelError {
    #[error("#VALUE!")]
    Value,
    #[error("#NUM!")]
    Num,
}

pub type ExcelResult<T> = Result<T, ExcelError>;

impl From<ExcelError> for ErrorKind {
    fn from(value: ExcelError) -> Self {
        match value {
            ExcelError::Value => ErrorKind::Value,
            ExcelError::Num => ErrorKind::Num,
        }
    }
}
