//! Types for working with errors produced by extratypes.

use std::any::type_name;
use std::error::Error as StdError;
use std::result::Result as StdResult;

use crate::type_info::TypeInfo;

/// A specialized `Result` type for extratypes.
pub type Result<T, E = Error> = StdResult<T, E>;

/// The error type returned by [`Decode`][crate::decode::Decode] and
/// [`Encode`][crate::encode::Encode] implementations.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a conversion can fail within extratypes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The dynamic kind of a column value cannot be converted into the requested Rust type.
    #[error("mismatched types; Rust type `{rust_type}` is not compatible with SQL type `{actual}`")]
    TypeMismatch {
        rust_type: &'static str,
        actual: TypeInfo,
    },

    /// The input was not a JSON `null` or an integer representable by the target type.
    #[error("error occurred while parsing JSON: {0}")]
    Parse(#[source] BoxDynError),

    /// Column index was out of bounds.
    #[error("column index out of bounds: the len is {len}, but the index is {index}")]
    ColumnIndexOutOfBounds { index: usize, len: usize },

    /// No column found for the given name.
    #[error("no column found for name: {0}")]
    ColumnNotFound(String),

    /// Error occurred while decoding a value from a specific column.
    #[error("error occurred while decoding column {index}: {source}")]
    ColumnDecode {
        index: String,

        #[source]
        source: BoxDynError,
    },
}

impl Error {
    /// Returns `true` if this error, or the decode error it wraps, is a
    /// [`TypeMismatch`][Error::TypeMismatch].
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::TypeMismatch { .. } => true,
            Error::ColumnDecode { source, .. } => source
                .downcast_ref::<Error>()
                .is_some_and(Error::is_type_mismatch),
            _ => false,
        }
    }
}

pub(crate) fn mismatched_types<T>(actual: TypeInfo) -> Error {
    Error::TypeMismatch {
        rust_type: type_name::<T>(),
        actual,
    }
}
