//! Provides [`Decode`] for decoding values from the database.

use crate::error::BoxDynError;
use crate::value::ValueRef;

/// A type that can be decoded from a column value.
///
/// This is the "scan" side of the database boundary: the driver has already turned the wire
/// representation into a [`ValueKind`][crate::value::ValueKind] and this trait turns that into a
/// Rust value.
///
/// Implementations should not check [`Type::compatible`][crate::types::Type::compatible]
/// themselves; [`Row::try_get`][crate::row::Row::try_get] does that before calling `decode`.
pub trait Decode<'r>: Sized {
    /// Decode a new value of this type using a raw value from the database.
    fn decode(value: ValueRef<'r>) -> Result<Self, BoxDynError>;
}

// implement `Decode` for Option<T> for all T that implement `Decode`
impl<'r, T> Decode<'r> for Option<T>
where
    T: Decode<'r>,
{
    fn decode(value: ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::decode(value)?))
        }
    }
}
