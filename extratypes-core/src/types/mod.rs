//! Conversions between Rust and SQL types.
//!
//! | Rust type                             | SQL type(s)                                 |
//! |---------------------------------------|---------------------------------------------|
//! | `i64`                                 | SMALLINT, INTEGER, BIGINT                   |
//! | [`NullableInt`]                       | SMALLINT, INTEGER, BIGINT, REAL, DOUBLE     |
//!
//! # Nullable
//!
//! In addition, `Option<T>` is supported where `T` implements `Type`. An `Option<T>` represents
//! a potentially `NULL` value from SQL. [`NullableInt`] carries its own null flag and decodes
//! `NULL` without being wrapped.

use crate::type_info::TypeInfo;

mod int;
mod nullable_int;

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
mod json;

pub use nullable_int::NullableInt;

/// Indicates that a SQL type is supported for a database.
pub trait Type {
    /// Returns the canonical SQL type for this Rust type.
    ///
    /// When binding arguments, this is used to tag a `NULL` with the type the database should
    /// expect.
    fn type_info() -> TypeInfo;

    /// Determines if this Rust type is compatible with the given SQL type.
    ///
    /// When fetching from a row, this check is done before [`Decode`][crate::decode::Decode]
    /// is called for any value that is not `NULL`.
    fn compatible(ty: &TypeInfo) -> bool {
        *ty == Self::type_info()
    }
}

// for references, the underlying SQL type is identical
impl<T: ?Sized + Type> Type for &'_ T {
    fn type_info() -> TypeInfo {
        <T as Type>::type_info()
    }

    fn compatible(ty: &TypeInfo) -> bool {
        <T as Type>::compatible(ty)
    }
}

// for optionals, the underlying SQL type is identical
impl<T: Type> Type for Option<T> {
    fn type_info() -> TypeInfo {
        <T as Type>::type_info()
    }

    fn compatible(ty: &TypeInfo) -> bool {
        ty.is_null() || <T as Type>::compatible(ty)
    }
}
