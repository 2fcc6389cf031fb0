//! Nullable scalar types that move between database column values, JSON and text without
//! confusing `NULL` with zero.
//!
//! ```rust
//! use extratypes::NullableInt;
//!
//! let i = NullableInt::new(10);
//! assert_eq!(i.to_string(), "10");
//! assert_eq!(NullableInt::null().to_string(), "nil");
//! ```
//!
//! ### Scanning from a row
//!
//! Drivers hand back each column as a [`ValueKind`]. [`Row::try_get`] decodes it:
//!
//! ```rust
//! use extratypes::{Column, NullableInt, Row, ValueKind};
//!
//! let columns: std::sync::Arc<[Column]> = vec![Column::new(0, "i")].into();
//!
//! let row = Row::new(columns.clone(), vec![ValueKind::Double(1.1)]);
//! assert_eq!(row.try_get::<NullableInt, _>("i")?, NullableInt::new(1));
//!
//! let row = Row::new(columns, vec![ValueKind::null()]);
//! assert!(row.try_get::<NullableInt, _>(0)?.is_null());
//! # Ok::<(), extratypes::Error>(())
//! ```
//!
//! ### JSON
//!
//! With the `json` feature (on by default), [`NullableInt`] implements `Serialize` and
//! `Deserialize` and can be used as a field of any serde record:
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # {
//! use extratypes::NullableInt;
//!
//! assert_eq!(NullableInt::new(-10).marshal_json(), b"-10");
//! assert_eq!(NullableInt::unmarshal_json(b"null")?, NullableInt::null());
//! # }
//! # Ok::<(), extratypes::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// Modules
pub use extratypes_core::{decode, encode, error, row, type_info, types, value};

// Types
pub use extratypes_core::{
    BoxDynError, Column, ColumnIndex, Decode, Encode, Error, IsNull, NullableInt, Result, Row,
    Type, TypeInfo, TypeKind, ValueKind, ValueRef,
};

/// Convenience re-export of common traits.
pub mod prelude {
    pub use super::ColumnIndex;
    pub use super::Decode;
    pub use super::Encode;
    pub use super::Type;
}
