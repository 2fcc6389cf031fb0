//! Core of extratypes: the value model shared with database drivers, the
//! [`Type`]/[`Decode`]/[`Encode`] conversion traits and the nullable scalar types built on them.
//!
//! Not intended to be used directly; see the `extratypes` crate.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(future_incompatible, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod decode;
pub mod encode;
pub mod error;
pub mod row;
pub mod type_info;
pub mod types;
pub mod value;

pub use decode::Decode;
pub use encode::{Encode, IsNull};
pub use error::{BoxDynError, Error, Result};
pub use row::{Column, ColumnIndex, Row};
pub use type_info::{TypeInfo, TypeKind};
pub use types::{NullableInt, Type};
pub use value::{ValueKind, ValueRef};
