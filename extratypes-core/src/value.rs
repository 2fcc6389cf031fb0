use std::sync::Arc;

use crate::error::{mismatched_types, Error};
use crate::type_info::{TypeInfo, TypeKind};

/// A single scalar value as delivered by a database driver, after it has been decoded from the
/// wire protocol.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ValueKind {
    /// `NULL`, tagged with the declared type of the column (or [`TypeKind::Null`] if unknown).
    Null(TypeKind),
    Bool(bool),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Text(Arc<str>),
    Blob(Arc<[u8]>),
}

impl ValueKind {
    /// An untyped `NULL`.
    pub const fn null() -> Self {
        ValueKind::Null(TypeKind::Null)
    }

    pub fn type_info(&self) -> TypeInfo {
        TypeInfo {
            kind: match self {
                ValueKind::Null(_) => TypeKind::Null,
                ValueKind::Bool(_) => TypeKind::Bool,
                ValueKind::SmallInt(_) => TypeKind::SmallInt,
                ValueKind::Integer(_) => TypeKind::Integer,
                ValueKind::BigInt(_) => TypeKind::BigInt,
                ValueKind::Real(_) => TypeKind::Real,
                ValueKind::Double(_) => TypeKind::Double,
                ValueKind::Text(_) => TypeKind::Text,
                ValueKind::Blob(_) => TypeKind::Blob,
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ValueKind::Null(_))
    }

    pub(crate) fn unexpected<Expected>(&self) -> Error {
        mismatched_types::<Expected>(self.type_info())
    }

    pub(crate) fn try_integer(&self) -> Result<i64, Error> {
        match *self {
            ValueKind::SmallInt(i) => Ok(i.into()),
            ValueKind::Integer(i) => Ok(i.into()),
            ValueKind::BigInt(i) => Ok(i),
            _ => Err(self.unexpected::<i64>()),
        }
    }
}

/// A borrowed, not-yet-decoded value from a row.
#[derive(Clone, Copy, Debug)]
pub struct ValueRef<'r> {
    pub(crate) kind: &'r ValueKind,
}

impl<'r> ValueRef<'r> {
    pub fn new(kind: &'r ValueKind) -> Self {
        ValueRef { kind }
    }

    pub fn type_info(&self) -> TypeInfo {
        self.kind.type_info()
    }

    pub fn is_null(&self) -> bool {
        self.kind.is_null()
    }
}

impl From<bool> for ValueKind {
    fn from(value: bool) -> Self {
        ValueKind::Bool(value)
    }
}

impl From<i16> for ValueKind {
    fn from(value: i16) -> Self {
        ValueKind::SmallInt(value)
    }
}

impl From<i32> for ValueKind {
    fn from(value: i32) -> Self {
        ValueKind::Integer(value)
    }
}

impl From<i64> for ValueKind {
    fn from(value: i64) -> Self {
        ValueKind::BigInt(value)
    }
}

impl From<f32> for ValueKind {
    fn from(value: f32) -> Self {
        ValueKind::Real(value)
    }
}

impl From<f64> for ValueKind {
    fn from(value: f64) -> Self {
        ValueKind::Double(value)
    }
}

impl From<&'_ str> for ValueKind {
    fn from(value: &str) -> Self {
        ValueKind::Text(value.into())
    }
}

impl From<String> for ValueKind {
    fn from(value: String) -> Self {
        ValueKind::Text(value.into())
    }
}

impl From<&'_ [u8]> for ValueKind {
    fn from(value: &[u8]) -> Self {
        ValueKind::Blob(value.into())
    }
}

impl From<Vec<u8>> for ValueKind {
    fn from(value: Vec<u8>) -> Self {
        ValueKind::Blob(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_type_info_for_each_kind() {
        assert_eq!(ValueKind::null().type_info().name(), "NULL");
        assert_eq!(ValueKind::Null(TypeKind::BigInt).type_info().name(), "NULL");
        assert_eq!(ValueKind::from(true).type_info().name(), "BOOLEAN");
        assert_eq!(ValueKind::from(1_i16).type_info().name(), "SMALLINT");
        assert_eq!(ValueKind::from(1_i32).type_info().name(), "INTEGER");
        assert_eq!(ValueKind::from(1_i64).type_info().name(), "BIGINT");
        assert_eq!(ValueKind::from(1.0_f32).type_info().name(), "REAL");
        assert_eq!(ValueKind::from(1.0_f64).type_info().name(), "DOUBLE");
        assert_eq!(ValueKind::from("a").type_info().name(), "TEXT");
        assert_eq!(ValueKind::from(vec![0_u8]).type_info().name(), "BLOB");
    }

    #[test]
    fn it_widens_integers() {
        assert_eq!(ValueKind::SmallInt(-7).try_integer().unwrap(), -7);
        assert_eq!(ValueKind::Integer(i32::MAX).try_integer().unwrap(), 2147483647);
        assert_eq!(ValueKind::BigInt(i64::MIN).try_integer().unwrap(), i64::MIN);

        let err = ValueKind::Double(1.0).try_integer().unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
