use std::fmt::{self, Display, Formatter};

/// Provides information about a SQL type for a value delivered by the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    pub(crate) kind: TypeKind,
}

/// The dynamic kinds of scalar a driver can hand back for a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeKind {
    Null,
    Bool,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Text,
    Blob,
}

impl TypeInfo {
    pub const fn new(kind: TypeKind) -> Self {
        TypeInfo { kind }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns `true` if this is the type of an untyped `NULL`.
    pub fn is_null(&self) -> bool {
        self.kind == TypeKind::Null
    }

    /// Returns the database system name of the type.
    pub fn name(&self) -> &'static str {
        match self.kind {
            TypeKind::Null => "NULL",
            TypeKind::Bool => "BOOLEAN",
            TypeKind::SmallInt => "SMALLINT",
            TypeKind::Integer => "INTEGER",
            TypeKind::BigInt => "BIGINT",
            TypeKind::Real => "REAL",
            TypeKind::Double => "DOUBLE",
            TypeKind::Text => "TEXT",
            TypeKind::Blob => "BLOB",
        }
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TypeKind {
    pub fn is_integer(&self) -> bool {
        matches!(self, TypeKind::SmallInt | TypeKind::Integer | TypeKind::BigInt)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, TypeKind::Real | TypeKind::Double)
    }
}
