use std::fmt::Debug;
use std::sync::Arc;

use crate::decode::Decode;
use crate::error::{mismatched_types, Error};
use crate::types::Type;
use crate::value::{ValueKind, ValueRef};

/// A column of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    ordinal: usize,
    name: Arc<str>,
}

impl Column {
    pub fn new(ordinal: usize, name: impl Into<Arc<str>>) -> Self {
        Column {
            ordinal,
            name: name.into(),
        }
    }

    /// Gets the column ordinal.
    ///
    /// This can be used to unambiguously refer to this column within a row in case more than
    /// one column have the same name
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Gets the column name or alias.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A type that can be used to index into a [`Row`].
///
/// The [`try_get`] family of methods on [`Row`] accept any type that implements `ColumnIndex`.
/// This trait is implemented for strings which are used to look up a column by name, and for
/// `usize` which is used as a positional index into the row.
///
/// [`try_get`]: Row::try_get
pub trait ColumnIndex: Debug {
    /// Returns a valid positional index into the row, [`ColumnIndexOutOfBounds`], or,
    /// [`ColumnNotFound`].
    ///
    /// [`ColumnNotFound`]: Error::ColumnNotFound
    /// [`ColumnIndexOutOfBounds`]: Error::ColumnIndexOutOfBounds
    fn index(&self, row: &Row) -> Result<usize, Error>;
}

impl ColumnIndex for usize {
    fn index(&self, row: &Row) -> Result<usize, Error> {
        let len = row.len();

        if *self >= len {
            return Err(Error::ColumnIndexOutOfBounds { len, index: *self });
        }

        Ok(*self)
    }
}

impl ColumnIndex for str {
    fn index(&self, row: &Row) -> Result<usize, Error> {
        row.columns
            .iter()
            .position(|column| column.name() == self)
            .ok_or_else(|| Error::ColumnNotFound(self.into()))
    }
}

impl<I: ColumnIndex + ?Sized> ColumnIndex for &'_ I {
    #[inline]
    fn index(&self, row: &Row) -> Result<usize, Error> {
        (**self).index(row)
    }
}

/// A single row of a result set, as handed back by a driver.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[Column]>,
    values: Vec<ValueKind>,
}

impl Row {
    /// Creates a row from its column descriptions and one value per column.
    ///
    /// The columns are shared between all rows of a result set.
    pub fn new(columns: Arc<[Column]>, values: Vec<ValueKind>) -> Self {
        debug_assert_eq!(columns.len(), values.len());

        Row { columns, values }
    }

    /// Returns `true` if this row has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Gets the column information at `index`.
    pub fn try_column<I>(&self, index: I) -> Result<&Column, Error>
    where
        I: ColumnIndex,
    {
        Ok(&self.columns[index.index(self)?])
    }

    /// Index into the database row and decode a single value.
    ///
    /// A string index can be used to access a column by name and a `usize` index
    /// can be used to access a column by position.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use extratypes_core::row::{Column, Row};
    /// # use extratypes_core::types::NullableInt;
    /// # use extratypes_core::value::ValueKind;
    /// let columns: Arc<[Column]> = vec![Column::new(0, "id")].into();
    /// let row = Row::new(columns, vec![ValueKind::BigInt(15)]);
    ///
    /// let id: NullableInt = row.try_get("id")?;
    /// assert_eq!(id, NullableInt::new(15));
    /// # Ok::<(), extratypes_core::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    ///  * [`ColumnNotFound`] if the column by the given name was not found.
    ///  * [`ColumnIndexOutOfBounds`] if the `usize` index was greater than the number of columns in the row.
    ///  * [`ColumnDecode`] if the value could not be decoded into the requested type.
    ///
    /// [`ColumnDecode`]: Error::ColumnDecode
    /// [`ColumnNotFound`]: Error::ColumnNotFound
    /// [`ColumnIndexOutOfBounds`]: Error::ColumnIndexOutOfBounds
    pub fn try_get<'r, T, I>(&'r self, index: I) -> Result<T, Error>
    where
        I: ColumnIndex,
        T: Decode<'r> + Type,
    {
        let value = self.try_get_raw(&index)?;

        if !value.is_null() {
            let ty = value.type_info();

            if !T::compatible(&ty) {
                return Err(Error::ColumnDecode {
                    index: format!("{index:?}"),
                    source: mismatched_types::<T>(ty).into(),
                });
            }
        }

        T::decode(value).map_err(|source| Error::ColumnDecode {
            index: format!("{index:?}"),
            source,
        })
    }

    /// Index into the database row and decode a single value.
    ///
    /// Unlike [`try_get`](Self::try_get), this method does not check that the type
    /// being returned from the database is compatible with the Rust type and blindly tries
    /// to decode the value.
    pub fn try_get_unchecked<'r, T, I>(&'r self, index: I) -> Result<T, Error>
    where
        I: ColumnIndex,
        T: Decode<'r>,
    {
        let value = self.try_get_raw(&index)?;

        T::decode(value).map_err(|source| Error::ColumnDecode {
            index: format!("{index:?}"),
            source,
        })
    }

    /// Index into the database row and return a borrowed, undecoded value.
    pub fn try_get_raw<I>(&self, index: I) -> Result<ValueRef<'_>, Error>
    where
        I: ColumnIndex,
    {
        let index = index.index(self)?;

        Ok(ValueRef::new(&self.values[index]))
    }
}
