use std::sync::Arc;

use extratypes::row::{Column, Row};
use extratypes::value::ValueKind;

pub fn setup_if_needed() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An in-memory result set, standing in for a driver in tests.
///
/// ```
/// use extratypes::{NullableInt, ValueKind};
/// use extratypes_test::MockRows;
///
/// let rows = MockRows::new(["i"])
///     .add_row([ValueKind::BigInt(-1)])
///     .add_row([ValueKind::null()]);
///
/// for row in rows {
///     let _: NullableInt = row.try_get(0).unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MockRows {
    columns: Arc<[Column]>,
    rows: Vec<Vec<ValueKind>>,
}

impl MockRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let columns: Vec<Column> = columns
            .into_iter()
            .enumerate()
            .map(|(ordinal, name)| Column::new(ordinal, name))
            .collect();

        MockRows {
            columns: columns.into(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    /// If the number of values does not match the number of columns.
    pub fn add_row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueKind>,
    {
        let values: Vec<ValueKind> = values.into_iter().map(Into::into).collect();

        assert_eq!(
            values.len(),
            self.columns.len(),
            "expected {} values per row, got {:?}",
            self.columns.len(),
            values
        );

        self.rows.push(values);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for MockRows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        let columns = self.columns;

        self.rows
            .into_iter()
            .map(|values| Row::new(Arc::clone(&columns), values))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

// Test scanning column values through `Row::try_get`
#[macro_export]
macro_rules! test_scan {
    ($name:ident<$ty:ty>($($value:expr => $expected:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_scan_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    let value = extratypes::ValueKind::from($value);
                    let rows = $crate::MockRows::new(["v"]).add_row([value.clone()]);

                    for row in rows {
                        let rec: $ty = row.try_get(0)?;

                        assert_eq!($expected, rec, "scanned from {:?}", value);
                    }
                )+

                Ok(())
            }
        }
    };
}

// Test that scanning fails with a type mismatch
#[macro_export]
macro_rules! test_scan_mismatch {
    ($name:ident<$ty:ty>($($value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_scan_mismatch_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    let value = extratypes::ValueKind::from($value);
                    let rows = $crate::MockRows::new(["v"]).add_row([value.clone()]);

                    for row in rows {
                        match row.try_get::<$ty, _>(0) {
                            Err(e) if e.is_type_mismatch() => {}
                            other => anyhow::bail!(
                                "expected a type mismatch scanning {:?}, got {:?}",
                                value,
                                other
                            ),
                        }
                    }
                )+

                Ok(())
            }
        }
    };
}

// Test JSON encoding and decoding
#[macro_export]
macro_rules! test_json {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_json_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    let decoded: $ty = serde_json::from_str($text)?;
                    assert_eq!($value, decoded, "decoding {}", $text);

                    let encoded = serde_json::to_string(&$value)?;
                    assert_eq!($text, encoded);
                )+

                Ok(())
            }
        }
    };
}
