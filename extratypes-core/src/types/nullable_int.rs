use std::fmt::{self, Display, Formatter};

use crate::decode::Decode;
use crate::encode::{ArgumentBuffer, Encode, IsNull};
use crate::error::{BoxDynError, Error};
use crate::type_info::{TypeInfo, TypeKind};
use crate::types::Type;
use crate::value::{ValueKind, ValueRef};

/// A 64-bit signed integer that may be `NULL`.
///
/// Unlike `Option<i64>`, the null flag sits next to the value so the type can be embedded in a
/// record, scanned from a column and (with the `json` feature) written to and read from JSON
/// while keeping `0` and `NULL` apart.
///
/// When `null` is `true`, `value` is `0` for every instance built by this crate. Check `null`
/// (or use [`get`][Self::get]) before reading `value`.
///
/// The default value is `NULL`.
///
/// ### Decoding
///
/// | SQL value                      | Result                                       |
/// |--------------------------------|----------------------------------------------|
/// | `NULL`                         | `NullableInt { value: 0, null: true }`       |
/// | SMALLINT, INTEGER, BIGINT      | the integer, widened to `i64`                |
/// | REAL, DOUBLE                   | the float truncated toward zero              |
/// | anything else                  | [`Error::TypeMismatch`]                      |
///
/// Truncating floats is lossy on purpose: `1.9` scans as `1` without an error. Floats outside
/// the `i64` range saturate to `i64::MIN`/`i64::MAX` and `NaN` becomes `0`.
///
/// ### Text
///
/// `Display` renders `nil` for `NULL` and the decimal digits of `value` otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NullableInt {
    pub value: i64,
    pub null: bool,
}

impl NullableInt {
    /// A present value.
    pub const fn new(value: i64) -> Self {
        NullableInt { value, null: false }
    }

    /// `NULL`.
    pub const fn null() -> Self {
        NullableInt {
            value: 0,
            null: true,
        }
    }

    pub const fn is_null(&self) -> bool {
        self.null
    }

    /// Returns the value, or `None` if this is `NULL`.
    pub const fn get(&self) -> Option<i64> {
        if self.null {
            None
        } else {
            Some(self.value)
        }
    }

    /// Overwrites `self` with the result of decoding `value`.
    ///
    /// On error `self` is left untouched.
    pub fn scan(&mut self, value: &ValueKind) -> Result<(), Error> {
        *self = Self::from_value(value)?;
        Ok(())
    }

    /// The value to hand to a driver when binding `self` as an argument.
    pub fn to_value(&self) -> ValueKind {
        if self.null {
            ValueKind::Null(TypeKind::BigInt)
        } else {
            ValueKind::BigInt(self.value)
        }
    }

    pub(crate) fn from_value(value: &ValueKind) -> Result<Self, Error> {
        Ok(match *value {
            ValueKind::Null(_) => Self::null(),
            ValueKind::SmallInt(i) => Self::new(i.into()),
            ValueKind::Integer(i) => Self::new(i.into()),
            ValueKind::BigInt(i) => Self::new(i),
            ValueKind::Real(r) => Self::new(truncate(r.into())),
            ValueKind::Double(d) => Self::new(truncate(d)),
            ValueKind::Bool(_) | ValueKind::Text(_) | ValueKind::Blob(_) => {
                return Err(value.unexpected::<Self>());
            }
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(d: f64) -> i64 {
    // `as` rounds toward zero and saturates at the bounds
    let i = d as i64;

    if !(d >= i64::MIN as f64 && d < i64::MAX as f64) {
        log::debug!("float {d} is outside the range of i64; saturated to {i}");
    } else if d.fract() != 0.0 {
        log::debug!("discarding fractional part of {d}; scanned as {i}");
    }

    i
}

impl Default for NullableInt {
    fn default() -> Self {
        Self::null()
    }
}

impl Display for NullableInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.null {
            f.pad("nil")
        } else {
            Display::fmt(&self.value, f)
        }
    }
}

impl From<i64> for NullableInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Option<i64>> for NullableInt {
    fn from(value: Option<i64>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

impl From<NullableInt> for Option<i64> {
    fn from(value: NullableInt) -> Self {
        value.get()
    }
}

impl Type for NullableInt {
    fn type_info() -> TypeInfo {
        TypeInfo::new(TypeKind::BigInt)
    }

    fn compatible(ty: &TypeInfo) -> bool {
        ty.is_null() || ty.kind().is_integer() || ty.kind().is_float()
    }
}

impl Encode for NullableInt {
    fn encode_by_ref(&self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        buf.push(self.to_value());

        Ok(if self.null { IsNull::Yes } else { IsNull::No })
    }
}

impl<'r> Decode<'r> for NullableInt {
    fn decode(value: ValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(Self::from_value(value.kind)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_text() {
        assert_eq!(NullableInt::new(10).to_string(), "10");
        assert_eq!(NullableInt::new(-10).to_string(), "-10");
        assert_eq!(NullableInt::new(0).to_string(), "0");
        assert_eq!(NullableInt::null().to_string(), "nil");
        assert_eq!(NullableInt::new(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(format!("[{:>5}]", NullableInt::null()), "[  nil]");
        assert_eq!(format!("{:05}", NullableInt::new(5)), "00005");
        assert_eq!(format!("{:05}", NullableInt::new(-5)), "-0005");
        assert_eq!(format!("{:+}", NullableInt::new(5)), "+5");
        assert_eq!(format!("{:>4}", NullableInt::new(5)), "   5");
    }

    #[test]
    fn it_defaults_to_null() {
        let i = NullableInt::default();

        assert!(i.is_null());
        assert_eq!(i.value, 0);
        assert_eq!(i.get(), None);
    }

    #[test]
    fn it_keeps_zero_apart_from_null() {
        assert_ne!(NullableInt::new(0), NullableInt::null());
        assert_eq!(NullableInt::new(0).get(), Some(0));
        assert_eq!(NullableInt::from(Some(0)), NullableInt::new(0));
        assert_eq!(NullableInt::from(None), NullableInt::null());
        assert_eq!(Option::<i64>::from(NullableInt::new(5)), Some(5));
    }

    #[test]
    fn it_scans_integers() {
        let mut i = NullableInt::null();

        i.scan(&ValueKind::BigInt(-1)).unwrap();
        assert_eq!(i, NullableInt::new(-1));

        i.scan(&ValueKind::Integer(i32::MIN)).unwrap();
        assert_eq!(i, NullableInt::new(-2147483648));

        i.scan(&ValueKind::SmallInt(12)).unwrap();
        assert_eq!(i, NullableInt::new(12));

        i.scan(&ValueKind::BigInt(i64::MAX)).unwrap();
        assert_eq!(i, NullableInt::new(i64::MAX));
    }

    #[test]
    fn it_truncates_floats_toward_zero() {
        let mut i = NullableInt::null();

        i.scan(&ValueKind::Double(1.1)).unwrap();
        assert_eq!(i, NullableInt::new(1));

        i.scan(&ValueKind::Double(-1.9)).unwrap();
        assert_eq!(i, NullableInt::new(-1));

        i.scan(&ValueKind::Real(2.5)).unwrap();
        assert_eq!(i, NullableInt::new(2));

        i.scan(&ValueKind::Double(-0.0)).unwrap();
        assert_eq!(i, NullableInt::new(0));
    }

    #[test]
    fn it_saturates_out_of_range_floats() {
        let mut i = NullableInt::null();

        i.scan(&ValueKind::Double(1e300)).unwrap();
        assert_eq!(i, NullableInt::new(i64::MAX));

        i.scan(&ValueKind::Double(f64::NEG_INFINITY)).unwrap();
        assert_eq!(i, NullableInt::new(i64::MIN));

        i.scan(&ValueKind::Double(f64::NAN)).unwrap();
        assert_eq!(i, NullableInt::new(0));
    }

    #[test]
    fn it_scans_null() {
        let mut i = NullableInt::new(42);

        i.scan(&ValueKind::null()).unwrap();
        assert_eq!(i, NullableInt::null());

        i = NullableInt::new(42);
        i.scan(&ValueKind::Null(TypeKind::BigInt)).unwrap();
        assert_eq!(i, NullableInt { value: 0, null: true });
    }

    #[test]
    fn it_rejects_non_numeric_kinds() {
        let mut i = NullableInt::new(7);

        for value in [
            ValueKind::from("10"),
            ValueKind::from(vec![1_u8, 0]),
            ValueKind::from(true),
        ] {
            let err = i.scan(&value).unwrap_err();

            assert!(err.is_type_mismatch(), "{err}");
            assert!(err.to_string().contains(value.type_info().name()), "{err}");
            // the receiver is left untouched on failure
            assert_eq!(i, NullableInt::new(7));
        }
    }

    #[test]
    fn it_encodes_for_binding() {
        let mut buf = ArgumentBuffer::default();

        assert_eq!(NullableInt::new(-3).encode_by_ref(&mut buf).unwrap(), IsNull::No);
        assert_eq!(NullableInt::null().encode(&mut buf).unwrap(), IsNull::Yes);

        assert_eq!(
            buf.values(),
            &[ValueKind::BigInt(-3), ValueKind::Null(TypeKind::BigInt)]
        );
    }

    #[test]
    fn it_round_trips_through_bound_values() {
        for i in [
            NullableInt::null(),
            NullableInt::new(0),
            NullableInt::new(i64::MIN),
            NullableInt::new(i64::MAX),
        ] {
            let mut scanned = NullableInt::default();
            scanned.scan(&i.to_value()).unwrap();

            assert_eq!(scanned, i);
        }
    }
}
