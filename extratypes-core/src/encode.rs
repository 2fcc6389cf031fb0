//! Provides [`Encode`] for encoding values for the database.

use crate::error::BoxDynError;
use crate::types::Type;
use crate::value::ValueKind;

/// The return type of [Encode::encode].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IsNull {
    /// The value is null; no data was written.
    Yes,

    /// The value is not null.
    ///
    /// This does not mean that data was written.
    No,
}

/// The buffer values are encoded into before being handed to a driver.
#[derive(Debug, Default, Clone)]
pub struct ArgumentBuffer(pub(crate) Vec<ValueKind>);

impl ArgumentBuffer {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[ValueKind] {
        &self.0
    }

    pub fn push(&mut self, value: ValueKind) {
        self.0.push(value);
    }
}

/// A list of arguments to bind to a statement.
#[derive(Debug, Default, Clone)]
pub struct Arguments {
    #[doc(hidden)]
    pub values: ArgumentBuffer,
}

impl Arguments {
    /// Adds the value to the end of the arguments.
    pub fn add<T>(&mut self, value: T) -> Result<(), BoxDynError>
    where
        T: Encode + Type,
    {
        let len = self.values.len();

        if let Err(error) = value.encode(&mut self.values) {
            // reset the value buffer to its previous value if encoding failed
            // so we don't leave a half-encoded value behind
            self.values.0.truncate(len);
            return Err(error);
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encode a single value to be sent to the database.
pub trait Encode {
    /// Writes the value of `self` into `buf` in the expected format for the database.
    fn encode(self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError>
    where
        Self: Sized,
    {
        self.encode_by_ref(buf)
    }

    /// Writes the value of `self` into `buf` without moving `self`.
    ///
    /// Where possible, make use of `encode` instead as it can take advantage of re-using
    /// memory.
    fn encode_by_ref(&self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError>;
}

impl<T> Encode for &'_ T
where
    T: Encode,
{
    #[inline]
    fn encode(self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <T as Encode>::encode_by_ref(self, buf)
    }

    #[inline]
    fn encode_by_ref(&self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&T as Encode>::encode(self, buf)
    }
}

impl<T> Encode for Option<T>
where
    T: Encode + Type,
{
    #[inline]
    fn encode(self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if let Some(v) = self {
            v.encode(buf)
        } else {
            buf.push(ValueKind::Null(T::type_info().kind()));
            Ok(IsNull::Yes)
        }
    }

    #[inline]
    fn encode_by_ref(&self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if let Some(v) = self {
            v.encode_by_ref(buf)
        } else {
            buf.push(ValueKind::Null(T::type_info().kind()));
            Ok(IsNull::Yes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_info::TypeKind;
    use crate::types::NullableInt;

    #[test]
    fn it_encodes_options_and_references() -> Result<(), BoxDynError> {
        let mut buf = ArgumentBuffer::default();

        assert_eq!(Some(NullableInt::new(1)).encode(&mut buf)?, IsNull::No);
        assert_eq!(None::<i64>.encode(&mut buf)?, IsNull::Yes);
        assert_eq!((&NullableInt::null()).encode(&mut buf)?, IsNull::Yes);
        assert_eq!(Some(&NullableInt::new(-2)).encode_by_ref(&mut buf)?, IsNull::No);

        assert_eq!(
            buf.values(),
            [
                ValueKind::BigInt(1),
                ValueKind::Null(TypeKind::BigInt),
                ValueKind::Null(TypeKind::BigInt),
                ValueKind::BigInt(-2),
            ]
        );

        Ok(())
    }

    #[test]
    fn it_adds_arguments() -> Result<(), BoxDynError> {
        let mut args = Arguments::default();
        assert!(args.is_empty());

        args.add(NullableInt::new(7))?;
        args.add(None::<NullableInt>)?;

        assert!(!args.is_empty());
        assert_eq!(args.len(), 2);
        assert_eq!(
            args.values.values(),
            [ValueKind::BigInt(7), ValueKind::Null(TypeKind::BigInt)]
        );

        Ok(())
    }
}
