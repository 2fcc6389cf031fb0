use crate::decode::Decode;
use crate::encode::{ArgumentBuffer, Encode, IsNull};
use crate::error::BoxDynError;
use crate::type_info::{TypeInfo, TypeKind};
use crate::types::Type;
use crate::value::{ValueKind, ValueRef};

impl Type for i64 {
    fn type_info() -> TypeInfo {
        TypeInfo::new(TypeKind::BigInt)
    }

    fn compatible(ty: &TypeInfo) -> bool {
        ty.kind().is_integer()
    }
}

impl Encode for i64 {
    fn encode_by_ref(&self, buf: &mut ArgumentBuffer) -> Result<IsNull, BoxDynError> {
        buf.push(ValueKind::BigInt(*self));
        Ok(IsNull::No)
    }
}

impl<'r> Decode<'r> for i64 {
    fn decode(value: ValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(value.kind.try_integer()?)
    }
}
