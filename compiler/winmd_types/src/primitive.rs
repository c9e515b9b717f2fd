//! Primitive code to target syntax.

use winmd_meta::PrimitiveCode;

use crate::syntax::{PredefinedType, TypeSyntax};

/// Spell a primitive code.
///
/// Pointer-sized integers become `nint`/`nuint` when `prefer_native_width`
/// is set and `IntPtr`/`UIntPtr` otherwise; every other code maps to its
/// keyword regardless of the flag.
pub fn primitive_syntax(code: PrimitiveCode, prefer_native_width: bool) -> TypeSyntax {
    let keyword = match code {
        PrimitiveCode::Char => PredefinedType::Char,
        PrimitiveCode::Boolean => PredefinedType::Bool,
        PrimitiveCode::SByte => PredefinedType::SByte,
        PrimitiveCode::Byte => PredefinedType::Byte,
        PrimitiveCode::Int16 => PredefinedType::Short,
        PrimitiveCode::UInt16 => PredefinedType::UShort,
        PrimitiveCode::Int32 => PredefinedType::Int,
        PrimitiveCode::UInt32 => PredefinedType::UInt,
        PrimitiveCode::Int64 => PredefinedType::Long,
        PrimitiveCode::UInt64 => PredefinedType::ULong,
        PrimitiveCode::Single => PredefinedType::Float,
        PrimitiveCode::Double => PredefinedType::Double,
        PrimitiveCode::Object => PredefinedType::Object,
        PrimitiveCode::String => PredefinedType::String,
        PrimitiveCode::Void => PredefinedType::Void,
        PrimitiveCode::IntPtr => {
            return TypeSyntax::identifier(if prefer_native_width { "nint" } else { "IntPtr" })
        }
        PrimitiveCode::UIntPtr => {
            return TypeSyntax::identifier(if prefer_native_width { "nuint" } else { "UIntPtr" })
        }
    };
    TypeSyntax::predefined(keyword)
}

#[cfg(test)]
mod tests;
