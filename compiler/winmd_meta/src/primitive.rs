//! Primitive type codes.

use std::fmt;

/// Scalar kinds that appear directly in a signature.
///
/// Discriminants are the ECMA-335 element-type bytes. `TypedReference`
/// (0x16) is a primitive in the ECMA sense but never occurs in the modeled
/// interface surface, so it is not part of this set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PrimitiveCode {
    Void = 0x01,
    Boolean = 0x02,
    Char = 0x03,
    SByte = 0x04,
    Byte = 0x05,
    Int16 = 0x06,
    UInt16 = 0x07,
    Int32 = 0x08,
    UInt32 = 0x09,
    Int64 = 0x0A,
    UInt64 = 0x0B,
    Single = 0x0C,
    Double = 0x0D,
    String = 0x0E,
    /// Pointer-sized signed integer.
    IntPtr = 0x18,
    /// Pointer-sized unsigned integer.
    UIntPtr = 0x19,
    Object = 0x1C,
}

impl PrimitiveCode {
    /// Every code, in element-type order.
    pub const ALL: [Self; 17] = [
        Self::Void,
        Self::Boolean,
        Self::Char,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::String,
        Self::IntPtr,
        Self::UIntPtr,
        Self::Object,
    ];

    /// Map an element-type byte to a primitive code.
    pub const fn from_element_type(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::Void),
            0x02 => Some(Self::Boolean),
            0x03 => Some(Self::Char),
            0x04 => Some(Self::SByte),
            0x05 => Some(Self::Byte),
            0x06 => Some(Self::Int16),
            0x07 => Some(Self::UInt16),
            0x08 => Some(Self::Int32),
            0x09 => Some(Self::UInt32),
            0x0A => Some(Self::Int64),
            0x0B => Some(Self::UInt64),
            0x0C => Some(Self::Single),
            0x0D => Some(Self::Double),
            0x0E => Some(Self::String),
            0x18 => Some(Self::IntPtr),
            0x19 => Some(Self::UIntPtr),
            0x1C => Some(Self::Object),
            _ => None,
        }
    }

    #[inline]
    pub const fn element_type(self) -> u8 {
        self as u8
    }

    /// Pointer-sized integers, whose spelling depends on the native-width policy.
    #[inline]
    pub const fn is_pointer_sized(self) -> bool {
        matches!(self, Self::IntPtr | Self::UIntPtr)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::String => "String",
            Self::IntPtr => "IntPtr",
            Self::UIntPtr => "UIntPtr",
            Self::Object => "Object",
        }
    }
}

impl fmt::Display for PrimitiveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
