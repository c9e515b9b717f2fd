//! Signature blob vocabulary (ECMA-335 II.23.2).

use std::fmt;

use smallvec::SmallVec;

/// Element-type bytes that introduce a composite or special production.
///
/// Primitive element types live on [`crate::PrimitiveCode`].
pub mod element_type {
    pub const PTR: u8 = 0x0F;
    pub const BYREF: u8 = 0x10;
    pub const VALUETYPE: u8 = 0x11;
    pub const CLASS: u8 = 0x12;
    pub const VAR: u8 = 0x13;
    pub const ARRAY: u8 = 0x14;
    pub const GENERICINST: u8 = 0x15;
    pub const TYPEDBYREF: u8 = 0x16;
    pub const FNPTR: u8 = 0x1B;
    pub const SZARRAY: u8 = 0x1D;
    pub const MVAR: u8 = 0x1E;
    pub const CMOD_REQD: u8 = 0x1F;
    pub const CMOD_OPT: u8 = 0x20;
    pub const SENTINEL: u8 = 0x41;
    pub const PINNED: u8 = 0x45;
}

/// Constructs a provider may refuse to model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureShape {
    /// Single-dimension, zero-based array (`SZARRAY`).
    SzArray,
    /// `GENERICINST`.
    GenericInstantiation,
    /// Type named through a `TypeSpec` row.
    TypeSpecification,
    /// `BYREF`.
    ByReference,
    /// `FNPTR`.
    FunctionPointer,
    /// `VAR`.
    GenericTypeParameter,
    /// `MVAR`.
    GenericMethodParameter,
    /// `CMOD_REQD` / `CMOD_OPT`.
    ModifiedType,
    /// `PINNED`.
    PinnedType,
    /// `TYPEDBYREF`.
    TypedReference,
    /// `SENTINEL` in a vararg method signature.
    VarargSentinel,
}

impl SignatureShape {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SzArray => "single-dimension array",
            Self::GenericInstantiation => "generic instantiation",
            Self::TypeSpecification => "type specification",
            Self::ByReference => "by-reference",
            Self::FunctionPointer => "function pointer",
            Self::GenericTypeParameter => "generic type parameter",
            Self::GenericMethodParameter => "generic method parameter",
            Self::ModifiedType => "modified type",
            Self::PinnedType => "pinned type",
            Self::TypedReference => "typed reference",
            Self::VarargSentinel => "vararg sentinel",
        }
    }
}

impl fmt::Display for SignatureShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a `CLASS` or `VALUETYPE` prefix introduced a type handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawTypeKind {
    Class,
    ValueType,
}

/// Dimensions of a general (`ARRAY`) array.
///
/// `sizes` and `lower_bounds` are ordered by dimension and may each be
/// shorter than `rank`; missing entries are unspecified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayShape {
    pub rank: u32,
    pub sizes: SmallVec<[u32; 4]>,
    pub lower_bounds: SmallVec<[i32; 4]>,
}

impl ArrayShape {
    /// Zero-based shape with a size for every dimension.
    pub fn fixed(sizes: &[u32]) -> Self {
        Self {
            rank: u32::try_from(sizes.len()).unwrap_or(u32::MAX),
            sizes: SmallVec::from_slice(sizes),
            lower_bounds: SmallVec::new(),
        }
    }
}

/// Kind nibble of a signature header byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Method,
    Field,
    LocalVariables,
    Property,
    MethodSpecification,
}

/// Calling convention nibble of a method signature header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    Default,
    CDecl,
    StdCall,
    ThisCall,
    FastCall,
    VarArgs,
    Unmanaged,
}

/// First byte of a method, field, property or locals signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureHeader(u8);

impl SignatureHeader {
    const GENERIC: u8 = 0x10;
    const HAS_THIS: u8 = 0x20;
    const EXPLICIT_THIS: u8 = 0x40;

    pub const FIELD: Self = Self(0x06);

    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Signature kind, `None` for unassigned kind values.
    pub const fn kind(self) -> Option<SignatureKind> {
        match self.0 & 0x0F {
            0x00..=0x05 | 0x09 => Some(SignatureKind::Method),
            0x06 => Some(SignatureKind::Field),
            0x07 => Some(SignatureKind::LocalVariables),
            0x08 => Some(SignatureKind::Property),
            0x0A => Some(SignatureKind::MethodSpecification),
            _ => None,
        }
    }

    pub const fn calling_convention(self) -> CallingConvention {
        match self.0 & 0x0F {
            0x01 => CallingConvention::CDecl,
            0x02 => CallingConvention::StdCall,
            0x03 => CallingConvention::ThisCall,
            0x04 => CallingConvention::FastCall,
            0x05 => CallingConvention::VarArgs,
            0x09 => CallingConvention::Unmanaged,
            _ => CallingConvention::Default,
        }
    }

    #[inline]
    pub const fn is_generic(self) -> bool {
        self.0 & Self::GENERIC != 0
    }

    #[inline]
    pub const fn has_this(self) -> bool {
        self.0 & Self::HAS_THIS != 0
    }

    #[inline]
    pub const fn explicit_this(self) -> bool {
        self.0 & Self::EXPLICIT_THIS != 0
    }
}

/// Decoded method signature, generic over the provider's type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature<T> {
    pub header: SignatureHeader,
    pub generic_parameter_count: u32,
    pub return_type: T,
    pub parameter_types: Vec<T>,
}

impl<T> MethodSignature<T> {
    /// Apply `f` to the return and parameter types, preserving order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MethodSignature<U> {
        MethodSignature {
            header: self.header,
            generic_parameter_count: self.generic_parameter_count,
            return_type: f(self.return_type),
            parameter_types: self.parameter_types.into_iter().map(f).collect(),
        }
    }
}
