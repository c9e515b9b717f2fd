//! Callback protocol driven by [`crate::SignatureDecoder`].
//!
//! The decoder walks a blob bottom-up and asks the provider to build a
//! value for each production. Five productions are required: primitives,
//! definition and reference handles, general arrays and pointers. Every
//! other production has a provided method that rejects the shape; a
//! provider that models more of the grammar overrides the relevant ones.

use std::fmt;

use crate::signature::{ArrayShape, MethodSignature, RawTypeKind, SignatureShape};
use crate::{PrimitiveCode, TypeDefHandle, TypeRefHandle, TypeSpecHandle};

/// A provider refused a production.
///
/// The decoder turns this into [`crate::DecodeError::Unsupported`] with
/// the byte offset of the production.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnsupportedShape(pub SignatureShape);

impl fmt::Display for UnsupportedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported signature shape `{}`", self.0)
    }
}

pub type ProviderResult<T> = Result<T, UnsupportedShape>;

#[allow(
    clippy::wrong_self_convention,
    reason = "from_* names the signature production built, not a conversion of self"
)]
pub trait SignatureTypeProvider {
    type Type;

    fn primitive(&self, code: PrimitiveCode) -> Self::Type;

    fn from_definition(&self, handle: TypeDefHandle, kind: RawTypeKind) -> Self::Type;

    fn from_reference(&self, handle: TypeRefHandle, kind: RawTypeKind) -> Self::Type;

    fn array_of(&self, element: Self::Type, shape: ArrayShape) -> Self::Type;

    fn pointer_to(&self, element: Self::Type) -> Self::Type;

    fn sz_array_of(&self, _element: Self::Type) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::SzArray))
    }

    fn from_specification(
        &self,
        _handle: TypeSpecHandle,
        _kind: RawTypeKind,
    ) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::TypeSpecification))
    }

    fn by_reference(&self, _element: Self::Type) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::ByReference))
    }

    fn function_pointer(
        &self,
        _signature: MethodSignature<Self::Type>,
    ) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::FunctionPointer))
    }

    fn generic_instantiation(
        &self,
        _generic: Self::Type,
        _arguments: Vec<Self::Type>,
    ) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::GenericInstantiation))
    }

    fn generic_type_parameter(&self, _index: u32) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::GenericTypeParameter))
    }

    fn generic_method_parameter(&self, _index: u32) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::GenericMethodParameter))
    }

    fn modified(
        &self,
        _modifier: Self::Type,
        _unmodified: Self::Type,
        _is_required: bool,
    ) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::ModifiedType))
    }

    fn pinned(&self, _element: Self::Type) -> ProviderResult<Self::Type> {
        Err(UnsupportedShape(SignatureShape::PinnedType))
    }
}
