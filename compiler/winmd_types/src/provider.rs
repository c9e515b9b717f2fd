//! Descriptor-building provider for the signature decoder.

use winmd_meta::{
    ArrayShape, MethodSignature, PrimitiveCode, RawTypeKind, SignatureDecoder,
    SignatureTypeProvider, TypeDefHandle, TypeRefHandle,
};

use crate::descriptor::TypeDescriptor;
use crate::error::ResolveError;

/// Builds [`TypeDescriptor`]s from primitives, handles, general arrays and
/// pointers. Every other production is rejected as an unsupported shape,
/// so a signature either decodes completely or not at all.
///
/// Class vs. value-type prefixes are not recorded: interface-ness comes
/// from the definition's attributes at render time.
#[derive(Copy, Clone, Debug, Default)]
pub struct SignatureHandleProvider;

impl SignatureHandleProvider {
    pub fn new() -> Self {
        Self
    }

    /// Decode a blob holding a single type.
    pub fn decode_type(&self, blob: &[u8]) -> Result<TypeDescriptor, ResolveError> {
        Ok(SignatureDecoder::new(self, blob).decode_type()?)
    }

    /// Decode a field signature blob.
    pub fn decode_field(&self, blob: &[u8]) -> Result<TypeDescriptor, ResolveError> {
        Ok(SignatureDecoder::new(self, blob).decode_field_signature()?)
    }

    /// Decode a method signature blob into return and parameter descriptors.
    pub fn decode_method(
        &self,
        blob: &[u8],
    ) -> Result<MethodSignature<TypeDescriptor>, ResolveError> {
        Ok(SignatureDecoder::new(self, blob).decode_method_signature()?)
    }
}

impl SignatureTypeProvider for SignatureHandleProvider {
    type Type = TypeDescriptor;

    fn primitive(&self, code: PrimitiveCode) -> TypeDescriptor {
        TypeDescriptor::primitive(code)
    }

    fn from_definition(&self, handle: TypeDefHandle, _kind: RawTypeKind) -> TypeDescriptor {
        TypeDescriptor::handle(handle)
    }

    fn from_reference(&self, handle: TypeRefHandle, _kind: RawTypeKind) -> TypeDescriptor {
        TypeDescriptor::handle(handle)
    }

    fn array_of(&self, element: TypeDescriptor, shape: ArrayShape) -> TypeDescriptor {
        TypeDescriptor::array(element, shape)
    }

    fn pointer_to(&self, element: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::pointer(element)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
