//! Metadata vocabulary for winmd type resolution.
//!
//! This crate holds everything that is about the metadata image itself
//! rather than about a target language:
//!
//! - `EntityHandle` and typed handles (`TypeDefHandle`, `TypeRefHandle`, ...)
//! - `PrimitiveCode`, the closed set of scalar element types
//! - `MetadataReader`, the lookup capability, and `MetadataTable`, an
//!   in-memory implementation
//! - `SignatureDecoder`, which walks signature blobs and drives a
//!   `SignatureTypeProvider`
//!
//! # Decoding
//!
//! ```text
//! signature blob ──► SignatureDecoder ──► SignatureTypeProvider::{primitive, pointer_to, ...}
//!                         │                          │
//!                         └── DecodeError ◄──────────┘ (UnsupportedShape)
//! ```

mod attributes;
mod blob;
mod decode;
mod error;
mod handle;
mod primitive;
mod provider;
mod reader;
mod signature;
mod table;

pub use attributes::TypeAttributes;
pub use blob::{BlobReader, MAX_COMPRESSED_UNSIGNED};
pub use decode::{SignatureDecoder, MAX_NESTING_DEPTH};
pub use error::{DecodeError, MalformedReason};
pub use handle::{EntityHandle, HandleKind, TypeDefHandle, TypeRefHandle, TypeSpecHandle, MAX_ROW};
pub use primitive::PrimitiveCode;
pub use provider::{ProviderResult, SignatureTypeProvider, UnsupportedShape};
pub use reader::{MetadataReader, TypeDefinition, TypeReference};
pub use signature::{
    element_type, ArrayShape, CallingConvention, MethodSignature, RawTypeKind, SignatureHeader,
    SignatureKind, SignatureShape,
};
pub use table::MetadataTable;
