//! Signature decoder.
//!
//! Walks a signature blob and drives a [`SignatureTypeProvider`] bottom-up:
//! element types are built before the composite that wraps them, so a
//! provider only ever sees finished children.
//!
//! Errors carry the byte offset where the failing production started.
//! A rejected production aborts the whole decode; partially built values
//! are dropped.

use crate::blob::BlobReader;
use crate::error::{DecodeError, MalformedReason};
use crate::provider::{SignatureTypeProvider, UnsupportedShape};
use crate::signature::{
    element_type, ArrayShape, MethodSignature, RawTypeKind, SignatureHeader, SignatureKind,
    SignatureShape,
};
use crate::{EntityHandle, PrimitiveCode};

/// Nesting limit for composite productions.
///
/// Real signatures nest a handful of levels; the limit only guards the
/// recursion against hostile input.
pub const MAX_NESTING_DEPTH: u32 = 128;

pub struct SignatureDecoder<'a, P> {
    provider: &'a P,
    reader: BlobReader<'a>,
    depth: u32,
}

impl<'a, P: SignatureTypeProvider> SignatureDecoder<'a, P> {
    pub fn new(provider: &'a P, blob: &'a [u8]) -> Self {
        Self {
            provider,
            reader: BlobReader::new(blob),
            depth: 0,
        }
    }

    /// Offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.reader.offset()
    }

    /// Decode a blob holding exactly one `Type` production.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.reader.remaining()))]
    pub fn decode_type(&mut self) -> Result<P::Type, DecodeError> {
        let ty = self.read_type()?;
        self.finish()?;
        Ok(ty)
    }

    /// Decode a `FIELD` signature: header byte, then the field type.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.reader.remaining()))]
    pub fn decode_field_signature(&mut self) -> Result<P::Type, DecodeError> {
        let offset = self.reader.offset();
        let header = SignatureHeader::from_raw(self.reader.read_u8()?);
        if header.kind() != SignatureHeader::FIELD.kind() {
            return Err(DecodeError::Malformed {
                offset,
                reason: MalformedReason::UnexpectedHeader(header.raw()),
            });
        }
        let ty = self.read_type()?;
        self.finish()?;
        Ok(ty)
    }

    /// Decode a method signature (`MethodDefSig` / `MethodRefSig` / `StandAloneMethodSig`).
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.reader.remaining()))]
    pub fn decode_method_signature(&mut self) -> Result<MethodSignature<P::Type>, DecodeError> {
        let signature = self.read_method_signature()?;
        self.finish()?;
        Ok(signature)
    }

    /// Fail if bytes remain after a complete signature.
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.reader.remaining() {
            0 => Ok(()),
            count => Err(self.reader.malformed(MalformedReason::TrailingBytes(count))),
        }
    }

    fn read_method_signature(&mut self) -> Result<MethodSignature<P::Type>, DecodeError> {
        let offset = self.reader.offset();
        let header = SignatureHeader::from_raw(self.reader.read_u8()?);
        if header.kind() != Some(SignatureKind::Method) {
            return Err(DecodeError::Malformed {
                offset,
                reason: MalformedReason::UnexpectedHeader(header.raw()),
            });
        }

        let generic_parameter_count = if header.is_generic() {
            self.reader.read_compressed_u32()?
        } else {
            0
        };
        let parameter_count = self.reader.read_compressed_u32()?;
        let return_type = self.read_type()?;

        // Capacity comes from untrusted input; every parameter needs at least a byte.
        let capacity = usize::try_from(parameter_count)
            .unwrap_or(usize::MAX)
            .min(self.reader.remaining());
        let mut parameter_types = Vec::with_capacity(capacity);
        for _ in 0..parameter_count {
            if self.reader.peek_u8()? == element_type::SENTINEL {
                return Err(DecodeError::Unsupported {
                    shape: SignatureShape::VarargSentinel,
                    offset: self.reader.offset(),
                });
            }
            parameter_types.push(self.read_type()?);
        }

        Ok(MethodSignature {
            header,
            generic_parameter_count,
            return_type,
            parameter_types,
        })
    }

    fn read_type(&mut self) -> Result<P::Type, DecodeError> {
        let start = self.reader.offset();
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.reader.malformed(MalformedReason::NestingTooDeep));
        }
        self.depth += 1;
        let result = self.read_type_at(start);
        self.depth -= 1;
        result
    }

    fn read_type_at(&mut self, start: usize) -> Result<P::Type, DecodeError> {
        let byte = self.reader.read_u8()?;
        if let Some(code) = PrimitiveCode::from_element_type(byte) {
            return Ok(self.provider.primitive(code));
        }

        let provider = self.provider;
        let at = |UnsupportedShape(shape)| DecodeError::Unsupported {
            shape,
            offset: start,
        };

        match byte {
            element_type::PTR => {
                let element = self.read_type()?;
                Ok(provider.pointer_to(element))
            }
            element_type::ARRAY => {
                let element = self.read_type()?;
                let shape = self.read_array_shape()?;
                Ok(provider.array_of(element, shape))
            }
            element_type::CLASS => self.read_type_handle(RawTypeKind::Class, start),
            element_type::VALUETYPE => self.read_type_handle(RawTypeKind::ValueType, start),
            element_type::SZARRAY => {
                let element = self.read_type()?;
                provider.sz_array_of(element).map_err(at)
            }
            element_type::BYREF => {
                let element = self.read_type()?;
                provider.by_reference(element).map_err(at)
            }
            element_type::PINNED => {
                let element = self.read_type()?;
                provider.pinned(element).map_err(at)
            }
            element_type::VAR => {
                let index = self.reader.read_compressed_u32()?;
                provider.generic_type_parameter(index).map_err(at)
            }
            element_type::MVAR => {
                let index = self.reader.read_compressed_u32()?;
                provider.generic_method_parameter(index).map_err(at)
            }
            element_type::GENERICINST => {
                let kind_offset = self.reader.offset();
                let kind = match self.reader.read_u8()? {
                    element_type::CLASS => RawTypeKind::Class,
                    element_type::VALUETYPE => RawTypeKind::ValueType,
                    other => {
                        return Err(DecodeError::Malformed {
                            offset: kind_offset,
                            reason: MalformedReason::UnknownElementType(other),
                        })
                    }
                };
                let generic = self.read_type_handle(kind, kind_offset)?;
                let count = self.reader.read_compressed_u32()?;
                let mut arguments = Vec::new();
                for _ in 0..count {
                    arguments.push(self.read_type()?);
                }
                provider.generic_instantiation(generic, arguments).map_err(at)
            }
            element_type::FNPTR => {
                let signature = self.read_method_signature()?;
                provider.function_pointer(signature).map_err(at)
            }
            element_type::CMOD_REQD | element_type::CMOD_OPT => {
                let modifier_offset = self.reader.offset();
                let modifier = self.read_type_handle(RawTypeKind::Class, modifier_offset)?;
                let unmodified = self.read_type()?;
                provider
                    .modified(modifier, unmodified, byte == element_type::CMOD_REQD)
                    .map_err(at)
            }
            element_type::TYPEDBYREF => Err(DecodeError::Unsupported {
                shape: SignatureShape::TypedReference,
                offset: start,
            }),
            other => Err(DecodeError::Malformed {
                offset: start,
                reason: MalformedReason::UnknownElementType(other),
            }),
        }
    }

    /// `TypeDefOrRefOrSpecEncoded` following `CLASS`/`VALUETYPE`.
    fn read_type_handle(&mut self, kind: RawTypeKind, start: usize) -> Result<P::Type, DecodeError> {
        let coded_offset = self.reader.offset();
        let coded = self.reader.read_compressed_u32()?;
        let invalid = DecodeError::Malformed {
            offset: coded_offset,
            reason: MalformedReason::InvalidCodedIndex(coded),
        };
        let handle = match EntityHandle::from_type_def_or_ref_coded(coded) {
            Some(handle) if !handle.is_nil() => handle,
            _ => return Err(invalid),
        };

        if let Some(definition) = handle.as_type_def() {
            return Ok(self.provider.from_definition(definition, kind));
        }
        if let Some(reference) = handle.as_type_ref() {
            return Ok(self.provider.from_reference(reference, kind));
        }
        match handle.as_type_spec() {
            Some(spec) => self
                .provider
                .from_specification(spec, kind)
                .map_err(|UnsupportedShape(shape)| DecodeError::Unsupported {
                    shape,
                    offset: start,
                }),
            None => Err(invalid),
        }
    }

    fn read_array_shape(&mut self) -> Result<ArrayShape, DecodeError> {
        let offset = self.reader.offset();
        let invalid = DecodeError::Malformed {
            offset,
            reason: MalformedReason::InvalidArrayShape,
        };

        let rank = self.reader.read_compressed_u32()?;
        if rank == 0 {
            return Err(invalid);
        }

        let mut shape = ArrayShape {
            rank,
            ..ArrayShape::default()
        };
        let num_sizes = self.reader.read_compressed_u32()?;
        if num_sizes > rank {
            return Err(invalid);
        }
        for _ in 0..num_sizes {
            shape.sizes.push(self.reader.read_compressed_u32()?);
        }
        let num_lower_bounds = self.reader.read_compressed_u32()?;
        if num_lower_bounds > rank {
            return Err(invalid);
        }
        for _ in 0..num_lower_bounds {
            shape.lower_bounds.push(self.reader.read_compressed_i32()?);
        }
        Ok(shape)
    }
}
