//! Signature decoding errors.

use std::fmt;

use crate::signature::SignatureShape;

/// Why a blob is not a well-formed signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// The blob ended in the middle of a production.
    UnexpectedEnd,
    /// Lead byte does not start a 1, 2 or 4 byte compressed integer.
    InvalidCompressedInteger,
    /// Element-type byte outside the `Type` production.
    UnknownElementType(u8),
    /// `TypeDefOrRefOrSpec` coded index with a reserved tag.
    InvalidCodedIndex(u32),
    /// Signature header does not match the expected signature kind.
    UnexpectedHeader(u8),
    /// `ARRAY` shape with rank 0, or more sizes or bounds than its rank.
    InvalidArrayShape,
    /// Bytes left over after a complete signature.
    TrailingBytes(usize),
    /// Composite productions nested past the decoder's limit.
    NestingTooDeep,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::UnexpectedEnd => f.write_str("unexpected end of blob"),
            MalformedReason::InvalidCompressedInteger => {
                f.write_str("invalid compressed integer")
            }
            MalformedReason::UnknownElementType(byte) => {
                write!(f, "unknown element type 0x{byte:02X}")
            }
            MalformedReason::InvalidCodedIndex(coded) => {
                write!(f, "invalid TypeDefOrRefOrSpec coded index 0x{coded:X}")
            }
            MalformedReason::UnexpectedHeader(byte) => {
                write!(f, "unexpected signature header 0x{byte:02X}")
            }
            MalformedReason::InvalidArrayShape => {
                f.write_str("array shape has no dimensions, or more sizes or bounds than dimensions")
            }
            MalformedReason::TrailingBytes(count) => {
                write!(f, "{count} trailing byte(s) after signature")
            }
            MalformedReason::NestingTooDeep => f.write_str("signature nested too deeply"),
        }
    }
}

/// Failure while walking a signature blob.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The blob violates the signature grammar.
    #[error("malformed signature at byte {offset}: {reason}")]
    Malformed {
        offset: usize,
        reason: MalformedReason,
    },
    /// The provider rejected a construct it does not model.
    #[error("unsupported signature shape `{shape}` at byte {offset}")]
    Unsupported { shape: SignatureShape, offset: usize },
}

impl DecodeError {
    /// Byte offset where the failing production started.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::Malformed { offset, .. } | DecodeError::Unsupported { offset, .. } => {
                *offset
            }
        }
    }
}
