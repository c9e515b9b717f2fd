//! Resolution errors.
//!
//! Every failure is fatal for the signature or descriptor at hand and
//! carries enough context (handle or byte offset) to attribute it.

use winmd_meta::{DecodeError, EntityHandle, HandleKind, MalformedReason, SignatureShape};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The signature contains a construct outside the modeled set.
    #[error("unsupported signature shape `{shape}` at byte {offset}")]
    UnsupportedSignatureShape { shape: SignatureShape, offset: usize },

    /// The blob is not a valid signature.
    #[error("malformed signature at byte {offset}: {reason}")]
    MalformedSignature {
        offset: usize,
        reason: MalformedReason,
    },

    /// A handle that is neither a type definition nor a type reference
    /// reached rendering.
    #[error("handle of kind {0:?} does not name a type definition or reference")]
    UnrecognizedHandleKind(HandleKind),

    /// A handle or one of its enclosing links does not resolve to a row.
    #[error("dangling handle {0:?}")]
    DanglingHandle(EntityHandle),
}

impl From<DecodeError> for ResolveError {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::Malformed { offset, reason } => {
                ResolveError::MalformedSignature { offset, reason }
            }
            DecodeError::Unsupported { shape, offset } => {
                ResolveError::UnsupportedSignatureShape { shape, offset }
            }
        }
    }
}
