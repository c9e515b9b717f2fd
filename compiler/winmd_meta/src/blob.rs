//! Byte cursor over a signature blob.
//!
//! Implements the compressed integer encodings of ECMA-335 II.23.2:
//!
//! | first byte  | width | value bits |
//! |-------------|-------|------------|
//! | `0xxxxxxx`  | 1     | 7          |
//! | `10xxxxxx`  | 2     | 14         |
//! | `110xxxxx`  | 4     | 29         |

use crate::error::{DecodeError, MalformedReason};

/// Largest value a compressed unsigned integer can hold.
pub const MAX_COMPRESSED_UNSIGNED: u32 = 0x1FFF_FFFF;

/// Forward-only reader that tracks its byte offset for error reporting.
#[derive(Clone, Debug)]
pub struct BlobReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BlobReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, DecodeError> {
        self.bytes
            .get(self.offset)
            .copied()
            .ok_or_else(|| self.malformed(MalformedReason::UnexpectedEnd))
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek_u8()?;
        self.offset += 1;
        Ok(byte)
    }

    /// Read a compressed unsigned integer.
    pub fn read_compressed_u32(&mut self) -> Result<u32, DecodeError> {
        let start = self.offset;
        let first = self.read_u8()?;
        let value = if first & 0x80 == 0 {
            u32::from(first)
        } else if first & 0xC0 == 0x80 {
            let second = self.read_u8()?;
            (u32::from(first & 0x3F) << 8) | u32::from(second)
        } else if first & 0xE0 == 0xC0 {
            let mut value = u32::from(first & 0x1F);
            for _ in 0..3 {
                value = (value << 8) | u32::from(self.read_u8()?);
            }
            value
        } else {
            return Err(DecodeError::Malformed {
                offset: start,
                reason: MalformedReason::InvalidCompressedInteger,
            });
        };
        Ok(value)
    }

    /// Read a compressed signed integer.
    ///
    /// The value is stored rotated left by one within its encoded width, so
    /// the sign bit ends up in bit 0.
    pub fn read_compressed_i32(&mut self) -> Result<i32, DecodeError> {
        let start = self.offset;
        let raw = self.read_compressed_u32()?;
        let width_bits = match self.offset - start {
            1 => 7,
            2 => 14,
            _ => 29,
        };
        let magnitude = raw >> 1;
        let value = if raw & 1 == 0 {
            i64::from(magnitude)
        } else {
            i64::from(magnitude) - (1i64 << (width_bits - 1))
        };
        // 29-bit payloads always fit in i32.
        i32::try_from(value).map_err(|_| DecodeError::Malformed {
            offset: start,
            reason: MalformedReason::InvalidCompressedInteger,
        })
    }

    /// Error positioned at the current offset.
    pub fn malformed(&self, reason: MalformedReason) -> DecodeError {
        DecodeError::Malformed {
            offset: self.offset,
            reason,
        }
    }
}
