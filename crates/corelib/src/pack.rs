//! 32-byte values as a pair of field elements.
//!
//! A full 32-byte root does not fit below r, so it is stored as its most
//! significant byte and the remaining 31 bytes (< 2^248), each a canonical
//! element on its own.

use num_bigint::BigUint;

use crate::errors::{CircuitError, CircuitResult};
use crate::field::CanonicalElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bytes32FieldPair {
    high_byte: CanonicalElement,
    lower_bytes: CanonicalElement,
}

impl Bytes32FieldPair {
    pub fn from_bytes32(bytes: &[u8; 32]) -> CircuitResult<Self> {
        Ok(Self {
            high_byte: CanonicalElement::from_u64(bytes[0] as u64),
            lower_bytes: CanonicalElement::constant(&BigUint::from_bytes_be(&bytes[1..]))?,
        })
    }

    /// Rebuild from stored parts; each part must fit its byte width.
    pub fn from_parts(
        high_byte: CanonicalElement,
        lower_bytes: CanonicalElement,
    ) -> CircuitResult<Self> {
        if high_byte.value().bits() > 8 {
            return Err(CircuitError::Range {
                value: high_byte.to_string(),
                bits: 8,
            });
        }
        if lower_bytes.value().bits() > 248 {
            return Err(CircuitError::Range {
                value: lower_bytes.to_string(),
                bits: 248,
            });
        }
        Ok(Self {
            high_byte,
            lower_bytes,
        })
    }

    pub fn high_byte(&self) -> &CanonicalElement {
        &self.high_byte
    }

    pub fn lower_bytes(&self) -> &CanonicalElement {
        &self.lower_bytes
    }

    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut out = self.lower_bytes.to_bytes_be();
        out[0] = self.high_byte.to_bytes_be()[31];
        out
    }
}
