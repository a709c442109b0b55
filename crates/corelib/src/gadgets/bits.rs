//! Digest bit decomposition.
//!
//! A 32-byte digest is read as a big-endian 256-bit integer. Positions 0..=253
//! go into the main vector (most significant first); positions 254 and 255 are
//! split off as standalone flags because folding them in would overflow r.

use crate::circuit::{Bit, Byte, Circuit, Gate};
use crate::constants::{DIGEST_LEN, MAIN_BITS};
use crate::errors::{CircuitError, CircuitResult};

#[derive(Debug, Clone)]
pub struct DigestBits {
    /// Bits 253..=0, most significant first.
    pub bits: Vec<Bit>,
    pub bit254: Bit,
    pub bit255: Bit,
}

/// Decompose a 32-byte digest.
///
/// Each byte gets 8 boolean gates plus an 8-bit recomposition gate tying the
/// bits back to the byte wire.
pub fn decompose_digest(cs: &mut Circuit, bytes: &[Byte]) -> CircuitResult<DigestBits> {
    if bytes.len() != DIGEST_LEN {
        return Err(CircuitError::MalformedInput {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        });
    }

    let mut bits = Vec::with_capacity(MAIN_BITS);
    let mut bit254 = None;
    let mut bit255 = None;
    for (i, byte) in bytes.iter().enumerate() {
        let mut recomposed = 0u8;
        for j in (0..8usize).rev() {
            let bit = cs.alloc_bit((byte.value() >> j) & 1 == 1);
            recomposed = (recomposed << 1) | bit.value() as u8;
            let position = 8 * (DIGEST_LEN - 1 - i) + j;
            match position {
                255 => bit255 = Some(bit),
                254 => bit254 = Some(bit),
                _ => bits.push(bit),
            }
        }
        cs.emit(Gate::Compose { bits: 8 });
        if recomposed != byte.value() {
            return Err(CircuitError::Unsatisfied {
                gate: "compose",
                detail: format!("byte {i} bits do not recompose to {}", byte.value()),
            });
        }
    }

    // DIGEST_LEN is fixed at 32, so both flag positions were visited
    match (bit254, bit255) {
        (Some(bit254), Some(bit255)) => Ok(DigestBits {
            bits,
            bit254,
            bit255,
        }),
        _ => Err(CircuitError::MalformedShape(
            "digest shorter than 256 bits".into(),
        )),
    }
}
