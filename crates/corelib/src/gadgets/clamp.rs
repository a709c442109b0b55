//! Digest clamp: per-byte AND with `[0x1F, 0xFF, .., 0xFF]`.
//!
//! After clamping the digest's integer value is below 2^253 < r, so the
//! bit254/bit255 correction flags of the reducer are always zero.

use crate::circuit::{Byte, Circuit};
use crate::constants::{CLAMP_MASK, DIGEST_LEN};
use crate::errors::{CircuitError, CircuitResult};
use crate::gadgets::bitwise;

pub fn clamp_digest(cs: &mut Circuit, bytes: &[Byte]) -> CircuitResult<Vec<Byte>> {
    if bytes.len() != DIGEST_LEN {
        return Err(CircuitError::MalformedInput {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        });
    }
    let mut out = Vec::with_capacity(DIGEST_LEN);
    for (byte, &mask) in bytes.iter().zip(CLAMP_MASK.iter()) {
        let masked = bitwise::and(cs, byte.value() as u128, mask as u128, 8)?;
        out.push(cs.alloc_byte(masked as u64)?);
    }
    Ok(out)
}
