//! Plain big-integer reduction into the BN254 scalar field.
//! No gates, no limbs: this is the independent reference the circuit path is
//! checked against.

use num_bigint::BigUint;

use crate::constants::{CLAMP_MASK, DIGEST_LEN, MODULUS};

/// Prime modulus r.
pub fn modulus() -> BigUint {
    MODULUS.clone()
}

/// Reduce arbitrary big-endian bytes to a value in [0, r).
pub fn reduce_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes) % &*MODULUS
}

/// Apply the per-byte clamp mask.
pub fn mask_digest(digest: [u8; DIGEST_LEN]) -> [u8; DIGEST_LEN] {
    let mut out = digest;
    for (b, m) in out.iter_mut().zip(CLAMP_MASK.iter()) {
        *b &= m;
    }
    out
}

/// Masked digest reduced mod r.
pub fn reduce_digest_reference(digest: [u8; DIGEST_LEN]) -> BigUint {
    reduce_be_bytes(&mask_digest(digest))
}
