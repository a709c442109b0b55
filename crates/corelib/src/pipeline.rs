//! Hash-to-scalar pipeline: bytes in, one canonical BN254 scalar out.
//!
//! Every entry point checks its input length before emitting any gate, and
//! emits the same gate sequence for every input of that length.

use crate::circuit::Circuit;
use crate::constants::DIGEST_LEN;
use crate::crypto::{Digest32, DigestKind, Sha256};
use crate::errors::{CircuitError, CircuitResult};
use crate::field::CanonicalElement;
use crate::gadgets::bits::decompose_digest;
use crate::gadgets::clamp::clamp_digest;
use crate::gadgets::reduce::reduce_bits;

/// Fixed digest used by smoke tests and demos: `deadbeefcafebabe` then zeros.
pub const DUMMY_DIGEST: [u8; DIGEST_LEN] = [
    0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe, 0xba, 0xbe, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
];

fn check_digest_len(digest: &[u8]) -> CircuitResult<()> {
    if digest.len() != DIGEST_LEN {
        return Err(CircuitError::MalformedInput {
            expected: DIGEST_LEN,
            actual: digest.len(),
        });
    }
    Ok(())
}

/// Clamp a 32-byte digest below 2^253, then decompose and reduce.
pub fn reduce_digest(cs: &mut Circuit, digest: &[u8]) -> CircuitResult<CanonicalElement> {
    check_digest_len(digest)?;
    log::debug!("reduce_digest: {} gates before", cs.gate_count());
    let bytes = cs.alloc_bytes(digest)?;
    let masked = clamp_digest(cs, &bytes)?;
    let bits = decompose_digest(cs, &masked)?;
    reduce_bits(cs, &bits.bits, &bits.bit254, &bits.bit255)
}

/// Reduce a raw 256-bit big-endian value without clamping.
///
/// Here the bit254/bit255 corrections are live: the result is the full value
/// mod r.
pub fn reduce_unmasked(cs: &mut Circuit, digest: &[u8]) -> CircuitResult<CanonicalElement> {
    check_digest_len(digest)?;
    log::debug!("reduce_unmasked: {} gates before", cs.gate_count());
    let bytes = cs.alloc_bytes(digest)?;
    let bits = decompose_digest(cs, &bytes)?;
    reduce_bits(cs, &bits.bits, &bits.bit254, &bits.bit255)
}

/// Digest `message` with `H`, then [`reduce_digest`].
///
/// The digest itself is recorded as one fixed-length hash gate; the circuit
/// depends on the message length only.
pub fn hash_then_reduce<H: Digest32>(
    cs: &mut Circuit,
    message: &[u8],
) -> CircuitResult<CanonicalElement> {
    let digest = H::digest_in_circuit(cs, message)?;
    reduce_digest(cs, &digest)
}

/// [`hash_then_reduce`] with the digest chosen by registry id.
///
/// An unknown id fails before any gate is emitted.
pub fn hash_then_reduce_by_id(
    cs: &mut Circuit,
    hash_id: &str,
    message: &[u8],
) -> CircuitResult<CanonicalElement> {
    let digest = DigestKind::from_id(hash_id)?.digest_in_circuit(cs, message)?;
    reduce_digest(cs, &digest)
}

/// Commit a public-input byte string to one scalar: SHA-256, clamp, reduce.
pub fn public_inputs_to_scalar(
    cs: &mut Circuit,
    public_inputs: &[u8],
) -> CircuitResult<CanonicalElement> {
    hash_then_reduce::<Sha256>(cs, public_inputs)
}
