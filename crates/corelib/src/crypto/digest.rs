//! Fixed-length digests placed in front of the reducer.
//!
//! The digest is an external gadget: the circuit records it as a single
//! `Gate::Hash { input_len }` and the reducer consumes its 32 output bytes, so
//! the shape of a hash pipeline depends on the message length and nothing else.

use crate::circuit::{Circuit, Gate};
use crate::constants::DIGEST_LEN;
use crate::errors::{CircuitError, CircuitResult};

pub type DigestBytes = [u8; DIGEST_LEN];

/// A digest function with a 32-byte output.
pub trait Digest32 {
    /// Lowercase id used by the registry and the config file.
    const ID: &'static str;

    /// Digest of the concatenation of `parts`.
    fn digest_parts(parts: &[&[u8]]) -> DigestBytes;

    fn digest(message: &[u8]) -> DigestBytes {
        Self::digest_parts(&[message])
    }

    /// Record the hash gate for `message` and return the digest.
    fn digest_in_circuit(cs: &mut Circuit, message: &[u8]) -> CircuitResult<DigestBytes> {
        cs.emit(hash_gate(message.len())?);
        Ok(Self::digest(message))
    }
}

pub(crate) fn hash_gate(message_len: usize) -> CircuitResult<Gate> {
    let input_len = u32::try_from(message_len)
        .map_err(|_| CircuitError::MalformedShape(format!("{message_len} byte message")))?;
    Ok(Gate::Hash { input_len })
}
