//! The concrete digests: SHA-256 (the default), Keccak-256 and BLAKE3.

use sha2::Digest as _;
use tiny_keccak::{Hasher as _, Keccak};

use crate::crypto::digest::{Digest32, DigestBytes};

pub struct Sha256;

impl Digest32 for Sha256 {
    const ID: &'static str = "sha256";

    fn digest_parts(parts: &[&[u8]]) -> DigestBytes {
        let mut h = sha2::Sha256::new();
        for &p in parts {
            h.update(p);
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&h.finalize());
        out
    }
}

/// Ethereum-style Keccak-256 (pre-NIST padding).
pub struct Keccak256;

impl Digest32 for Keccak256 {
    const ID: &'static str = "keccak256";

    fn digest_parts(parts: &[&[u8]]) -> DigestBytes {
        let mut k = Keccak::v256();
        for &p in parts {
            k.update(p);
        }
        let mut out = [0u8; 32];
        k.finalize(&mut out);
        out
    }
}

/// BLAKE3, also used for circuit shape fingerprints.
pub struct Blake3;

impl Digest32 for Blake3 {
    const ID: &'static str = "blake3";

    fn digest_parts(parts: &[&[u8]]) -> DigestBytes {
        let mut h = blake3::Hasher::new();
        for &p in parts {
            h.update(p);
        }
        *h.finalize().as_bytes()
    }
}
