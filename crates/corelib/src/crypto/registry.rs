//! Digest selection by id, for the config file and the CLI.

use crate::circuit::Circuit;
use crate::crypto::digest::{Digest32, DigestBytes};
use crate::crypto::functions::{Blake3, Keccak256, Sha256};
use crate::errors::{CircuitError, CircuitResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestKind {
    #[default]
    Sha256,
    Keccak256,
    Blake3,
}

impl DigestKind {
    pub const ALL: [DigestKind; 3] = [
        DigestKind::Sha256,
        DigestKind::Keccak256,
        DigestKind::Blake3,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DigestKind::Sha256 => Sha256::ID,
            DigestKind::Keccak256 => Keccak256::ID,
            DigestKind::Blake3 => Blake3::ID,
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_id(id: &str) -> CircuitResult<Self> {
        let wanted = id.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.id() == wanted)
            .ok_or_else(|| CircuitError::UnknownHash(id.to_string()))
    }

    pub fn digest(self, message: &[u8]) -> DigestBytes {
        match self {
            DigestKind::Sha256 => Sha256::digest(message),
            DigestKind::Keccak256 => Keccak256::digest(message),
            DigestKind::Blake3 => Blake3::digest(message),
        }
    }

    pub fn digest_in_circuit(self, cs: &mut Circuit, message: &[u8]) -> CircuitResult<DigestBytes> {
        match self {
            DigestKind::Sha256 => Sha256::digest_in_circuit(cs, message),
            DigestKind::Keccak256 => Keccak256::digest_in_circuit(cs, message),
            DigestKind::Blake3 => Blake3::digest_in_circuit(cs, message),
        }
    }
}

/// All accepted ids, comma separated.
pub fn supported_ids() -> String {
    DigestKind::ALL.map(DigestKind::id).join(", ")
}
