//! Digest functions feeding the hash-to-scalar pipeline.

pub mod digest;
pub mod functions;
pub mod registry;

pub use digest::{Digest32, DigestBytes};
pub use functions::{Blake3, Keccak256, Sha256};
pub use registry::DigestKind;
