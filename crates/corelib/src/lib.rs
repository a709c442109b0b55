//! Core library: fold 256-bit digests into canonical BN254 scalars with
//! straight-line, data-independent gadgets, plus limb-wise XOR and
//! fixed-exponent power over the same field.

pub mod circuit;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod errors;
pub mod field;
pub mod gadgets;
pub mod pack;
pub mod pipeline;

pub use circuit::{Bit, Byte, Circuit, Gate};
pub use errors::{CircuitError, CircuitResult};
pub use field::{CanonicalElement, ForeignFieldElement};
pub use pipeline::{
    hash_then_reduce, hash_then_reduce_by_id, public_inputs_to_scalar, reduce_digest,
    reduce_unmasked, DUMMY_DIGEST,
};

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
