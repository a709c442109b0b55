//! BN254 scalar field elements: the in-circuit foreign field type and the
//! plain big-integer reference.

pub mod foreign;
pub mod reference;

pub use foreign::{
    AlmostReduced, Bounded, Canonical, CanonicalElement, ForeignFieldElement, ReductionState,
    Unreduced,
};
