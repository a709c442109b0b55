//! Circuit gadgets, leaves first: range checks, bitwise words, selection,
//! digest clamp and decomposition, the scalar reducer, and field-level mixing.

pub mod bits;
pub mod bitwise;
pub mod clamp;
pub mod field_ops;
pub mod range;
pub mod reduce;
pub mod select;
