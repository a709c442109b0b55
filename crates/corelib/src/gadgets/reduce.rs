//! Fold a bit vector plus the two overflow flags of a 256-bit value into a
//! canonical BN254 scalar.
//!
//! ```text
//! x0     = compose(bits)                 (unreduced)
//! a      = select(bit254, 2^254 mod r, 0)
//! b      = select(bit255, 2^255 mod r, 0)
//! result = assert_canonical(x0 + a + b)
//! ```
//!
//! Both corrections are always emitted. On the clamped digest path the flags
//! are zero and the corrections contribute nothing; callers that feed raw
//! 256-bit values rely on them.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::circuit::{Bit, Circuit, Gate};
use crate::constants::{C254, C255};
use crate::errors::{CircuitError, CircuitResult};
use crate::field::{CanonicalElement, ForeignFieldElement, Unreduced};
use crate::gadgets::select::select;

/// Big-endian composition of boolean wires into an unreduced element.
pub fn compose_bits(
    cs: &mut Circuit,
    bits: &[Bit],
) -> CircuitResult<ForeignFieldElement<Unreduced>> {
    let width = u32::try_from(bits.len())
        .map_err(|_| CircuitError::MalformedShape(format!("{} bits", bits.len())))?;
    cs.emit(Gate::Compose { bits: width });
    let mut acc = BigUint::zero();
    for b in bits {
        acc <<= 1u32;
        if b.value() {
            acc += 1u32;
        }
    }
    // wider vectors are accepted as long as the value fits the limbs
    ForeignFieldElement::from_integer(acc)
}

/// Reduce `bits` (most significant first, normally 254 of them) together with
/// the flags for positions 254 and 255.
pub fn reduce_bits(
    cs: &mut Circuit,
    bits: &[Bit],
    bit254: &Bit,
    bit255: &Bit,
) -> CircuitResult<CanonicalElement> {
    let x0 = compose_bits(cs, bits)?;

    let zero = CanonicalElement::zero();
    let c254 = CanonicalElement::constant(&C254)?;
    let c255 = CanonicalElement::constant(&C255)?;
    let a = select(cs, bit254, &c254, &zero)?;
    let b = select(cs, bit255, &c255, &zero)?;

    x0.add(cs, &a)?.add(cs, &b)?.assert_canonical(cs)
}
