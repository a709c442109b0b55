//! Field-level mixing: limb-wise XOR and fixed-exponent powers of canonical
//! elements.

use crate::circuit::Circuit;
use crate::constants::{LIMB_COUNT, XOR_BITS};
use crate::errors::{CircuitError, CircuitResult};
use crate::field::{CanonicalElement, ForeignFieldElement};
use crate::gadgets::{bitwise, select::select};

/// XOR two canonical elements limb by limb (96-bit gadget per 88-bit limb).
///
/// The recomposed value has to pass `assert_canonical` again. That holds when
/// the operands' high bits are clear, as for outputs of the clamped digest
/// path; arbitrary canonical inputs can XOR to a value >= r and fail.
pub fn xor(
    cs: &mut Circuit,
    x: &CanonicalElement,
    y: &CanonicalElement,
) -> CircuitResult<CanonicalElement> {
    let xl = x.to_limbs();
    let yl = y.to_limbs();
    let mut out = [0u128; LIMB_COUNT];
    for (i, limb) in out.iter_mut().enumerate() {
        *limb = bitwise::xor(cs, xl[i], yl[i], XOR_BITS)?;
    }
    ForeignFieldElement::from_limbs(cs, out)?.assert_canonical(cs)
}

/// `x^e` for a fixed exponent given as bits, most significant first.
///
/// The exponent is part of the circuit, not the witness. The leading bit must
/// be set; the accumulator starts at `x` for it. Every further bit squares and
/// then multiplies by `select(bit, x, 1)`, canonicalizing after each product
/// so limbs never grow.
pub fn pow(
    cs: &mut Circuit,
    x: &CanonicalElement,
    exponent_bits: &[bool],
) -> CircuitResult<CanonicalElement> {
    match exponent_bits.first() {
        Some(true) => {}
        Some(false) => {
            return Err(CircuitError::MalformedShape(
                "exponent must start with a set bit".into(),
            ))
        }
        None => return Err(CircuitError::MalformedShape("empty exponent".into())),
    }

    let one = CanonicalElement::one();
    let mut acc = x.clone();
    for &bit in &exponent_bits[1..] {
        acc = acc.mul(cs, &acc)?.assert_canonical(cs)?;
        let b = cs.constant_bit(bit);
        let factor = select(cs, &b, x, &one)?;
        acc = acc.mul(cs, &factor)?.assert_canonical(cs)?;
    }
    Ok(acc)
}

/// Parse an exponent bit string such as `"1011"`. Underscores are ignored.
pub fn parse_exponent_bits(s: &str) -> CircuitResult<Vec<bool>> {
    s.chars()
        .filter(|c| *c != '_')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(CircuitError::MalformedShape(format!(
                "invalid exponent digit '{other}'"
            ))),
        })
        .collect()
}
