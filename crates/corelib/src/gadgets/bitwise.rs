//! Fixed-width AND / XOR gadgets.
//!
//! Bitwise operators are not native to the constraint system, so each
//! operation range-checks both inputs to the gadget width and emits one
//! bitwise gate of that width.

use crate::circuit::{Circuit, Gate};
use crate::errors::CircuitResult;

fn check_operands(cs: &mut Circuit, a: u128, b: u128, bits: u32) -> CircuitResult<()> {
    cs.range_check_word(a, bits)?;
    cs.range_check_word(b, bits)
}

/// `a & b` over `bits`-wide words.
pub fn and(cs: &mut Circuit, a: u128, b: u128, bits: u32) -> CircuitResult<u128> {
    check_operands(cs, a, b, bits)?;
    cs.emit(Gate::And { bits });
    Ok(a & b)
}

/// `a ^ b` over `bits`-wide words.
pub fn xor(cs: &mut Circuit, a: u128, b: u128, bits: u32) -> CircuitResult<u128> {
    check_operands(cs, a, b, bits)?;
    cs.emit(Gate::Xor { bits });
    Ok(a ^ b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_masks() {
        let mut cs = Circuit::new();
        assert_eq!(and(&mut cs, 0xde, 0x1f, 8).unwrap(), 0x1e);
        assert_eq!(cs.count_of("and"), 1);
        assert_eq!(cs.count_of("range"), 2);
    }

    #[test]
    fn operand_wider_than_gadget_fails() {
        let mut cs = Circuit::new();
        assert_eq!(and(&mut cs, 0x100, 0xff, 8).unwrap_err().kind(), "range");
        let mut cs = Circuit::new();
        assert_eq!(xor(&mut cs, 1u128 << 96, 0, 96).unwrap_err().kind(), "range");
    }

    #[test]
    fn xor_96() {
        let mut cs = Circuit::new();
        let a = (1u128 << 87) | 5;
        assert_eq!(xor(&mut cs, a, a, 96).unwrap(), 0);
        assert_eq!(xor(&mut cs, a, 3, 96).unwrap(), (1u128 << 87) | 6);
    }
}
