//! k-bit range checks behind the circuit's range gates: machine words for
//! bytes and limbs, big integers for whole elements.

use num_bigint::BigUint;

use crate::errors::{CircuitError, CircuitResult};

/// Ensure `x` fits within `k` bits (1..=128).
pub fn range_check_u128(x: u128, k: u32) -> CircuitResult<()> {
    if !(1..=128).contains(&k) {
        return Err(CircuitError::MalformedShape(format!(
            "range_check: k={} out of bounds [1..=128]",
            k
        )));
    }
    let mask_ok = if k == 128 { u128::MAX } else { (1u128 << k) - 1 };
    if x & !mask_ok != 0 {
        return Err(CircuitError::Range {
            value: x.to_string(),
            bits: k,
        });
    }
    Ok(())
}

/// Ensure `x < 2^k`.
pub fn range_check_big(x: &BigUint, k: u32) -> CircuitResult<()> {
    if x.bits() > k as u64 {
        return Err(CircuitError::Range {
            value: x.to_string(),
            bits: k,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn word_bounds() {
        range_check_u128(15, 4).unwrap();
        assert!(range_check_u128(16, 4).is_err());
        range_check_u128(u128::MAX, 128).unwrap();
        assert!(range_check_u128(u128::MAX, 127).is_err());
        assert_eq!(range_check_u128(0, 0).unwrap_err().kind(), "malformed");
    }

    #[test]
    fn big_bounds() {
        let two_88 = BigUint::one() << 88u32;
        range_check_big(&(&two_88 - 1u32), 88).unwrap();
        assert_eq!(range_check_big(&two_88, 88).unwrap_err().kind(), "range");
        range_check_big(&BigUint::from(0u8), 1).unwrap();
    }
}
