//! Fixed parameters of the BN254 scalar field and the digest pipeline.
//!
//! Big-integer constants are built once on first use and shared process-wide.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// Decimal form of the BN254 scalar field order r.
pub const MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Bits per limb of a foreign field element.
pub const LIMB_BITS: u32 = 88;
/// Limbs per foreign field element (3 * 88 = 264 bits of capacity).
pub const LIMB_COUNT: usize = 3;
/// Width of the XOR gadget applied to each limb pair.
pub const XOR_BITS: u32 = 96;

/// Fixed digest length fed to the reducer.
pub const DIGEST_LEN: usize = 32;
/// Bits folded directly into the composed value; bits 254 and 255 are flags.
pub const MAIN_BITS: usize = 254;

/// Per-byte AND mask applied before reduction. Clears the top 3 bits so the
/// masked digest is below 2^253.
pub const CLAMP_MASK: [u8; DIGEST_LEN] = {
    let mut m = [0xffu8; DIGEST_LEN];
    m[0] = 0x1f;
    m
};

/// r
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(MODULUS_DEC.as_bytes(), 10).expect("modulus literal is decimal")
});

/// 2^264, the exclusive bound of the limb encoding.
pub static LIMB_CAPACITY: Lazy<BigUint> =
    Lazy::new(|| BigUint::one() << (LIMB_BITS as usize * LIMB_COUNT));

/// 2^88 - 1
pub static LIMB_MASK: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << LIMB_BITS) - 1u32);

/// 2^254 mod r
pub static C254: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 254u32) % &*MODULUS);

/// 2^255 mod r
pub static C255: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 255u32) % &*MODULUS);
