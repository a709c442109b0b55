//! Foreign field elements over the BN254 scalar field with reduction-state
//! tracking.
//!
//! The state lives in the type: `ForeignFieldElement<Unreduced>` is anything
//! the 3 x 88-bit limb encoding can hold, `ForeignFieldElement<AlmostReduced>`
//! is below 2r, `ForeignFieldElement<Canonical>` is in [0, r). Only
//! [`ForeignFieldElement::assert_canonical`] produces a canonical element from a
//! weaker one, and it is the only place a value >= r is rejected.

use std::fmt;
use std::marker::PhantomData;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::circuit::{Circuit, Gate};
use crate::constants::{LIMB_BITS, LIMB_CAPACITY, LIMB_COUNT, LIMB_MASK, MODULUS};
use crate::errors::{CircuitError, CircuitResult};

mod sealed {
    pub trait Sealed {}
}

/// Marker for a reduction state.
pub trait ReductionState: sealed::Sealed + Copy + fmt::Debug + 'static {
    const NAME: &'static str;
}

/// States whose values are below 2r, valid as multiplication operands.
pub trait Bounded: ReductionState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreduced;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmostReduced;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonical;

impl sealed::Sealed for Unreduced {}
impl sealed::Sealed for AlmostReduced {}
impl sealed::Sealed for Canonical {}

impl ReductionState for Unreduced {
    const NAME: &'static str = "unreduced";
}
impl ReductionState for AlmostReduced {
    const NAME: &'static str = "almost-reduced";
}
impl ReductionState for Canonical {
    const NAME: &'static str = "canonical";
}

impl Bounded for AlmostReduced {}
impl Bounded for Canonical {}

pub struct ForeignFieldElement<S: ReductionState> {
    value: BigUint,
    _state: PhantomData<S>,
}

pub type CanonicalElement = ForeignFieldElement<Canonical>;

impl<S: ReductionState> Clone for ForeignFieldElement<S> {
    fn clone(&self) -> Self {
        Self::wrap(self.value.clone())
    }
}

impl<S: ReductionState> PartialEq for ForeignFieldElement<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: ReductionState> Eq for ForeignFieldElement<S> {}

impl<S: ReductionState> fmt::Debug for ForeignFieldElement<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForeignFieldElement<{}>({})", S::NAME, self.value)
    }
}

impl<S: ReductionState> fmt::Display for ForeignFieldElement<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<S: ReductionState> ForeignFieldElement<S> {
    fn wrap(value: BigUint) -> Self {
        Self {
            value,
            _state: PhantomData,
        }
    }

    /// Tag a value produced by a gadget that already guarantees state `S`.
    pub(crate) fn assume_state(value: BigUint) -> Self {
        Self::wrap(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    pub fn state_name(&self) -> &'static str {
        S::NAME
    }

    /// Split into 88-bit limbs, least significant first.
    pub fn to_limbs(&self) -> [u128; LIMB_COUNT] {
        let mut out = [0u128; LIMB_COUNT];
        for (i, limb) in out.iter_mut().enumerate() {
            let chunk = (&self.value >> (LIMB_BITS as usize * i)) & &*LIMB_MASK;
            // a masked chunk always fits
            *limb = chunk.to_u128().unwrap_or_default();
        }
        out
    }

    /// Foreign-field addition.
    ///
    /// The prover witnesses an overflow flag so that the result is the sum
    /// minus at most one r; the result is then range-checked against the limb
    /// capacity. It carries no bound beyond that, hence `Unreduced`.
    pub fn add<T: ReductionState>(
        &self,
        cs: &mut Circuit,
        other: &ForeignFieldElement<T>,
    ) -> CircuitResult<ForeignFieldElement<Unreduced>> {
        cs.emit(Gate::FfAdd);
        let sum = &self.value + &other.value;
        let result = if sum >= *MODULUS {
            sum - &*MODULUS
        } else {
            sum
        };
        cs.range_check(&result, LIMB_BITS * LIMB_COUNT as u32)?;
        Ok(ForeignFieldElement::wrap(result))
    }

    /// Check 0 <= v < r and tag the value canonical.
    ///
    /// Every constructor already bounds the value by the limb capacity, so a
    /// malformed wide input has failed with a range error before it gets here.
    pub fn assert_canonical(&self, cs: &mut Circuit) -> CircuitResult<CanonicalElement> {
        cs.emit(Gate::AssertCanonical);
        if self.value >= *MODULUS {
            log::debug!("assert_canonical rejected {}", self.value);
            return Err(CircuitError::NotCanonical(self.value.to_string()));
        }
        Ok(ForeignFieldElement::wrap(self.value.clone()))
    }
}

impl<S: Bounded> ForeignFieldElement<S> {
    /// Foreign-field multiplication of two bounded operands.
    pub fn mul<T: Bounded>(
        &self,
        cs: &mut Circuit,
        other: &ForeignFieldElement<T>,
    ) -> CircuitResult<ForeignFieldElement<AlmostReduced>> {
        cs.emit(Gate::FfMul);
        // a * b = q * r + rem with the remainder witnessed below r
        let product = (&self.value * &other.value) % &*MODULUS;
        Ok(ForeignFieldElement::wrap(product))
    }
}

impl ForeignFieldElement<Unreduced> {
    /// Fails with a range error if `v` needs more than 264 bits.
    pub fn from_integer(v: BigUint) -> CircuitResult<Self> {
        if v >= *LIMB_CAPACITY {
            return Err(CircuitError::Range {
                value: v.to_string(),
                bits: LIMB_BITS * LIMB_COUNT as u32,
            });
        }
        Ok(Self::wrap(v))
    }

    /// Recompose from 88-bit limbs, least significant first.
    pub fn from_limbs(cs: &mut Circuit, limbs: [u128; LIMB_COUNT]) -> CircuitResult<Self> {
        cs.emit(Gate::FromLimbs);
        let mut value = BigUint::zero();
        for (i, &limb) in limbs.iter().enumerate().rev() {
            cs.range_check_word(limb, LIMB_BITS)?;
            value += BigUint::from(limb) << (LIMB_BITS as usize * i);
        }
        Ok(Self::wrap(value))
    }
}

impl ForeignFieldElement<Canonical> {
    /// A constant known to be below r. No gate is emitted for constants.
    pub fn constant(v: &BigUint) -> CircuitResult<Self> {
        if *v >= *MODULUS {
            return Err(CircuitError::NotCanonical(v.to_string()));
        }
        Ok(Self::wrap(v.clone()))
    }

    pub fn from_u64(v: u64) -> Self {
        Self::wrap(BigUint::from(v))
    }

    pub fn zero() -> Self {
        Self::wrap(BigUint::zero())
    }

    pub fn one() -> Self {
        Self::wrap(BigUint::one())
    }

    /// 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let raw = self.value.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }
}
