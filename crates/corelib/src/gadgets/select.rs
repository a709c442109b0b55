//! Arithmetic multiplexer: `select(b, t, f) = f + b * (t - f)`.
//!
//! Both arms are inputs to the gate, so both are always part of the circuit;
//! there is no native branch on `b`.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::circuit::{Bit, Circuit, Gate};
use crate::errors::{CircuitError, CircuitResult};
use crate::field::{ForeignFieldElement, ReductionState};

/// Select between two elements of the same reduction state.
pub fn select<S: ReductionState>(
    cs: &mut Circuit,
    b: &Bit,
    t: &ForeignFieldElement<S>,
    f: &ForeignFieldElement<S>,
) -> CircuitResult<ForeignFieldElement<S>> {
    cs.emit(Gate::Select);
    let bv = BigInt::from(b.as_big());
    if !(&bv * (BigInt::one() - &bv)).is_zero() {
        return Err(CircuitError::Unsatisfied {
            gate: "select",
            detail: format!("selector {bv} is not boolean"),
        });
    }
    let tv = BigInt::from(t.value().clone());
    let fv = BigInt::from(f.value().clone());
    let out = &fv + bv * (tv - &fv);
    // a boolean selector yields exactly one of the arms, so the state carries over
    let v = out.to_biguint().ok_or_else(|| CircuitError::Unsatisfied {
        gate: "select",
        detail: "negative output".into(),
    })?;
    Ok(ForeignFieldElement::assume_state(v))
}
