//! Gate recorder and witness checker.
//!
//! Every gadget emits its gates into a [`Circuit`] in a fixed order and checks
//! the gate against the concrete witness values on the spot. Witness values may
//! be computed with ordinary branching; the emitted gate sequence may not
//! depend on them. For a fixed input length the sequence (and therefore
//! [`Circuit::shape_digest`]) must come out the same for every input.

use num_bigint::BigUint;

use crate::crypto::{Blake3, Digest32};
use crate::errors::CircuitResult;
use crate::gadgets::range::{range_check_big, range_check_u128};

const SHAPE_LABEL: &[u8] = b"FRFOLD.SHAPE";

/// One constraint in the recorded circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// value < 2^bits
    RangeCheck { bits: u32 },
    /// b * (1 - b) = 0
    Boolean,
    /// bits-wide AND of two range-checked words
    And { bits: u32 },
    /// bits-wide XOR of two range-checked words
    Xor { bits: u32 },
    /// f + b * (t - f)
    Select,
    /// big-endian recomposition of `bits` boolean wires
    Compose { bits: u32 },
    /// foreign-field addition with a witnessed overflow flag
    FfAdd,
    /// foreign-field multiplication
    FfMul,
    /// value < r
    AssertCanonical,
    /// recomposition of an element from its limbs
    FromLimbs,
    /// fixed-length digest over `input_len` message bytes
    Hash { input_len: u32 },
}

impl Gate {
    pub fn name(&self) -> &'static str {
        match self {
            Gate::RangeCheck { .. } => "range",
            Gate::Boolean => "boolean",
            Gate::And { .. } => "and",
            Gate::Xor { .. } => "xor",
            Gate::Select => "select",
            Gate::Compose { .. } => "compose",
            Gate::FfAdd => "ff-add",
            Gate::FfMul => "ff-mul",
            Gate::AssertCanonical => "assert-canonical",
            Gate::FromLimbs => "from-limbs",
            Gate::Hash { .. } => "hash",
        }
    }

    /// Tag byte followed by the little-endian parameter.
    fn encode(&self) -> [u8; 5] {
        let (tag, param) = match *self {
            Gate::RangeCheck { bits } => (0u8, bits),
            Gate::Boolean => (1, 0),
            Gate::And { bits } => (2, bits),
            Gate::Xor { bits } => (3, bits),
            Gate::Select => (4, 0),
            Gate::Compose { bits } => (5, bits),
            Gate::FfAdd => (6, 0),
            Gate::FfMul => (7, 0),
            Gate::AssertCanonical => (8, 0),
            Gate::FromLimbs => (9, 0),
            Gate::Hash { input_len } => (10, input_len),
        };
        let p = param.to_le_bytes();
        [tag, p[0], p[1], p[2], p[3]]
    }
}

/// A boolean-constrained wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit(bool);

impl Bit {
    pub fn value(&self) -> bool {
        self.0
    }

    pub fn as_big(&self) -> BigUint {
        BigUint::from(self.0 as u8)
    }
}

/// A wire range-checked to [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte(u8);

impl Byte {
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Ordered gate log of a single evaluation.
#[derive(Debug, Default, Clone)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&mut self, gate: Gate) {
        log::trace!("gate #{} {:?}", self.gates.len(), gate);
        self.gates.push(gate);
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of gates of the given kind (parameters ignored).
    pub fn count_of(&self, name: &str) -> usize {
        self.gates.iter().filter(|g| g.name() == name).count()
    }

    /// BLAKE3 fingerprint of the gate sequence.
    pub fn shape_digest(&self) -> [u8; 32] {
        let mut buf = Vec::with_capacity(8 + self.gates.len() * 5);
        buf.extend_from_slice(&(self.gates.len() as u64).to_le_bytes());
        for g in &self.gates {
            buf.extend_from_slice(&g.encode());
        }
        Blake3::digest_parts(&[SHAPE_LABEL, buf.as_slice()])
    }

    /// Emit a range gate for a big value.
    pub fn range_check(&mut self, value: &BigUint, bits: u32) -> CircuitResult<()> {
        self.emit(Gate::RangeCheck { bits });
        range_check_big(value, bits)
    }

    /// Emit a range gate for a machine word.
    pub fn range_check_word(&mut self, value: u128, bits: u32) -> CircuitResult<()> {
        self.emit(Gate::RangeCheck { bits });
        range_check_u128(value, bits)
    }

    /// Witness a bit.
    pub fn alloc_bit(&mut self, value: bool) -> Bit {
        self.emit(Gate::Boolean);
        Bit(value)
    }

    /// A compile-time constant bit; no gate is emitted.
    pub fn constant_bit(&self, value: bool) -> Bit {
        Bit(value)
    }

    /// Witness a byte, range-checked to 8 bits.
    pub fn alloc_byte(&mut self, value: u64) -> CircuitResult<Byte> {
        self.range_check_word(value as u128, 8)?;
        Ok(Byte(value as u8))
    }

    /// Witness a whole byte string.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> CircuitResult<Vec<Byte>> {
        bytes.iter().map(|&b| self.alloc_byte(b as u64)).collect()
    }
}
