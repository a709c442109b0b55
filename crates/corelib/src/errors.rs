use thiserror::Error;

/// Unsatisfied-constraint failures raised while a circuit is being evaluated.
///
/// None of these are recoverable for the current evaluation: the caller has to
/// start over with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("range check failed: {value} does not fit in {bits} bits")]
    Range { value: String, bits: u32 },

    #[error("value {0} is not canonical (>= r)")]
    NotCanonical(String),

    #[error("malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    #[error("malformed input: {0}")]
    MalformedShape(String),

    #[error("gate '{gate}' unsatisfied: {detail}")]
    Unsatisfied { gate: &'static str, detail: String },

    #[error("hash '{0}' is not supported")]
    UnknownHash(String),
}

impl CircuitError {
    /// Short category label, stable across messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CircuitError::Range { .. } => "range",
            CircuitError::NotCanonical(_) => "not-canonical",
            CircuitError::MalformedInput { .. } | CircuitError::MalformedShape(_) => "malformed",
            CircuitError::Unsatisfied { .. } => "unsatisfied",
            CircuitError::UnknownHash(_) => "unknown-hash",
        }
    }
}

pub type CircuitResult<T> = Result<T, CircuitError>;
