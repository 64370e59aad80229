use crate::config::Reclamation;
use thiserror::Error;

/// Custom error type for the gengrad engine.
///
/// Every variant except `CapacityExhausted` is local: it is reported to the
/// immediate caller and leaves the engine in the state it had before the
/// failing call. Numeric edge cases (division by zero, `ln` of a negative
/// base, ...) are never errors; they propagate as IEEE NaN/infinity.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GenGradError {
    #[error("Stale handle: generation at depth {depth} (serial {serial}) is no longer live")]
    StaleGeneration { depth: u32, serial: u64 },

    #[error("Stale handle: slot {slot} in generation at depth {depth} was freed")]
    StaleSlot { depth: u32, slot: u32 },

    #[error("Slot {slot} out of range for generation at depth {depth} (high-water mark {high_water})")]
    SlotOutOfRange {
        depth: u32,
        slot: u32,
        high_water: u32,
    },

    #[error("Scope token names depth {actual_depth}, but the top generation is at depth {expected_depth}")]
    ScopeMismatch {
        expected_depth: u32,
        actual_depth: u32,
    },

    #[error("The base generation (depth 0) cannot be popped")]
    BaseScopePop,

    #[error("Operation '{operation}' is not available under the {policy:?} reclamation policy")]
    ReclamationDisabled {
        operation: String,
        policy: Reclamation,
    },

    #[error("Node storage exhausted: could not grow to {requested} slots")]
    CapacityExhausted { requested: usize },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GenGradError {
    /// True for the failures caused by reading through an invalidated handle.
    pub fn is_stale_handle(&self) -> bool {
        matches!(
            self,
            GenGradError::StaleGeneration { .. }
                | GenGradError::StaleSlot { .. }
                | GenGradError::SlotOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GenGradError>;
