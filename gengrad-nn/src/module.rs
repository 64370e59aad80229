use crate::error::Result;
use gengrad_core::{Engine, Handle, Scalar};

/// The base trait for all network building blocks (neurons, layers, MLPs).
///
/// Modules hold handles to their parameters, never the values themselves, so
/// the same module works with any scalar type the engine was created with.
pub trait Module: std::fmt::Debug {
    /// Builds the module's graph over `inputs` in the engine's top generation
    /// and returns the output handles.
    ///
    /// # Errors
    /// `NnError::InputSizeMismatch` when `inputs` has the wrong length, or an
    /// engine error if a parameter or input handle is stale.
    fn forward<T: Scalar>(
        &self,
        engine: &mut Engine<T>,
        inputs: &[Handle],
    ) -> Result<Vec<Handle>>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<Handle>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
