use crate::error::{NnError, Result};
use crate::init::{Init, Initializer};
use crate::module::Module;
use gengrad_core::{Engine, Handle, Scalar};

/// A single unit computing `relu(Σ wᵢ·xᵢ + b)`, or the bare affine sum when
/// `nonlinear` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<Handle>,
    bias: Handle,
    nonlinear: bool,
}

impl Neuron {
    /// Creates the neuron's parameters as leaves in the engine's top generation.
    pub fn new<T: Scalar>(
        engine: &mut Engine<T>,
        num_inputs: usize,
        nonlinear: bool,
        init_weights: &Init,
        init_bias: &Init,
        initializer: &mut Initializer,
    ) -> Result<Self> {
        let mut weights = Vec::with_capacity(num_inputs);
        for _ in 0..num_inputs {
            let value = initializer.sample(init_weights)?;
            weights.push(engine.leaf(value)?);
        }
        let bias = engine.leaf(initializer.sample(init_bias)?)?;
        Ok(Neuron {
            weights,
            bias,
            nonlinear,
        })
    }

    pub fn weights(&self) -> &[Handle] {
        &self.weights
    }

    pub fn bias(&self) -> Handle {
        self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    /// Forward pass for one neuron, returning the single output handle.
    pub fn activate<T: Scalar>(
        &self,
        engine: &mut Engine<T>,
        inputs: &[Handle],
    ) -> Result<Handle> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut products = Vec::with_capacity(inputs.len());
        for (&w, &x) in self.weights.iter().zip(inputs) {
            products.push(engine.mul(w, x)?);
        }
        let weighted = engine.sum(&products)?;
        let affine = engine.add(weighted, self.bias)?;
        if self.nonlinear {
            Ok(engine.relu(affine)?)
        } else {
            Ok(affine)
        }
    }
}

impl Module for Neuron {
    fn forward<T: Scalar>(
        &self,
        engine: &mut Engine<T>,
        inputs: &[Handle],
    ) -> Result<Vec<Handle>> {
        Ok(vec![self.activate(engine, inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Handle> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn num_parameters(&self) -> usize {
        self.weights.len() + 1
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
