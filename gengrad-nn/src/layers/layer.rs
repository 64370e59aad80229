use super::neuron::Neuron;
use crate::error::Result;
use crate::init::{Init, Initializer};
use crate::module::Module;
use gengrad_core::{Engine, Handle, Scalar};

/// A fully connected layer: `num_outputs` neurons over the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    num_inputs: usize,
}

impl Layer {
    pub fn new<T: Scalar>(
        engine: &mut Engine<T>,
        num_inputs: usize,
        num_outputs: usize,
        nonlinear: bool,
        init_weights: &Init,
        init_bias: &Init,
        initializer: &mut Initializer,
    ) -> Result<Self> {
        let mut neurons = Vec::with_capacity(num_outputs);
        for _ in 0..num_outputs {
            neurons.push(Neuron::new(
                engine,
                num_inputs,
                nonlinear,
                init_weights,
                init_bias,
                initializer,
            )?);
        }
        Ok(Layer {
            neurons,
            num_inputs,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward<T: Scalar>(
        &self,
        engine: &mut Engine<T>,
        inputs: &[Handle],
    ) -> Result<Vec<Handle>> {
        let mut outputs = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            outputs.push(neuron.activate(engine, inputs)?);
        }
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<Handle> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn num_parameters(&self) -> usize {
        self.neurons.len() * (self.num_inputs + 1)
    }
}
