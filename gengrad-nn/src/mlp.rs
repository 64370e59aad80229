use crate::error::{NnError, Result};
use crate::init::{Init, Initializer};
use crate::layers::Layer;
use crate::module::Module;
use gengrad_core::{Engine, Handle, Scalar};

/// Construction options for [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub init_weights: Init,
    pub init_bias: Init,
    /// When true the last layer has no ReLU, so outputs can be negative.
    pub linear_output: bool,
    /// Seed for random initializers; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MlpConfig {
    /// Constant 0.1 weights and zero biases.
    fn default() -> Self {
        MlpConfig {
            init_weights: Init::Constant(0.1),
            init_bias: Init::Constant(0.0),
            linear_output: true,
            seed: None,
        }
    }
}

impl MlpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init(mut self, init_weights: Init, init_bias: Init) -> Self {
        self.init_weights = init_weights;
        self.init_bias = init_bias;
        self
    }

    pub fn with_linear_output(mut self, linear_output: bool) -> Self {
        self.linear_output = linear_output;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Multi-layer perceptron. `sizes[0]` is the input width, each following
/// entry the width of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
    sizes: Vec<usize>,
}

impl Mlp {
    /// Builds an MLP with [`MlpConfig::default`].
    pub fn new<T: Scalar>(engine: &mut Engine<T>, sizes: &[usize]) -> Result<Self> {
        Self::with_config(engine, sizes, &MlpConfig::default())
    }

    /// Creates every parameter as a leaf in the engine's top generation.
    /// Build the network before pushing per-sample scopes so the
    /// parameters outlive them.
    pub fn with_config<T: Scalar>(
        engine: &mut Engine<T>,
        sizes: &[usize],
        config: &MlpConfig,
    ) -> Result<Self> {
        if sizes.len() < 2 || sizes.contains(&0) {
            return Err(NnError::InvalidSizes {
                sizes: sizes.to_vec(),
            });
        }
        config.init_weights.validate()?;
        config.init_bias.validate()?;

        let mut initializer = Initializer::new(config.seed);
        let last = sizes.len() - 2;
        let mut layers = Vec::with_capacity(sizes.len() - 1);
        for (i, pair) in sizes.windows(2).enumerate() {
            let nonlinear = !(i == last && config.linear_output);
            layers.push(Layer::new(
                engine,
                pair[0],
                pair[1],
                nonlinear,
                &config.init_weights,
                &config.init_bias,
                &mut initializer,
            )?);
        }

        let mlp = Mlp {
            layers,
            sizes: sizes.to_vec(),
        };
        log::debug!(
            "Created MLP {:?} with {} parameters at depth {}",
            mlp.sizes,
            mlp.num_parameters(),
            engine.depth()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl Module for Mlp {
    fn forward<T: Scalar>(
        &self,
        engine: &mut Engine<T>,
        inputs: &[Handle],
    ) -> Result<Vec<Handle>> {
        let expected = self.sizes[0];
        if inputs.len() != expected {
            return Err(NnError::InputSizeMismatch {
                expected,
                actual: inputs.len(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(engine, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Handle> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }

    fn num_parameters(&self) -> usize {
        self.layers.iter().map(Layer::num_parameters).sum()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
