use crate::error::{NnError, Result};
use gengrad_core::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// How a freshly created parameter gets its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Every parameter gets the same value.
    Constant(f64),
    /// Uniform draw from `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian draw.
    Normal { mean: f64, std: f64 },
}

impl Init {
    /// Checks the distribution parameters without drawing anything.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Init::Constant(value) if !value.is_finite() => Err(NnError::InvalidInit(format!(
                "constant {} is not finite",
                value
            ))),
            Init::Uniform { low, high } if !(low.is_finite() && high.is_finite() && low < high) => {
                Err(NnError::InvalidInit(format!(
                    "uniform range [{}, {}) is empty or not finite",
                    low, high
                )))
            }
            Init::Normal { mean, std } => Normal::new(mean, std)
                .map(|_| ())
                .map_err(|e| NnError::InvalidInit(format!("normal({}, {}): {}", mean, std, e))),
            _ => Ok(()),
        }
    }
}

/// Source of parameter values. Seeded initializers are reproducible.
#[derive(Debug)]
pub struct Initializer {
    rng: StdRng,
}

impl Initializer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Initializer { rng }
    }

    /// Draws one value from `init`, converted to the engine's scalar type.
    pub fn sample<T: Scalar>(&mut self, init: &Init) -> Result<T> {
        init.validate()?;
        let value = match *init {
            Init::Constant(value) => value,
            Init::Uniform { low, high } => self.rng.gen_range(low..high),
            Init::Normal { mean, std } => {
                let normal = Normal::new(mean, std).map_err(|e| {
                    NnError::InvalidInit(format!("normal({}, {}): {}", mean, std, e))
                })?;
                normal.sample(&mut self.rng)
            }
        };
        num_traits::cast::<f64, T>(value).ok_or_else(|| {
            NnError::InvalidInit(format!("{} does not fit the scalar type", value))
        })
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
