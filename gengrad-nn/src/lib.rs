//! # gengrad-nn
//!
//! A small multi-layer perceptron on top of the `gengrad-core` engine.
//!
//! Modules own no values, only handles to parameter leaves created in the
//! engine. Create the network in the base generation, then run each
//! forward/backward pass inside a scope so the per-sample graph is dropped
//! while the parameters and their gradients stay.
//!
//! ```
//! use gengrad_core::Engine;
//! use gengrad_nn::{Mlp, Module};
//!
//! # fn main() -> Result<(), gengrad_nn::NnError> {
//! let mut engine: Engine = Engine::new()?;
//! let mlp = Mlp::new(&mut engine, &[2, 4, 1])?;
//! engine.with_scope(|engine| -> Result<(), gengrad_nn::NnError> {
//!     let x = [engine.leaf(0.5)?, engine.leaf(1.0)?];
//!     let y = mlp.forward(engine, &x)?;
//!     engine.backward(y[0])?;
//!     Ok(())
//! })?;
//! assert_eq!(engine.depth(), 0);
//! assert!(engine.gradient_of(mlp.parameters()[0])? != 0.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod init;
pub mod layers;
pub mod mlp;
pub mod module;

pub use error::{NnError, Result};
pub use init::{Init, Initializer};
pub use layers::{Layer, Neuron};
pub use mlp::{Mlp, MlpConfig};
pub use module::Module;
