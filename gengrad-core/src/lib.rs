//! # gengrad-core
//!
//! A scalar, define-by-run, reverse-mode automatic differentiation engine.
//!
//! Nodes live in generation arenas stacked inside an explicit [`Engine`].
//! Operators evaluate their forward value immediately and record a node in
//! the top generation; [`Engine::backward`] then applies the chain rule over
//! the reachable sub-graph in reverse topological order.
//!
//! ```
//! use gengrad_core::Engine;
//!
//! # fn main() -> gengrad_core::Result<()> {
//! let mut engine: Engine = Engine::new()?;
//! let x = engine.leaf(-4.0)?;
//! let y = engine.leaf(2.0)?;
//! let z = engine.mul(x, y)?;
//! engine.backward(z)?;
//! assert_eq!(engine.value_of(z)?, -8.0);
//! assert_eq!(engine.gradient_of(x)?, 2.0);
//! # Ok(())
//! # }
//! ```
//!
//! Intermediate graphs are discarded in bulk with scopes:
//!
//! ```
//! # use gengrad_core::Engine;
//! # fn main() -> gengrad_core::Result<()> {
//! let mut engine: Engine = Engine::new()?;
//! let w = engine.leaf(0.5)?;
//! let scope = engine.push_scope()?;
//! let x = engine.leaf(3.0)?;
//! let y = engine.mul(w, x)?;
//! engine.backward(y)?;
//! engine.pop_scope(scope)?;
//! assert_eq!(engine.gradient_of(w)?, 3.0);
//! assert!(engine.value_of(y).is_err());
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod config;
pub mod engine;
pub mod error;
pub mod handle;
pub mod ops;
pub mod store;

pub use autograd::{check_grad, BackwardOp, GradCheckError, Op};
pub use config::{EngineConfig, Reclamation};
pub use engine::{Engine, NodeView, ScopeToken};
pub use error::{GenGradError, Result};
pub use handle::Handle;
pub use ops::traits::Scalar;
// Re-export traits required by public bounds
pub use num_traits;
