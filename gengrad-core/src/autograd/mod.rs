//! Reverse-mode differentiation over the node store.
//!
//! - [`graph`]: topological ordering of the sub-graph below a root.
//! - [`backward_op`]: the operator tag and the local-gradient rule trait.
//! - `backward`: `Engine::backward`, the chain-rule sweep.
//! - [`grad_check`]: numerical verification of the analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

mod backward;

pub use backward_op::{BackwardOp, Op};
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
