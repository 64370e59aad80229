//! # Operators (`ops`)
//!
//! Graph-building operators, grouped like the operator families they belong
//! to. Every operator lives in its own file holding:
//!
//! - an `xxx_op` function that validates its operand handles, computes the
//!   forward value with plain IEEE arithmetic and allocates the result node in
//!   the engine's top generation;
//! - an `XxxBackward` rule implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp), applied by the backward pass.
//!
//! The `Engine` methods (`engine.add(a, b)`, ...) are thin wrappers over the
//! `_op` functions.

pub mod activation;
pub mod arithmetic;
pub mod traits;

use crate::autograd::backward_op::Op;
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use traits::Scalar;

/// Validates `a`, applies `forward` to its value and records a unary node.
pub(crate) fn apply_unary_op<T, F>(
    engine: &mut Engine<T>,
    a: Handle,
    op: Op,
    forward: F,
) -> Result<Handle>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let a_value = engine.value_of(a)?;
    engine.allocate(forward(a_value), op, [Some(a), None])
}

/// Validates both operands, applies `forward` and records a binary node.
pub(crate) fn apply_binary_op<T, F>(
    engine: &mut Engine<T>,
    a: Handle,
    b: Handle,
    op: Op,
    forward: F,
) -> Result<Handle>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let a_value = engine.value_of(a)?;
    let b_value = engine.value_of(b)?;
    engine.allocate(forward(a_value, b_value), op, [Some(a), Some(b)])
}
