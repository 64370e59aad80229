use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;

/// Local rule for `relu(a)`: the gradient passes only where `a > 0`.
///
/// At exactly `a == 0` the subgradient is taken from the inactive branch, so
/// nothing flows back. This matches the strict inequality of the forward pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReluBackward;

impl<T: Scalar> BackwardOp<T> for ReluBackward {
    fn backward(&self, grad_output: T, a: T, _b: T) -> (T, T) {
        if a > T::zero() {
            (grad_output, T::zero())
        } else {
            (T::zero(), T::zero())
        }
    }
}

/// Records the Rectified Linear Unit `max(0, a)`.
pub fn relu_op<T: Scalar>(engine: &mut Engine<T>, a: Handle) -> Result<Handle> {
    apply_unary_op(engine, a, Op::Relu, |x| if x > T::zero() { x } else { T::zero() })
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
