use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Local rule for `a * b`: each side receives the other side's value times `g`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MulBackward;

impl<T: Scalar> BackwardOp<T> for MulBackward {
    fn backward(&self, grad_output: T, a: T, b: T) -> (T, T) {
        (b * grad_output, a * grad_output)
    }
}

/// Records `a * b`.
pub fn mul_op<T: Scalar>(engine: &mut Engine<T>, a: Handle, b: Handle) -> Result<Handle> {
    apply_binary_op(engine, a, b, Op::Mul, |x, y| x * y)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
