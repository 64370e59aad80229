use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Local rule for `a + b`: the upstream gradient flows unchanged to both sides.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AddBackward;

impl<T: Scalar> BackwardOp<T> for AddBackward {
    fn backward(&self, grad_output: T, _a: T, _b: T) -> (T, T) {
        (grad_output, grad_output)
    }
}

/// Records `a + b`.
pub fn add_op<T: Scalar>(engine: &mut Engine<T>, a: Handle, b: Handle) -> Result<Handle> {
    apply_binary_op(engine, a, b, Op::Add, |x, y| x + y)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
