use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Local rule for `a - b`: `+g` to the minuend, `-g` to the subtrahend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SubBackward;

impl<T: Scalar> BackwardOp<T> for SubBackward {
    fn backward(&self, grad_output: T, _a: T, _b: T) -> (T, T) {
        (grad_output, -grad_output)
    }
}

/// Records `a - b`.
pub fn sub_op<T: Scalar>(engine: &mut Engine<T>, a: Handle, b: Handle) -> Result<Handle> {
    apply_binary_op(engine, a, b, Op::Sub, |x, y| x - y)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
