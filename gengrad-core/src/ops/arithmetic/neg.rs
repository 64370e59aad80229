use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NegBackward;

impl<T: Scalar> BackwardOp<T> for NegBackward {
    fn backward(&self, grad_output: T, _a: T, _b: T) -> (T, T) {
        (-grad_output, T::zero())
    }
}

/// Records `-a` under its own `NEG` tag.
pub fn neg_op<T: Scalar>(engine: &mut Engine<T>, a: Handle) -> Result<Handle> {
    apply_unary_op(engine, a, Op::Neg, |x| -x)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
