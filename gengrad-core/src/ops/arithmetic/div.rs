use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Local rule for `a / b`: `g / b` to the numerator, `-(a / b²) g` to the
/// denominator. `b == 0` is not special-cased.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DivBackward;

impl<T: Scalar> BackwardOp<T> for DivBackward {
    fn backward(&self, grad_output: T, a: T, b: T) -> (T, T) {
        (grad_output / b, -(a / (b * b)) * grad_output)
    }
}

/// Records `a / b`.
pub fn div_op<T: Scalar>(engine: &mut Engine<T>, a: Handle, b: Handle) -> Result<Handle> {
    apply_binary_op(engine, a, b, Op::Div, |x, y| x / y)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
