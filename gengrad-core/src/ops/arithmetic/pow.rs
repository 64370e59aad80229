// Real exponentiation a^b. Both operands are graph nodes.

use crate::autograd::backward_op::{BackwardOp, Op};
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Local rule for `a^b`:
/// - base: `b · a^(b-1) · g`
/// - exponent: `a^b · ln(a) · g`, NaN for `a < 0` and `-inf · g` for `a == 0`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PowBackward;

impl<T: Scalar> BackwardOp<T> for PowBackward {
    fn backward(&self, grad_output: T, a: T, b: T) -> (T, T) {
        let grad_base = b * a.powf(b - T::one()) * grad_output;
        let grad_exponent = a.powf(b) * a.ln() * grad_output;
        (grad_base, grad_exponent)
    }
}

/// Records `a^b`. The forward value is NaN for a negative base with a
/// non-integer exponent.
pub fn pow_op<T: Scalar>(engine: &mut Engine<T>, a: Handle, b: Handle) -> Result<Handle> {
    apply_binary_op(engine, a, b, Op::Pow, |x, y| x.powf(y))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
