use super::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::traits::Scalar;

/// Graph-building operators. Each evaluates the forward value immediately and
/// records a new node in the top generation. The `_scalar` forms take a plain
/// constant and record it as a leaf first.
impl<T: Scalar> Engine<T> {
    pub fn add(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        add_op(self, a, b)
    }

    pub fn sub(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        mul_op(self, a, b)
    }

    pub fn div(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        div_op(self, a, b)
    }

    /// `a` raised to the real power `b`.
    pub fn pow(&mut self, a: Handle, b: Handle) -> Result<Handle> {
        pow_op(self, a, b)
    }

    pub fn neg(&mut self, a: Handle) -> Result<Handle> {
        neg_op(self, a)
    }

    pub fn relu(&mut self, a: Handle) -> Result<Handle> {
        relu_op(self, a)
    }

    /// Records `op(a, leaf(constant))`, or `op(leaf(constant), a)` when
    /// `constant_first`. `a` is checked before the constant leaf is made.
    fn with_constant(
        &mut self,
        a: Handle,
        constant: T,
        constant_first: bool,
        op: fn(&mut Self, Handle, Handle) -> Result<Handle>,
    ) -> Result<Handle> {
        self.value_of(a)?;
        let c = self.leaf(constant)?;
        if constant_first {
            op(self, c, a)
        } else {
            op(self, a, c)
        }
    }

    /// `a + c` for a plain constant `c`.
    pub fn add_scalar(&mut self, a: Handle, c: T) -> Result<Handle> {
        self.with_constant(a, c, false, Self::add)
    }

    /// `a - c`.
    pub fn sub_scalar(&mut self, a: Handle, c: T) -> Result<Handle> {
        self.with_constant(a, c, false, Self::sub)
    }

    /// `c - a`.
    pub fn rsub_scalar(&mut self, c: T, a: Handle) -> Result<Handle> {
        self.with_constant(a, c, true, Self::sub)
    }

    /// `a * c`.
    pub fn mul_scalar(&mut self, a: Handle, c: T) -> Result<Handle> {
        self.with_constant(a, c, false, Self::mul)
    }

    /// `a / c`.
    pub fn div_scalar(&mut self, a: Handle, c: T) -> Result<Handle> {
        self.with_constant(a, c, false, Self::div)
    }

    /// `c / a`.
    pub fn rdiv_scalar(&mut self, c: T, a: Handle) -> Result<Handle> {
        self.with_constant(a, c, true, Self::div)
    }

    /// `a` raised to the constant power `c`.
    pub fn pow_scalar(&mut self, a: Handle, c: T) -> Result<Handle> {
        self.with_constant(a, c, false, Self::pow)
    }

    /// Left fold of `terms` with ADD, starting from a zero leaf.
    pub fn sum(&mut self, terms: &[Handle]) -> Result<Handle> {
        let mut acc = self.leaf(T::zero())?;
        for &term in terms {
            acc = self.add(acc, term)?;
        }
        Ok(acc)
    }
}
