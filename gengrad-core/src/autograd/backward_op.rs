use crate::ops::activation::relu::ReluBackward;
use crate::ops::arithmetic::{
    add::AddBackward, div::DivBackward, mul::MulBackward, neg::NegBackward, pow::PowBackward,
    sub::SubBackward,
};
use crate::ops::traits::Scalar;
use std::fmt;

/// Defines the local-gradient rule of one differentiable operator.
///
/// Given the gradient of the loss with respect to the operator's output
/// (`grad_output`) and the forward values of its operands, an implementation
/// returns the contributions dL/da and dL/db that the backward pass *adds* to
/// the operands' gradient slots. Unary operators return zero for `b`.
///
/// Implementations are stateless: everything they need is stored in the node
/// store (operand values are immutable once written), so the operator tag on
/// a node is enough to find its rule.
pub trait BackwardOp<T: Scalar> {
    fn backward(&self, grad_output: T, a: T, b: T) -> (T, T);
}

/// Operator tag recorded on every node. `Nop` marks a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    #[default]
    Nop,
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Pow,
    Relu,
}

impl Op {
    pub const ALL: [Op; 8] = [
        Op::Nop,
        Op::Add,
        Op::Sub,
        Op::Neg,
        Op::Mul,
        Op::Div,
        Op::Pow,
        Op::Relu,
    ];

    /// Number of meaningful operand slots.
    pub fn arity(self) -> usize {
        match self {
            Op::Nop => 0,
            Op::Neg | Op::Relu => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Op::Nop => "NOP",
            Op::Add => "ADD",
            Op::Sub => "SUB",
            Op::Neg => "NEG",
            Op::Mul => "MUL",
            Op::Div => "DIV",
            Op::Pow => "POW",
            Op::Relu => "RELU",
        }
    }

    /// Dispatches to the operator's [`BackwardOp`] rule. Leaves contribute nothing.
    pub fn backward<T: Scalar>(self, grad_output: T, a: T, b: T) -> (T, T) {
        match self {
            Op::Nop => (T::zero(), T::zero()),
            Op::Add => AddBackward.backward(grad_output, a, b),
            Op::Sub => SubBackward.backward(grad_output, a, b),
            Op::Neg => NegBackward.backward(grad_output, a, b),
            Op::Mul => MulBackward.backward(grad_output, a, b),
            Op::Div => DivBackward.backward(grad_output, a, b),
            Op::Pow => PowBackward.backward(grad_output, a, b),
            Op::Relu => ReluBackward.backward(grad_output, a, b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
