use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the scalar types a gengrad graph can carry.
///
/// It is reserved for IEEE floating point types (`f32`, `f64`): the engine
/// relies on NaN/infinity propagation instead of reporting numeric errors,
/// and `Float` supplies `powf`, `ln`, `zero()` and `one()`.
pub trait Scalar:
    Float
    + NumAssignOps // AddAssign/SubAssign for gradient accumulation
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_scalar<T: Scalar>(value: T) -> T {
        value + T::one()
    }

    #[test]
    fn test_f32_impl_scalar() {
        assert_eq!(process_scalar(1.0f32), 2.0);
    }

    #[test]
    fn test_f64_impl_scalar() {
        assert_eq!(process_scalar(1.0f64), 2.0);
    }
}
