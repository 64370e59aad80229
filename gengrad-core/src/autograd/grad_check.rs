use crate::engine::Engine;
use crate::error::GenGradError;
use crate::handle::Handle;
use crate::ops::traits::Scalar;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon {0} cannot be represented as a positive finite scalar")]
    InvalidEpsilon(f64),

    #[error("Engine error during gradient check: {0}")]
    Engine(#[from] GenGradError),
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Evaluates `func` on fresh leaves holding `values` and returns the output value.
fn evaluate<T, F>(engine: &mut Engine<T>, func: &F, values: &[T]) -> Result<T, GenGradError>
where
    T: Scalar,
    F: Fn(&mut Engine<T>, &[Handle]) -> Result<Handle, GenGradError>,
{
    engine.with_scope(|engine| -> Result<T, GenGradError> {
        let inputs = values
            .iter()
            .map(|&v| engine.leaf(v))
            .collect::<Result<Vec<_>, _>>()?;
        let output = func(engine, &inputs)?;
        engine.value_of(output)
    })
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a graph over leaves created from `inputs` and returns its
/// output node. Every evaluation happens inside a throw-away scope, so the
/// engine is left exactly as it was. A gradient passes when
/// `|analytical - numerical| <= tolerance * (1 + max(|analytical|, |numerical|))`.
pub fn check_grad<T, F>(
    engine: &mut Engine<T>,
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Engine<T>, &[Handle]) -> Result<Handle, GenGradError>,
{
    let eps = num_traits::cast::<f64, T>(epsilon)
        .filter(|e| e.is_finite() && *e > T::zero())
        .ok_or(GradCheckError::InvalidEpsilon(epsilon))?;

    // --- Analytical gradients ---
    let analytical = engine.with_scope(|engine| -> Result<Vec<f64>, GenGradError> {
        let leaves = inputs
            .iter()
            .map(|&v| engine.leaf(v))
            .collect::<Result<Vec<_>, _>>()?;
        let output = func(engine, &leaves)?;
        engine.backward(output)?;
        leaves
            .iter()
            .map(|&leaf| engine.gradient_of(leaf).map(to_f64))
            .collect::<Result<Vec<_>, GenGradError>>()
    })?;

    // --- Numerical gradients ---
    let two_eps = 2.0 * to_f64(eps);
    let mut perturbed = inputs.to_vec();
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let original = perturbed[input_index];
        perturbed[input_index] = original + eps;
        let loss_plus = to_f64(evaluate(engine, &func, &perturbed)?);
        perturbed[input_index] = original - eps;
        let loss_minus = to_f64(evaluate(engine, &func, &perturbed)?);
        perturbed[input_index] = original;

        let numerical = (loss_plus - loss_minus) / two_eps;
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical).abs();
        let scale = 1.0 + analytical_grad.abs().max(numerical.abs());
        log::trace!(
            "check_grad input {}: analytical={} numerical={} diff={}",
            input_index,
            analytical_grad,
            numerical,
            difference
        );
        if difference > tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: analytical_grad,
                numerical,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
