use super::*;
use crate::autograd::grad_check::check_grad;

#[test]
fn test_relu_forward() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, want) in inputs.iter().zip(expected.iter()) {
        let a = engine.leaf(*x)?;
        let r = relu_op(&mut engine, a)?;
        assert_eq!(engine.value_of(r)?, *want, "relu({})", x);
        assert_eq!(engine.node(r)?.op, Op::Relu);
    }
    Ok(())
}

#[test]
fn test_relu_backward_active() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let a = engine.leaf(3.0)?;
    let r = engine.relu(a)?;
    engine.backward(r)?;
    assert_eq!(engine.gradient_of(a)?, 1.0);
    Ok(())
}

#[test]
fn test_relu_backward_inactive_and_at_zero() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let negative = engine.leaf(-3.0)?;
    let zero = engine.leaf(0.0)?;
    let r1 = engine.relu(negative)?;
    let r2 = engine.relu(zero)?;
    let s = engine.add(r1, r2)?;
    engine.backward(s)?;
    assert_eq!(engine.gradient_of(negative)?, 0.0);
    assert_eq!(engine.gradient_of(zero)?, 0.0);
    Ok(())
}

#[test]
fn test_relu_nan_input_is_inactive() {
    let (ga, _) = ReluBackward.backward(1.0f64, f64::NAN, 0.0);
    assert_eq!(ga, 0.0);
}

#[test]
fn test_relu_grad_check_away_from_kink() {
    let mut engine: Engine = Engine::new().unwrap();
    for x in [-0.8, 1.3] {
        check_grad(
            &mut engine,
            |e: &mut Engine, h: &[Handle]| e.relu(h[0]),
            &[x],
            1e-6,
            1e-6,
        )
        .unwrap();
    }
}
