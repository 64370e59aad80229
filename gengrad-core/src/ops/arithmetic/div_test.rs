use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let a = engine.leaf(10.0)?;
    let b = engine.leaf(4.0)?;
    let c = div_op(&mut engine, a, b)?;
    assert_eq!(engine.value_of(c)?, 2.5);
    assert_eq!(engine.node(c)?.op, Op::Div);
    Ok(())
}

#[test]
fn test_div_backward() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let a = engine.leaf(10.0)?;
    let b = engine.leaf(4.0)?;
    let c = engine.div(a, b)?;
    engine.backward(c)?;
    assert_relative_eq!(engine.gradient_of(a)?, 0.25);
    assert_relative_eq!(engine.gradient_of(b)?, -10.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_by_zero_propagates_ieee() -> Result<()> {
    let mut engine: Engine = Engine::new()?;
    let a = engine.leaf(1.0)?;
    let zero = engine.leaf(0.0)?;
    let c = engine.div(a, zero)?;
    assert!(engine.value_of(c)?.is_infinite());
    engine.backward(c)?;
    assert!(engine.gradient_of(a)?.is_infinite());
    assert!(engine.gradient_of(zero)?.is_infinite());

    let z = engine.div(zero, zero)?;
    assert!(engine.value_of(z)?.is_nan());
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let mut engine: Engine = Engine::new().unwrap();
    check_grad(
        &mut engine,
        |e: &mut Engine, x: &[Handle]| e.div(x[0], x[1]),
        &[3.0, -1.5],
        1e-6,
        1e-5,
    )
    .unwrap();
}
