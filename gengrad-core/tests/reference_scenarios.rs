use approx::assert_abs_diff_eq;
use gengrad_core::{Engine, Result};

mod common;

#[test]
fn sanity_check_expression() -> Result<()> {
    common::init_logger();
    let mut engine: Engine = Engine::new()?;

    let x = engine.leaf(-4.0)?;
    // z = 2 * x + 2 + x
    let two_x = engine.mul_scalar(x, 2.0)?;
    let two_x_plus_two = engine.add_scalar(two_x, 2.0)?;
    let z = engine.add(two_x_plus_two, x)?;
    let relu_z = engine.relu(z)?;
    let zx = engine.mul(z, x)?;
    let q = engine.add(relu_z, zx)?;
    let zz = engine.mul(z, z)?;
    let h = engine.relu(zz)?;
    let hq = engine.add(h, q)?;
    let qx = engine.mul(q, x)?;
    let y = engine.add(hq, qx)?;

    engine.backward(y)?;

    assert_eq!(engine.value_of(y)?, -20.0);
    assert_eq!(engine.gradient_of(x)?, 46.0);
    Ok(())
}

#[test]
fn more_ops_expression() -> Result<()> {
    common::init_logger();
    let mut engine: Engine = Engine::new()?;

    let a = engine.leaf(-4.0)?;
    let b = engine.leaf(2.0)?;

    let mut c = engine.add(a, b)?;
    let ab = engine.mul(a, b)?;
    let b_cubed = engine.pow_scalar(b, 3.0)?;
    let mut d = engine.add(ab, b_cubed)?;

    // c += c + 1
    let c_plus_one = engine.add_scalar(c, 1.0)?;
    c = engine.add(c, c_plus_one)?;
    // c += 1 + c + (-a)
    let one_plus_c = engine.add_scalar(c, 1.0)?;
    let neg_a = engine.neg(a)?;
    let tail = engine.add(one_plus_c, neg_a)?;
    c = engine.add(c, tail)?;

    // d += d * 2 + relu(b + a)
    let d_twice = engine.mul_scalar(d, 2.0)?;
    let b_plus_a = engine.add(b, a)?;
    let relu_sum = engine.relu(b_plus_a)?;
    let tail = engine.add(d_twice, relu_sum)?;
    d = engine.add(d, tail)?;
    // d += 3 * d + relu(b - a)
    let three_d = engine.mul_scalar(d, 3.0)?;
    let b_minus_a = engine.sub(b, a)?;
    let relu_diff = engine.relu(b_minus_a)?;
    let tail = engine.add(three_d, relu_diff)?;
    d = engine.add(d, tail)?;

    let e = engine.sub(c, d)?;
    let f = engine.pow_scalar(e, 2.0)?;
    let half_f = engine.div_scalar(f, 2.0)?;
    let ten_over_f = engine.rdiv_scalar(10.0, f)?;
    let g = engine.add(half_f, ten_over_f)?;

    engine.backward(g)?;

    assert_abs_diff_eq!(engine.value_of(g)?, 24.70408163265306, epsilon = 1e-3);
    assert_abs_diff_eq!(engine.gradient_of(a)?, 138.83381924198252, epsilon = 1e-3);
    assert_abs_diff_eq!(engine.gradient_of(b)?, 645.5772594752186, epsilon = 1e-3);
    Ok(())
}

#[test]
fn sanity_check_expression_f32() -> Result<()> {
    let mut engine: Engine<f32> = Engine::new()?;
    let x = engine.leaf(-4.0)?;
    let two = engine.leaf(2.0)?;
    let two_x = engine.mul(two, x)?;
    let two_x_plus_two = engine.add(two_x, two)?;
    let z = engine.add(two_x_plus_two, x)?;
    let relu_z = engine.relu(z)?;
    let zx = engine.mul(z, x)?;
    let q = engine.add(relu_z, zx)?;
    let zz = engine.mul(z, z)?;
    let h = engine.relu(zz)?;
    let hq = engine.add(h, q)?;
    let qx = engine.mul(q, x)?;
    let y = engine.add(hq, qx)?;
    engine.backward(y)?;
    assert_eq!(engine.value_of(y)?, -20.0f32);
    assert_eq!(engine.gradient_of(x)?, 46.0f32);
    Ok(())
}

#[test]
fn scenarios_inside_scopes_leave_base_untouched() -> Result<()> {
    common::init_logger();
    let mut engine: Engine = Engine::new()?;
    let x = engine.leaf(-4.0)?;

    // Rebuild the same expression twice; the second pass must not see the first's nodes.
    for _ in 0..2 {
        engine.zero_grad();
        let y = engine.with_scope(|engine| -> Result<f64> {
            let z = engine.mul(x, x)?;
            let y = engine.sub(z, x)?;
            engine.backward(y)?;
            engine.value_of(y)
        })?;
        assert_eq!(y, 20.0);
        assert_eq!(engine.gradient_of(x)?, -9.0);
        assert_eq!(engine.live_nodes(), 1);
    }
    Ok(())
}
