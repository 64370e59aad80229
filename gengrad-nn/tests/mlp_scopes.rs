use approx::assert_relative_eq;
use gengrad_core::Engine;
use gengrad_nn::{Init, Mlp, MlpConfig, Module, NnError};

mod common;

#[test]
fn mnist_sized_mlp_parameter_count() -> Result<(), NnError> {
    common::init_logger();
    let mut engine: Engine = Engine::new()?;
    let mlp = Mlp::new(&mut engine, &[784, 30, 10])?;
    assert_eq!(mlp.num_parameters(), 23_860);
    assert_eq!(mlp.parameters().len(), 23_860);
    assert_eq!(engine.live_nodes(), 23_860);
    Ok(())
}

#[test]
fn forward_backward_in_scope_keeps_parameters() -> Result<(), NnError> {
    common::init_logger();
    let mut engine: Engine = Engine::new()?;
    let mlp = Mlp::new(&mut engine, &[784, 30, 10])?;
    let params = mlp.parameters();

    let (outputs, inner_nodes) = engine.with_scope(|engine| -> Result<_, NnError> {
        let x = common::constant_inputs(engine, 784, 1.0 / 784.0);
        let y = mlp.forward(engine, &x)?;
        let loss = engine.sum(&y)?;
        engine.backward(loss)?;
        let values = y
            .iter()
            .map(|&out| engine.value_of(out))
            .collect::<Result<Vec<_>, _>>()?;
        let inner = engine.generation(1).map(|g| g.live_count()).unwrap_or(0);
        Ok((values, inner))
    })?;

    // hidden = relu(784 * 0.1 / 784) = 0.1; out = 30 * 0.1 * 0.1
    assert_eq!(outputs.len(), 10);
    for value in outputs {
        assert_relative_eq!(value, 0.3, epsilon = 1e-9);
    }
    // inputs, 30 hidden units (784 mul, zero leaf, 784 add, bias add, relu),
    // 10 linear outputs (30 mul, zero leaf, 30 add, bias add), the loss sum
    assert_eq!(inner_nodes, 784 + 30 * 1571 + 10 * 62 + 11);

    assert_eq!(engine.depth(), 0);
    assert_eq!(engine.live_nodes(), 23_860);
    for &p in &params {
        assert!(engine.value_of(p).is_ok());
        assert_ne!(engine.gradient_of(p)?, 0.0, "parameter {} got no gradient", p);
    }
    // Every hidden unit feeds all 10 outputs with weight 0.1, so d(loss)/d(hidden) = 1.
    assert_relative_eq!(engine.gradient_of(params[0])?, 1.0 / 784.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn gradients_sum_over_samples_until_zero_grad() -> Result<(), NnError> {
    let mut engine: Engine = Engine::new()?;
    let mlp = Mlp::new(&mut engine, &[3, 4, 1])?;
    let bias = *mlp.parameters().last().expect("output bias");

    for _ in 0..3 {
        engine.with_scope(|engine| -> Result<(), NnError> {
            let x = common::constant_inputs(engine, 3, 1.0);
            let y = mlp.forward(engine, &x)?;
            engine.backward(y[0])?;
            Ok(())
        })?;
    }
    assert_eq!(engine.gradient_of(bias)?, 3.0);
    engine.zero_grad();
    assert_eq!(engine.gradient_of(bias)?, 0.0);
    Ok(())
}

#[test]
fn inputs_from_popped_scope_are_rejected() -> Result<(), NnError> {
    let mut engine: Engine = Engine::new()?;
    let mlp = Mlp::new(&mut engine, &[2, 2])?;
    let scope = engine.push_scope()?;
    let x = common::constant_inputs(&mut engine, 2, 1.0);
    engine.pop_scope(scope)?;
    match mlp.forward(&mut engine, &x) {
        Err(NnError::Engine(err)) => assert!(err.is_stale_handle()),
        other => panic!("Expected stale handle error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn random_init_f32_engine() -> Result<(), NnError> {
    common::init_logger();
    let mut engine: Engine<f32> = Engine::new()?;
    let config = MlpConfig::new()
        .with_init(
            Init::Uniform {
                low: -1.0,
                high: 1.0,
            },
            Init::Constant(0.0),
        )
        .with_seed(11);
    let mlp = Mlp::with_config(&mut engine, &[4, 8, 3], &config)?;
    let y = engine.with_scope(|engine| -> Result<Vec<f32>, NnError> {
        let x = common::constant_inputs(engine, 4, 0.5f32);
        let y = mlp.forward(engine, &x)?;
        let values = y
            .iter()
            .map(|&out| engine.value_of(out))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(values)
    })?;
    assert_eq!(y.len(), 3);
    assert!(y.iter().all(|v| v.is_finite()));
    Ok(())
}
