//! Builds a `[784, 30, 10]` perceptron, runs one forward/backward pass on a
//! constant input inside a scope (backward from the sum of the outputs) and
//! prints what survives it.
//!
//! Run with `RUST_LOG=debug cargo run --example mlp_forward_backward`.

use gengrad_core::Engine;
use gengrad_nn::{Mlp, Module, NnError};

fn main() -> Result<(), NnError> {
    env_logger::init();

    let mut engine: Engine = Engine::new()?;
    let mlp = Mlp::new(&mut engine, &[784, 30, 10])?;
    println!("parameters: {}", mlp.num_parameters());

    let outputs = engine.with_scope(|engine| -> Result<Vec<f64>, NnError> {
        let x = (0..784)
            .map(|_| engine.leaf(1.0 / 784.0))
            .collect::<Result<Vec<_>, _>>()?;
        let y = mlp.forward(engine, &x)?;
        let loss = engine.sum(&y)?;
        engine.backward(loss)?;
        println!("graph nodes during the pass: {}", engine.live_nodes());
        let values = y
            .iter()
            .map(|&out| engine.value_of(out))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(values)
    })?;

    println!("outputs: {:?}", outputs);
    println!("nodes after the pass: {}", engine.live_nodes());
    for &p in mlp.parameters().iter().take(3) {
        println!("{}", engine.node(p)?);
    }
    println!("{:?}", engine);
    Ok(())
}
