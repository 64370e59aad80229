use gengrad_core::{Engine, Handle, Scalar};

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` input leaves all holding `value`, created in the engine's top generation.
#[allow(dead_code)]
pub(crate) fn constant_inputs<T: Scalar>(
    engine: &mut Engine<T>,
    n: usize,
    value: T,
) -> Vec<Handle> {
    (0..n)
        .map(|_| engine.leaf(value).expect("Input leaf creation failed"))
        .collect()
}
