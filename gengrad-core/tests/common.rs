use gengrad_core::{Engine, Handle};

// Each integration test binary pulls this file in with `mod common;` and only
// uses part of it.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one leaf per value.
#[allow(dead_code)]
pub(crate) fn leaves(engine: &mut Engine, values: &[f64]) -> Vec<Handle> {
    values
        .iter()
        .map(|&v| engine.leaf(v).expect("Leaf creation failed"))
        .collect()
}

/// Snapshot of a node's value and gradient bits, for exact before/after comparisons.
#[allow(dead_code)]
pub(crate) fn bits(engine: &Engine, handle: Handle) -> (u64, u64) {
    let view = engine.node(handle).expect("Handle should be live");
    (view.value.to_bits(), view.gradient.to_bits())
}
