//! The [`Engine`]: an explicit context owning the stack of node generations.
//!
//! Only the top generation accepts new nodes, and operators only accept
//! handles that are live, so an operand always lives in the same or an older
//! generation than the node that records it. That makes the top of the stack
//! a valid bulk-deallocation boundary (see [`Engine::pop_scope`]).

mod builder;
mod reclaim;
mod scope;

pub use scope::ScopeToken;

use crate::autograd::backward_op::Op;
use crate::config::EngineConfig;
use crate::error::{GenGradError, Result};
use crate::handle::Handle;
use crate::ops::traits::Scalar;
use crate::store::{Generation, Operands};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Process-unique generation identity.
pub(crate) fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

/// A snapshot of one node, for printing and inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView<T: Scalar> {
    pub value: T,
    pub gradient: T,
    pub op: Op,
    pub operands: Operands,
}

impl<T: Scalar> fmt::Display for NodeView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(data={}, grad={}, op={})",
            self.value, self.gradient, self.op
        )
    }
}

/// Scalar reverse-mode autodiff engine.
///
/// Single-threaded by contract: an engine is `Send` but every operation takes
/// `&mut self` for mutation, so exclusion is per engine instance.
pub struct Engine<T: Scalar = f64> {
    generations: Vec<Generation<T>>,
    config: EngineConfig,
}

impl<T: Scalar> Engine<T> {
    /// Creates an engine with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let base = Generation::new(next_serial(), 0, config.initial_capacity)?;
        log::debug!(
            "Engine created (initial capacity {}, {:?} reclamation)",
            config.initial_capacity,
            config.reclamation
        );
        Ok(Engine {
            generations: vec![base],
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Depth of the top generation; 0 when no scope is pushed.
    pub fn depth(&self) -> u32 {
        (self.generations.len() - 1) as u32
    }

    /// Live nodes summed over every generation.
    pub fn live_nodes(&self) -> usize {
        self.generations.iter().map(Generation::live_count).sum()
    }

    /// The generation at `depth`, if it is live.
    pub fn generation(&self, depth: u32) -> Option<&Generation<T>> {
        self.generations.get(depth as usize)
    }

    pub(crate) fn generations(&self) -> &[Generation<T>] {
        &self.generations
    }

    fn top_mut(&mut self) -> &mut Generation<T> {
        let top = self.generations.len() - 1;
        &mut self.generations[top]
    }

    /// Validates `handle` and returns `(generation index, slot index)`.
    pub(crate) fn locate(&self, handle: Handle) -> Result<(usize, usize)> {
        let depth = handle.depth as usize;
        let generation = self
            .generations
            .get(depth)
            .ok_or(GenGradError::StaleGeneration {
                depth: handle.depth,
                serial: handle.serial,
            })?;
        let slot = generation.resolve(handle)?;
        Ok((depth, slot))
    }

    pub(crate) fn generation_at(&self, depth: usize) -> &Generation<T> {
        &self.generations[depth]
    }

    pub(crate) fn generation_at_mut(&mut self, depth: usize) -> &mut Generation<T> {
        &mut self.generations[depth]
    }

    /// Allocates a node in the top generation.
    pub(crate) fn allocate(&mut self, value: T, op: Op, operands: Operands) -> Result<Handle> {
        self.top_mut().allocate(value, op, operands)
    }

    /// Creates an input/constant node.
    pub fn leaf(&mut self, value: T) -> Result<Handle> {
        self.allocate(value, Op::Nop, [None, None])
    }

    /// Forward value of a live node.
    pub fn value_of(&self, handle: Handle) -> Result<T> {
        let (depth, slot) = self.locate(handle)?;
        Ok(self.generations[depth].value(slot))
    }

    /// Accumulated gradient of a live node.
    pub fn gradient_of(&self, handle: Handle) -> Result<T> {
        let (depth, slot) = self.locate(handle)?;
        Ok(self.generations[depth].grad(slot))
    }

    pub fn node(&self, handle: Handle) -> Result<NodeView<T>> {
        let (depth, slot) = self.locate(handle)?;
        let generation = &self.generations[depth];
        Ok(NodeView {
            value: generation.value(slot),
            gradient: generation.grad(slot),
            op: generation.op(slot),
            operands: generation.operands(slot),
        })
    }

    /// Resets every live gradient, in every generation, to zero.
    pub fn zero_grad(&mut self) {
        for generation in &mut self.generations {
            generation.zero_grad();
        }
    }
}

impl<T: Scalar> fmt::Debug for Engine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for generation in &self.generations {
            list.entry(&format_args!(
                "depth {}: {} live / {} slots (high-water {})",
                generation.depth(),
                generation.live_count(),
                generation.capacity(),
                generation.high_water()
            ));
        }
        list.finish()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
