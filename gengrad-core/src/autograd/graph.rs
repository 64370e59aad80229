use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::traits::Scalar;
use crate::store::RingQueue;

/// Visited set indexed by `(depth, slot)`, one bitmap per generation sized by
/// that generation's high-water mark.
pub(crate) struct VisitedSet {
    seen: Vec<Vec<bool>>,
}

impl VisitedSet {
    pub(crate) fn for_engine<T: Scalar>(engine: &Engine<T>, max_depth: usize) -> Self {
        let seen = engine.generations()[..=max_depth]
            .iter()
            .map(|generation| vec![false; generation.high_water() as usize])
            .collect();
        VisitedSet { seen }
    }

    /// Marks `(depth, slot)`; returns `false` if it was already marked.
    pub(crate) fn insert(&mut self, depth: usize, slot: usize) -> bool {
        let entry = &mut self.seen[depth][slot];
        !std::mem::replace(entry, true)
    }

    pub(crate) fn contains(&self, depth: usize, slot: usize) -> bool {
        self.seen[depth][slot]
    }
}

/// Builds a topological sort of the sub-graph reachable from `root`.
///
/// Every node appears after all of its operands (DFS post-order, operand 0
/// explored before operand 1). Nodes reached through several parents are
/// listed once. An explicit work stack replaces recursion so deep graphs
/// cannot overflow the call stack.
///
/// Every visited handle is validated; a stale node anywhere below `root`
/// fails the whole sort.
pub fn topological_sort<T: Scalar>(engine: &Engine<T>, root: Handle) -> Result<Vec<Handle>> {
    let (root_depth, _) = engine.locate(root)?;
    let mut visited = VisitedSet::for_engine(engine, root_depth);
    let mut order = Vec::new();
    // (node, operands already pushed), used LIFO
    let mut stack: RingQueue<(Handle, bool)> = RingQueue::with_capacity(16);
    stack.push_back_growing((root, false))?;

    while let Some((handle, expanded)) = stack.pop_back() {
        if expanded {
            order.push(handle);
            continue;
        }
        let (depth, slot) = engine.locate(handle)?;
        if !visited.insert(depth, slot) {
            continue;
        }
        stack.push_back_growing((handle, true))?;
        let [first, second] = engine.generation_at(depth).operands(slot);
        for operand in [second, first].into_iter().flatten() {
            let (operand_depth, operand_slot) = engine.locate(operand)?;
            if !visited.contains(operand_depth, operand_slot) {
                stack.push_back_growing((operand, false))?;
            }
        }
    }

    log::trace!("topological_sort from {}: {} nodes", root, order.len());
    Ok(order)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
