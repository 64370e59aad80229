use super::Engine;
use crate::config::Reclamation;
use crate::error::{GenGradError, Result};
use crate::handle::Handle;
use crate::ops::traits::Scalar;
use crate::store::RingQueue;

impl<T: Scalar> Engine<T> {
    /// Returns every node reachable from `root` to the free-list.
    ///
    /// Breadth-first over operands with its own visited set. The whole
    /// sub-graph is validated before anything is freed, so a stale node
    /// anywhere in it leaves the engine unchanged. Shared nodes (parameters,
    /// constants reused by other expressions) are freed too: keeping them
    /// alive is the caller's job.
    ///
    /// Only available under [`Reclamation::SubgraphFree`]. Returns the number
    /// of slots freed.
    pub fn free_subgraph(&mut self, root: Handle) -> Result<usize> {
        if self.config.reclamation != Reclamation::SubgraphFree {
            return Err(GenGradError::ReclamationDisabled {
                operation: "free_subgraph".to_string(),
                policy: self.config.reclamation,
            });
        }

        let (depth, root_slot) = self.locate(root)?;
        let high_water = self.generations[depth].high_water() as usize;
        let mut visited = vec![false; high_water];
        let mut frontier: RingQueue<Handle> = RingQueue::with_capacity(high_water);
        let mut reachable = Vec::new();

        visited[root_slot] = true;
        frontier.push_back(root)?;
        while let Some(handle) = frontier.pop_front() {
            let (_, slot) = self.locate(handle)?;
            reachable.push(handle);
            for operand in self.generations[depth].operands(slot).into_iter().flatten() {
                let (_, operand_slot) = self.locate(operand)?;
                if !visited[operand_slot] {
                    visited[operand_slot] = true;
                    frontier.push_back(operand)?;
                }
            }
        }

        let generation = &mut self.generations[depth];
        for handle in &reachable {
            generation.free(*handle)?;
        }
        log::debug!(
            "Freed sub-graph rooted at {}: {} slots returned ({} still live)",
            root,
            reachable.len(),
            generation.live_count()
        );
        Ok(reachable.len())
    }
}
