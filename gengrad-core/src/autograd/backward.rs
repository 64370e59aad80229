use crate::autograd::graph::topological_sort;
use crate::engine::Engine;
use crate::error::Result;
use crate::handle::Handle;
use crate::ops::traits::Scalar;

impl<T: Scalar> Engine<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root`'s gradient with 1, then walks the reachable sub-graph in
    /// reverse topological order, adding each node's local-gradient
    /// contributions into its operands' gradient slots. Gradients are never
    /// reset here: calling `backward` again without [`Engine::zero_grad`]
    /// accumulates on top of the previous pass.
    ///
    /// # Errors
    /// Fails before touching any gradient if `root` or any node below it is
    /// stale.
    pub fn backward(&mut self, root: Handle) -> Result<()> {
        let order = topological_sort(self, root)?;
        log::debug!("backward from {}: {} nodes in order", root, order.len());

        let (root_depth, root_slot) = self.locate(root)?;
        let previous = self.generation_at(root_depth).grad(root_slot);
        if previous != T::zero() {
            log::warn!(
                "backward called on {} whose gradient is already {}; operand gradients will compound",
                root,
                previous
            );
        }
        self.generation_at_mut(root_depth)
            .set_grad(root_slot, T::one());

        for &handle in order.iter().rev() {
            let (depth, slot) = self.locate(handle)?;
            let generation = self.generation_at(depth);
            let op = generation.op(slot);
            let operands = generation.operands(slot);
            let grad_output = generation.grad(slot);

            let mut operand_slots = [None, None];
            let mut operand_values = [T::zero(), T::zero()];
            for (i, operand) in operands.iter().take(op.arity()).enumerate() {
                if let Some(operand) = operand {
                    let (operand_depth, operand_slot) = self.locate(*operand)?;
                    operand_values[i] = self.generation_at(operand_depth).value(operand_slot);
                    operand_slots[i] = Some((operand_depth, operand_slot));
                }
            }

            let (grad_a, grad_b) = op.backward(grad_output, operand_values[0], operand_values[1]);
            log::trace!(
                "backward {} {}: grad={} -> ({}, {})",
                op,
                handle,
                grad_output,
                grad_a,
                grad_b
            );
            for (target, delta) in operand_slots.into_iter().zip([grad_a, grad_b]) {
                if let Some((operand_depth, operand_slot)) = target {
                    self.generation_at_mut(operand_depth)
                        .accumulate_grad(operand_slot, delta);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
