use crate::autograd::backward_op::Op;
use crate::error::{GenGradError, Result};
use crate::handle::Handle;
use crate::ops::traits::Scalar;
use crate::store::ring::RingQueue;

/// Operand slots of a node. `None` is the "no operand" sentinel.
pub type Operands = [Option<Handle>; 2];

/// One arena of nodes: a structure-of-arrays table plus a free-list.
///
/// A slot is either *free* (its id is queued in `free`, payload undefined) or
/// *live*. Slot ids are only reused after an explicit [`Generation::free`].
/// All columns, and the free-list ring, always have the same capacity.
#[derive(Debug)]
pub struct Generation<T: Scalar> {
    serial: u64,
    depth: u32,
    values: Vec<T>,
    grads: Vec<T>,
    ops: Vec<Op>,
    operands: Vec<Operands>,
    versions: Vec<u32>,
    live: Vec<bool>,
    free: RingQueue<u32>,
    high_water: u32,
    live_count: usize,
}

fn reserve_column<V>(column: &mut Vec<V>, additional: usize, requested: usize) -> Result<()> {
    column
        .try_reserve_exact(additional)
        .map_err(|_| GenGradError::CapacityExhausted { requested })
}

/// Grow factor 1.5, always adding at least one slot.
fn next_capacity(current: usize) -> usize {
    (current * 3 / 2).max(current + 1)
}

impl<T: Scalar> Generation<T> {
    pub fn new(serial: u64, depth: u32, initial_capacity: usize) -> Result<Self> {
        let mut generation = Generation {
            serial,
            depth,
            values: Vec::new(),
            grads: Vec::new(),
            ops: Vec::new(),
            operands: Vec::new(),
            versions: Vec::new(),
            live: Vec::new(),
            free: RingQueue::with_capacity(0),
            high_water: 0,
            live_count: 0,
        };
        generation.grow_to(initial_capacity.max(1))?;
        Ok(generation)
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// One past the largest slot index ever handed out.
    pub fn high_water(&self) -> u32 {
        self.high_water
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            return Ok(());
        }
        if u32::try_from(new_capacity).is_err() {
            return Err(GenGradError::CapacityExhausted {
                requested: new_capacity,
            });
        }
        let additional = new_capacity - old_capacity;

        // Reserve everything first so a failure leaves the store unchanged.
        reserve_column(&mut self.values, additional, new_capacity)?;
        reserve_column(&mut self.grads, additional, new_capacity)?;
        reserve_column(&mut self.ops, additional, new_capacity)?;
        reserve_column(&mut self.operands, additional, new_capacity)?;
        reserve_column(&mut self.versions, additional, new_capacity)?;
        reserve_column(&mut self.live, additional, new_capacity)?;
        self.free.grow(new_capacity)?;

        self.values.resize(new_capacity, T::zero());
        self.grads.resize(new_capacity, T::zero());
        self.ops.resize(new_capacity, Op::Nop);
        self.operands.resize(new_capacity, [None, None]);
        self.versions.resize(new_capacity, 0);
        self.live.resize(new_capacity, false);
        for slot in old_capacity..new_capacity {
            self.free.push_back(slot as u32)?;
        }

        log::debug!(
            "Generation depth {} (serial {}) grew from {} to {} slots",
            self.depth,
            self.serial,
            old_capacity,
            new_capacity
        );
        Ok(())
    }

    /// Inserts a live node and returns its handle. Takes the oldest freed slot
    /// first; grows the columns by 1.5x when the free-list is empty.
    pub fn allocate(&mut self, value: T, op: Op, operands: Operands) -> Result<Handle> {
        if self.free.is_empty() {
            self.grow_to(next_capacity(self.capacity()))?;
        }
        let slot = self.free.pop_front().ok_or_else(|| {
            GenGradError::InternalError("free-list empty right after growth".to_string())
        })?;
        let idx = slot as usize;

        self.values[idx] = value;
        self.grads[idx] = T::zero();
        self.ops[idx] = op;
        self.operands[idx] = operands;
        self.live[idx] = true;
        self.live_count += 1;
        self.high_water = self.high_water.max(slot + 1);

        Ok(Handle::new(self.serial, self.depth, slot, self.versions[idx]))
    }

    /// Checks that `handle` names a live node of this generation and returns
    /// its slot as an index into the columns.
    pub fn resolve(&self, handle: Handle) -> Result<usize> {
        if handle.serial != self.serial || handle.depth != self.depth {
            return Err(GenGradError::StaleGeneration {
                depth: handle.depth,
                serial: handle.serial,
            });
        }
        if handle.slot >= self.high_water {
            return Err(GenGradError::SlotOutOfRange {
                depth: handle.depth,
                slot: handle.slot,
                high_water: self.high_water,
            });
        }
        let idx = handle.slot as usize;
        if !self.live[idx] || self.versions[idx] != handle.version {
            return Err(GenGradError::StaleSlot {
                depth: handle.depth,
                slot: handle.slot,
            });
        }
        Ok(idx)
    }

    /// Returns a live slot to the free-list. Outstanding handles to it go stale.
    ///
    /// A slot whose version counter is exhausted is retired instead of
    /// queued: reusing it would let a wrapped version match an old handle.
    pub fn free(&mut self, handle: Handle) -> Result<()> {
        let idx = self.resolve(handle)?;
        self.live[idx] = false;
        self.operands[idx] = [None, None];
        self.live_count -= 1;
        match self.versions[idx].checked_add(1) {
            Some(next) => {
                self.versions[idx] = next;
                self.free.push_back(handle.slot)
            }
            None => {
                log::warn!(
                    "Retiring slot {} of generation depth {}: version counter exhausted",
                    handle.slot,
                    self.depth
                );
                Ok(())
            }
        }
    }

    pub fn value(&self, idx: usize) -> T {
        self.values[idx]
    }

    pub fn grad(&self, idx: usize) -> T {
        self.grads[idx]
    }

    pub fn op(&self, idx: usize) -> Op {
        self.ops[idx]
    }

    pub fn operands(&self, idx: usize) -> Operands {
        self.operands[idx]
    }

    /// The only mutation path for node payloads after creation.
    pub fn accumulate_grad(&mut self, idx: usize, delta: T) {
        self.grads[idx] += delta;
    }

    pub fn set_grad(&mut self, idx: usize, grad: T) {
        self.grads[idx] = grad;
    }

    pub fn zero_grad(&mut self) {
        for (grad, live) in self.grads.iter_mut().zip(&self.live) {
            if *live {
                *grad = T::zero();
            }
        }
    }
}

#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;
