use crate::error::{GenGradError, Result};

/// Fixed-capacity circular queue.
///
/// Elements live in `buffer[(head + i) % capacity]` for `i in 0..len`. The
/// queue never grows on its own: the owner calls [`RingQueue::grow`] in
/// lockstep with whatever storage the queued ids index into.
#[derive(Debug, Clone)]
pub struct RingQueue<T: Copy> {
    buffer: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T: Copy> RingQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        RingQueue {
            buffer: vec![None; capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.buffer.len()
    }

    /// Appends at the tail. Fails when the queue is full.
    pub fn push_back(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(GenGradError::InternalError(format!(
                "RingQueue overflow: capacity {} exhausted",
                self.capacity()
            )));
        }
        let tail = self.physical(self.len);
        self.buffer[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        item
    }

    /// Removes the newest element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.physical(self.len - 1);
        self.len -= 1;
        self.buffer[tail].take()
    }

    /// Enlarges the queue to `new_capacity`, laying the queued elements out
    /// contiguously from index 0 in FIFO order. Shrinking is a no-op.
    ///
    /// Memory is reserved with `try_reserve`; on failure the queue is left
    /// untouched and `CapacityExhausted` is returned.
    pub fn grow(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut relaid: Vec<Option<T>> = Vec::new();
        relaid
            .try_reserve_exact(new_capacity)
            .map_err(|_| GenGradError::CapacityExhausted {
                requested: new_capacity,
            })?;
        relaid.extend(self.iter().map(Some));
        relaid.resize(new_capacity, None);
        self.buffer = relaid;
        self.head = 0;
        Ok(())
    }

    /// Appends at the tail, doubling the capacity first when full.
    pub fn push_back_growing(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            self.grow((self.capacity() * 2).max(1))?;
        }
        self.push_back(item)
    }

    /// Iterates from the oldest to the newest element.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).filter_map(move |i| self.buffer[self.physical(i)])
    }
}

#[cfg(test)]
#[path = "ring_test.rs"]
mod tests;
