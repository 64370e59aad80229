use std::fmt;

/// Opaque reference to one node of an [`Engine`](crate::Engine).
///
/// A handle names the generation that owns the node twice: by its `depth`
/// in the generation stack, and by the `serial` the generation received when
/// it was pushed. Serials are unique for the whole process, so a handle into
/// a popped generation stays invalid even after another generation is pushed
/// at the same depth, and handles from a different engine never validate.
///
/// The `version` is the slot's reuse counter at allocation time. Freeing a
/// slot bumps the counter, which turns every outstanding handle to the old
/// node into a detectable stale handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) serial: u64,
    pub(crate) depth: u32,
    pub(crate) slot: u32,
    pub(crate) version: u32,
}

impl Handle {
    pub(crate) fn new(serial: u64, depth: u32, slot: u32, version: u32) -> Self {
        Handle {
            serial,
            depth,
            slot,
            version,
        }
    }

    /// Index of the owning generation in the stack (0 is the base generation).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Slot index inside the owning generation. Slots are recycled.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Handle(%{}:{} serial={} v{})",
            self.depth, self.slot, self.serial, self.version
        )
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}:{}", self.depth, self.slot)
    }
}
