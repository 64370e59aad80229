//! Node storage: the structure-of-arrays [`Generation`] table and the
//! [`RingQueue`] it uses as a free-list (and that traversals reuse as a
//! queue or stack).

pub mod generation;
pub mod ring;

pub use generation::{Generation, Operands};
pub use ring::RingQueue;
