//! The transfer operations.
//!
//! Each operation is independent: it validates its inputs through
//! [`validate`](crate::validate), opens its own handles, and releases them on
//! every exit path. No state survives a call and nothing is shared between
//! calls. Concurrent invocations against the same destination are
//! last-writer-wins; the crate does no coordination.

mod block;
mod byte;
mod compare;
mod line;
mod memory;

pub use block::{copy_buffered, copy_by_block};
pub use byte::copy_by_byte;
pub use compare::content_equals;
pub use line::copy_by_line;
pub use memory::{copy_in_memory_by_block, copy_in_memory_by_byte};
