//! Stack and queue adapters built on the crate's containers.

pub mod queue;
pub mod stack;
pub mod static_array_queue;
