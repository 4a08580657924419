//! Adapter implementations of the item ports.

pub mod memory;
