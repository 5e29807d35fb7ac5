//! Infrastructure layer: concrete implementations of the domain storage port.

pub mod in_memory;
