//! Interface adapters between the outside world and the application layer.

pub mod http;
