//! Domain layer: account and payment value types plus the storage port.

pub mod account;
pub mod payment;
pub mod ports;
