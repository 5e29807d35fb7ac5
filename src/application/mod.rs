//! Application layer containing the core business logic.
//!
//! This module defines the `PaymentService`, which evaluates a single-debit
//! payment instruction against the debtor's account and applies the balance
//! update when every eligibility rule passes.

pub mod service;
