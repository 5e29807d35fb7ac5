use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::{Sub, SubAssign};

use super::payment::PaymentScheme;

/// Represents a monetary balance with exact decimal precision.
///
/// This is a wrapper around `rust_decimal::Decimal` to keep financial
/// arithmetic free of binary floating point drift. Balances are signed;
/// nothing at this level forbids going negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// The set of payment schemes an account is authorized to use.
///
/// Replaces a flags-enum representation with explicit set membership; an
/// account may hold several scheme capabilities at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeSet(BTreeSet<PaymentScheme>);

impl SchemeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, scheme: PaymentScheme) -> bool {
        self.0.contains(&scheme)
    }

    pub fn insert(&mut self, scheme: PaymentScheme) -> bool {
        self.0.insert(scheme)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PaymentScheme> for SchemeSet {
    fn from_iter<I: IntoIterator<Item = PaymentScheme>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[PaymentScheme; N]> for SchemeSet {
    fn from(schemes: [PaymentScheme; N]) -> Self {
        schemes.into_iter().collect()
    }
}

/// Operational state of an account. Chaps payments require `Live`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub enum AccountStatus {
    Live,
    Disabled,
    InboundPaymentsOnly,
}

/// A debtor account record.
///
/// The balance is mutated only by an accepted payment, and then by exactly
/// the payment amount; every other field is left untouched by the service.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub account_number: String,
    pub allowed_schemes: SchemeSet,
    pub balance: Balance,
    pub status: AccountStatus,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            allowed_schemes: SchemeSet::new(),
            balance: Balance::ZERO,
            status: AccountStatus::Live,
        }
    }

    /// Debits the balance by exactly `amount`. Eligibility checks live in
    /// the payment service; this applies the decrement unconditionally.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= Balance::new(amount);
    }
}
