use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment rail a debit instruction travels over.
///
/// A closed set: any scheme string outside these variants is rejected at
/// deserialization, before the decision logic ever sees it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum PaymentScheme {
    Bacs,
    Chaps,
    FasterPayments,
}

/// A single-debit payment instruction.
///
/// The creditor account number is carried as opaque data and never resolved;
/// the payment date currently influences no eligibility rule.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentRequest {
    pub creditor_account_number: String,
    pub debtor_account_number: String,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub scheme: PaymentScheme,
}

/// Outcome of a payment evaluation. Deliberately coarse: every business
/// rejection collapses to `success == false` with no further diagnostic.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct PaymentResult {
    pub success: bool,
}

impl PaymentResult {
    pub fn succeeded() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}
