use crate::domain::account::{Account, AccountStatus, Balance};
use crate::domain::payment::{PaymentRequest, PaymentResult, PaymentScheme};
use crate::domain::ports::AccountStoreBox;
use crate::error::Result;

/// The payment validator/applier.
///
/// `PaymentService` owns the account store and evaluates one payment
/// instruction at a time. Each evaluation is stateless with respect to the
/// service: a snapshot of the debtor account is read, the rules run against
/// it, and the store is written exactly once, only on full acceptance.
pub struct PaymentService {
    account_store: AccountStoreBox,
}

impl PaymentService {
    /// Creates a new `PaymentService` backed by the given account store.
    pub fn new(account_store: AccountStoreBox) -> Self {
        Self { account_store }
    }

    /// Validates `request` against the debtor's account and, if accepted,
    /// debits the balance and persists the updated account.
    ///
    /// Every business rejection (unknown debtor, scheme not permitted,
    /// scheme rule failed) collapses uniformly to `PaymentResult::failed()`
    /// with no mutation; `Err` is reserved for store failures.
    pub async fn make_payment(&self, request: PaymentRequest) -> Result<PaymentResult> {
        let Some(mut account) = self
            .account_store
            .get(&request.debtor_account_number)
            .await?
        else {
            return Ok(PaymentResult::failed());
        };

        if !account.allowed_schemes.contains(request.scheme) {
            return Ok(PaymentResult::failed());
        }

        if !Self::account_can_make_payment(&account, &request) {
            return Ok(PaymentResult::failed());
        }

        account.debit(request.amount);
        self.account_store.update(account).await?;

        Ok(PaymentResult::succeeded())
    }

    /// Scheme-specific rule, evaluated only after the capability check.
    /// FasterPayments requires the balance to strictly exceed the amount;
    /// Chaps requires a live account; Bacs has no additional restriction.
    fn account_can_make_payment(account: &Account, request: &PaymentRequest) -> bool {
        match request.scheme {
            PaymentScheme::FasterPayments => account.balance > Balance::new(request.amount),
            PaymentScheme::Chaps => account.status == AccountStatus::Live,
            PaymentScheme::Bacs => true,
        }
    }
}
