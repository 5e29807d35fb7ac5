use chrono::Utc;
use paygate::application::service::PaymentService;
use paygate::domain::account::{Account, AccountStatus, Balance, SchemeSet};
use paygate::domain::payment::{PaymentRequest, PaymentScheme};
use paygate::domain::ports::AccountStore;
use paygate::infrastructure::in_memory::InMemoryAccountStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn request(scheme: PaymentScheme, amount: Decimal) -> PaymentRequest {
    PaymentRequest {
        creditor_account_number: "CreditorId".to_string(),
        debtor_account_number: "DebtorId".to_string(),
        amount,
        payment_date: Utc::now(),
        scheme,
    }
}

async fn faster_payments_service(balance: Decimal) -> (PaymentService, InMemoryAccountStore) {
    let store = InMemoryAccountStore::new();
    store
        .update(Account {
            account_number: "DebtorId".to_string(),
            allowed_schemes: SchemeSet::from([PaymentScheme::FasterPayments]),
            balance: Balance::new(balance),
            status: AccountStatus::Live,
        })
        .await
        .unwrap();
    let service = PaymentService::new(Box::new(store.clone()));
    (service, store)
}

#[tokio::test]
async fn test_faster_payments_equal_balance_rejected() {
    // Strictly-greater rule: an amount exactly equal to the balance fails
    let (service, store) = faster_payments_service(dec!(10.50)).await;

    let result = service
        .make_payment(request(PaymentScheme::FasterPayments, dec!(10.50)))
        .await
        .unwrap();

    assert!(!result.success);
    let stored = store.get("DebtorId").await.unwrap().unwrap();
    assert_eq!(stored.balance, Balance::new(dec!(10.50)));
}

#[tokio::test]
async fn test_faster_payments_one_penny_above_succeeds() {
    let (service, store) = faster_payments_service(dec!(10.51)).await;

    let result = service
        .make_payment(request(PaymentScheme::FasterPayments, dec!(10.50)))
        .await
        .unwrap();

    assert!(result.success);
    let stored = store.get("DebtorId").await.unwrap().unwrap();
    assert_eq!(stored.balance, Balance::new(dec!(0.01)));
}

#[tokio::test]
async fn test_debit_is_decimal_exact() {
    let (service, store) = faster_payments_service(dec!(1000000.0001)).await;

    let result = service
        .make_payment(request(PaymentScheme::FasterPayments, dec!(0.0001)))
        .await
        .unwrap();

    assert!(result.success);
    let stored = store.get("DebtorId").await.unwrap().unwrap();
    assert_eq!(stored.balance, Balance::new(dec!(1000000.0000)));
}

// The service performs no positivity check on the amount. The two tests
// below pin the current behaviour: a negative amount passes every rule
// except the FasterPayments inequality and increases the balance.

#[tokio::test]
async fn test_negative_amount_increases_balance_on_bacs() {
    let store = InMemoryAccountStore::new();
    store
        .update(Account {
            account_number: "DebtorId".to_string(),
            allowed_schemes: SchemeSet::from([PaymentScheme::Bacs]),
            balance: Balance::new(dec!(20)),
            status: AccountStatus::Live,
        })
        .await
        .unwrap();
    let service = PaymentService::new(Box::new(store.clone()));

    let result = service
        .make_payment(request(PaymentScheme::Bacs, dec!(-10)))
        .await
        .unwrap();

    assert!(result.success);
    let stored = store.get("DebtorId").await.unwrap().unwrap();
    assert_eq!(stored.balance, Balance::new(dec!(30)));
}

#[tokio::test]
async fn test_negative_amount_passes_faster_payments_inequality() {
    // balance 0 > amount -10, so the sufficiency rule passes
    let (service, store) = faster_payments_service(dec!(0)).await;

    let result = service
        .make_payment(request(PaymentScheme::FasterPayments, dec!(-10)))
        .await
        .unwrap();

    assert!(result.success);
    let stored = store.get("DebtorId").await.unwrap().unwrap();
    assert_eq!(stored.balance, Balance::new(dec!(10)));
}
