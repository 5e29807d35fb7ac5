//! HTTP adapter for payment submission.
//!
//! The transport responsibility is deliberately small: combine the path
//! segment with the JSON body into a `PaymentRequest`, invoke the service,
//! and map the outcome to a status code with an empty body. A malformed body
//! or an unknown scheme string is rejected by the JSON extractor before the
//! core runs, which keeps enumeration mismatches distinct from failed
//! payments.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, post, web};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error};

use crate::application::service::PaymentService;
use crate::domain::payment::{PaymentRequest, PaymentScheme};
use crate::error::PaymentError;

/// JSON body of a payment submission. The debtor account number travels in
/// the path, not the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakePaymentBody {
    pub creditor_account_number: String,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub payment_scheme: PaymentScheme,
}

impl ResponseError for PaymentError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "payment processing failed");
        HttpResponse::new(self.status_code())
    }
}

/// Submits a single-debit payment for the debtor account in the path.
/// Returns 200 with an empty body on acceptance and 400 with an empty body
/// on any business rejection; callers cannot discriminate the cause.
#[post("/customers/{debtor_account_number}/makePayment")]
pub async fn make_payment(
    service: web::Data<PaymentService>,
    path: web::Path<String>,
    body: web::Json<MakePaymentBody>,
) -> Result<HttpResponse, PaymentError> {
    let debtor_account_number = path.into_inner();
    let body = body.into_inner();

    let request = PaymentRequest {
        creditor_account_number: body.creditor_account_number,
        debtor_account_number,
        amount: body.amount,
        payment_date: body.payment_date,
        scheme: body.payment_scheme,
    };

    let result = service.make_payment(request).await?;
    if result.success {
        Ok(HttpResponse::Ok().finish())
    } else {
        debug!("payment rejected");
        Ok(HttpResponse::BadRequest().finish())
    }
}

/// Registers the payment routes on an actix app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(make_payment);
}
