use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("account store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
