use thiserror::Error;

/// Validation failure for a single [`Entity`](crate::domain::entity::Entity).
///
/// Fields are checked in declaration order and the first empty one wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("the entity's account number must not be empty")]
    EmptyAccountNumber,
    #[error("the entity's bank id must not be empty")]
    EmptyBankId,
    #[error("the entity's name must not be empty")]
    EmptyName,
}

/// Validation failure for a [`Payment`](crate::domain::payment::Payment).
///
/// A failing party is reported with its role ("beneficiary" or "debtor")
/// prefixed to the underlying entity message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("beneficiary: {0}")]
    Beneficiary(#[source] EntityError),
    #[error("debtor: {0}")]
    Debtor(#[source] EntityError),
    #[error("the amount must be positive")]
    NonPositiveAmount,
    #[error("the currency must not be empty")]
    EmptyCurrency,
    #[error("the date must not be empty")]
    MissingDate,
    #[error("the description must not be empty")]
    EmptyDescription,
}

/// Error reading or writing payment records at the crate boundary.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
