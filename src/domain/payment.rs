use crate::domain::entity::Entity;
use crate::error::PaymentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a stored payment record.
///
/// Identifiers are assigned by the persistence layer that owns the records;
/// this crate never mints them. A freshly constructed payment has no id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PaymentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A payment made to one entity (the beneficiary) by another (the debtor).
///
/// Record metadata (`id`, `updated_at`, `deleted_at`) is owned by the
/// persistence layer; the model only carries it. The amount keeps the
/// floating-point semantics of the record contract.
#[derive(Debug, PartialEq, Clone)]
pub struct Payment {
    /// Record identifier; `None` until assigned externally.
    pub id: Option<PaymentId>,
    /// Last modification time, maintained by the persistence layer.
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete marker: set if and only if the record has been deleted.
    pub deleted_at: Option<DateTime<Utc>>,
    /// The entity that received the payment.
    pub beneficiary: Entity,
    /// The entity that sent the payment.
    pub debtor: Entity,
    /// Amount involved in the payment; must be strictly positive.
    pub amount: f64,
    /// Currency in which the payment was made.
    pub currency: String,
    /// Date at which the payment was processed; `None` means unset.
    pub date: Option<DateTime<Utc>>,
    /// Description associated with the payment. Documented upstream as
    /// optional, but validation requires it to be non-empty; the enforced
    /// rule is kept.
    pub description: String,
}

impl Payment {
    /// Creates a payment with no record metadata attached.
    pub fn new(
        beneficiary: Entity,
        debtor: Entity,
        amount: f64,
        currency: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            updated_at: None,
            deleted_at: None,
            beneficiary,
            debtor,
            amount,
            currency: currency.into(),
            date: Some(date),
            description: description.into(),
        }
    }

    /// Whether the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Checks the payment and both of its parties.
    ///
    /// The order is fixed: beneficiary, debtor, amount, currency, date,
    /// description. The first failing check is reported and the rest are
    /// skipped. Pure check; the payment is not mutated.
    pub fn validate(&self) -> Result<(), PaymentError> {
        self.beneficiary
            .validate()
            .map_err(PaymentError::Beneficiary)?;
        self.debtor.validate().map_err(PaymentError::Debtor)?;
        // NaN must not slip through the positivity check.
        if self.amount <= 0.0 || self.amount.is_nan() {
            return Err(PaymentError::NonPositiveAmount);
        }
        if self.currency.is_empty() {
            return Err(PaymentError::EmptyCurrency);
        }
        if self.date.is_none() {
            return Err(PaymentError::MissingDate);
        }
        if self.description.is_empty() {
            return Err(PaymentError::EmptyDescription);
        }
        Ok(())
    }
}
