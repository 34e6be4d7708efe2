use crate::domain::entity::Entity;
use crate::domain::payment::{Payment, PaymentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire form of a payment, as exchanged with clients.
///
/// Record metadata (`updated_at`, `deleted_at`) is never part of the wire
/// contract, and the identifier is serialized only once assigned. Every
/// other field falls back to its empty value when missing, so that an
/// incomplete request still deserializes and is then rejected by
/// [`Payment::validate`] with a message naming the offending field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WirePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
    #[serde(default)]
    pub beneficiary: Entity,
    #[serde(default)]
    pub debtor: Entity,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

impl From<Payment> for WirePayment {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            beneficiary: payment.beneficiary,
            debtor: payment.debtor,
            amount: payment.amount,
            currency: payment.currency,
            date: payment.date,
            description: payment.description,
        }
    }
}

impl From<WirePayment> for Payment {
    fn from(wire: WirePayment) -> Self {
        Self {
            id: wire.id,
            updated_at: None,
            deleted_at: None,
            beneficiary: wire.beneficiary,
            debtor: wire.debtor,
            amount: wire.amount,
            currency: wire.currency,
            date: wire.date,
            description: wire.description,
        }
    }
}
