use crate::domain::entity::Entity;
use crate::domain::payment::{Payment, PaymentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage form of a payment, one document per record.
///
/// The identifier is stored under the `_id` key and omitted until the
/// persistence layer assigns one. Unlike the wire form, record metadata
/// (`updated_at`, `deleted_at`) travels with the document; `deleted_at`
/// stays null until the record is soft-deleted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
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

impl From<Payment> for PaymentDocument {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            updated_at: payment.updated_at,
            deleted_at: payment.deleted_at,
            beneficiary: payment.beneficiary,
            debtor: payment.debtor,
            amount: payment.amount,
            currency: payment.currency,
            date: payment.date,
            description: payment.description,
        }
    }
}

impl From<PaymentDocument> for Payment {
    fn from(document: PaymentDocument) -> Self {
        Self {
            id: document.id,
            updated_at: document.updated_at,
            deleted_at: document.deleted_at,
            beneficiary: document.beneficiary,
            debtor: document.debtor,
            amount: document.amount,
            currency: document.currency,
            date: document.date,
            description: document.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored_payment() -> Payment {
        let mut payment = Payment::new(
            Entity::new("GB33BUKB20201555555555", "403000", "Wilfred Owens"),
            Entity::new("GB29XABC10161234567801", "203301", "Emelia Brown"),
            100.21,
            "GBP",
            Utc.with_ymd_and_hms(2019, 7, 1, 0, 0, 0).unwrap(),
            "Payment for piano lessons",
        );
        payment.id = Some(PaymentId::from("5d12fce6ceb38b9ce2d4ab9a"));
        payment.updated_at = Some(Utc.with_ymd_and_hms(2019, 7, 2, 9, 30, 0).unwrap());
        payment
    }

    #[test]
    fn test_id_stored_under_underscore_key() {
        let json = serde_json::to_string(&PaymentDocument::from(stored_payment())).unwrap();
        assert!(json.contains(r#""_id":"5d12fce6ceb38b9ce2d4ab9a""#));
        assert!(!json.contains(r#""id":"#));
    }

    #[test]
    fn test_id_omitted_until_assigned() {
        let mut payment = stored_payment();
        payment.id = None;

        let json = serde_json::to_string(&PaymentDocument::from(payment)).unwrap();
        assert!(!json.contains("_id"));
    }

    #[test]
    fn test_record_metadata_stored_with_document() {
        let json = serde_json::to_string(&PaymentDocument::from(stored_payment())).unwrap();
        assert!(json.contains(r#""updated_at":"2019-07-02T09:30:00Z""#));
        // Not deleted yet: the key is still present, as null.
        assert!(json.contains(r#""deleted_at":null"#));
    }

    #[test]
    fn test_document_roundtrip_preserves_metadata() {
        let mut payment = stored_payment();
        payment.deleted_at = Some(Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap());

        let json = serde_json::to_string(&PaymentDocument::from(payment.clone())).unwrap();
        let back = Payment::from(serde_json::from_str::<PaymentDocument>(&json).unwrap());

        assert_eq!(back, payment);
        assert!(back.is_deleted());
    }

    #[test]
    fn test_document_validates_like_its_payment() {
        let document = PaymentDocument::from(stored_payment());
        assert!(Payment::from(document).validate().is_ok());

        let mut broken = stored_payment();
        broken.currency.clear();
        let document = PaymentDocument::from(broken);
        assert_eq!(
            Payment::from(document).validate().unwrap_err().to_string(),
            "the currency must not be empty"
        );
    }
}
