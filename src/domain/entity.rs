use crate::error::EntityError;
use serde::{Deserialize, Serialize};

/// A party involved in a payment, either as beneficiary or debtor.
///
/// The wire and storage representations use the same keys for entities, so
/// a single serde derive serves both. The struct is immutable by
/// convention: construct it, validate it, read it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Entity {
    /// Account number of the party's financial account.
    pub account_number: String,
    /// Identifier of the party's financial institution.
    pub bank_id: String,
    /// Display name of the party.
    pub name: String,
}

impl Entity {
    /// Creates an entity from its three identifying fields.
    pub fn new(
        account_number: impl Into<String>,
        bank_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            bank_id: bank_id.into(),
            name: name.into(),
        }
    }

    /// Checks that all three fields are present.
    ///
    /// Fields are checked in order (account number, bank id, name) and the
    /// first empty one is reported. Pure check; safe to call any number of
    /// times.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.account_number.is_empty() {
            return Err(EntityError::EmptyAccountNumber);
        }
        if self.bank_id.is_empty() {
            return Err(EntityError::EmptyBankId);
        }
        if self.name.is_empty() {
            return Err(EntityError::EmptyName);
        }
        Ok(())
    }
}
