use serde::{Deserialize, Serialize};

use super::calculation::Totals;
use super::error::FaktorError;
use super::types::Invoice;
use super::validation;

/// A saved invoice: immutable, validated, with totals frozen at save time.
///
/// `id` is the opaque identifier assigned by the document store. To edit a
/// saved invoice, take a [`to_working_copy`](Self::to_working_copy), change
/// it, and seal it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    id: String,
    #[serde(flatten)]
    invoice: Invoice,
    totals: Totals,
}

impl InvoiceRecord {
    /// Validate `invoice` and freeze it under the store-assigned `id`.
    pub fn seal(id: impl Into<String>, invoice: Invoice) -> Result<Self, FaktorError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(FaktorError::Builder("record id must not be empty".into()));
        }
        validation::validate_invoice(&invoice)
            .into_result()
            .map_err(FaktorError::Validation)?;

        let totals = invoice.totals()?;
        tracing::debug!(
            id = %id,
            number = %invoice.number,
            total = %totals.total,
            "invoice sealed"
        );
        Ok(Self {
            id,
            invoice,
            totals,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn number(&self) -> &str {
        &self.invoice.number
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// A mutable copy for the invoice form.
    pub fn to_working_copy(&self) -> Invoice {
        self.invoice.clone()
    }

    /// Check that stored totals still follow from the stored services,
    /// e.g. after loading a record from the store.
    pub fn verify(&self) -> Result<(), FaktorError> {
        let expected = self.invoice.totals()?;
        if expected != self.totals {
            return Err(FaktorError::Serialization(format!(
                "stored total {} does not match computed total {} for record {}",
                self.totals.total, expected.total, self.id
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "json")]
impl InvoiceRecord {
    pub fn to_json(&self) -> Result<String, FaktorError> {
        serde_json::to_string(self).map_err(|e| FaktorError::Serialization(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, FaktorError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FaktorError::Serialization(e.to_string()))
    }

    /// Decode a stored record, rejecting totals that disagree with its services.
    pub fn from_json(json: &str) -> Result<Self, FaktorError> {
        let record: Self =
            serde_json::from_str(json).map_err(|e| FaktorError::Serialization(e.to_string()))?;
        record.verify()?;
        Ok(record)
    }
}
