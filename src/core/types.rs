use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculation::{self, Totals};
use super::error::FaktorError;
use super::numbering::ServiceIdSource;
use super::validation::{self, ValidationReport};

/// An invoice as edited in the form and sent to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Business-facing invoice number (unique per owner, enforced by storage).
    pub number: String,
    /// Locale-formatted issue date. Never parsed.
    pub date: String,
    pub customer: Customer,
    /// Line items in display order.
    #[serde(default)]
    pub services: Vec<Service>,
    pub payment_info: PaymentInfo,
    /// Discount percentage (0–100). `None` means no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    /// Tax percentage (0–100). `None` means no tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The invoiced customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Iranian mobile number (`09xxxxxxxxx`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A line item. Prices are whole Toman.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Identifier unique within the invoice.
    pub id: u64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_description: Option<String>,
    pub quantity: Decimal,
    /// Unit price in Toman.
    pub price: Decimal,
}

impl Service {
    /// `quantity × price`, unrounded. `None` if the product overflows.
    pub fn line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.price)
    }
}

/// Card the customer pays to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// 16-digit card number, optionally hyphen or space separated.
    pub card_number: String,
    pub card_holder_name: String,
    /// Detected from the card BIN or entered manually.
    #[serde(default)]
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

impl PaymentInfo {
    /// Fill `bank_name` and `bank_logo` from the card BIN.
    ///
    /// Returns `false` and leaves both fields untouched when the BIN is
    /// unknown, so a manually entered bank survives.
    #[cfg(feature = "banks")]
    pub fn apply_detected_bank(&mut self) -> bool {
        match crate::banks::detect_bank(&self.card_number) {
            Some(info) => {
                self.bank_name = info.bank.to_string();
                self.bank_logo = info.logo.map(String::from);
                true
            }
            None => false,
        }
    }
}

impl Invoice {
    /// Effective discount percentage; absent means 0.
    pub fn discount_percent(&self) -> Decimal {
        self.discount.unwrap_or(Decimal::ZERO)
    }

    /// Effective tax percentage; absent means 0.
    pub fn tax_percent(&self) -> Decimal {
        self.tax.unwrap_or(Decimal::ZERO)
    }

    /// Subtotal, discount, tax and total for the current services.
    ///
    /// Fails with [`FaktorError::Overflow`] only for amounts the validator
    /// also rejects.
    pub fn totals(&self) -> Result<Totals, FaktorError> {
        calculation::calculate_totals(&self.services, self.discount, self.tax)
    }

    /// Run every invoice rule and collect the failures.
    pub fn validate(&self) -> ValidationReport {
        validation::validate_invoice(self)
    }

    pub fn service(&self, id: u64) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Append a line item, assigning it the next id from `ids`.
    /// Returns the assigned id, or a numbering error once `ids` is exhausted.
    pub fn add_service(
        &mut self,
        ids: &mut ServiceIdSource,
        description: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<u64, FaktorError> {
        let id = ids.next_id()?;
        self.services.push(Service {
            id,
            description: description.into(),
            additional_description: None,
            quantity,
            price,
        });
        Ok(id)
    }

    /// Replace the line item with `service.id`, keeping its position.
    pub fn update_service(&mut self, service: Service) -> Result<(), FaktorError> {
        let slot = self
            .services
            .iter_mut()
            .find(|s| s.id == service.id)
            .ok_or(FaktorError::ServiceNotFound(service.id))?;
        *slot = service;
        Ok(())
    }

    /// Edit the line item `id` in place.
    pub fn edit_service(
        &mut self,
        id: u64,
        edit: impl FnOnce(&mut Service),
    ) -> Result<(), FaktorError> {
        let slot = self
            .services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(FaktorError::ServiceNotFound(id))?;
        edit(slot);
        // The id is the lookup key; keep it stable.
        slot.id = id;
        Ok(())
    }

    /// Remove and return the line item `id`.
    pub fn remove_service(&mut self, id: u64) -> Result<Service, FaktorError> {
        let idx = self
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or(FaktorError::ServiceNotFound(id))?;
        Ok(self.services.remove(idx))
    }
}
