use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{Customer, Invoice, PaymentInfo};

/// Standard Iranian VAT rate, in percent.
pub const STANDARD_TAX_RATE: Decimal = dec!(9);

/// Date pattern used when none (or an invalid one) is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Owner-level settings a new draft invoice starts from.
///
/// Every field has a default, so a partial config file deserializes:
///
/// ```
/// use faktor::core::InvoiceDefaults;
///
/// let defaults: InvoiceDefaults = serde_json::from_str(r#"{ "taxPercent": "10" }"#).unwrap();
/// assert_eq!(defaults.date_format, "%Y/%m/%d");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceDefaults {
    /// Tax preset on new invoices. `None` starts without tax.
    pub tax_percent: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
    /// The owner's own card, preset on every new invoice.
    pub payment_info: PaymentInfo,
    /// `chrono` strftime pattern rendering today's date.
    pub date_format: String,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            tax_percent: Some(STANDARD_TAX_RATE),
            discount_percent: None,
            payment_info: PaymentInfo::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl InvoiceDefaults {
    pub fn with_payment_info(mut self, payment_info: PaymentInfo) -> Self {
        self.payment_info = payment_info;
        self
    }

    pub fn with_tax(mut self, percent: Option<Decimal>) -> Self {
        self.tax_percent = percent;
        self
    }

    /// A fresh draft dated today (local time).
    pub fn draft(&self, number: impl Into<String>) -> Invoice {
        self.draft_dated(number, self.today())
    }

    /// A fresh draft with an explicit date string.
    pub fn draft_dated(&self, number: impl Into<String>, date: impl Into<String>) -> Invoice {
        Invoice {
            number: number.into(),
            date: date.into(),
            customer: Customer::default(),
            services: Vec::new(),
            payment_info: self.payment_info.clone(),
            discount: self.discount_percent,
            tax: self.tax_percent,
            notes: None,
        }
    }

    /// Today's date rendered with `date_format`, falling back to
    /// [`DEFAULT_DATE_FORMAT`] when the pattern is invalid.
    pub fn today(&self) -> String {
        let items: Vec<Item<'_>> = StrftimeItems::new(&self.date_format).collect();
        let now = Local::now();
        if items.iter().any(|i| matches!(i, Item::Error)) {
            tracing::debug!(format = %self.date_format, "invalid date format, using default");
            return now.format(DEFAULT_DATE_FORMAT).to_string();
        }
        now.format_with_items(items.into_iter()).to_string()
    }
}
