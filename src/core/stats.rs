use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculation::round_toman;
use super::error::FaktorError;
use super::types::Invoice;

/// Dashboard figures over a set of invoices.
///
/// Revenue figures are sums of each invoice's [`Invoice::totals`], so they
/// always agree with what was printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub invoice_count: usize,
    pub total_revenue: Decimal,
    /// Mean invoice total, whole Toman. Zero when there are no invoices.
    pub average_invoice: Decimal,
    /// Distinct customers by trimmed name.
    pub customer_count: usize,
    /// `(customer, revenue)` sorted by revenue descending, then name.
    pub revenue_by_customer: Vec<(String, Decimal)>,
}

impl InvoiceStats {
    /// Fails with [`FaktorError::Overflow`] if an invoice total or a revenue
    /// sum leaves the `Decimal` range.
    pub fn from_invoices<'a>(
        invoices: impl IntoIterator<Item = &'a Invoice>,
    ) -> Result<Self, FaktorError> {
        let mut invoice_count = 0;
        let mut total_revenue = Decimal::ZERO;
        let mut by_customer: BTreeMap<String, Decimal> = BTreeMap::new();

        for invoice in invoices {
            let total = invoice.totals()?.total;
            invoice_count += 1;
            total_revenue = add_revenue(total_revenue, total)?;
            let customer = by_customer
                .entry(invoice.customer.name.trim().to_string())
                .or_insert(Decimal::ZERO);
            *customer = add_revenue(*customer, total)?;
        }

        let average_invoice = if invoice_count == 0 {
            Decimal::ZERO
        } else {
            round_toman(total_revenue / Decimal::from(invoice_count))
        };

        let customer_count = by_customer.len();
        let mut revenue_by_customer: Vec<_> = by_customer.into_iter().collect();
        revenue_by_customer.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(Self {
            invoice_count,
            total_revenue,
            average_invoice,
            customer_count,
            revenue_by_customer,
        })
    }
}

fn add_revenue(sum: Decimal, total: Decimal) -> Result<Decimal, FaktorError> {
    sum.checked_add(total)
        .ok_or_else(|| FaktorError::Overflow("revenue exceeds the supported amount range".into()))
}
