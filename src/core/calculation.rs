use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::FaktorError;
use super::types::Service;

/// Computed amounts for an invoice, all in whole Toman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Σ quantity × price.
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// subtotal − discount_amount.
    pub after_discount: Decimal,
    pub tax_amount: Decimal,
    /// after_discount + tax_amount.
    pub total: Decimal,
}

/// Round to whole Toman, half away from zero.
///
/// This is the only rounding step in the crate. Subtotal, discount and tax
/// are each rounded once; everything else is exact addition/subtraction.
pub fn round_toman(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// The percentage actually applied: absent, negative, or above 100 counts as 0.
///
/// Applies to discount and tax alike.
pub fn effective_percent(percent: Option<Decimal>) -> Decimal {
    match percent {
        Some(p) if p > Decimal::ZERO && p <= dec!(100) => p,
        _ => Decimal::ZERO,
    }
}

/// Σ quantity × price, rounded to whole Toman.
///
/// Fails with [`FaktorError::Overflow`] when a line total or the running sum
/// leaves the `Decimal` range.
pub fn calculate_subtotal(services: &[Service]) -> Result<Decimal, FaktorError> {
    let mut sum = Decimal::ZERO;
    for service in services {
        sum = service
            .line_total()
            .and_then(|line| sum.checked_add(line))
            .ok_or_else(|| overflow(format!("subtotal at service {}", service.id)))?;
    }
    Ok(round_toman(sum))
}

/// Discount on `subtotal` at `percent` percent.
pub fn calculate_discount(
    subtotal: Decimal,
    percent: Option<Decimal>,
) -> Result<Decimal, FaktorError> {
    apply_percent(subtotal, percent).ok_or_else(|| overflow("discount".into()))
}

/// Tax on the discounted amount at `percent` percent.
pub fn calculate_tax(
    after_discount: Decimal,
    percent: Option<Decimal>,
) -> Result<Decimal, FaktorError> {
    apply_percent(after_discount, percent).ok_or_else(|| overflow("tax".into()))
}

/// Total payable for a given subtotal, discount and tax percentage.
///
/// ```
/// use faktor::core::calculate_total;
/// use rust_decimal_macros::dec;
///
/// // 1000 − 10% = 900, + 9% = 981
/// assert_eq!(calculate_total(dec!(1000), dec!(10), dec!(9)).unwrap(), dec!(981));
/// ```
pub fn calculate_total(
    subtotal: Decimal,
    discount_percent: Decimal,
    tax_percent: Decimal,
) -> Result<Decimal, FaktorError> {
    let totals = totals_from_subtotal(
        round_toman(subtotal),
        Some(discount_percent),
        Some(tax_percent),
    )?;
    Ok(totals.total)
}

/// Full breakdown for a list of services.
pub fn calculate_totals(
    services: &[Service],
    discount_percent: Option<Decimal>,
    tax_percent: Option<Decimal>,
) -> Result<Totals, FaktorError> {
    totals_from_subtotal(calculate_subtotal(services)?, discount_percent, tax_percent)
}

fn totals_from_subtotal(
    subtotal: Decimal,
    discount_percent: Option<Decimal>,
    tax_percent: Option<Decimal>,
) -> Result<Totals, FaktorError> {
    let discount_amount = calculate_discount(subtotal, discount_percent)?;
    let after_discount = subtotal
        .checked_sub(discount_amount)
        .ok_or_else(|| overflow("amount after discount".into()))?;
    let tax_amount = calculate_tax(after_discount, tax_percent)?;
    let total = after_discount
        .checked_add(tax_amount)
        .ok_or_else(|| overflow("total".into()))?;
    Ok(Totals {
        subtotal,
        discount_amount,
        after_discount,
        tax_amount,
        total,
    })
}

// `percent / 100` is at most 1, so the product never exceeds `amount`.
fn apply_percent(amount: Decimal, percent: Option<Decimal>) -> Option<Decimal> {
    let rate = effective_percent(percent).checked_div(dec!(100))?;
    amount.checked_mul(rate).map(round_toman)
}

fn overflow(what: String) -> FaktorError {
    FaktorError::Overflow(format!("{what} exceeds the supported amount range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(quantity: Decimal, price: Decimal) -> Service {
        Service {
            id: 1,
            description: "Consulting".into(),
            additional_description: None,
            quantity,
            price,
        }
    }

    #[test]
    fn end_to_end_breakdown() {
        let totals = calculate_totals(
            &[service(dec!(2), dec!(500000))],
            Some(dec!(10)),
            Some(dec!(9)),
        )
        .unwrap();
        assert_eq!(totals.subtotal, dec!(1000000));
        assert_eq!(totals.discount_amount, dec!(100000));
        assert_eq!(totals.after_discount, dec!(900000));
        assert_eq!(totals.tax_amount, dec!(81000));
        assert_eq!(totals.total, dec!(981000));
    }

    #[test]
    fn no_discount_no_tax_is_identity() {
        assert_eq!(calculate_total(dec!(123456), dec!(0), dec!(0)).unwrap(), dec!(123456));
    }

    #[test]
    fn out_of_range_percentages_apply_nothing() {
        assert_eq!(calculate_discount(dec!(1000), Some(dec!(150))).unwrap(), dec!(0));
        assert_eq!(calculate_discount(dec!(1000), Some(dec!(-5))).unwrap(), dec!(0));
        assert_eq!(calculate_tax(dec!(1000), Some(dec!(101))).unwrap(), dec!(0));
        assert_eq!(calculate_tax(dec!(1000), Some(dec!(-1))).unwrap(), dec!(0));
        assert_eq!(calculate_tax(dec!(1000), None).unwrap(), dec!(0));
    }

    #[test]
    fn full_discount() {
        assert_eq!(calculate_total(dec!(5000), dec!(100), dec!(9)).unwrap(), dec!(0));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1.5 × 333 = 499.5 → 500
        assert_eq!(calculate_subtotal(&[service(dec!(1.5), dec!(333))]).unwrap(), dec!(500));
        // 9% of 1005 = 90.45 → 90
        assert_eq!(calculate_tax(dec!(1005), Some(dec!(9))).unwrap(), dec!(90));
        // 9% of 1050 = 94.5 → 95
        assert_eq!(calculate_tax(dec!(1050), Some(dec!(9))).unwrap(), dec!(95));
    }

    #[test]
    fn empty_services() {
        let totals = calculate_totals(&[], Some(dec!(10)), Some(dec!(9))).unwrap();
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn overflowing_line_is_an_error() {
        let huge = service(Decimal::from(u64::MAX), Decimal::from(u64::MAX));
        assert!(huge.line_total().is_none());
        assert!(matches!(
            calculate_subtotal(&[huge]),
            Err(FaktorError::Overflow(_))
        ));
    }

    #[test]
    fn overflowing_sum_is_an_error() {
        let big = service(dec!(1), Decimal::MAX);
        assert_eq!(calculate_subtotal(std::slice::from_ref(&big)).unwrap(), Decimal::MAX);
        let err = calculate_subtotal(&[big.clone(), big]).unwrap_err();
        assert!(err.to_string().contains("subtotal"));
    }

    #[test]
    fn overflowing_total_is_an_error() {
        // Discount and tax never exceed their base, but base + tax can.
        assert_eq!(calculate_tax(Decimal::MAX, Some(dec!(100))).unwrap(), Decimal::MAX);
        assert!(matches!(
            calculate_total(Decimal::MAX, dec!(0), dec!(9)),
            Err(FaktorError::Overflow(_))
        ));
        assert!(calculate_total(Decimal::MAX, dec!(50), dec!(9)).is_ok());
    }
}
