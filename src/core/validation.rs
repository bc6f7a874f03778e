use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::{ValidationError, ValidationErrorKind};
use super::types::*;
use crate::identifiers::{
    CARD_LENGTH, ascii_digits, is_iranian_iban_shape, is_valid_iranian_card,
    is_valid_iranian_iban, is_valid_iranian_phone,
};

/// Minimum length of an invoice number after trimming.
pub const MIN_NUMBER_LENGTH: usize = 3;

/// Outcome of validating an invoice: every failed rule, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors attached to exactly `field`.
    pub fn errors_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors_for(field).next().is_some()
    }

    /// `Ok(())` when valid, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Validate an invoice before save, preview, print or email.
///
/// Rules run independently and all failures are reported, ordered by rule
/// and, for services, by position then description/quantity/price.
pub fn validate_invoice(invoice: &Invoice) -> ValidationReport {
    let mut errors = Vec::new();

    let number = invoice.number.trim();
    if number.is_empty() {
        errors.push(ValidationError::required(
            "number",
            "invoice number is required",
        ));
    } else if number.chars().count() < MIN_NUMBER_LENGTH {
        errors.push(ValidationError::new(
            "number",
            format!("invoice number must be at least {MIN_NUMBER_LENGTH} characters"),
            ValidationErrorKind::TooShort,
        ));
    }

    if invoice.date.trim().is_empty() {
        errors.push(ValidationError::required("date", "invoice date is required"));
    }

    validate_customer(&invoice.customer, &mut errors);

    if invoice.services.is_empty() {
        errors.push(ValidationError::new(
            "services",
            "invoice must have at least one service",
            ValidationErrorKind::Empty,
        ));
    }
    // Running subtotal; `None` once an overflow has been reported.
    let mut subtotal = Some(Decimal::ZERO);
    for (i, service) in invoice.services.iter().enumerate() {
        let prefix = format!("services.{i}.");
        check_service(service, &prefix, &mut errors);
        subtotal = match (subtotal, service.line_total()) {
            (Some(sum), Some(line)) => {
                let next = sum.checked_add(line);
                if next.is_none() {
                    errors.push(ValidationError::new(
                        format!("{prefix}price"),
                        "subtotal exceeds the supported amount range",
                        ValidationErrorKind::OutOfRange,
                    ));
                }
                next
            }
            _ => None,
        };
    }

    validate_payment_info(&invoice.payment_info, &mut errors);

    check_percent(invoice.discount, "discount", &mut errors);
    check_percent(invoice.tax, "tax", &mut errors);

    // Tax can push a representable subtotal past the range.
    if subtotal.is_some() && invoice.totals().is_err() {
        errors.push(ValidationError::new(
            "tax",
            "total exceeds the supported amount range",
            ValidationErrorKind::OutOfRange,
        ));
    }

    tracing::debug!(
        number = %invoice.number,
        errors = errors.len(),
        "invoice validated"
    );

    ValidationReport { errors }
}

/// Line-entry validation for a single service, with bare field names
/// (`description`, `quantity`, `price`).
pub fn validate_service(service: &Service) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_service(service, "", &mut errors);
    errors
}

fn validate_customer(customer: &Customer, errors: &mut Vec<ValidationError>) {
    if customer.name.trim().is_empty() {
        errors.push(ValidationError::required(
            "customer.name",
            "customer name is required",
        ));
    }

    if let Some(phone) = present(&customer.phone) {
        if !is_valid_iranian_phone(phone) {
            errors.push(ValidationError::new(
                "customer.phone",
                "phone must be an 11-digit mobile number starting with 09",
                ValidationErrorKind::InvalidFormat,
            ));
        }
    }
}

fn check_service(service: &Service, prefix: &str, errors: &mut Vec<ValidationError>) {
    if service.description.trim().is_empty() {
        errors.push(ValidationError::required(
            format!("{prefix}description"),
            "service description is required",
        ));
    }

    if service.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}quantity"),
            "quantity must be greater than zero",
            ValidationErrorKind::NotPositive,
        ));
    }

    if service.price <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}price"),
            "price must be greater than zero",
            ValidationErrorKind::NotPositive,
        ));
    }

    if service.line_total().is_none() {
        errors.push(ValidationError::new(
            format!("{prefix}price"),
            "line total exceeds the supported amount range",
            ValidationErrorKind::OutOfRange,
        ));
    }
}

fn validate_payment_info(payment: &PaymentInfo, errors: &mut Vec<ValidationError>) {
    let card = payment.card_number.trim();
    if card.is_empty() {
        errors.push(ValidationError::required(
            "paymentInfo.cardNumber",
            "card number is required",
        ));
    } else if ascii_digits(card).len() != CARD_LENGTH {
        errors.push(ValidationError::new(
            "paymentInfo.cardNumber",
            format!("card number must have {CARD_LENGTH} digits"),
            ValidationErrorKind::InvalidFormat,
        ));
    } else if !is_valid_iranian_card(card) {
        errors.push(ValidationError::new(
            "paymentInfo.cardNumber",
            "card number check digit is invalid",
            ValidationErrorKind::InvalidChecksum,
        ));
    }

    if payment.card_holder_name.trim().is_empty() {
        errors.push(ValidationError::required(
            "paymentInfo.cardHolderName",
            "card holder name is required",
        ));
    }

    if let Some(iban) = present(&payment.iban) {
        if !is_iranian_iban_shape(iban) {
            errors.push(ValidationError::new(
                "paymentInfo.iban",
                "IBAN must be IR followed by 24 digits",
                ValidationErrorKind::InvalidFormat,
            ));
        } else if !is_valid_iranian_iban(iban) {
            errors.push(ValidationError::new(
                "paymentInfo.iban",
                "IBAN checksum is invalid",
                ValidationErrorKind::InvalidChecksum,
            ));
        }
    }
}

fn check_percent(percent: Option<Decimal>, field: &str, errors: &mut Vec<ValidationError>) {
    if let Some(p) = percent {
        if p < Decimal::ZERO || p > dec!(100) {
            errors.push(ValidationError::new(
                field,
                format!("{field} must be between 0 and 100"),
                ValidationErrorKind::OutOfRange,
            ));
        }
    }
}

/// Optional text that is neither absent nor blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;
    use rust_decimal_macros::dec;

    fn valid_invoice() -> Invoice {
        InvoiceBuilder::new("INV-001", "1403/07/22")
            .customer(CustomerBuilder::new("Sara Ahmadi").build())
            .add_service(ServiceBuilder::new(1, "Logo design", dec!(1), dec!(2500000)).build())
            .payment_info(PaymentInfoBuilder::new("6037991234567893", "Ali Rezaei").build())
            .build_unchecked()
    }

    fn fields(report: &ValidationReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_invoice_has_no_errors() {
        let report = validate_invoice(&valid_invoice());
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn number_required_and_min_length() {
        let mut inv = valid_invoice();
        inv.number = "   ".into();
        let report = validate_invoice(&inv);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::Required);

        inv.number = " 12 ".into();
        let report = validate_invoice(&inv);
        assert_eq!(fields(&report), ["number"]);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::TooShort);

        inv.number = "123".into();
        assert!(validate_invoice(&inv).is_valid());
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let mut inv = valid_invoice();
        inv.customer.phone = Some("  ".into());
        inv.payment_info.iban = Some(String::new());
        assert!(validate_invoice(&inv).is_valid());
    }

    #[test]
    fn empty_services() {
        let mut inv = valid_invoice();
        inv.services.clear();
        let report = validate_invoice(&inv);
        assert_eq!(fields(&report), ["services"]);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::Empty);
    }

    #[test]
    fn service_errors_in_field_order() {
        let mut inv = valid_invoice();
        inv.services.push(ServiceBuilder::new(2, "", dec!(0), dec!(-1)).build());
        let report = validate_invoice(&inv);
        assert_eq!(
            fields(&report),
            ["services.1.description", "services.1.quantity", "services.1.price"]
        );
    }

    #[test]
    fn card_shape_and_checksum_are_distinguished() {
        let mut inv = valid_invoice();
        inv.payment_info.card_number = "6037-9912-3456".into();
        assert_eq!(
            validate_invoice(&inv).errors[0].kind,
            ValidationErrorKind::InvalidFormat
        );

        inv.payment_info.card_number = "6037-9912-3456-7894".into();
        assert_eq!(
            validate_invoice(&inv).errors[0].kind,
            ValidationErrorKind::InvalidChecksum
        );
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        let mut inv = valid_invoice();
        inv.discount = Some(dec!(0));
        inv.tax = Some(dec!(100));
        assert!(validate_invoice(&inv).is_valid());

        inv.discount = Some(dec!(100.01));
        inv.tax = Some(dec!(-0.5));
        assert_eq!(fields(&validate_invoice(&inv)), ["discount", "tax"]);
    }

    #[test]
    fn line_entry_validation_uses_bare_fields() {
        let service = ServiceBuilder::new(1, "Hosting", dec!(1), dec!(0)).build();
        let errors = validate_service(&service);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn overflowing_line_is_out_of_range() {
        let mut inv = valid_invoice();
        inv.services.push(
            ServiceBuilder::new(2, "Big", Decimal::from(u64::MAX), Decimal::from(u64::MAX))
                .build(),
        );
        let report = validate_invoice(&inv);
        assert_eq!(fields(&report), ["services.1.price"]);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::OutOfRange);
        assert!(report.errors[0].message.starts_with("line total"));

        let errors = validate_service(&inv.services[1]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn overflowing_subtotal_is_reported_once() {
        let mut inv = valid_invoice();
        inv.services.clear();
        for id in 1..=3 {
            inv.services
                .push(ServiceBuilder::new(id, "Max", dec!(1), Decimal::MAX).build());
        }
        let report = validate_invoice(&inv);
        assert_eq!(fields(&report), ["services.1.price"]);
        assert!(report.errors[0].message.starts_with("subtotal"));
    }

    #[test]
    fn overflowing_tax_is_out_of_range() {
        let mut inv = valid_invoice();
        inv.services[0].price = Decimal::MAX;
        assert!(validate_invoice(&inv).is_valid());

        inv.tax = Some(dec!(9));
        let report = validate_invoice(&inv);
        assert_eq!(fields(&report), ["tax"]);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::OutOfRange);
        assert!(inv.totals().is_err());
    }

    #[test]
    fn report_serializes_is_valid_flag() {
        let json = serde_json::to_value(validate_invoice(&valid_invoice())).unwrap();
        assert_eq!(json, serde_json::json!({ "isValid": true, "errors": [] }));
    }
}
