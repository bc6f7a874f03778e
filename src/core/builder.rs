use rust_decimal::Decimal;

use super::error::FaktorError;
use super::types::*;
use super::validation;

/// Upper bound on line items per invoice.
pub const MAX_SERVICES: usize = 1_000;
/// Upper bound on invoice number length.
pub const MAX_NUMBER_LENGTH: usize = 64;

/// Builder for constructing valid invoices.
///
/// ```
/// use faktor::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("INV-1403-001", "1403/07/22")
///     .customer(CustomerBuilder::new("Sara Ahmadi").company("Ahmadi & Co").build())
///     .add_service(ServiceBuilder::new(1, "Hosting", dec!(12), dec!(150000)).build())
///     .payment_info(PaymentInfoBuilder::new("6104-3312-3456-7890", "Ali Rezaei").build())
///     .tax(dec!(9))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.totals().unwrap().total, dec!(1962000));
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    number: String,
    date: String,
    customer: Customer,
    services: Vec<Service>,
    payment_info: PaymentInfo,
    discount: Option<Decimal>,
    tax: Option<Decimal>,
    notes: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            date: date.into(),
            customer: Customer::default(),
            services: Vec::new(),
            payment_info: PaymentInfo::default(),
            discount: None,
            tax: None,
            notes: None,
        }
    }

    /// Start from an existing invoice, e.g. a stored record being edited.
    pub fn from_invoice(invoice: Invoice) -> Self {
        Self {
            number: invoice.number,
            date: invoice.date,
            customer: invoice.customer,
            services: invoice.services,
            payment_info: invoice.payment_info,
            discount: invoice.discount,
            tax: invoice.tax,
            notes: invoice.notes,
        }
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn add_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.services.extend(services);
        self
    }

    pub fn payment_info(mut self, payment_info: PaymentInfo) -> Self {
        self.payment_info = payment_info;
        self
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount = Some(percent);
        self
    }

    pub fn tax(mut self, percent: Decimal) -> Self {
        self.tax = Some(percent);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, FaktorError> {
        if self.services.len() > MAX_SERVICES {
            return Err(FaktorError::Builder(format!(
                "invoice cannot have more than {MAX_SERVICES} services"
            )));
        }
        if self.number.chars().count() > MAX_NUMBER_LENGTH {
            return Err(FaktorError::Builder(format!(
                "invoice number cannot exceed {MAX_NUMBER_LENGTH} characters"
            )));
        }

        let invoice = self.build_unchecked();
        let report = validation::validate_invoice(&invoice);
        if !report.is_valid() {
            tracing::debug!(
                number = %invoice.number,
                errors = report.errors.len(),
                "invoice build rejected"
            );
            return Err(FaktorError::Validation(report.errors));
        }

        Ok(invoice)
    }

    /// Build without validation, e.g. for the in-progress form state.
    pub fn build_unchecked(self) -> Invoice {
        Invoice {
            number: self.number,
            date: self.date,
            customer: self.customer,
            services: self.services,
            payment_info: self.payment_info,
            discount: self.discount,
            tax: self.tax,
            notes: self.notes,
        }
    }
}

/// Builder for [`Customer`].
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    customer: Customer,
}

impl CustomerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            customer: Customer {
                name: name.into(),
                ..Customer::default()
            },
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.customer.company = Some(company.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.customer.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.customer.address = Some(address.into());
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }
}

/// Builder for [`Service`] line items.
#[derive(Debug, Clone)]
pub struct ServiceBuilder {
    service: Service,
}

impl ServiceBuilder {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            service: Service {
                id,
                description: description.into(),
                additional_description: None,
                quantity,
                price,
            },
        }
    }

    pub fn additional_description(mut self, text: impl Into<String>) -> Self {
        self.service.additional_description = Some(text.into());
        self
    }

    pub fn build(self) -> Service {
        self.service
    }
}

/// Builder for [`PaymentInfo`].
#[derive(Debug, Clone)]
pub struct PaymentInfoBuilder {
    payment: PaymentInfo,
}

impl PaymentInfoBuilder {
    pub fn new(card_number: impl Into<String>, card_holder_name: impl Into<String>) -> Self {
        Self {
            payment: PaymentInfo {
                card_number: card_number.into(),
                card_holder_name: card_holder_name.into(),
                ..PaymentInfo::default()
            },
        }
    }

    /// Set the bank manually.
    pub fn bank(mut self, name: impl Into<String>, logo: Option<String>) -> Self {
        self.payment.bank_name = name.into();
        self.payment.bank_logo = logo;
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.payment.iban = Some(iban.into());
        self
    }

    /// Fill the bank from the card BIN, if it is known.
    #[cfg(feature = "banks")]
    pub fn detect_bank(mut self) -> Self {
        self.payment.apply_detected_bank();
        self
    }

    pub fn build(self) -> PaymentInfo {
        self.payment
    }
}
