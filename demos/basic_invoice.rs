use faktor::core::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), FaktorError> {
    // Owner settings: standard 9% tax, the owner's card preset on every draft
    let defaults = InvoiceDefaults::default().with_payment_info(
        PaymentInfoBuilder::new("6037-9912-3456-7893", "Ali Rezaei")
            .bank("Melli", Some("/banks/melli.svg".into()))
            .iban("IR06 2960 0000 0010 0324 2000 01")
            .build(),
    );

    let mut numbers = InvoiceNumberSequence::new("INV-", 1403).resume_after(["INV-1403-041"]);
    let mut invoice = defaults.draft_dated(numbers.issue()?, "1403/07/22");

    invoice.customer = CustomerBuilder::new("Sara Ahmadi")
        .company("Ahmadi Design Studio")
        .phone("0912 345 6789")
        .build();
    invoice.discount = Some(dec!(10));

    let mut ids = ServiceIdSource::new();
    invoice.add_service(&mut ids, "Website design", dec!(1), dec!(4500000))?;
    invoice.add_service(&mut ids, "Hosting (12 months)", dec!(12), dec!(150000))?;

    let report = invoice.validate();
    if !report.is_valid() {
        for e in &report.errors {
            println!("  {e}");
        }
        return Ok(());
    }

    let totals = invoice.totals()?;
    println!("Invoice:  {}", invoice.number);
    println!("Date:     {}", invoice.date);
    println!("Customer: {}", invoice.customer.name);
    println!("---");
    for s in &invoice.services {
        println!(
            "  {} x {} @ {} = {}",
            s.quantity,
            s.description,
            s.price,
            s.line_total().unwrap_or_default()
        );
    }
    println!("---");
    println!("Subtotal: {} Toman", totals.subtotal);
    println!("Discount: {} Toman", totals.discount_amount);
    println!("Tax:      {} Toman", totals.tax_amount);
    println!("Total:    {} Toman", totals.total);
    println!(
        "Pay to:   {} ({})",
        invoice.payment_info.card_number, invoice.payment_info.bank_name
    );
    Ok(())
}
