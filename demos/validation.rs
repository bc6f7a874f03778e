use faktor::core::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), FaktorError> {
    // ── 1. Form with several problems ────────────────────────────────
    println!("=== Invoice Validation ===");
    let invoice = InvoiceBuilder::new("7", "1403/07/22")
        .customer(CustomerBuilder::new("Sara").phone("0912345678").build())
        .add_service(ServiceBuilder::new(1, "Design", dec!(0), dec!(100)).build())
        .payment_info(
            PaymentInfoBuilder::new("6037 9912 3456", "Ali")
                .iban("IR12")
                .build(),
        )
        .tax(dec!(120))
        .build_unchecked();

    let report = invoice.validate();
    for e in &report.errors {
        println!("  [{:?}] {e}", e.kind);
    }

    // An out-of-range tax is reported but never applied
    println!("  Total while editing: {} Toman", invoice.totals()?.total);

    // ── 2. Single line entry ─────────────────────────────────────────
    println!("\n=== Service Entry ===");
    let errors = validate_service(&ServiceBuilder::new(2, "", dec!(1), dec!(-5)).build());
    for e in &errors {
        println!("  {e}");
    }

    // ── 3. build() collects every error ──────────────────────────────
    println!("\n=== Builder ===");
    match InvoiceBuilder::new("INV-1403-002", "1403/07/22").build() {
        Ok(_) => println!("  unexpectedly valid"),
        Err(e) => println!("  {e}"),
    }
    Ok(())
}
