use faktor::core::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), FaktorError> {
    let invoice = InvoiceBuilder::new("INV-1403-007", "1403/08/01")
        .customer(CustomerBuilder::new("Maryam Karimi").build())
        .add_service(ServiceBuilder::new(1, "Logo design", dec!(1), dec!(3500000)).build())
        .payment_info(PaymentInfoBuilder::new("6104331234567890", "Maryam Karimi").build())
        .tax(dec!(9))
        .build()?;

    // The store assigns the id on first save
    let record = InvoiceRecord::seal("66a0f3b2c9e1", invoice)?;
    let json = record.to_json_pretty()?;
    println!("{json}");

    // Editing goes through a working copy and a fresh seal
    let loaded = InvoiceRecord::from_json(&json)?;
    let mut copy = loaded.to_working_copy();
    let mut ids = ServiceIdSource::after(&copy.services);
    copy.add_service(&mut ids, "Brand guide", dec!(1), dec!(1500000))?;
    let updated = InvoiceRecord::seal(loaded.id(), copy)?;

    println!(
        "\n{}: {} -> {} Toman",
        updated.number(),
        loaded.totals().total,
        updated.totals().total
    );
    Ok(())
}
