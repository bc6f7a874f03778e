use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use faktor::banks;
use faktor::core::*;
use faktor::identifiers;

fn build_invoice(lines: u64) -> Invoice {
    let mut builder = InvoiceBuilder::new("INV-1403-900", "1403/07/22")
        .customer(
            CustomerBuilder::new("Benchmark Co.")
                .phone("09123456789")
                .build(),
        )
        .payment_info(
            PaymentInfoBuilder::new("6037-9912-3456-7893", "Ali Rezaei")
                .iban("IR062960000000100324200001")
                .build(),
        )
        .discount(dec!(5))
        .tax(dec!(9));

    for i in 1..=lines {
        builder = builder.add_service(
            ServiceBuilder::new(
                i,
                format!("Service item {i}"),
                dec!(3),
                Decimal::from(i * 12_500),
            )
            .build(),
        );
    }
    builder.build_unchecked()
}

fn bench_build_invoice(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_invoice(10)));
    });
}

fn bench_validate(c: &mut Criterion) {
    let invoice = build_invoice(10);
    c.bench_function("validate_invoice_10_lines", |b| {
        b.iter(|| black_box(validate_invoice(black_box(&invoice))));
    });
}

fn bench_totals(c: &mut Criterion) {
    let invoice = build_invoice(10);
    c.bench_function("totals_10_lines", |b| {
        b.iter(|| black_box(black_box(&invoice).totals()));
    });
}

fn bench_totals_1000_lines(c: &mut Criterion) {
    let invoice = build_invoice(1000);
    c.bench_function("totals_1000_lines", |b| {
        b.iter(|| black_box(black_box(&invoice).totals()));
    });
}

fn bench_card_checks(c: &mut Criterion) {
    c.bench_function("card_luhn", |b| {
        b.iter(|| {
            black_box(identifiers::is_valid_iranian_card(black_box(
                "6037-9912-3456-7893",
            )))
        });
    });
    c.bench_function("iban_mod97", |b| {
        b.iter(|| {
            black_box(identifiers::is_valid_iranian_iban(black_box(
                "IR062960000000100324200001",
            )))
        });
    });
}

fn bench_detect_bank(c: &mut Criterion) {
    c.bench_function("detect_bank_single", |b| {
        b.iter(|| black_box(banks::detect_bank(black_box("6104331234567890"))));
    });
    c.bench_function("detect_bank_shared_prefix", |b| {
        b.iter(|| black_box(banks::detect_bank(black_box("6393471234567890"))));
    });
}

criterion_group!(
    benches,
    bench_build_invoice,
    bench_validate,
    bench_totals,
    bench_totals_1000_lines,
    bench_card_checks,
    bench_detect_bank,
);
criterion_main!(benches);
