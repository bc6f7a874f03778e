#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any decodable form state must validate and total without panicking.
    if let Ok(invoice) = serde_json::from_slice::<faktor::core::Invoice>(data) {
        let report = invoice.validate();
        assert_eq!(report.is_valid(), report.errors.is_empty());
        let totals = invoice.totals();
        if report.is_valid() {
            assert!(totals.is_ok());
        }
    }
});
