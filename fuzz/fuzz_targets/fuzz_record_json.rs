#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Stored records either load with consistent totals or fail cleanly.
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(record) = faktor::core::InvoiceRecord::from_json(json) {
            assert!(record.verify().is_ok());
        }
    }
});
