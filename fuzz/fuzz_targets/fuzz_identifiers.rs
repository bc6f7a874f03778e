#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = faktor::identifiers::is_valid_iranian_card(s);
        let _ = faktor::identifiers::mask_card_number(s);
        let _ = faktor::identifiers::iban_bank_code(s);
        let _ = faktor::identifiers::is_valid_iranian_phone(s);
        let _ = faktor::identifiers::is_valid_email(s);

        // A valid IBAN must survive formatting.
        if faktor::identifiers::is_valid_iranian_iban(s) {
            let formatted = faktor::identifiers::format_iban(s);
            assert!(faktor::identifiers::is_valid_iranian_iban(&formatted));
        }
        let _ = faktor::banks::detect_bank(s);
    }
});
