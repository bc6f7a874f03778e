use faktor::banks;
use faktor::identifiers::*;

fn main() {
    let cards = [
        "6037-9912-3456-7893",
        "6037-7012-3456-7896",
        "6219 8612 3456 7898",
        "۶۱۰۴۳۳۱۲۳۴۵۶۷۸۹۰",
        "6037-9912-3456-7894",
        "1234-5678-9012-3452",
    ];

    for card in cards {
        let valid = if is_valid_iranian_card(card) { "valid" } else { "invalid" };
        let bank = banks::detect_bank(card).map_or("unknown bank", |b| b.bank);
        println!("{:<22} {:<8} {}", mask_card_number(card), valid, bank);
    }

    println!();
    for iban in ["IR050170000000123456789012", "IR062960000000100324200002"] {
        match banks::detect_bank_from_iban(iban) {
            Some(b) => println!("{}  {} ({})", format_iban(iban), b.bank, b.bank_fa),
            None if is_valid_iranian_iban(iban) => {
                println!("{}  valid, bank code not listed", format_iban(iban))
            }
            None => println!("{}  invalid", format_iban(iban)),
        }
    }
}
