//! Payment and contact identifier validators.
//!
//! Every validator is a total function: malformed input yields `false`,
//! never a panic or an error. Persian and Arabic-Indic digits are accepted
//! wherever ASCII digits are.
//!
//! # Example
//!
//! ```
//! use faktor::identifiers::*;
//!
//! assert!(is_valid_iranian_card("6037-9912-3456-7893"));
//! assert!(is_valid_iranian_iban("IR06 2960 0000 0010 0324 2000 01"));
//! assert!(is_valid_iranian_phone("۰۹۱۲۳۴۵۶۷۸۹"));
//! assert!(is_valid_email("sara@example.ir"));
//! ```

mod card;
mod digits;
mod email;
mod iban;
mod phone;

pub use card::{
    CARD_LENGTH, format_card_number, is_valid_iranian_card, luhn_check_digit, luhn_valid,
    mask_card_number,
};
pub use digits::{ascii_digits, normalize_digits};
pub use email::is_valid_email;
pub use iban::{
    IBAN_LENGTH, format_iban, iban_bank_code, is_iranian_iban_shape, is_valid_iranian_iban,
    normalize_iban,
};
pub use phone::{PHONE_LENGTH, is_valid_iranian_phone, normalize_phone};
