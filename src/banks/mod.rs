//! Issuing-bank detection from card BINs and IBAN bank codes.
//!
//! # Example
//!
//! ```
//! use faktor::banks::*;
//!
//! let bank = detect_bank("6037-7012-3456-7896").unwrap();
//! assert_eq!(bank.bank, "Keshavarzi");
//!
//! let bank = detect_bank_from_iban("IR050170000000123456789012").unwrap();
//! assert_eq!(bank.bank, "Melli");
//! ```

mod table;

use serde::Serialize;

use crate::identifiers::{ascii_digits, iban_bank_code, is_valid_iranian_iban, normalize_digits};
use table::{BANK_BINS, IBAN_BANK_CODES};

/// An issuing bank as listed in the BIN table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankInfo {
    /// Bank name (transliterated).
    pub bank: &'static str,
    /// Bank name in Persian.
    pub bank_fa: &'static str,
    /// Example six-digit BINs for this issuer, formatted `NNNN-NN`.
    pub prefixes: &'static [&'static str],
    /// Logo asset path, if one ships with the application.
    pub logo: Option<&'static str>,
}

impl BankInfo {
    fn matches_bin6(&self, bin6: &str) -> bool {
        self.prefixes
            .iter()
            .any(|p| ascii_digits(p).get(..6) == Some(bin6))
    }
}

/// Identify the issuing bank of a (possibly formatted) card number.
///
/// Only whitespace and hyphens are removed; any other character stays in
/// place and stops a prefix from matching. The first four digits select the
/// candidate list. With several candidates
/// the first one whose six-digit example matches the card wins; when none
/// matches the first candidate is returned. Fewer than four digits or an
/// unknown prefix yields `None`.
pub fn detect_bank(card: &str) -> Option<&'static BankInfo> {
    let digits: String = normalize_digits(card)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let bin4 = digits.get(..4).filter(|b| b.bytes().all(|d| d.is_ascii_digit()))?;

    let Ok(idx) = BANK_BINS.binary_search_by(|(prefix, _)| (*prefix).cmp(bin4)) else {
        tracing::trace!(bin = bin4, "no bank registered for card prefix");
        return None;
    };
    let candidates = BANK_BINS[idx].1;

    if let [only] = candidates {
        return Some(only);
    }

    digits
        .get(..6)
        .and_then(|bin6| candidates.iter().find(|c| c.matches_bin6(bin6)))
        .or_else(|| candidates.first())
}

/// Identify the bank holding an Iranian IBAN from its bank code.
///
/// The IBAN must pass [`is_valid_iranian_iban`].
pub fn detect_bank_from_iban(iban: &str) -> Option<&'static BankInfo> {
    if !is_valid_iranian_iban(iban) {
        return None;
    }
    let code = iban_bank_code(iban)?;
    let idx = IBAN_BANK_CODES
        .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
        .ok()?;
    find_bank(IBAN_BANK_CODES[idx].1)
}

/// Look up a bank by its transliterated name (case-insensitive).
pub fn find_bank(name: &str) -> Option<&'static BankInfo> {
    banks().find(|b| b.bank.eq_ignore_ascii_case(name.trim()))
}

/// Every BIN table entry, in table order. Banks issuing under several
/// prefixes appear once per prefix.
pub fn banks() -> impl Iterator<Item = &'static BankInfo> {
    BANK_BINS.iter().flat_map(|(_, candidates)| candidates.iter())
}
