use super::card::group_digits;
use super::digits::normalize_digits;

/// Length of an Iranian IBAN: `IR`, two check digits, 22 BBAN digits.
pub const IBAN_LENGTH: usize = 26;

/// Strip whitespace and uppercase an IBAN, normalizing Persian digits.
pub fn normalize_iban(iban: &str) -> String {
    normalize_digits(iban)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check whether `iban` is a valid Iranian IBAN (`IR` + 24 digits, ISO 7064
/// mod-97 checksum equal to 1).
pub fn is_valid_iranian_iban(iban: &str) -> bool {
    let iban = normalize_iban(iban);
    has_iranian_shape(&iban) && mod97(&rearrange(&iban)) == Some(1)
}

/// Three-digit bank code following `IRkk`, if `iban` has the Iranian shape.
///
/// The checksum is not verified here.
pub fn iban_bank_code(iban: &str) -> Option<String> {
    let iban = normalize_iban(iban);
    has_iranian_shape(&iban).then(|| iban[4..7].to_string())
}

/// Print format: groups of four separated by spaces
/// (`IR06 2960 0000 0010 0324 2000 01`).
pub fn format_iban(iban: &str) -> String {
    group_digits(&normalize_iban(iban), ' ')
}

/// `IR` followed by 24 digits, after normalization. No checksum.
pub fn is_iranian_iban_shape(iban: &str) -> bool {
    has_iranian_shape(&normalize_iban(iban))
}

fn has_iranian_shape(iban: &str) -> bool {
    iban.len() == IBAN_LENGTH
        && iban.starts_with("IR")
        && iban[2..].bytes().all(|b| b.is_ascii_digit())
}

/// Move the country code and check digits to the end and expand letters
/// to their numeric value (`A` = 10 … `Z` = 35).
fn rearrange(iban: &str) -> String {
    let (head, tail) = iban.split_at(4);
    let mut digits = String::with_capacity(iban.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        if c.is_ascii_uppercase() {
            digits.push_str(&(c as u32 - 55).to_string());
        } else {
            digits.push(c);
        }
    }
    digits
}

/// Piecewise mod-97 over an arbitrarily long digit string: reduce a leading
/// block of up to nine digits, prepend the remainder to the rest, repeat.
fn mod97(digits: &str) -> Option<u32> {
    let mut remainder = String::new();
    let mut rest = digits;
    loop {
        let take = (9 - remainder.len()).min(rest.len());
        remainder.push_str(&rest[..take]);
        rest = &rest[take..];
        let block: u32 = remainder.parse().ok()?;
        let reduced = block % 97;
        if rest.is_empty() {
            return Some(reduced);
        }
        remainder = reduced.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iban() {
        assert!(is_valid_iranian_iban("IR062960000000100324200001"));
        assert!(is_valid_iranian_iban("ir06 2960 0000 0010 0324 2000 01"));
        assert!(is_valid_iranian_iban("IR050170000000123456789012"));
    }

    #[test]
    fn bad_checksum() {
        assert!(!is_valid_iranian_iban("IR062960000000100324200002"));
    }

    #[test]
    fn wrong_shape() {
        assert!(!is_valid_iranian_iban("DE89370400440532013000"));
        assert!(!is_valid_iranian_iban("IR06296000000010032420000"));
        assert!(!is_valid_iranian_iban("IR0629600000001003242000011"));
        assert!(!is_valid_iranian_iban("IR06296000000010032420000A"));
        assert!(!is_valid_iranian_iban(""));
    }

    #[test]
    fn mod97_matches_direct_remainder() {
        assert_eq!(
            mod97("12345678901234567890"),
            Some((12_345_678_901_234_567_890u64 % 97) as u32)
        );
        assert_eq!(mod97("96"), Some(96));
        assert_eq!(mod97(""), None);
    }

    #[test]
    fn bank_code() {
        assert_eq!(iban_bank_code("IR050170000000123456789012").as_deref(), Some("017"));
        assert_eq!(iban_bank_code("IR05"), None);
    }

    #[test]
    fn formatting() {
        assert_eq!(
            format_iban("ir062960000000100324200001"),
            "IR06 2960 0000 0010 0324 2000 01"
        );
    }
}
