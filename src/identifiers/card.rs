use super::digits::ascii_digits;

/// Length of an Iranian (Shetab) payment card number.
pub const CARD_LENGTH: usize = 16;

/// Check whether `card` is a valid 16-digit Iranian card number.
///
/// Separators and any other non-digit characters are ignored; the remaining
/// digits must number exactly 16 and pass the Luhn checksum.
pub fn is_valid_iranian_card(card: &str) -> bool {
    let digits = ascii_digits(card);
    digits.len() == CARD_LENGTH && luhn_valid(&digits)
}

/// Luhn checksum over a string of ASCII digits.
///
/// Returns `false` for empty input or any non-digit character.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    luhn_sum(digits, false).is_some_and(|sum| sum % 10 == 0)
}

/// Compute the check digit that makes `partial` followed by it Luhn-valid.
///
/// Returns `None` if `partial` is empty or contains non-digits.
pub fn luhn_check_digit(partial: &str) -> Option<u8> {
    if partial.is_empty() {
        return None;
    }
    // The check digit sits at position 0 from the right, so every digit of
    // `partial` shifts one place and the rightmost one is doubled.
    let sum = luhn_sum(partial, true)?;
    Some(((10 - sum % 10) % 10) as u8)
}

fn luhn_sum(digits: &str, double_first: bool) -> Option<u32> {
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut d = c.to_digit(10)?;
        if (i % 2 == 1) != double_first {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    Some(sum)
}

/// Format a card number in groups of four joined by hyphens
/// (`6037-9912-3456-7893`).
///
/// Trailing digits beyond a multiple of four form a shorter last group.
pub fn format_card_number(card: &str) -> String {
    group_digits(&ascii_digits(card), '-')
}

/// Mask a card number for display, keeping the BIN (first six digits) and
/// the last four: `6037-99**-****-7893`.
///
/// Inputs with fewer than ten digits are masked entirely.
pub fn mask_card_number(card: &str) -> String {
    let digits = ascii_digits(card);
    let len = digits.len();
    let masked: String = digits
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if len >= 10 && (i < 6 || i >= len - 4) {
                c
            } else {
                '*'
            }
        })
        .collect();
    group_digits(&masked, '-')
}

pub(crate) fn group_digits(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
