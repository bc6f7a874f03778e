use super::digits::ascii_digits;

/// Length of an Iranian mobile number in national format (`09xxxxxxxxx`).
pub const PHONE_LENGTH: usize = 11;

/// Check whether `phone` is an Iranian mobile number: exactly 11 digits
/// starting with `09`, ignoring separators.
pub fn is_valid_iranian_phone(phone: &str) -> bool {
    let digits = ascii_digits(phone);
    digits.len() == PHONE_LENGTH && digits.starts_with("09")
}

/// ASCII digits of a phone number with separators removed.
pub fn normalize_phone(phone: &str) -> String {
    ascii_digits(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_numbers() {
        assert!(is_valid_iranian_phone("09123456789"));
        assert!(is_valid_iranian_phone("0912 345 6789"));
        assert!(is_valid_iranian_phone("0912-345-6789"));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(!is_valid_iranian_phone("0912345678"));
        assert!(!is_valid_iranian_phone("08123456789"));
        assert!(!is_valid_iranian_phone("091234567890"));
        assert!(!is_valid_iranian_phone(""));
    }

    #[test]
    fn normalizes() {
        assert_eq!(normalize_phone("۰۹۱۲ ۳۴۵ ۶۷۸۹"), "09123456789");
    }
}
