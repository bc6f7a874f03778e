/// Map Persian (`۰`–`۹`) and Arabic-Indic (`٠`–`٩`) digits to ASCII.
///
/// All other characters pass through unchanged.
pub fn normalize_digits(input: &str) -> String {
    input.chars().map(to_ascii_digit).collect()
}

/// Normalize digits, then keep only ASCII digits.
pub fn ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(to_ascii_digit)
        .filter(char::is_ascii_digit)
        .collect()
}

fn to_ascii_digit(c: char) -> char {
    let base = match c {
        '\u{06F0}'..='\u{06F9}' => 0x06F0,
        '\u{0660}'..='\u{0669}' => 0x0660,
        _ => return c,
    };
    char::from_digit(c as u32 - base, 10).unwrap_or(c)
}
