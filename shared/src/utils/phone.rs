//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164: optional '+', first digit 1-9, 2 to 15 digits in total.
// `\d` would also match non-ASCII digits, so the class is spelled out.
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("E.164 pattern is valid")
});

/// Check if a phone number matches the E.164 format (leading `+` optional)
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Normalize an E.164 phone number so that it always carries a leading `+`
///
/// Returns `None` when the input does not match the E.164 format. No
/// formatting characters are stripped: `"+1 555 123 4567"` is rejected.
///
/// # Example
///
/// ```
/// use ct_shared::phone::normalize_e164;
///
/// assert_eq!(normalize_e164("15551234567").as_deref(), Some("+15551234567"));
/// assert_eq!(normalize_e164("+15551234567").as_deref(), Some("+15551234567"));
/// assert_eq!(normalize_e164("notanumber"), None);
/// ```
pub fn normalize_e164(phone: &str) -> Option<String> {
    if !is_valid_e164(phone) {
        return None;
    }

    if phone.starts_with('+') {
        Some(phone.to_string())
    } else {
        Some(format!("+{}", phone))
    }
}

/// Mask a phone number for logging, keeping only the last 4 characters
///
/// ```
/// use ct_shared::phone::mask_phone_number;
///
/// assert_eq!(mask_phone_number("+1234567890"), "+******7890");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let visible = 4;

    if chars.len() <= visible {
        return "*".repeat(chars.len());
    }

    let masked_count = chars.len() - visible;
    let last: String = chars[masked_count..].iter().collect();

    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(masked_count - 1), last)
    } else {
        format!("{}{}", "*".repeat(masked_count), last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+14155552671"));
        assert!(is_valid_e164("14155552671"));
        assert!(is_valid_e164("+442071838750"));
        assert!(is_valid_e164("+12")); // Shortest accepted: two digits
        assert!(is_valid_e164("+123456789012345")); // Longest accepted: fifteen digits

        assert!(!is_valid_e164("+1")); // Too short
        assert!(!is_valid_e164("+1234567890123456")); // Too long
        assert!(!is_valid_e164("+0123456789")); // Leading zero
        assert!(!is_valid_e164("++15551234567"));
        assert!(!is_valid_e164("+1 555 123 4567"));
        assert!(!is_valid_e164("+1555abc4567"));
        assert!(!is_valid_e164("notanumber"));
        assert!(!is_valid_e164(""));
        assert!(!is_valid_e164("+"));
        assert!(!is_valid_e164("+1555123456\n"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode decimal digits but not valid E.164
        assert!(!is_valid_e164("+١٢٣٤٥٦٧"));
        assert!(!is_valid_e164("+1５５５1234567"));
    }

    #[test]
    fn test_normalize_adds_plus() {
        assert_eq!(normalize_e164("15551234567").unwrap(), "+15551234567");
        assert_eq!(normalize_e164("+15551234567").unwrap(), "+15551234567");
        assert!(normalize_e164("0123").is_none());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["15551234567", "+442071838750", "99", "+123456789012345"] {
            let once = normalize_e164(input).unwrap();
            let twice = normalize_e164(&once).unwrap();
            assert_eq!(once, twice);
            assert!(twice.starts_with('+'));
        }
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("+12345678901234"), "+**********1234");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number(""), "");
    }

    #[test]
    fn test_mask_handles_multibyte_input() {
        assert_eq!(mask_phone_number("电话号码无效啊"), "***码无效啊");
    }
}
