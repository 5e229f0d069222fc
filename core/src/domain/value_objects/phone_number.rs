//! E.164 phone number value object

use serde::{Deserialize, Serialize};

use ct_shared::phone::normalize_e164;

use crate::errors::ValidationError;

/// A phone number that has been validated and normalized to `+<digits>`
///
/// The only way to obtain one is [`PhoneNumber::parse`], so a `PhoneNumber`
/// handed to a provider is always in E.164 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate `raw` against `^\+?[1-9]\d{1,14}$` and prefix `+` if absent
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        normalize_e164(raw)
            .map(PhoneNumber)
            .ok_or_else(|| ValidationError::InvalidPhoneNumber {
                phone: raw.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for log output
    pub fn masked(&self) -> String {
        ct_shared::phone::mask_phone_number(&self.0)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_sender_without_plus() {
        let number = PhoneNumber::parse("15551234567").unwrap();
        assert_eq!(number.as_str(), "+15551234567");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let once = PhoneNumber::parse("442071838750").unwrap();
        let twice = PhoneNumber::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        let err = PhoneNumber::parse("notanumber").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPhoneNumber {
                phone: "notanumber".to_string()
            }
        );
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let number: PhoneNumber = serde_json::from_str("\"15551234567\"").unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"+15551234567\"");
        assert!(serde_json::from_str::<PhoneNumber>("\"0000\"").is_err());
    }

    #[test]
    fn test_masked() {
        let number = PhoneNumber::parse("+15551234567").unwrap();
        assert_eq!(number.masked(), "+*******4567");
    }
}
