//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Accepts international notation with optional separators, e.g.
    /// "+7 (999) 123-45-67" or "+79991234567".
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 ()\-]{5,18}[0-9]$").unwrap();
}

/// Minimum number of digits a phone number must carry.
const MIN_PHONE_DIGITS: usize = 7;

/// Validates a phone number for test sends and profile updates.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(phone) && digits >= MIN_PHONE_DIGITS {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Invalid phone number".into());
        Err(err)
    }
}
