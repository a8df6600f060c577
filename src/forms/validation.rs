//! Validation rule set shared by the contact and auth forms.
//!
//! Every rule is a pure function of the field value (and, for password
//! confirmation, the sibling password). A rule returns `Ok(())` when the
//! value is acceptable and a [`ValidationError`] whose `Display` output is
//! the message shown beneath the field otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid mobile pattern"));

static PINCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("valid pincode pattern"));

static LETTERS_ONLY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid letters pattern"));

pub const NAME_MIN_LEN: usize = 2;
pub const CITY_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Field-level validation failure.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    #[error("{label} should contain only letters")]
    LettersOnly { label: &'static str },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,

    #[error("Pincode must be 6 digits")]
    InvalidPincode,

    #[error("Password must contain uppercase, lowercase, and number")]
    WeakPassword,

    #[error("Please confirm your password")]
    ConfirmationRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Result of a single rule.
///
pub type Validation = Result<(), ValidationError>;

fn required<'a>(value: &'a str, label: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { label });
    }
    Ok(trimmed)
}

fn min_len(value: &str, min: usize, label: &'static str) -> Validation {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { label, min });
    }
    Ok(())
}

/// Validate a person's name (full, first, last or parent name).
///
pub fn validate_person_name(value: &str, label: &'static str) -> Validation {
    let trimmed = required(value, label)?;
    min_len(trimmed, NAME_MIN_LEN, label)?;
    if !LETTERS_ONLY_REGEX.is_match(trimmed) {
        return Err(ValidationError::LettersOnly { label });
    }
    Ok(())
}

/// Validate an email address.
///
pub fn validate_email(value: &str) -> Validation {
    let trimmed = required(value, "Email")?;
    if !EMAIL_REGEX.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate an Indian mobile number: ten digits, the first one 6-9.
///
pub fn validate_mobile(value: &str, label: &'static str) -> Validation {
    let trimmed = required(value, label)?;
    if !MOBILE_REGEX.is_match(trimmed) {
        return Err(ValidationError::InvalidMobile);
    }
    Ok(())
}

/// Validate a state selection.
///
pub fn validate_state(value: &str) -> Validation {
    required(value, "State").map(|_| ())
}

/// Validate a city name.
///
pub fn validate_city(value: &str) -> Validation {
    let trimmed = required(value, "City")?;
    min_len(trimmed, CITY_MIN_LEN, "City")
}

/// Validate a pincode. The field is optional, so an empty value passes.
///
pub fn validate_pincode(value: &str) -> Validation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if !PINCODE_REGEX.is_match(trimmed) {
        return Err(ValidationError::InvalidPincode);
    }
    Ok(())
}

/// Validate a password: at least eight characters with a lowercase letter,
/// an uppercase letter and a digit.
///
pub fn validate_password(value: &str) -> Validation {
    if value.is_empty() {
        return Err(ValidationError::Required { label: "Password" });
    }
    min_len(value, PASSWORD_MIN_LEN, "Password")?;
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// Validate that `confirmation` repeats `password` exactly.
///
pub fn validate_confirm_password(password: &str, confirmation: &str) -> Validation {
    if confirmation.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Return true when `value` may be stored in a digits-only field.
///
pub fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
