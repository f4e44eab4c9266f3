//! Email and URL format validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// HTTP/HTTPS URL pattern.
//
// Validates URLs with:
// - http or https scheme only
// - Valid domain labels (no leading/trailing hyphens)
// - Optional port number (1-5 digits)
// - Optional path, query string, and fragment
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
    )
    .expect("URL_REGEX: invalid regex pattern")
});

// Pragmatic email pattern: one @, non-empty local part and domain with a dot.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value is a well-formed HTTP or HTTPS URL.
///
/// The validator checks:
/// - Scheme must be `http` or `https`
/// - Host must be non-empty and must not start or end with a hyphen
/// - Optional port, path, query string, and fragment are allowed
///
/// # Examples
///
/// ```
/// use fieldset_validators::{UrlValidator, Validator};
///
/// let validator = UrlValidator::new();
/// assert!(validator.validate("https://example.com").is_ok());
/// assert!(validator.validate("http://localhost:8080/path").is_ok());
/// assert!(validator.validate("ftp://example.com").is_err());
/// assert!(validator.validate("not-a-url").is_err());
/// ```
pub struct UrlValidator {
    /// Optional custom error message shown on validation failure
    message: Option<String>,
}

impl UrlValidator {
    /// Creates a new `UrlValidator` with default settings.
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Sets a custom error message returned on validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{UrlValidator, Validator};
    ///
    /// let validator = UrlValidator::new().with_message("Please enter a valid website URL");
    /// assert!(validator.validate("bad").is_err());
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for UrlValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if URL_REGEX.is_match(value) {
            Ok(())
        } else {
            let msg = self.message.as_deref().unwrap_or("Enter a valid URL");
            Err(ValidationError::invalid(msg))
        }
    }
}

/// Validates that a string value looks like an email address.
///
/// # Examples
///
/// ```
/// use fieldset_validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("@example.com").is_err());
/// assert!(validator.validate("user@").is_err());
/// ```
pub struct EmailValidator {
    /// Optional custom error message shown on validation failure
    message: Option<String>,
}

impl EmailValidator {
    /// Creates a new `EmailValidator` with default settings.
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Sets a custom error message returned on validation failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for EmailValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            let msg = self
                .message
                .as_deref()
                .unwrap_or("Enter a valid email address");
            Err(ValidationError::invalid(msg))
        }
    }
}
