//! String validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// ASCII slug pattern: lowercase letters, digits, hyphens, underscores.
//
// Does not allow hyphens at the start or end of the slug.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]*[a-z0-9]$|^[a-z0-9]$")
        .expect("SLUG_REGEX: invalid regex pattern")
});

/// Minimum length validator
pub struct MinLengthValidator {
    min: usize,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator with the specified minimum length.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{MinLengthValidator, Validator};
    ///
    /// let validator = MinLengthValidator::new(5);
    /// assert!(validator.validate("hello").is_ok());
    /// assert!(validator.validate("hi").is_err());
    /// ```
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator<str> for MinLengthValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        let length = value.chars().count();
        if length >= self.min {
            Ok(())
        } else {
            Err(ValidationError::TooShort {
                length,
                min: self.min,
            })
        }
    }
}

/// Maximum length validator
pub struct MaxLengthValidator {
    max: usize,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator with the specified maximum length.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{MaxLengthValidator, Validator};
    ///
    /// let validator = MaxLengthValidator::new(10);
    /// assert!(validator.validate("hello").is_ok());
    /// assert!(validator.validate("hello world").is_err());
    /// ```
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validator<str> for MaxLengthValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        let length = value.chars().count();
        if length <= self.max {
            Ok(())
        } else {
            Err(ValidationError::TooLong {
                length,
                max: self.max,
            })
        }
    }
}

/// Regex validator
pub struct RegexValidator {
    regex: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator with the specified regex pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{RegexValidator, Validator};
    ///
    /// let validator = RegexValidator::new(r"^\d{3}-\d{4}$").unwrap();
    /// assert!(validator.validate("123-4567").is_ok());
    /// assert!(validator.validate("invalid").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            message: format!("Value must match pattern: {}", pattern),
        })
    }

    /// Sets a custom error message for the validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{RegexValidator, Validator};
    ///
    /// let validator = RegexValidator::new(r"^\d+$")
    ///     .unwrap()
    ///     .with_message("Value must contain only digits");
    ///
    /// assert!(validator.validate("12345").is_ok());
    /// assert!(validator.validate("abc").is_err());
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<str> for RegexValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::invalid(self.message.clone()))
        }
    }
}

/// Validates that a string value is a valid URL slug.
///
/// A valid slug:
/// - Contains only lowercase ASCII letters (`a`-`z`), digits (`0`-`9`),
///   hyphens (`-`), and underscores (`_`)
/// - Is non-empty
/// - Does not start or end with a hyphen
pub struct SlugValidator {
    message: Option<String>,
}

impl SlugValidator {
    /// Creates a new `SlugValidator` with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{SlugValidator, Validator};
    ///
    /// let validator = SlugValidator::new();
    /// assert!(validator.validate("my-article").is_ok());
    /// assert!(validator.validate("-invalid").is_err());
    /// assert!(validator.validate("").is_err());
    /// ```
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Sets a custom error message returned on validation failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Default for SlugValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for SlugValidator {
    fn validate(&self, value: &str) -> ValidationResult<()> {
        if SLUG_REGEX.is_match(value) {
            Ok(())
        } else {
            let msg = self.message.as_deref().unwrap_or(
                "Enter a valid slug consisting of lowercase letters, numbers, hyphens, or \
                 underscores, not starting or ending with a hyphen",
            );
            Err(ValidationError::invalid(msg))
        }
    }
}
