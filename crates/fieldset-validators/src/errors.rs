//! Validation error types

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors reported by validators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Ensure this value has at least {min} characters (it has {length})")]
    TooShort { length: usize, min: usize },

    #[error("Ensure this value has at most {max} characters (it has {length})")]
    TooLong { length: usize, max: usize },

    #[error("Ensure this value is greater than or equal to {min} (it is {value})")]
    TooSmall { value: String, min: String },

    #[error("Ensure this value is less than or equal to {max} (it is {value})")]
    TooLarge { value: String, max: String },

    #[error("{message}")]
    Invalid { message: String },
}

impl ValidationError {
    /// Builds an [`Invalid`](ValidationError::Invalid) error from any message.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::ValidationError;
    ///
    /// let err = ValidationError::invalid("Enter a valid URL");
    /// assert_eq!(err.to_string(), "Enter a valid URL");
    /// ```
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
