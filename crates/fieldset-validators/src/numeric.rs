//! Numeric validators

use crate::{ValidationError, ValidationResult, Validator};
use std::fmt::Display;

/// Minimum value validator
pub struct MinValueValidator<T> {
    min: T,
}

impl<T> MinValueValidator<T> {
    /// Creates a new MinValueValidator with the specified minimum value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{MinValueValidator, Validator};
    ///
    /// let validator = MinValueValidator::new(10);
    /// assert!(validator.validate(&15).is_ok());
    /// assert!(validator.validate(&5).is_err());
    /// ```
    pub fn new(min: T) -> Self {
        Self { min }
    }
}

impl<T: PartialOrd + Display> Validator<T> for MinValueValidator<T> {
    fn validate(&self, value: &T) -> ValidationResult<()> {
        if value >= &self.min {
            Ok(())
        } else {
            Err(ValidationError::TooSmall {
                value: value.to_string(),
                min: self.min.to_string(),
            })
        }
    }
}

/// Maximum value validator
pub struct MaxValueValidator<T> {
    max: T,
}

impl<T> MaxValueValidator<T> {
    /// Creates a new MaxValueValidator with the specified maximum value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{MaxValueValidator, Validator};
    ///
    /// let validator = MaxValueValidator::new(20);
    /// assert!(validator.validate(&15).is_ok());
    /// assert!(validator.validate(&25).is_err());
    /// ```
    pub fn new(max: T) -> Self {
        Self { max }
    }
}

impl<T: PartialOrd + Display> Validator<T> for MaxValueValidator<T> {
    fn validate(&self, value: &T) -> ValidationResult<()> {
        if value <= &self.max {
            Ok(())
        } else {
            Err(ValidationError::TooLarge {
                value: value.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

/// Range validator
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T> {
    /// Creates a new RangeValidator with the specified minimum and maximum values.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldset_validators::{RangeValidator, Validator};
    ///
    /// let validator = RangeValidator::new(10, 20);
    /// assert!(validator.validate(&15).is_ok());
    /// assert!(validator.validate(&5).is_err());
    /// assert!(validator.validate(&25).is_err());
    /// ```
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Display> Validator<T> for RangeValidator<T> {
    fn validate(&self, value: &T) -> ValidationResult<()> {
        if value < &self.min {
            Err(ValidationError::TooSmall {
                value: value.to_string(),
                min: self.min.to_string(),
            })
        } else if value > &self.max {
            Err(ValidationError::TooLarge {
                value: value.to_string(),
                max: self.max.to_string(),
            })
        } else {
            Ok(())
        }
    }
}
