//! Value validators for fieldset
//!
//! This crate provides the pure validation checks the form engine composes
//! into per-field pipelines: string length and pattern checks, numeric
//! bounds, and email/URL/slug format checks. Validators are plain structs
//! with no side effects; each reports failure through [`ValidationError`].

pub mod errors;
pub mod net;
pub mod numeric;
pub mod string;

pub use errors::{ValidationError, ValidationResult};
pub use net::{EmailValidator, UrlValidator};
pub use numeric::{MaxValueValidator, MinValueValidator, RangeValidator};
pub use string::{MaxLengthValidator, MinLengthValidator, RegexValidator, SlugValidator};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::net::*;
    pub use crate::numeric::*;
    pub use crate::string::*;
    pub use crate::Validator;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult<()>;
}
