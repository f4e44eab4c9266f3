//! Field validation pipeline
//!
//! Bridges the pure value checks in `fieldset-validators` into per-field
//! validators that can also see sibling values through a [`FormSnapshot`]
//! (for cross-field rules like confirm-password). [`validate_field`] runs
//! a field's validators in declared order and stops at the first failure,
//! so a blank required field never shows a format error.

use crate::field::{Field, FieldValue};
use fieldset_validators::{
	EmailValidator, MaxLengthValidator, MaxValueValidator, MinLengthValidator, MinValueValidator,
	RegexValidator, UrlValidator, Validator,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only snapshot of every field's current value, captured before a
/// validation pass so cross-field validators see one consistent state.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
	values: HashMap<String, FieldValue>,
}

impl FormSnapshot {
	/// Capture a snapshot from an ordered field list.
	pub fn capture<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
		Self {
			values: fields
				.into_iter()
				.map(|f| (f.name.clone(), f.value().clone()))
				.collect(),
		}
	}

	/// Value of a sibling field, if it exists.
	pub fn value(&self, name: &str) -> Option<&FieldValue> {
		self.values.get(name)
	}

	/// Text content of a sibling field, if it exists and holds text.
	pub fn text(&self, name: &str) -> Option<&str> {
		self.values.get(name).and_then(|v| v.as_text())
	}
}

/// A single validation rule attached to a field.
///
/// Implementations must be pure: they may read the field's value and
/// sibling values from the snapshot, and must not mutate anything. A
/// panicking validator is a programming error and propagates.
pub trait FieldValidator: Send + Sync {
	/// Check `value`, returning the error message on failure.
	fn validate(&self, value: &FieldValue, form: &FormSnapshot) -> Result<(), String>;
}

/// Run a field's validators in declared order and return the first
/// failure's message.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{Field, FieldValue};
/// use fieldset_forms::validators::{validate_field, FormSnapshot, MinLength, Required};
///
/// let field = Field::text("title")
///     .with_validator(Required::new())
///     .with_validator(MinLength::new(3));
///
/// // Blank value: the required message wins, the length check never runs.
/// let error = validate_field(&field, &FormSnapshot::default());
/// assert_eq!(error.as_deref(), Some("This field is required"));
/// ```
pub fn validate_field(field: &Field, form: &FormSnapshot) -> Option<String> {
	field
		.validators()
		.iter()
		.find_map(|v| v.validate(field.value(), form).err())
}

/// Requires a non-empty value.
///
/// Empty means [`FieldValue::is_empty`] — or `Bool(false)` for checkboxes,
/// so a must-accept checkbox can be declared required.
pub struct Required {
	message: Option<String>,
}

impl Required {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Default for Required {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldValidator for Required {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		let missing = value.is_empty() || matches!(value, FieldValue::Bool(false));
		if missing {
			Err(self
				.message
				.clone()
				.unwrap_or_else(|| "This field is required".to_string()))
		} else {
			Ok(())
		}
	}
}

// Format validators skip empty values: rejecting blanks is Required's job,
// and an optional field left blank must not fail format checks.
fn text_for_format_check(value: &FieldValue) -> Option<&str> {
	if value.is_empty() {
		None
	} else {
		value.as_text()
	}
}

/// Minimum text length.
pub struct MinLength {
	inner: MinLengthValidator,
}

impl MinLength {
	pub fn new(min: usize) -> Self {
		Self {
			inner: MinLengthValidator::new(min),
		}
	}
}

impl FieldValidator for MinLength {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match text_for_format_check(value) {
			Some(text) => self.inner.validate(text).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Maximum text length.
pub struct MaxLength {
	inner: MaxLengthValidator,
}

impl MaxLength {
	pub fn new(max: usize) -> Self {
		Self {
			inner: MaxLengthValidator::new(max),
		}
	}
}

impl FieldValidator for MaxLength {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match text_for_format_check(value) {
			Some(text) => self.inner.validate(text).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Text must match a regex pattern.
pub struct Pattern {
	inner: RegexValidator,
}

impl Pattern {
	/// Compile `pattern`; fails fast on an invalid expression.
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self {
			inner: RegexValidator::new(pattern)?,
		})
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.inner = self.inner.with_message(message);
		self
	}
}

impl FieldValidator for Pattern {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match text_for_format_check(value) {
			Some(text) => self.inner.validate(text).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Text must be a well-formed email address.
pub struct Email {
	inner: EmailValidator,
}

impl Email {
	pub fn new() -> Self {
		Self {
			inner: EmailValidator::new(),
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.inner = self.inner.with_message(message);
		self
	}
}

impl Default for Email {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldValidator for Email {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match text_for_format_check(value) {
			Some(text) => self.inner.validate(text).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Text must be a well-formed HTTP(S) URL.
pub struct Url {
	inner: UrlValidator,
}

impl Url {
	pub fn new() -> Self {
		Self {
			inner: UrlValidator::new(),
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.inner = self.inner.with_message(message);
		self
	}
}

impl Default for Url {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldValidator for Url {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match text_for_format_check(value) {
			Some(text) => self.inner.validate(text).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Numeric lower bound. Applies to `Number` values; everything else passes.
pub struct MinValue {
	inner: MinValueValidator<f64>,
}

impl MinValue {
	pub fn new(min: f64) -> Self {
		Self {
			inner: MinValueValidator::new(min),
		}
	}
}

impl FieldValidator for MinValue {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match value.as_number() {
			Some(n) => self.inner.validate(&n).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Numeric upper bound. Applies to `Number` values; everything else passes.
pub struct MaxValue {
	inner: MaxValueValidator<f64>,
}

impl MaxValue {
	pub fn new(max: f64) -> Self {
		Self {
			inner: MaxValueValidator::new(max),
		}
	}
}

impl FieldValidator for MaxValue {
	fn validate(&self, value: &FieldValue, _form: &FormSnapshot) -> Result<(), String> {
		match value.as_number() {
			Some(n) => self.inner.validate(&n).map_err(|e| e.to_string()),
			None => Ok(()),
		}
	}
}

/// Cross-field equality check, e.g. confirm-password.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{Field, FieldValue};
/// use fieldset_forms::validators::{validate_field, FormSnapshot, MatchesField};
///
/// let password = Field::password("password")
///     .with_initial(FieldValue::Text("secret123".to_string()));
/// let confirm = Field::password("confirm")
///     .with_initial(FieldValue::Text("different".to_string()))
///     .with_validator(MatchesField::new("password"));
///
/// let snapshot = FormSnapshot::capture([&password, &confirm]);
/// assert!(validate_field(&confirm, &snapshot).is_some());
/// ```
pub struct MatchesField {
	other: String,
	message: Option<String>,
}

impl MatchesField {
	pub fn new(other: impl Into<String>) -> Self {
		Self {
			other: other.into(),
			message: None,
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl FieldValidator for MatchesField {
	fn validate(&self, value: &FieldValue, form: &FormSnapshot) -> Result<(), String> {
		if form.value(&self.other) == Some(value) {
			Ok(())
		} else {
			Err(self
				.message
				.clone()
				.unwrap_or_else(|| format!("Must match the '{}' field", self.other)))
		}
	}
}

/// Closure-backed validator for feature-specific rules.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{Field, FieldValue};
/// use fieldset_forms::validators::{validate_field, Custom, FormSnapshot};
///
/// let field = Field::text("handle")
///     .with_initial(FieldValue::Text("Admin".to_string()))
///     .with_validator(Custom::new(|value, _form| {
///         match value.as_text() {
///             Some(t) if t.eq_ignore_ascii_case("admin") => {
///                 Err("That handle is reserved".to_string())
///             }
///             _ => Ok(()),
///         }
///     }));
///
/// let error = validate_field(&field, &FormSnapshot::default());
/// assert_eq!(error.as_deref(), Some("That handle is reserved"));
/// ```
pub struct Custom {
	func: Arc<dyn Fn(&FieldValue, &FormSnapshot) -> Result<(), String> + Send + Sync>,
}

impl Custom {
	pub fn new(
		func: impl Fn(&FieldValue, &FormSnapshot) -> Result<(), String> + Send + Sync + 'static,
	) -> Self {
		Self {
			func: Arc::new(func),
		}
	}
}

impl FieldValidator for Custom {
	fn validate(&self, value: &FieldValue, form: &FormSnapshot) -> Result<(), String> {
		(self.func)(value, form)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn snapshot() -> FormSnapshot {
		FormSnapshot::default()
	}

	#[test]
	fn test_first_failing_validator_wins() {
		let field = Field::url("website")
			.with_initial(FieldValue::Text("x".to_string()))
			.with_validator(MinLength::new(5))
			.with_validator(Url::new());

		// Both validators fail; only the first message surfaces.
		let error = validate_field(&field, &snapshot()).unwrap();
		assert!(error.contains("at least 5 characters"), "got: {error}");
	}

	#[test]
	fn test_declaration_order_is_respected() {
		let reversed = Field::url("website")
			.with_initial(FieldValue::Text("x".to_string()))
			.with_validator(Url::new())
			.with_validator(MinLength::new(5));

		let error = validate_field(&reversed, &snapshot()).unwrap();
		assert_eq!(error, "Enter a valid URL");
	}

	#[test]
	fn test_valid_field_yields_no_error() {
		let field = Field::url("website")
			.with_initial(FieldValue::Text("https://example.com".to_string()))
			.with_validator(Required::new())
			.with_validator(Url::new());

		assert!(validate_field(&field, &snapshot()).is_none());
	}

	#[rstest]
	#[case(FieldValue::Empty, false)]
	#[case(FieldValue::Text("".to_string()), false)]
	#[case(FieldValue::Text("  ".to_string()), false)]
	#[case(FieldValue::Text("x".to_string()), true)]
	#[case(FieldValue::Bool(false), false)]
	#[case(FieldValue::Bool(true), true)]
	#[case(FieldValue::Number(0.0), true)]
	fn test_required(#[case] value: FieldValue, #[case] ok: bool) {
		let validator = Required::new();
		assert_eq!(validator.validate(&value, &snapshot()).is_ok(), ok);
	}

	#[test]
	fn test_required_custom_message() {
		let validator = Required::new().with_message("Give us a title");
		let err = validator.validate(&FieldValue::Empty, &snapshot()).unwrap_err();
		assert_eq!(err, "Give us a title");
	}

	#[test]
	fn test_format_checks_pass_on_empty_optional_value() {
		// An optional field left blank must not trip format validators.
		for validator in [
			Box::new(Url::new()) as Box<dyn FieldValidator>,
			Box::new(Email::new()),
			Box::new(MinLength::new(3)),
		] {
			assert!(validator.validate(&FieldValue::Empty, &snapshot()).is_ok());
			assert!(
				validator
					.validate(&FieldValue::Text(String::new()), &snapshot())
					.is_ok()
			);
		}
	}

	#[test]
	fn test_pattern_rejects_invalid_expression() {
		assert!(Pattern::new("(unclosed").is_err());
	}

	#[test]
	fn test_pattern_with_message() {
		let validator = Pattern::new(r"^[A-Z]{3}$").unwrap().with_message("Three capitals");
		let err = validator
			.validate(&FieldValue::Text("abc".to_string()), &snapshot())
			.unwrap_err();
		assert_eq!(err, "Three capitals");
	}

	#[rstest]
	#[case(0.0, true)]
	#[case(-1.0, false)]
	fn test_min_value(#[case] n: f64, #[case] ok: bool) {
		let validator = MinValue::new(0.0);
		assert_eq!(
			validator.validate(&FieldValue::Number(n), &snapshot()).is_ok(),
			ok
		);
	}

	#[rstest]
	#[case(150.0, true)]
	#[case(150.5, false)]
	fn test_max_value(#[case] n: f64, #[case] ok: bool) {
		let validator = MaxValue::new(150.0);
		assert_eq!(
			validator.validate(&FieldValue::Number(n), &snapshot()).is_ok(),
			ok
		);
	}

	#[test]
	fn test_matches_field_reads_sibling() {
		let password =
			Field::password("password").with_initial(FieldValue::Text("secret123".to_string()));
		let confirm =
			Field::password("confirm").with_initial(FieldValue::Text("secret123".to_string()));
		let snapshot = FormSnapshot::capture([&password, &confirm]);

		let validator = MatchesField::new("password");
		assert!(validator.validate(confirm.value(), &snapshot).is_ok());

		let validator = MatchesField::new("password").with_message("Passwords do not match");
		let err = validator
			.validate(&FieldValue::Text("other".to_string()), &snapshot)
			.unwrap_err();
		assert_eq!(err, "Passwords do not match");
	}

	#[test]
	fn test_matches_field_missing_sibling_fails() {
		let validator = MatchesField::new("nonexistent");
		assert!(
			validator
				.validate(&FieldValue::Text("x".to_string()), &snapshot())
				.is_err()
		);
	}

	#[test]
	fn test_snapshot_capture_and_lookup() {
		let a = Field::text("a").with_initial(FieldValue::Text("1".to_string()));
		let b = Field::checkbox("b").with_initial(FieldValue::Bool(true));
		let snapshot = FormSnapshot::capture([&a, &b]);

		assert_eq!(snapshot.text("a"), Some("1"));
		assert_eq!(snapshot.value("b").and_then(|v| v.as_bool()), Some(true));
		assert!(snapshot.value("missing").is_none());
	}
}
