//! Form field model
//!
//! A [`Field`] is the atomic unit of a form: identity, input type, current
//! value, validators, and the derived dirty/error state. Mutation goes
//! through [`Field::set_value`] and [`Field::set_error`] so the state
//! invariants hold regardless of who drives the field.

use crate::validators::FieldValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
	/// No value entered yet
	Empty,
	/// Free text (single- or multi-line)
	Text(String),
	/// Checkbox state
	Bool(bool),
	/// Numeric input
	Number(f64),
	/// Selected option key of a select control
	Choice(String),
}

impl FieldValue {
	/// Returns the text content for `Text` and `Choice` values.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) | FieldValue::Choice(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean for `Bool` values.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FieldValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the number for `Number` values.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			FieldValue::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Whether the value counts as "nothing entered".
	///
	/// `Empty` and whitespace-only text are empty; `Bool(false)` is a
	/// concrete answer and is not.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::FieldValue;
	///
	/// assert!(FieldValue::Empty.is_empty());
	/// assert!(FieldValue::Text("   ".to_string()).is_empty());
	/// assert!(!FieldValue::Bool(false).is_empty());
	/// assert!(!FieldValue::Number(0.0).is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		match self {
			FieldValue::Empty => true,
			FieldValue::Text(s) | FieldValue::Choice(s) => s.trim().is_empty(),
			_ => false,
		}
	}

	/// Converts the value into its JSON representation.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FieldValue::Empty => serde_json::Value::Null,
			FieldValue::Text(s) | FieldValue::Choice(s) => serde_json::json!(s),
			FieldValue::Bool(b) => serde_json::json!(b),
			FieldValue::Number(n) => serde_json::json!(n),
		}
	}
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Empty
	}
}

/// Closed set of input control kinds.
///
/// The engine never branches on this; it exists so an external renderer
/// can pick the right control for a field (see
/// [`RendererRegistry`](crate::render::RendererRegistry)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
	Text,
	TextArea,
	Checkbox,
	Select,
	Email,
	Url,
	Number,
	Password,
	Hidden,
}

/// Hook invoked in response to an input event on a field.
pub type FieldHook = Arc<dyn Fn(&mut Field) + Send + Sync>;

/// Per-field event hooks, one optional slot per semantic event.
#[derive(Clone, Default)]
pub struct FieldHooks {
	pub on_change: Option<FieldHook>,
	pub on_blur: Option<FieldHook>,
	pub on_focus: Option<FieldHook>,
}

impl fmt::Debug for FieldHooks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldHooks")
			.field("on_change", &self.on_change.is_some())
			.field("on_blur", &self.on_blur.is_some())
			.field("on_focus", &self.on_focus.is_some())
			.finish()
	}
}

/// A single form field with its configuration and state
#[derive(Clone)]
pub struct Field {
	pub name: String,
	pub label: Option<String>,
	pub input_type: InputType,
	pub instructions: Option<String>,
	value: FieldValue,
	initial: FieldValue,
	validators: Vec<Arc<dyn FieldValidator>>,
	hooks: FieldHooks,
	dirty: bool,
	error: Option<String>,
}

impl Field {
	fn with_type(name: impl Into<String>, input_type: InputType, value: FieldValue) -> Self {
		Self {
			name: name.into(),
			label: None,
			input_type,
			instructions: None,
			initial: value.clone(),
			value,
			validators: vec![],
			hooks: FieldHooks::default(),
			dirty: false,
			error: None,
		}
	}

	/// Create a new single-line text field
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FieldValue, InputType};
	///
	/// let field = Field::text("title");
	/// assert_eq!(field.name, "title");
	/// assert_eq!(field.input_type, InputType::Text);
	/// assert_eq!(field.value(), &FieldValue::Empty);
	/// assert!(!field.dirty());
	/// ```
	pub fn text(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Text, FieldValue::Empty)
	}

	/// Create a new multi-line text field
	pub fn textarea(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::TextArea, FieldValue::Empty)
	}

	/// Create a new checkbox field, unchecked by default
	pub fn checkbox(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Checkbox, FieldValue::Bool(false))
	}

	/// Create a new select field with no option chosen
	pub fn select(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Select, FieldValue::Empty)
	}

	/// Create a new email field
	pub fn email(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Email, FieldValue::Empty)
	}

	/// Create a new URL field
	pub fn url(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Url, FieldValue::Empty)
	}

	/// Create a new numeric field
	pub fn number(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Number, FieldValue::Empty)
	}

	/// Create a new password field
	pub fn password(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Password, FieldValue::Empty)
	}

	/// Create a new hidden field
	pub fn hidden(name: impl Into<String>) -> Self {
		Self::with_type(name, InputType::Hidden, FieldValue::Empty)
	}

	/// Set the label for the field
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::Field;
	///
	/// let field = Field::text("title").with_label("Title");
	/// assert_eq!(field.label, Some("Title".to_string()));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the instructions (help text) for the field
	pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
		self.instructions = Some(instructions.into());
		self
	}

	/// Set the initial value. This is both the current value and the
	/// restore target for [`reset`](Field::reset).
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FieldValue};
	///
	/// let field = Field::text("title").with_initial(FieldValue::Text("Draft".to_string()));
	/// assert_eq!(field.value().as_text(), Some("Draft"));
	/// assert!(!field.dirty());
	/// ```
	pub fn with_initial(mut self, value: FieldValue) -> Self {
		self.initial = value.clone();
		self.value = value;
		self
	}

	/// Append a validator. Validators run in the order they were added.
	pub fn with_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
		self.validators.push(Arc::new(validator));
		self
	}

	/// Install a hook that runs after every value change.
	pub fn on_change(mut self, hook: impl Fn(&mut Field) + Send + Sync + 'static) -> Self {
		self.hooks.on_change = Some(Arc::new(hook));
		self
	}

	/// Install a hook that runs when the control loses focus.
	pub fn on_blur(mut self, hook: impl Fn(&mut Field) + Send + Sync + 'static) -> Self {
		self.hooks.on_blur = Some(Arc::new(hook));
		self
	}

	/// Install a hook that runs when the control gains focus.
	pub fn on_focus(mut self, hook: impl Fn(&mut Field) + Send + Sync + 'static) -> Self {
		self.hooks.on_focus = Some(Arc::new(hook));
		self
	}

	/// Current value
	pub fn value(&self) -> &FieldValue {
		&self.value
	}

	/// Initial value captured at construction
	pub fn initial(&self) -> &FieldValue {
		&self.initial
	}

	/// Whether the field has been interacted with since the last reset
	pub fn dirty(&self) -> bool {
		self.dirty
	}

	/// Current validation error, if validation has run and failed
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// The field's validators, in declared order
	pub fn validators(&self) -> &[Arc<dyn FieldValidator>] {
		&self.validators
	}

	/// The field's event hooks
	pub fn hooks(&self) -> &FieldHooks {
		&self.hooks
	}

	/// Update the value, mark the field dirty, and clear any stale error.
	///
	/// The error is recomputed only by explicit validation, never on a
	/// value change, so a half-typed value is not flagged mid-keystroke.
	/// A value equal to the current one still marks the field dirty:
	/// dirty means touched, not changed.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FieldValue};
	///
	/// let mut field = Field::checkbox("accept");
	/// field.set_value(FieldValue::Bool(false)); // same as current value
	/// assert!(field.dirty());
	/// ```
	pub fn set_value(&mut self, value: FieldValue) {
		self.value = value;
		self.dirty = true;
		self.error = None;
	}

	/// Set or clear the validation error. The only mutator of `error`.
	pub fn set_error(&mut self, error: Option<String>) {
		self.error = error;
	}

	/// Restore the initial value and clear dirty/error state. Idempotent.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FieldValue};
	///
	/// let mut field = Field::text("title").with_initial(FieldValue::Text("Draft".to_string()));
	/// field.set_value(FieldValue::Text("Edited".to_string()));
	/// field.set_error(Some("too short".to_string()));
	///
	/// field.reset();
	/// assert_eq!(field.value().as_text(), Some("Draft"));
	/// assert!(!field.dirty());
	/// assert!(field.error().is_none());
	/// ```
	pub fn reset(&mut self) {
		self.value = self.initial.clone();
		self.dirty = false;
		self.error = None;
	}

	pub(crate) fn clear_dirty(&mut self) {
		self.dirty = false;
	}
}

impl fmt::Debug for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("input_type", &self.input_type)
			.field("value", &self.value)
			.field("dirty", &self.dirty)
			.field("error", &self.error)
			.field("validators", &self.validators.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_set_value_marks_dirty_and_clears_error() {
		let mut field = Field::text("title");
		field.set_error(Some("required".to_string()));

		field.set_value(FieldValue::Text("My Project".to_string()));

		assert!(field.dirty());
		assert!(field.error().is_none());
		assert_eq!(field.value().as_text(), Some("My Project"));
	}

	#[test]
	fn test_set_value_identical_value_still_marks_dirty() {
		// Touched semantics: re-entering the same value counts as an
		// interaction, matching checkbox behavior in the hosting UIs.
		let mut field = Field::checkbox("subscribe");
		assert!(!field.dirty());

		field.set_value(FieldValue::Bool(false));
		assert!(field.dirty());
	}

	#[test]
	fn test_reset_is_idempotent() {
		let mut field = Field::text("name").with_initial(FieldValue::Text("default".to_string()));
		field.set_value(FieldValue::Text("a".to_string()));
		field.set_value(FieldValue::Text("b".to_string()));
		field.set_error(Some("bad".to_string()));

		field.reset();
		field.reset();

		assert_eq!(field.value().as_text(), Some("default"));
		assert!(!field.dirty());
		assert!(field.error().is_none());
	}

	#[test]
	fn test_initial_untouched_by_set_value() {
		let mut field = Field::text("name").with_initial(FieldValue::Text("default".to_string()));
		field.set_value(FieldValue::Text("changed".to_string()));
		assert_eq!(field.initial().as_text(), Some("default"));
	}

	#[rstest]
	#[case(FieldValue::Empty, true)]
	#[case(FieldValue::Text(String::new()), true)]
	#[case(FieldValue::Text("  \t".to_string()), true)]
	#[case(FieldValue::Text("x".to_string()), false)]
	#[case(FieldValue::Bool(false), false)]
	#[case(FieldValue::Number(0.0), false)]
	#[case(FieldValue::Choice(String::new()), true)]
	fn test_value_is_empty(#[case] value: FieldValue, #[case] empty: bool) {
		assert_eq!(value.is_empty(), empty);
	}

	#[test]
	fn test_value_json_round_trip() {
		let value = FieldValue::Text("hello".to_string());
		let json = serde_json::to_string(&value).unwrap();
		let back: FieldValue = serde_json::from_str(&json).unwrap();
		assert_eq!(value, back);
	}

	#[test]
	fn test_value_to_json_shapes() {
		assert_eq!(FieldValue::Empty.to_json(), serde_json::Value::Null);
		assert_eq!(
			FieldValue::Text("a".to_string()).to_json(),
			serde_json::json!("a")
		);
		assert_eq!(FieldValue::Bool(true).to_json(), serde_json::json!(true));
		assert_eq!(FieldValue::Number(3.0).to_json(), serde_json::json!(3.0));
	}

	#[test]
	fn test_builder_chain() {
		let field = Field::email("contact")
			.with_label("Contact email")
			.with_instructions("We only use this for receipts");

		assert_eq!(field.input_type, InputType::Email);
		assert_eq!(field.label.as_deref(), Some("Contact email"));
		assert_eq!(
			field.instructions.as_deref(),
			Some("We only use this for receipts")
		);
	}
}
