//! Form definition
//!
//! The declarative configuration root: ordered sections, the button bar,
//! success messaging, and the reset policy. A definition is constructed
//! once per form mount and handed to a [`FormEngine`](crate::engine::FormEngine),
//! which takes exclusive ownership of it for the form's lifetime.

use crate::field::Field;
use crate::section::{flatten_fields, flatten_fields_mut, Section};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What pressing a button means to the hosting feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
	Submit,
	Reset,
	Cancel,
	Custom(String),
}

/// A button declared by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
	pub label: String,
	pub action: ButtonAction,
}

impl Button {
	pub fn submit(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			action: ButtonAction::Submit,
		}
	}

	pub fn reset(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			action: ButtonAction::Reset,
		}
	}

	pub fn cancel(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			action: ButtonAction::Cancel,
		}
	}

	pub fn custom(label: impl Into<String>, action: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			action: ButtonAction::Custom(action.into()),
		}
	}
}

/// Which side of the button bar carries the primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGroup {
	Left,
	#[default]
	Right,
}

/// Buttons rendered under the form, split left/right.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ButtonBar {
	pub left: Vec<Button>,
	pub right: Vec<Button>,
	pub primary_group: PrimaryGroup,
}

impl ButtonBar {
	/// The conventional cancel-left, submit-right bar.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{ButtonAction, ButtonBar};
	///
	/// let bar = ButtonBar::cancel_submit("Cancel", "Save");
	/// assert_eq!(bar.left[0].action, ButtonAction::Cancel);
	/// assert_eq!(bar.right[0].action, ButtonAction::Submit);
	/// ```
	pub fn cancel_submit(cancel: impl Into<String>, submit: impl Into<String>) -> Self {
		Self {
			left: vec![Button::cancel(cancel)],
			right: vec![Button::submit(submit)],
			primary_group: PrimaryGroup::Right,
		}
	}
}

/// What happens to field state after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetOnSuccess {
	/// Keep the submitted values; only dirty flags are cleared.
	#[default]
	Preserve,
	/// Restore every field to its initial value.
	Restore,
}

/// The declarative root of one form.
#[derive(Debug, Clone)]
pub struct FormDefinition {
	sections: Vec<Section>,
	pub buttons: ButtonBar,
	pub success_message: Option<String>,
	pub reset_on_success: ResetOnSuccess,
}

impl FormDefinition {
	/// Build a definition from its sections.
	///
	/// Field names must be unique across the flattened field list; a
	/// duplicate is a configuration error and panics immediately rather
	/// than surfacing later as a mis-routed event.
	///
	/// # Panics
	///
	/// Panics if two fields share a name.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FormDefinition, Section};
	///
	/// let definition = FormDefinition::new(vec![
	///     Section::new().with_field(Field::text("title")),
	///     Section::new().with_field(Field::url("url")),
	/// ]);
	/// assert_eq!(definition.input_fields().len(), 2);
	/// ```
	pub fn new(sections: Vec<Section>) -> Self {
		let mut seen = HashSet::new();
		for field in flatten_fields(&sections) {
			if !seen.insert(field.name.clone()) {
				panic!("duplicate field name '{}' in form definition", field.name);
			}
		}

		Self {
			sections,
			buttons: ButtonBar::default(),
			success_message: None,
			reset_on_success: ResetOnSuccess::default(),
		}
	}

	/// Set the button bar.
	pub fn with_buttons(mut self, buttons: ButtonBar) -> Self {
		self.buttons = buttons;
		self
	}

	/// Set the message shown after a successful save.
	pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
		self.success_message = Some(message.into());
		self
	}

	/// Set the reset policy applied after a successful save.
	pub fn with_reset_on_success(mut self, policy: ResetOnSuccess) -> Self {
		self.reset_on_success = policy;
		self
	}

	/// The form's sections, in declaration order.
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	/// The flattened field list, in declaration order. Idempotent and
	/// side-effect-free; used both for rendering and engine bookkeeping.
	pub fn input_fields(&self) -> Vec<&Field> {
		flatten_fields(&self.sections)
	}

	/// Mutable counterpart of [`input_fields`](FormDefinition::input_fields).
	pub fn input_fields_mut(&mut self) -> Vec<&mut Field> {
		flatten_fields_mut(&mut self.sections)
	}

	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Option<&Field> {
		self.input_fields().into_iter().find(|f| f.name == name)
	}

	/// Look up a field by name, mutably.
	pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
		self.input_fields_mut().into_iter().find(|f| f.name == name)
	}

	/// Number of fields across all sections.
	pub fn field_count(&self) -> usize {
		self.sections.iter().map(|s| s.fields.len()).sum()
	}
}
