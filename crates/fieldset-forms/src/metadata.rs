//! Serializable form metadata
//!
//! A [`FormEngine`] holds trait objects and closures, so it cannot cross a
//! process boundary. The metadata types here are the plain-data snapshot a
//! remote renderer needs: structure, labels, layout hints, current values,
//! and errors — everything except the validators and hooks themselves.

use crate::engine::FormEngine;
use crate::field::{Field, InputType};
use crate::section::{Section, SectionLayout};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
	pub name: String,
	pub label: Option<String>,
	pub input_type: InputType,
	pub instructions: Option<String>,
	pub initial: serde_json::Value,
	pub value: serde_json::Value,
	pub dirty: bool,
	pub error: Option<String>,
}

impl FieldMetadata {
	fn capture(field: &Field) -> Self {
		Self {
			name: field.name.clone(),
			label: field.label.clone(),
			input_type: field.input_type,
			instructions: field.instructions.clone(),
			initial: field.initial().to_json(),
			value: field.value().to_json(),
			dirty: field.dirty(),
			error: field.error().map(str::to_string),
		}
	}
}

/// Serializable snapshot of one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetadata {
	pub layout: SectionLayout,
	pub title: Option<String>,
	pub description: Option<String>,
	pub fields: Vec<FieldMetadata>,
}

impl SectionMetadata {
	fn capture(section: &Section) -> Self {
		Self {
			layout: section.layout,
			title: section.title.clone(),
			description: section.description.clone(),
			fields: section.fields.iter().map(FieldMetadata::capture).collect(),
		}
	}
}

/// Serializable snapshot of a whole form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormMetadata {
	pub sections: Vec<SectionMetadata>,
	pub success_message: Option<String>,
	pub form_error: Option<String>,
	pub is_dirty: bool,
	pub is_valid: bool,
}

impl FormEngine {
	/// Capture a serializable snapshot of the current form state.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FormDefinition, FormEngine, Section};
	///
	/// let engine = FormEngine::new(FormDefinition::new(vec![
	///     Section::new().with_title("Basics").with_field(Field::text("title")),
	/// ]));
	///
	/// let metadata = engine.to_metadata();
	/// assert_eq!(metadata.sections[0].fields[0].name, "title");
	///
	/// let json = serde_json::to_string(&metadata).unwrap();
	/// assert!(json.contains("\"name\":\"title\""));
	/// ```
	pub fn to_metadata(&self) -> FormMetadata {
		FormMetadata {
			sections: self
				.definition()
				.sections()
				.iter()
				.map(SectionMetadata::capture)
				.collect(),
			success_message: self.definition().success_message.clone(),
			form_error: self.form_error().map(str::to_string),
			is_dirty: self.is_dirty(),
			is_valid: self.is_valid(),
		}
	}
}
