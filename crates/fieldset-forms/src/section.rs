//! Section and group structure
//!
//! Sections group fields for layout purposes only; they carry a title,
//! a description, and layout hints, but no state of their own. All form
//! state lives on the fields, and ordering is the single source of truth
//! for tab order.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// How many components a section lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCount {
	SingleComponent,
	MultiComponent,
}

/// Horizontal space a section takes in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionWidth {
	FullWidth,
	HalfWidth,
}

/// Layout hints for a section, consumed by the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
	pub components: ComponentCount,
	pub width: SectionWidth,
}

impl SectionLayout {
	pub fn new(components: ComponentCount, width: SectionWidth) -> Self {
		Self { components, width }
	}
}

impl Default for SectionLayout {
	fn default() -> Self {
		Self {
			components: ComponentCount::MultiComponent,
			width: SectionWidth::FullWidth,
		}
	}
}

/// A structural grouping of fields
#[derive(Debug, Clone)]
pub struct Section {
	pub layout: SectionLayout,
	pub title: Option<String>,
	pub description: Option<String>,
	pub fields: Vec<Field>,
}

impl Section {
	/// Create an empty section with the default layout.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, Section};
	///
	/// let section = Section::new()
	///     .with_title("Account")
	///     .with_field(Field::text("username"))
	///     .with_field(Field::email("email"));
	///
	/// assert_eq!(section.fields.len(), 2);
	/// ```
	pub fn new() -> Self {
		Self {
			layout: SectionLayout::default(),
			title: None,
			description: None,
			fields: vec![],
		}
	}

	/// Set the section layout hints.
	pub fn with_layout(mut self, layout: SectionLayout) -> Self {
		self.layout = layout;
		self
	}

	/// Set the section title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Set the section description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Append a field to the section.
	pub fn with_field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}
}

impl Default for Section {
	fn default() -> Self {
		Self::new()
	}
}

/// Flatten a section tree into its fields, in declaration order.
///
/// The traversal is stable and side-effect-free: calling it twice over the
/// same sections yields the same order, which rendering and bookkeeping
/// both rely on.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{flatten_fields, Field, Section};
///
/// let sections = vec![
///     Section::new().with_field(Field::text("a")).with_field(Field::text("b")),
///     Section::new().with_field(Field::text("c")),
/// ];
///
/// let names: Vec<_> = flatten_fields(&sections).iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, ["a", "b", "c"]);
/// ```
pub fn flatten_fields(sections: &[Section]) -> Vec<&Field> {
	sections.iter().flat_map(|s| s.fields.iter()).collect()
}

/// Mutable counterpart of [`flatten_fields`], same ordering guarantee.
pub fn flatten_fields_mut(sections: &mut [Section]) -> Vec<&mut Field> {
	sections
		.iter_mut()
		.flat_map(|s| s.fields.iter_mut())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_flatten_preserves_declaration_order() {
		let sections = vec![
			Section::new()
				.with_title("One")
				.with_field(Field::text("first"))
				.with_field(Field::text("second")),
			Section::new(),
			Section::new().with_field(Field::text("third")),
		];

		let names: Vec<_> = flatten_fields(&sections)
			.iter()
			.map(|f| f.name.clone())
			.collect();
		assert_eq!(names, ["first", "second", "third"]);
	}

	#[test]
	fn test_flatten_is_invariant_under_reinvocation() {
		let sections = vec![
			Section::new().with_field(Field::text("a")),
			Section::new().with_field(Field::text("b")),
		];

		let first: Vec<_> = flatten_fields(&sections)
			.iter()
			.map(|f| f.name.clone())
			.collect();
		let second: Vec<_> = flatten_fields(&sections)
			.iter()
			.map(|f| f.name.clone())
			.collect();
		assert_eq!(first, second);
	}

	#[test]
	fn test_flatten_mut_matches_immutable_order() {
		let mut sections = vec![
			Section::new().with_field(Field::text("x")).with_field(Field::text("y")),
			Section::new().with_field(Field::text("z")),
		];

		let immutable: Vec<_> = flatten_fields(&sections)
			.iter()
			.map(|f| f.name.clone())
			.collect();
		let mutable: Vec<_> = flatten_fields_mut(&mut sections)
			.iter()
			.map(|f| f.name.clone())
			.collect();
		assert_eq!(immutable, mutable);
	}

	#[test]
	fn test_default_layout() {
		let section = Section::new();
		assert_eq!(section.layout.components, ComponentCount::MultiComponent);
		assert_eq!(section.layout.width, SectionWidth::FullWidth);
	}

	#[test]
	fn test_layout_serde_round_trip() {
		let layout = SectionLayout::new(ComponentCount::SingleComponent, SectionWidth::HalfWidth);
		let json = serde_json::to_string(&layout).unwrap();
		let back: SectionLayout = serde_json::from_str(&json).unwrap();
		assert_eq!(layout, back);
	}

	proptest! {
		// Declaration order survives any partitioning of fields into sections.
		#[test]
		fn prop_flatten_order_matches_declaration(splits in prop::collection::vec(0usize..5, 1..6)) {
			let mut counter = 0usize;
			let sections: Vec<Section> = splits
				.iter()
				.map(|&n| {
					let mut section = Section::new();
					for _ in 0..n {
						section = section.with_field(Field::text(format!("f{counter}")));
						counter += 1;
					}
					section
				})
				.collect();

			let names: Vec<_> = flatten_fields(&sections)
				.iter()
				.map(|f| f.name.clone())
				.collect();
			let expected: Vec<_> = (0..counter).map(|i| format!("f{i}")).collect();
			prop_assert_eq!(names, expected);
		}
	}
}
