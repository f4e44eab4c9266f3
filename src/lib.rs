//! # Fieldset
//!
//! A dynamic form definition and validation engine for Rust.
//!
//! Fieldset manages the part of a form that is not pixels: field identity,
//! dirty/touched state, per-field and cross-field validation, section
//! layout metadata, and the transformation of in-memory field state into a
//! request payload. Rendering individual controls and shipping the payload
//! over the wire are collaborator concerns, injected at the edges.
//!
//! ## Core Principles
//!
//! - **Declarative definitions**: a form is data — sections, fields,
//!   validators, buttons — constructed once per mount
//! - **Exclusive ownership**: the engine owns its definition; all mutation
//!   flows through `&mut self`, so there is exactly one writer
//! - **Fail-fast per field**: validators run in declared order and the
//!   first failure wins, while a full validation pass still visits every
//!   field so the user sees all problems at once
//! - **Collaborators at the edges**: rendering and transport are traits
//!   the hosting feature implements
//!
//! ## Feature Flags
//!
//! - `forms` - The form engine (`fieldset-forms`)
//! - `validators` - Pure value validators (`fieldset-validators`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use fieldset::forms::{Field, FormDefinition, FormEngine, Section};
//! use fieldset::forms::validators::Required;
//!
//! let definition = FormDefinition::new(vec![
//!     Section::new()
//!         .with_title("Project")
//!         .with_field(Field::text("title").with_validator(Required::new()))
//!         .with_field(Field::url("url").with_validator(Required::new())),
//! ]);
//!
//! let mut engine = FormEngine::new(definition);
//! ```

#[cfg(feature = "forms")]
pub mod forms {
	pub use fieldset_forms::*;
}

#[cfg(feature = "validators")]
pub mod validators {
	pub use fieldset_validators::*;
}

// Re-export the types almost every consumer touches
#[cfg(feature = "forms")]
pub use fieldset_forms::{
	Field, FieldValue, FormDefinition, FormEngine, FormError, FormPhase, InputEvent, InputType,
	SaveTransport, Section,
};

#[cfg(feature = "validators")]
pub use fieldset_validators::{ValidationError, ValidationResult, Validator};
