//! Form definition and validation engine
//!
//! This crate manages everything about a form except the pixels:
//! - Field identity, values, and dirty/touched state
//! - Per-field validator pipelines with cross-field rules
//! - Section/group structure carrying layout hints but no state
//! - The form lifecycle state machine (pristine through submitted)
//! - Payload generation from resolved field values
//! - Multi-step flows for intake-style features
//!
//! Rendering individual controls and delivering the payload are
//! collaborator concerns: the renderer reports semantic input events
//! (value change, blur, focus) into a [`FormEngine`], and an injected
//! [`SaveTransport`] carries the generated payload on submit.
//!
//! ```
//! use fieldset_forms::validators::{Required, Url};
//! use fieldset_forms::{Field, FieldValue, FormDefinition, FormEngine, InputEvent, Section};
//!
//! let definition = FormDefinition::new(vec![
//!     Section::new()
//!         .with_title("Project")
//!         .with_field(Field::text("title").with_validator(Required::new()))
//!         .with_field(
//!             Field::url("url")
//!                 .with_validator(Required::new())
//!                 .with_validator(Url::new()),
//!         ),
//! ]);
//!
//! let mut engine = FormEngine::new(definition);
//! engine
//!     .apply("title", InputEvent::ValueChanged(FieldValue::Text("My Project".to_string())))
//!     .unwrap();
//!
//! assert!(engine.is_dirty());
//! assert!(!engine.validate_all()); // url is still blank
//! ```

pub mod definition;
pub mod engine;
pub mod field;
pub mod flow;
pub mod metadata;
pub mod payload;
pub mod render;
pub mod section;
pub mod transport;
pub mod validators;

pub use definition::{
	Button, ButtonAction, ButtonBar, FormDefinition, PrimaryGroup, ResetOnSuccess,
};
pub use engine::{FormEngine, FormError, FormPhase, InputEvent};
pub use field::{Field, FieldHook, FieldHooks, FieldValue, InputType};
pub use flow::{FlowData, FlowStep, FormFlow};
pub use metadata::{FieldMetadata, FormMetadata, SectionMetadata};
pub use render::{ControlRenderer, RendererRegistry};
pub use section::{
	flatten_fields, flatten_fields_mut, ComponentCount, Section, SectionLayout, SectionWidth,
};
pub use transport::SaveTransport;
pub use validators::{validate_field, FieldValidator, FormSnapshot};
