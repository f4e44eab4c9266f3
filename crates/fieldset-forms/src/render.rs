//! Renderer contract
//!
//! The engine never decides what a field looks like; an external renderer
//! does. Dispatch is a lookup table from [`InputType`] to a renderer, so
//! adding a control kind never touches the engine, and the closed enum
//! keeps the table exhaustive at review time.

use crate::field::{Field, InputType};
use std::collections::HashMap;
use std::sync::Arc;

/// Renders one kind of input control.
///
/// Implementations report value/blur/focus events back into the engine
/// through whatever mechanism their UI toolkit uses; this trait only
/// covers producing the control for a field's current state.
pub trait ControlRenderer: Send + Sync {
	/// The input type this renderer handles.
	fn input_type(&self) -> InputType;

	/// Produce the control markup for a field.
	fn render(&self, field: &Field) -> String;
}

/// Lookup table from input type to renderer.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{ControlRenderer, Field, InputType, RendererRegistry};
///
/// struct PlainText;
///
/// impl ControlRenderer for PlainText {
///     fn input_type(&self) -> InputType {
///         InputType::Text
///     }
///     fn render(&self, field: &Field) -> String {
///         format!("<input name=\"{}\">", field.name)
///     }
/// }
///
/// let mut registry = RendererRegistry::new();
/// registry.register(std::sync::Arc::new(PlainText));
///
/// let field = Field::text("title");
/// assert_eq!(registry.render(&field).unwrap(), "<input name=\"title\">");
/// ```
#[derive(Default)]
pub struct RendererRegistry {
	renderers: HashMap<InputType, Arc<dyn ControlRenderer>>,
}

impl RendererRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			renderers: HashMap::new(),
		}
	}

	/// Register a renderer under the input type it reports.
	pub fn register(&mut self, renderer: Arc<dyn ControlRenderer>) {
		self.renderers.insert(renderer.input_type(), renderer);
	}

	/// Get the renderer for an input type.
	pub fn get(&self, input_type: InputType) -> Option<Arc<dyn ControlRenderer>> {
		self.renderers.get(&input_type).cloned()
	}

	/// Render a field with the renderer registered for its type.
	pub fn render(&self, field: &Field) -> Result<String, String> {
		let renderer = self
			.get(field.input_type)
			.ok_or_else(|| format!("No renderer registered for {:?}", field.input_type))?;
		Ok(renderer.render(field))
	}
}
