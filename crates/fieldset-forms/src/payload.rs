//! Payload generation
//!
//! A payload generator is a caller-supplied pure mapping from the resolved
//! field list to an application-specific request body. The engine never
//! interprets the payload; it only invokes the generator after a full
//! validation pass reports the form valid. The functions here cover the
//! payload shapes the hosting features actually use.

use crate::field::Field;

/// `[{"name": ..., "value": ...}, ...]` — one entry per field, in
/// declaration order.
///
/// # Examples
///
/// ```
/// use fieldset_forms::{Field, FieldValue};
/// use fieldset_forms::payload::name_value_pairs;
///
/// let title = Field::text("title").with_initial(FieldValue::Text("My Project".to_string()));
/// let fields = vec![&title];
///
/// let payload = name_value_pairs(&fields);
/// assert_eq!(payload[0]["name"], "title");
/// assert_eq!(payload[0]["value"], "My Project");
/// ```
pub fn name_value_pairs(fields: &[&Field]) -> serde_json::Value {
	serde_json::Value::Array(
		fields
			.iter()
			.map(|f| {
				serde_json::json!({
					"name": f.name,
					"value": f.value().to_json(),
				})
			})
			.collect(),
	)
}

/// `{"name": value, ...}` — a flat object keyed by field name.
pub fn object_map(fields: &[&Field]) -> serde_json::Value {
	serde_json::Value::Object(
		fields
			.iter()
			.map(|f| (f.name.clone(), f.value().to_json()))
			.collect(),
	)
}

/// `{"label": value, ...}` — keyed by label (falling back to the field
/// name), the shape used by feedback-style forms whose backend stores
/// question/answer pairs.
pub fn keyed_by_label(fields: &[&Field]) -> serde_json::Value {
	serde_json::Value::Object(
		fields
			.iter()
			.map(|f| {
				let key = f.label.clone().unwrap_or_else(|| f.name.clone());
				(key, f.value().to_json())
			})
			.collect(),
	)
}
