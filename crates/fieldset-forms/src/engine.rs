//! Form engine
//!
//! The state machine that drives one mounted form. The engine takes
//! exclusive ownership of its [`FormDefinition`] and is the only writer:
//! the rendering layer reports semantic input events in, and reads field
//! state back out between events. All mutation is synchronous; the one
//! asynchronous boundary is [`FormEngine::submit`], which hands the
//! generated payload to the injected [`SaveTransport`].

use crate::definition::{FormDefinition, ResetOnSuccess};
use crate::field::{Field, FieldValue};
use crate::transport::SaveTransport;
use crate::validators::{validate_field, FormSnapshot};
use tracing::{debug, warn};

/// Lifecycle of a form instance.
///
/// ```text
/// Pristine -> Editing -> Validating -> Invalid
///                |                       |  (next value change)
///                |                       v
///                +----> Validating -> Submitting -> Submitted
///                                        |
///                                        +--> Invalid (save rejected)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
	/// Initial state, no field touched
	Pristine,
	/// At least one field dirty, not yet submitted
	Editing,
	/// Submit invoked, validators running
	Validating,
	/// At least one error present
	Invalid,
	/// Payload generated, external save in flight
	Submitting,
	/// Save succeeded
	Submitted,
}

/// Semantic input events the rendering contract reports.
///
/// The engine does not prescribe DOM events; it only requires that the
/// renderer can report these three.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
	ValueChanged(FieldValue),
	Blurred,
	Focused,
}

/// Errors surfaced by engine operations
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("no field named '{0}' in this form")]
	UnknownField(String),
	#[error("form failed validation")]
	Invalid,
	#[error("save failed: {0}")]
	Save(anyhow::Error),
}

/// The engine for one mounted form.
///
/// One engine per rendered form; nothing is shared across instances. The
/// engine does not guard against re-entrant submits — `submit` takes
/// `&mut self`, so overlapping calls on one instance cannot compile, but
/// the renderer is still responsible for disabling its submit control
/// while [`phase`](FormEngine::phase) is [`FormPhase::Submitting`] so a
/// second request is not queued behind the first.
pub struct FormEngine {
	definition: FormDefinition,
	phase: FormPhase,
	form_error: Option<String>,
}

impl FormEngine {
	/// Take ownership of a definition and start in `Pristine`.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FormDefinition, FormEngine, FormPhase, Section};
	///
	/// let engine = FormEngine::new(FormDefinition::new(vec![
	///     Section::new().with_field(Field::text("title")),
	/// ]));
	/// assert_eq!(engine.phase(), FormPhase::Pristine);
	/// assert!(!engine.is_dirty());
	/// ```
	pub fn new(definition: FormDefinition) -> Self {
		Self {
			definition,
			phase: FormPhase::Pristine,
			form_error: None,
		}
	}

	/// The owned definition (read-only).
	pub fn definition(&self) -> &FormDefinition {
		&self.definition
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	/// Form-level error from the last rejected save, if any.
	pub fn form_error(&self) -> Option<&str> {
		self.form_error.as_deref()
	}

	/// The flattened field list, in declaration order.
	pub fn input_fields(&self) -> Vec<&Field> {
		self.definition.input_fields()
	}

	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Option<&Field> {
		self.definition.field(name)
	}

	/// Route a semantic input event to the named field.
	///
	/// A value change updates the field (marking it dirty and clearing
	/// its stale error), runs the field's change hook, clears any
	/// form-level error, and moves the form back onto the editing track.
	/// Blur and focus only run the field's hooks.
	pub fn apply(&mut self, name: &str, event: InputEvent) -> Result<(), FormError> {
		let field = self
			.definition
			.field_mut(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;

		match event {
			InputEvent::ValueChanged(value) => {
				field.set_value(value);
				if let Some(hook) = field.hooks().on_change.clone() {
					hook(field);
				}
				self.form_error = None;
				self.transition(FormPhase::Editing);
			}
			InputEvent::Blurred => {
				if let Some(hook) = field.hooks().on_blur.clone() {
					hook(field);
				}
			}
			InputEvent::Focused => {
				if let Some(hook) = field.hooks().on_focus.clone() {
					hook(field);
				}
			}
		}

		Ok(())
	}

	/// Run every field's validator pipeline and return aggregate validity.
	///
	/// Each field fails fast on its first failing validator, but the pass
	/// always visits every field so the submitter sees every problem at
	/// once. Errors are written onto the fields in place; fields whose
	/// validators all pass get their error cleared.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FormDefinition, FormEngine, Section};
	/// use fieldset_forms::validators::Required;
	///
	/// let mut engine = FormEngine::new(FormDefinition::new(vec![
	///     Section::new().with_field(Field::text("title").with_validator(Required::new())),
	/// ]));
	///
	/// assert!(!engine.validate_all());
	/// assert!(engine.field("title").unwrap().error().is_some());
	/// ```
	pub fn validate_all(&mut self) -> bool {
		let resume = self.phase;
		self.transition(FormPhase::Validating);

		let snapshot = FormSnapshot::capture(self.definition.input_fields().into_iter());

		let mut valid = true;
		for field in self.definition.input_fields_mut() {
			let error = validate_field(field, &snapshot);
			valid &= error.is_none();
			field.set_error(error);
		}

		if valid {
			self.transition(resume);
		} else {
			self.transition(FormPhase::Invalid);
		}
		valid
	}

	/// Whether every field is currently error-free. Derived on demand,
	/// never cached.
	pub fn is_valid(&self) -> bool {
		self.input_fields().iter().all(|f| f.error().is_none())
	}

	/// Whether any field has been touched since the last reset. Derived
	/// on demand, never cached.
	pub fn is_dirty(&self) -> bool {
		self.input_fields().iter().any(|f| f.dirty())
	}

	/// Restore every field to its initial value, clear all dirty/error
	/// state and the form-level error, and return to `Pristine`.
	///
	/// Used both for an explicit reset button and on modal close after
	/// cancel, so no stale partial input leaks into a later open of the
	/// same form. Idempotent.
	pub fn reset(&mut self) {
		for field in self.definition.input_fields_mut() {
			field.reset();
		}
		self.form_error = None;
		self.transition(FormPhase::Pristine);
	}

	/// Validate, generate the payload, and hand it to the transport.
	///
	/// When validation fails, `generator` is never invoked and the call
	/// returns [`FormError::Invalid`] with per-field errors already in
	/// place. When the transport rejects, every field value is left
	/// intact, the rejection message becomes the form-level error, and
	/// the form returns to `Invalid` so a second attempt needs no
	/// re-entry. On success the definition's [`ResetOnSuccess`] policy is
	/// applied.
	///
	/// # Examples
	///
	/// ```no_run
	/// # use fieldset_forms::{payload, FormEngine, SaveTransport};
	/// # async fn run(engine: &mut FormEngine, transport: &dyn SaveTransport) {
	/// match engine.submit(payload::name_value_pairs, transport).await {
	///     Ok(()) => println!("saved"),
	///     Err(err) => eprintln!("not saved: {err}"),
	/// }
	/// # }
	/// ```
	pub async fn submit<G>(
		&mut self,
		generator: G,
		transport: &dyn SaveTransport,
	) -> Result<(), FormError>
	where
		G: Fn(&[&Field]) -> serde_json::Value,
	{
		if !self.validate_all() {
			debug!(phase = ?self.phase, "submit blocked by validation");
			return Err(FormError::Invalid);
		}

		self.transition(FormPhase::Submitting);
		let payload = {
			let fields = self.definition.input_fields();
			generator(&fields)
		};

		match transport.save(&payload).await {
			Ok(()) => {
				match self.definition.reset_on_success {
					ResetOnSuccess::Preserve => {
						for field in self.definition.input_fields_mut() {
							field.clear_dirty();
						}
					}
					ResetOnSuccess::Restore => {
						for field in self.definition.input_fields_mut() {
							field.reset();
						}
					}
				}
				self.form_error = None;
				self.transition(FormPhase::Submitted);
				Ok(())
			}
			Err(err) => {
				warn!(error = %err, "save rejected");
				self.form_error = Some(err.to_string());
				self.transition(FormPhase::Invalid);
				Err(FormError::Save(err))
			}
		}
	}

	fn transition(&mut self, next: FormPhase) {
		if self.phase != next {
			debug!(from = ?self.phase, to = ?next, "form phase transition");
			self.phase = next;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::definition::ResetOnSuccess;
	use crate::payload;
	use crate::section::Section;
	use crate::validators::{Required, Url};
	use async_trait::async_trait;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Mutex;

	/// Transport double: counts calls, optionally rejects, records payloads.
	#[derive(Default)]
	struct FakeTransport {
		calls: AtomicUsize,
		fail: bool,
		payloads: Mutex<Vec<serde_json::Value>>,
	}

	impl FakeTransport {
		fn failing() -> Self {
			Self {
				fail: true,
				..Self::default()
			}
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl SaveTransport for FakeTransport {
		async fn save(&self, payload: &serde_json::Value) -> anyhow::Result<()> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.payloads.lock().unwrap().push(payload.clone());
			if self.fail {
				anyhow::bail!("network unreachable")
			}
			Ok(())
		}
	}

	fn project_form() -> FormEngine {
		FormEngine::new(FormDefinition::new(vec![
			Section::new()
				.with_title("Basics")
				.with_field(Field::text("title").with_validator(Required::new())),
			Section::new().with_title("Links").with_field(
				Field::url("url")
					.with_validator(Required::new())
					.with_validator(Url::new()),
			),
		]))
	}

	fn set_text(engine: &mut FormEngine, name: &str, value: &str) {
		engine
			.apply(name, InputEvent::ValueChanged(FieldValue::Text(value.to_string())))
			.unwrap();
	}

	#[test]
	fn test_pristine_to_editing_on_value_change() {
		let mut engine = project_form();
		assert_eq!(engine.phase(), FormPhase::Pristine);

		set_text(&mut engine, "title", "My Project");

		assert_eq!(engine.phase(), FormPhase::Editing);
		assert!(engine.is_dirty());
	}

	#[test]
	fn test_apply_unknown_field() {
		let mut engine = project_form();
		let err = engine
			.apply("nope", InputEvent::Blurred)
			.unwrap_err();
		assert!(matches!(err, FormError::UnknownField(_)));
	}

	#[test]
	fn test_validate_all_reports_every_problem() {
		let mut engine = project_form();
		set_text(&mut engine, "url", "not-a-url");

		assert!(!engine.validate_all());
		assert_eq!(engine.phase(), FormPhase::Invalid);
		assert!(engine.field("title").unwrap().error().is_some());
		assert_eq!(
			engine.field("url").unwrap().error(),
			Some("Enter a valid URL")
		);
	}

	#[test]
	fn test_invalid_returns_to_editing_on_value_change() {
		let mut engine = project_form();
		assert!(!engine.validate_all());
		assert_eq!(engine.phase(), FormPhase::Invalid);

		set_text(&mut engine, "title", "My Project");
		assert_eq!(engine.phase(), FormPhase::Editing);
		// The edited field's stale error is cleared; the untouched one stays.
		assert!(engine.field("title").unwrap().error().is_none());
		assert!(engine.field("url").unwrap().error().is_some());
	}

	#[test]
	fn test_validate_all_leaves_untouched_fields_unchanged() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");
		assert!(engine.validate_all());

		// Corrupt one field; the other's (absent) error must not change.
		set_text(&mut engine, "url", "broken");
		assert!(!engine.validate_all());
		assert!(engine.field("title").unwrap().error().is_none());
	}

	#[test]
	fn test_validate_all_restores_track_phase_when_valid() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");

		assert!(engine.validate_all());
		assert_eq!(engine.phase(), FormPhase::Editing);
	}

	#[test]
	fn test_reset_restores_defaults() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "title", "Renamed twice");
		engine.validate_all();

		engine.reset();

		assert_eq!(engine.phase(), FormPhase::Pristine);
		assert!(!engine.is_dirty());
		assert!(engine.is_valid());
		assert_eq!(engine.field("title").unwrap().value(), &FieldValue::Empty);
	}

	#[test]
	fn test_blur_and_focus_run_hooks() {
		let definition = FormDefinition::new(vec![Section::new().with_field(
			Field::text("name")
				.with_initial(FieldValue::Text("  padded  ".to_string()))
				.on_blur(|field| {
					if let Some(text) = field.value().as_text() {
						let trimmed = text.trim().to_string();
						field.set_value(FieldValue::Text(trimmed));
					}
				}),
		)]);
		let mut engine = FormEngine::new(definition);

		engine.apply("name", InputEvent::Blurred).unwrap();
		assert_eq!(engine.field("name").unwrap().value().as_text(), Some("padded"));

		// Focus has no hook installed: a no-op, not an error.
		engine.apply("name", InputEvent::Focused).unwrap();
	}

	#[test]
	fn test_submit_invalid_never_generates_payload() {
		let mut engine = project_form();
		set_text(&mut engine, "url", "not-a-url");
		let transport = FakeTransport::default();

		let generated = AtomicUsize::new(0);
		let result = tokio_test::block_on(engine.submit(
			|fields| {
				generated.fetch_add(1, Ordering::SeqCst);
				payload::name_value_pairs(fields)
			},
			&transport,
		));

		assert!(matches!(result, Err(FormError::Invalid)));
		assert_eq!(generated.load(Ordering::SeqCst), 0);
		assert_eq!(transport.calls(), 0);
		assert_eq!(engine.phase(), FormPhase::Invalid);
	}

	#[test]
	fn test_submit_success_calls_save_once() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");
		let transport = FakeTransport::default();

		tokio_test::block_on(engine.submit(payload::name_value_pairs, &transport)).unwrap();

		assert_eq!(transport.calls(), 1);
		assert_eq!(engine.phase(), FormPhase::Submitted);
		assert_eq!(
			transport.payloads.lock().unwrap()[0],
			serde_json::json!([
				{"name": "title", "value": "My Project"},
				{"name": "url", "value": "https://example.com"},
			])
		);
	}

	#[test]
	fn test_submit_success_preserve_policy_clears_dirty_keeps_values() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");
		let transport = FakeTransport::default();

		tokio_test::block_on(engine.submit(payload::name_value_pairs, &transport)).unwrap();

		assert!(!engine.is_dirty());
		assert_eq!(
			engine.field("title").unwrap().value().as_text(),
			Some("My Project")
		);
	}

	#[test]
	fn test_submit_success_restore_policy_resets_values() {
		let mut engine = FormEngine::new(
			FormDefinition::new(vec![Section::new()
				.with_field(Field::text("title").with_validator(Required::new()))])
			.with_reset_on_success(ResetOnSuccess::Restore),
		);
		set_text(&mut engine, "title", "My Project");
		let transport = FakeTransport::default();

		tokio_test::block_on(engine.submit(payload::name_value_pairs, &transport)).unwrap();

		assert_eq!(engine.phase(), FormPhase::Submitted);
		assert_eq!(engine.field("title").unwrap().value(), &FieldValue::Empty);
		assert!(!engine.is_dirty());
	}

	#[test]
	fn test_rejected_save_preserves_input_and_allows_retry() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");

		let failing = FakeTransport::failing();
		let result = tokio_test::block_on(engine.submit(payload::name_value_pairs, &failing));

		assert!(matches!(result, Err(FormError::Save(_))));
		assert_eq!(engine.phase(), FormPhase::Invalid);
		assert_eq!(engine.form_error(), Some("network unreachable"));
		assert_eq!(
			engine.field("title").unwrap().value().as_text(),
			Some("My Project")
		);

		// Second attempt without re-entering anything succeeds.
		let working = FakeTransport::default();
		tokio_test::block_on(engine.submit(payload::name_value_pairs, &working)).unwrap();
		assert_eq!(working.calls(), 1);
		assert_eq!(engine.phase(), FormPhase::Submitted);
		assert!(engine.form_error().is_none());
	}

	#[test]
	fn test_value_change_clears_form_error() {
		let mut engine = project_form();
		set_text(&mut engine, "title", "My Project");
		set_text(&mut engine, "url", "https://example.com");

		let failing = FakeTransport::failing();
		let _ = tokio_test::block_on(engine.submit(payload::name_value_pairs, &failing));
		assert!(engine.form_error().is_some());

		set_text(&mut engine, "title", "My Project v2");
		assert!(engine.form_error().is_none());
		assert_eq!(engine.phase(), FormPhase::Editing);
	}
}
