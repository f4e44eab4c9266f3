//! Multi-step form flows
//!
//! Intake-style features split one logical form across several screens.
//! A [`FormFlow`] strings complete [`FormEngine`]s together: each step
//! validates on its own, contributes a payload to the flow's collected
//! data, and later steps can be gated on what earlier steps collected.

use crate::engine::FormEngine;
use crate::field::Field;
use std::collections::HashMap;

/// Collected payloads, keyed by step name.
pub type FlowData = HashMap<String, serde_json::Value>;

type FlowConditionFn = Box<dyn Fn(&FlowData) -> bool + Send + Sync>;

/// A single step in the flow
pub struct FlowStep {
	pub name: String,
	pub engine: FormEngine,
	condition: Option<FlowConditionFn>,
}

impl FlowStep {
	/// Create a new flow step around an engine.
	pub fn new(name: impl Into<String>, engine: FormEngine) -> Self {
		Self {
			name: name.into(),
			engine,
			condition: None,
		}
	}

	/// Gate this step on data collected by earlier steps.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FlowStep, FormDefinition, FormEngine, Section};
	///
	/// let engine = FormEngine::new(FormDefinition::new(vec![
	///     Section::new().with_field(Field::text("company")),
	/// ]));
	/// let step = FlowStep::new("company", engine).with_condition(|data| {
	///     data.get("profile")
	///         .and_then(|p| p.get("employed"))
	///         .and_then(|v| v.as_bool())
	///         .unwrap_or(false)
	/// });
	/// ```
	pub fn with_condition<F>(mut self, condition: F) -> Self
	where
		F: Fn(&FlowData) -> bool + Send + Sync + 'static,
	{
		self.condition = Some(Box::new(condition));
		self
	}

	/// Whether this step applies given the data collected so far.
	pub fn is_available(&self, data: &FlowData) -> bool {
		match &self.condition {
			Some(condition) => condition(data),
			None => true,
		}
	}
}

/// An ordered sequence of form steps with conditional availability
pub struct FormFlow {
	steps: Vec<FlowStep>,
	current: usize,
	data: FlowData,
}

impl FormFlow {
	/// Create an empty flow.
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::FormFlow;
	///
	/// let flow = FormFlow::new();
	/// assert_eq!(flow.current_step(), 0);
	/// assert_eq!(flow.total_steps(), 0);
	/// ```
	pub fn new() -> Self {
		Self {
			steps: vec![],
			current: 0,
			data: FlowData::new(),
		}
	}

	/// Append a step.
	pub fn add_step(&mut self, step: FlowStep) {
		self.steps.push(step);
	}

	pub fn steps(&self) -> &[FlowStep] {
		&self.steps
	}

	pub fn current_step(&self) -> usize {
		self.current
	}

	pub fn current_step_name(&self) -> Option<&str> {
		self.steps.get(self.current).map(|s| s.name.as_str())
	}

	pub fn current_engine(&self) -> Option<&FormEngine> {
		self.steps.get(self.current).map(|s| &s.engine)
	}

	pub fn current_engine_mut(&mut self) -> Option<&mut FormEngine> {
		self.steps.get_mut(self.current).map(|s| &mut s.engine)
	}

	pub fn total_steps(&self) -> usize {
		self.steps.len()
	}

	pub fn is_first_step(&self) -> bool {
		self.current == 0
	}

	pub fn is_last_step(&self) -> bool {
		self.current + 1 >= self.steps.len()
	}

	/// Data collected so far, keyed by step name.
	pub fn data(&self) -> &FlowData {
		&self.data
	}

	/// Validate the current step and record its payload into the flow.
	///
	/// On validation failure the step's fields carry their errors and the
	/// flow does not record anything.
	pub fn complete_current<G>(&mut self, generator: G) -> Result<(), String>
	where
		G: Fn(&[&Field]) -> serde_json::Value,
	{
		let step = self
			.steps
			.get_mut(self.current)
			.ok_or_else(|| "No current step".to_string())?;

		if !step.engine.validate_all() {
			return Err(format!("Step '{}' failed validation", step.name));
		}

		let payload = generator(&step.engine.input_fields());
		self.data.insert(step.name.clone(), payload);
		Ok(())
	}

	/// Move to the next available step
	///
	/// # Examples
	///
	/// ```
	/// use fieldset_forms::{Field, FlowStep, FormDefinition, FormEngine, FormFlow, Section};
	///
	/// let step = |name: &str| {
	///     FlowStep::new(name, FormEngine::new(FormDefinition::new(vec![
	///         Section::new().with_field(Field::text(format!("{name}-field"))),
	///     ])))
	/// };
	///
	/// let mut flow = FormFlow::new();
	/// flow.add_step(step("one"));
	/// flow.add_step(step("two"));
	///
	/// flow.next_step().unwrap();
	/// assert_eq!(flow.current_step(), 1);
	/// ```
	pub fn next_step(&mut self) -> Result<(), String> {
		if self.is_last_step() {
			return Err("Already at last step".to_string());
		}

		// Find next available step
		for i in (self.current + 1)..self.steps.len() {
			if self.steps[i].is_available(&self.data) {
				self.current = i;
				return Ok(());
			}
		}

		Err("No available next step".to_string())
	}

	/// Move to the previous available step
	pub fn previous_step(&mut self) -> Result<(), String> {
		if self.is_first_step() {
			return Err("Already at first step".to_string());
		}

		// Find previous available step
		for i in (0..self.current).rev() {
			if self.steps[i].is_available(&self.data) {
				self.current = i;
				return Ok(());
			}
		}

		Err("No available previous step".to_string())
	}
}

impl Default for FormFlow {
	fn default() -> Self {
		Self::new()
	}
}
