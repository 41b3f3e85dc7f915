//! Form state controller: the single source of truth for a set of
//! controlled inputs.

use crate::bound_field::BoundField;
use crate::field::FormField;
use crate::input::FieldInput;
use std::collections::HashMap;
use std::ops::Index;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Outcome of a single field update.
///
/// A rejected update is normal, expected state surfaced to the user as
/// display text, never a fault: form state keeps the last-accepted value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
	Accepted(serde_json::Value),
	Rejected(String),
}

impl ValidationResult {
	pub fn is_accepted(&self) -> bool {
		matches!(self, ValidationResult::Accepted(_))
	}

	pub fn is_rejected(&self) -> bool {
		matches!(self, ValidationResult::Rejected(_))
	}
}

/// Immutable copy of form state at a point in time.
///
/// Entries follow field declaration order. The snapshot owns its data,
/// so later mutations of the form never show through.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FormSnapshot {
	entries: Vec<(String, serde_json::Value)>,
}

impl FormSnapshot {
	pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// A form: registered fields plus their current values.
///
/// The form owns the canonical mapping from field name to current value
/// and is mutated exclusively through [`Form::update`]. Presentation
/// code reads values through [`Form::value`] or [`Form::bound_field`]
/// and forwards user events back here; it never mutates state directly.
///
/// Every operation is a synchronous, run-to-completion state transition
/// on `&mut self`; exclusivity comes from ownership, not locking.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	initial: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::Form;
	///
	/// let form = Form::new();
	/// assert_eq!(form.field_count(), 0);
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			initial: HashMap::new(),
			errors: HashMap::new(),
		}
	}

	/// Create a new form with initial values.
	///
	/// Initial values take effect as fields are registered: a field whose
	/// name appears here starts at that value instead of its default.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, Form};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut initial = HashMap::new();
	/// initial.insert("first_name".to_string(), json!("John"));
	///
	/// let mut form = Form::with_initial(initial);
	/// form.add_field(Box::new(CharField::new("first_name".to_string())));
	/// assert_eq!(form.value("first_name"), Some(&json!("John")));
	/// ```
	pub fn with_initial(initial: HashMap<String, serde_json::Value>) -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			initial,
			errors: HashMap::new(),
		}
	}

	/// Register a field, seeding its entry in form state.
	///
	/// The entry starts at the form-level initial value for the field's
	/// name if one was supplied, else the field's own initial value, else
	/// the field's default. From this moment the key exists in state and
	/// stays in lockstep with the registered set of inputs.
	///
	/// Field names must be unique within a form; registering a second
	/// field under an existing name is a precondition violation.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("username".to_string())));
	/// assert_eq!(form.field_count(), 1);
	/// assert_eq!(form.value("username"), Some(&json!("")));
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		let name = field.name().to_string();
		let seed = self
			.initial
			.get(&name)
			.cloned()
			.or_else(|| field.initial().cloned())
			.unwrap_or_else(|| field.default_value());
		self.data.insert(name, seed);
		self.fields.push(field);
	}

	/// Apply one change event to the named field.
	///
	/// The single keyed update entry point for all controlled inputs. The
	/// field's `clean` step decides the outcome:
	///
	/// - Accepted: exactly the entry for `name` is replaced with the
	///   cleaned value; any recorded rejection message for `name` is
	///   cleared; every other entry is untouched.
	/// - Rejected: form state is untouched (the last-accepted value stays
	///   authoritative) and the rejection message is recorded for display.
	///
	/// A name with no registered field returns [`FormError::UnknownField`]
	/// rather than silently inserting a key.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, FieldInput, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(
	///     CharField::new("first_name".to_string()).with_initial(json!("John")),
	/// ));
	///
	/// let outcome = form
	///     .update("first_name", FieldInput::Text("Johns".to_string()))
	///     .unwrap();
	/// assert!(outcome.is_accepted());
	/// assert_eq!(form.value("first_name"), Some(&json!("Johns")));
	/// ```
	pub fn update(&mut self, name: &str, input: FieldInput) -> FormResult<ValidationResult> {
		let field = self
			.fields
			.iter()
			.find(|f| f.name() == name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;

		let raw = input.into_value();
		match field.clean(Some(&raw)) {
			Ok(cleaned) => {
				tracing::debug!(field = name, "field update accepted");
				self.errors.remove(name);
				self.data.insert(name.to_string(), cleaned.clone());
				Ok(ValidationResult::Accepted(cleaned))
			}
			Err(e) => {
				let reason = e.to_string();
				tracing::debug!(field = name, reason = %reason, "field update rejected");
				self.errors.insert(name.to_string(), vec![reason.clone()]);
				Ok(ValidationResult::Rejected(reason))
			}
		}
	}

	/// Current value of a field, `None` if no such field is registered
	pub fn value(&self, name: &str) -> Option<&serde_json::Value> {
		self.data.get(name)
	}

	/// Recorded rejection messages for a field
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{FieldInput, Form, IntegerField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(IntegerField::new("guests".to_string()).with_range(0, 5)));
	///
	/// form.update("guests", FieldInput::Text("9".to_string())).unwrap();
	/// assert_eq!(form.field_errors("guests"), &["9 is not a valid number!"]);
	/// ```
	pub fn field_errors(&self, name: &str) -> &[String] {
		self.errors.get(name).map(|e| e.as_slice()).unwrap_or(&[])
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	/// Whether every field is free of recorded rejections
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	/// Immutable copy of the whole form state, in field declaration order
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, FieldInput, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("name".to_string())));
	///
	/// let before = form.snapshot();
	/// form.update("name", FieldInput::Text("Ada".to_string())).unwrap();
	///
	/// // The snapshot is unaffected by the later mutation
	/// assert_eq!(before.get("name"), Some(&json!("")));
	/// assert_eq!(form.value("name"), Some(&json!("Ada")));
	/// ```
	pub fn snapshot(&self) -> FormSnapshot {
		let entries = self
			.fields
			.iter()
			.map(|f| {
				let value = self
					.data
					.get(f.name())
					.cloned()
					.unwrap_or(serde_json::Value::Null);
				(f.name().to_string(), value)
			})
			.collect();
		FormSnapshot { entries }
	}

	/// Immutable copy of a subset of form state, in the given order
	pub fn snapshot_of(&self, names: &[&str]) -> FormResult<FormSnapshot> {
		let mut entries = Vec::with_capacity(names.len());
		for name in names {
			let value = self
				.data
				.get(*name)
				.cloned()
				.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
			entries.push((name.to_string(), value));
		}
		Ok(FormSnapshot { entries })
	}

	/// Submit the form: a pure read.
	///
	/// Packages current form state into a snapshot and hands it to the
	/// caller-supplied sink. Performs no mutation; if the integrating
	/// component wants to clear fields afterwards, it follows up with
	/// [`Form::reset_fields`]. Suppressing the host environment's default
	/// submit action is the caller's concern.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(
	///     CharField::new("name".to_string()).with_initial(json!("A")),
	/// ));
	///
	/// let mut received = None;
	/// form.submit(|snapshot| received = Some(snapshot.clone()));
	/// assert_eq!(received.unwrap().get("name"), Some(&json!("A")));
	/// ```
	pub fn submit<F>(&self, sink: F) -> FormSnapshot
	where
		F: FnOnce(&FormSnapshot),
	{
		let snapshot = self.snapshot();
		tracing::debug!(fields = snapshot.len(), "form submitted");
		sink(&snapshot);
		snapshot
	}

	/// Reset the named fields to their default values.
	///
	/// Other fields are untouched. Recorded rejection messages for the
	/// named fields are cleared along with their values.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{BooleanField, CharField, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(
	///     CharField::new("name".to_string()).with_initial(json!("A")),
	/// ));
	/// form.add_field(Box::new(
	///     BooleanField::new("admin".to_string()).with_initial(true),
	/// ));
	///
	/// form.reset_fields(&["name"]).unwrap();
	/// assert_eq!(form.value("name"), Some(&json!("")));
	/// assert_eq!(form.value("admin"), Some(&json!(true)));
	/// ```
	pub fn reset_fields(&mut self, names: &[&str]) -> FormResult<()> {
		for name in names {
			let field = self
				.fields
				.iter()
				.find(|f| f.name() == *name)
				.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
			self.data.insert(name.to_string(), field.default_value());
			self.errors.remove(*name);
		}
		Ok(())
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn initial(&self) -> &HashMap<String, serde_json::Value> {
		&self.initial
	}

	/// Check if any field has moved away from its initial value
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::{CharField, FieldInput, Form};
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(
	///     CharField::new("name".to_string()).with_initial(json!("John")),
	/// ));
	/// assert!(!form.has_changed());
	///
	/// form.update("name", FieldInput::Text("Jane".to_string())).unwrap();
	/// assert!(form.has_changed());
	/// ```
	pub fn has_changed(&self) -> bool {
		for field in &self.fields {
			let initial_val = self
				.initial
				.get(field.name())
				.or_else(|| field.initial())
				.cloned()
				.unwrap_or_else(|| field.default_value());
			if field.has_changed(Some(&initial_val), self.data.get(field.name())) {
				return true;
			}
		}
		false
	}

	/// Read-only view of one field for the rendering collaborator
	pub fn bound_field<'a>(&'a self, name: &str) -> Option<BoundField<'a>> {
		let field = self.get_field(name)?;
		let value = self.data.get(name);
		let errors = self.field_errors(name);
		Some(BoundField::new(field, value, errors))
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl Index<&str> for Form {
	type Output = serde_json::Value;

	/// Current value of a field, panicking when the field is unknown
	fn index(&self, name: &str) -> &Self::Output {
		self.value(name)
			.unwrap_or_else(|| panic!("Field '{}' not found", name))
	}
}
