//! Field abstraction shared by all concrete field types

/// Input widget kind a field drives.
///
/// Tells the rendering collaborator which attribute of the input element
/// it should control: the displayed text for text-like widgets, the
/// checked state for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	TextInput,
	EmailInput,
	NumberInput,
	CheckboxInput,
	Select,
}

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required.")]
	Required,
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Common interface for form fields.
///
/// A field describes one controlled input: its name (the key in form
/// state), presentation metadata, and the `clean` step that validates
/// and normalizes a raw value before it is committed.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str> {
		None
	}

	fn required(&self) -> bool {
		false
	}

	fn help_text(&self) -> Option<&str> {
		None
	}

	fn widget(&self) -> &Widget;

	fn initial(&self) -> Option<&serde_json::Value> {
		None
	}

	/// Value seeded into form state when the field is registered and no
	/// initial value is supplied. Also the value `reset` restores.
	fn default_value(&self) -> serde_json::Value;

	/// Validate and normalize a raw value.
	///
	/// Returning `Err` rejects the value: form state keeps the
	/// last-accepted value and the error message is recorded for display.
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;

	/// Whether the bound value differs from the initial value
	fn has_changed(
		&self,
		initial: Option<&serde_json::Value>,
		data: Option<&serde_json::Value>,
	) -> bool {
		initial != data
	}
}
