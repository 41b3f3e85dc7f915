//! Change-event payloads for controlled inputs

/// Payload of an input change event, resolved by the caller.
///
/// The caller reads the attribute the triggering widget actually carries
/// (on-screen text for text-like inputs, checked state for checkboxes)
/// and tags it here. Numeric inputs carry their on-screen text and so
/// arrive as `Text`; parsing happens in the field's `clean` step.
///
/// # Examples
///
/// ```
/// use controlled_forms::FieldInput;
///
/// let text = FieldInput::Text("John".to_string());
/// assert_eq!(text.into_value(), serde_json::json!("John"));
///
/// let checked = FieldInput::Checkbox(true);
/// assert_eq!(checked.into_value(), serde_json::json!(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
	Text(String),
	Checkbox(bool),
}

impl FieldInput {
	/// Convert the payload into the raw value handed to `clean`
	pub fn into_value(self) -> serde_json::Value {
		match self {
			FieldInput::Text(s) => serde_json::Value::String(s),
			FieldInput::Checkbox(b) => serde_json::Value::Bool(b),
		}
	}
}

impl From<&str> for FieldInput {
	fn from(s: &str) -> Self {
		FieldInput::Text(s.to_string())
	}
}

impl From<String> for FieldInput {
	fn from(s: String) -> Self {
		FieldInput::Text(s)
	}
}

impl From<bool> for FieldInput {
	fn from(b: bool) -> Self {
		FieldInput::Checkbox(b)
	}
}
