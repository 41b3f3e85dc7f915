//! Choice field for select input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Choice field driven by a select widget.
///
/// Only values from the declared choice set are accepted; anything else
/// is rejected without touching form state.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	/// Pairs of (submitted value, display label)
	pub choices: Vec<(String, String)>,
}

impl ChoiceField {
	/// Create a new ChoiceField with the given name and choices
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::ChoiceField;
	///
	/// let field = ChoiceField::new(
	///     "role".to_string(),
	///     vec![
	///         ("user".to_string(), "User".to_string()),
	///         ("admin".to_string(), "Administrator".to_string()),
	///     ],
	/// );
	/// assert_eq!(field.choices.len(), 2);
	/// ```
	pub fn new(name: String, choices: Vec<(String, String)>) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::Select,
			initial: None,
			choices,
		}
	}

	/// Set the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the initial value for the field
	pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
		self.initial = Some(serde_json::json!(initial.into()));
		self
	}

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}
}

impl FormField for ChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn default_value(&self) -> serde_json::Value {
		serde_json::json!("")
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = match value {
			None if self.required => return Err(FieldError::Required),
			None => return Ok(serde_json::json!("")),
			Some(v) => v,
		};

		let s = raw
			.as_str()
			.ok_or_else(|| FieldError::Invalid("Expected a string".to_string()))?;

		if s.is_empty() {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(serde_json::json!(""));
		}

		if !self.is_valid_choice(s) {
			return Err(FieldError::Validation(format!(
				"Select a valid choice. {} is not one of the available choices.",
				s
			)));
		}

		Ok(serde_json::json!(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn role_field() -> ChoiceField {
		ChoiceField::new(
			"role".to_string(),
			vec![
				("user".to_string(), "User".to_string()),
				("admin".to_string(), "Administrator".to_string()),
			],
		)
	}

	#[rstest]
	#[case("user")]
	#[case("admin")]
	fn test_choicefield_accepts_declared(#[case] value: &str) {
		let field = role_field();
		assert_eq!(
			field.clean(Some(&serde_json::json!(value))).unwrap(),
			serde_json::json!(value)
		);
	}

	#[rstest]
	fn test_choicefield_rejects_undeclared() {
		let field = role_field();
		let err = field.clean(Some(&serde_json::json!("root"))).unwrap_err();
		assert_eq!(
			err.to_string(),
			"Select a valid choice. root is not one of the available choices."
		);
	}

	#[rstest]
	fn test_choicefield_required() {
		let field = role_field().required();
		assert!(matches!(field.clean(None), Err(FieldError::Required)));
		assert!(matches!(
			field.clean(Some(&serde_json::json!(""))),
			Err(FieldError::Required)
		));
	}
}
