//! Email field for email input

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Email field: a text input validated as an email address
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub validator: EmailValidator,
}

impl EmailField {
	/// Create a new EmailField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::EmailField;
	/// use controlled_forms::FormField;
	///
	/// let field = EmailField::new("email".to_string());
	/// assert!(field.clean(Some(&serde_json::json!("user@example.com"))).is_ok());
	/// assert!(field.clean(Some(&serde_json::json!("nope"))).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::EmailInput,
			initial: None,
			validator: EmailValidator::new(),
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

	/// Set a custom rejection message
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.validator = self.validator.with_message(message);
		self
	}
}

impl FormField for EmailField {
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
			.ok_or_else(|| FieldError::Invalid("Expected a string".to_string()))?
			.trim();

		if s.is_empty() {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(serde_json::json!(""));
		}

		self.validator.validate(s)?;
		Ok(serde_json::json!(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_emailfield_accepts_and_trims() {
		let field = EmailField::new("email".to_string());
		assert_eq!(
			field
				.clean(Some(&serde_json::json!("  user@example.com  ")))
				.unwrap(),
			serde_json::json!("user@example.com")
		);
	}

	#[rstest]
	fn test_emailfield_rejects_invalid() {
		let field = EmailField::new("email".to_string());
		assert!(matches!(
			field.clean(Some(&serde_json::json!("not-an-email"))),
			Err(FieldError::Invalid(_))
		));
	}

	#[rstest]
	fn test_emailfield_optional_empty() {
		let field = EmailField::new("email".to_string());
		assert_eq!(
			field.clean(Some(&serde_json::json!(""))).unwrap(),
			serde_json::json!("")
		);
	}

	#[rstest]
	fn test_emailfield_custom_message() {
		let field = EmailField::new("email".to_string()).with_message("Bad address");
		let err = field.clean(Some(&serde_json::json!("nope"))).unwrap_err();
		assert_eq!(err.to_string(), "Bad address");
	}
}
