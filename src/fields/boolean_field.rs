//! Boolean field for checkbox input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Boolean field driven by a checkbox.
///
/// Accepts booleans verbatim; an absent value reads as unchecked. When
/// `required`, only `true` passes (a consent checkbox).
#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
}

impl BooleanField {
	/// Create a new BooleanField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::BooleanField;
	///
	/// let field = BooleanField::new("admin".to_string());
	/// assert_eq!(field.name, "admin");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::CheckboxInput,
			initial: None,
		}
	}

	/// Require the box to be checked
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::BooleanField;
	/// use controlled_forms::FormField;
	///
	/// let field = BooleanField::new("terms".to_string()).required();
	/// assert!(field.clean(Some(&serde_json::json!(true))).is_ok());
	/// assert!(field.clean(Some(&serde_json::json!(false))).is_err());
	/// ```
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
	pub fn with_initial(mut self, initial: bool) -> Self {
		self.initial = Some(serde_json::json!(initial));
		self
	}
}

impl FormField for BooleanField {
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
		serde_json::json!(false)
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let checked = match value {
			None => false,
			Some(v) => v
				.as_bool()
				.ok_or_else(|| FieldError::Invalid("Expected a boolean".to_string()))?,
		};

		if self.required && !checked {
			return Err(FieldError::Required);
		}

		Ok(serde_json::json!(checked))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn test_booleanfield_verbatim(#[case] value: bool) {
		let field = BooleanField::new("admin".to_string());
		assert_eq!(
			field.clean(Some(&serde_json::json!(value))).unwrap(),
			serde_json::json!(value)
		);
	}

	#[rstest]
	fn test_booleanfield_absent_reads_unchecked() {
		let field = BooleanField::new("admin".to_string());
		assert_eq!(field.clean(None).unwrap(), serde_json::json!(false));
	}

	#[rstest]
	fn test_booleanfield_required_means_checked() {
		let field = BooleanField::new("terms".to_string()).required();
		assert!(field.clean(Some(&serde_json::json!(true))).is_ok());
		assert!(matches!(
			field.clean(Some(&serde_json::json!(false))),
			Err(FieldError::Required)
		));
		assert!(matches!(field.clean(None), Err(FieldError::Required)));
	}

	#[rstest]
	fn test_booleanfield_rejects_non_boolean() {
		let field = BooleanField::new("admin".to_string());
		assert!(matches!(
			field.clean(Some(&serde_json::json!("yes"))),
			Err(FieldError::Invalid(_))
		));
	}
}
