//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Character field with optional length validation.
///
/// An unconstrained `CharField` accepts every string verbatim, which is
/// the behavior plain controlled text inputs need.
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string());
	/// assert_eq!(field.name, "username");
	/// assert!(!field.required);
	/// assert_eq!(field.max_length, None);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
			min_length: None,
			strip: false,
		}
	}

	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the maximum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).with_max_length(100);
	/// assert_eq!(field.max_length, Some(100));
	/// ```
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the minimum length for the field
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Strip leading and trailing whitespace before validation
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::CharField;
	/// use controlled_forms::FormField;
	///
	/// let field = CharField::new("username".to_string()).stripped();
	/// let cleaned = field.clean(Some(&serde_json::json!("  john  "))).unwrap();
	/// assert_eq!(cleaned, serde_json::json!("john"));
	/// ```
	pub fn stripped(mut self) -> Self {
		self.strip = true;
		self
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the help text for the field
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set the initial value for the field
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::CharField;
	///
	/// let field = CharField::new("first_name".to_string())
	///     .with_initial(serde_json::json!("John"));
	/// assert_eq!(field.initial, Some(serde_json::json!("John")));
	/// ```
	pub fn with_initial(mut self, initial: serde_json::Value) -> Self {
		self.initial = Some(initial);
		self
	}
}

impl FormField for CharField {
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
		let s = if self.strip { s.trim() } else { s };

		if s.is_empty() && self.required {
			return Err(FieldError::Required);
		}

		let len = s.chars().count();
		if let Some(max) = self.max_length
			&& len > max
		{
			return Err(FieldError::Validation(format!(
				"Ensure this value has at most {} characters (it has {})",
				max, len
			)));
		}
		if let Some(min) = self.min_length
			&& len < min
		{
			return Err(FieldError::Validation(format!(
				"Ensure this value has at least {} characters (it has {})",
				min, len
			)));
		}

		Ok(serde_json::json!(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_charfield_accepts_verbatim() {
		let field = CharField::new("name".to_string());
		assert_eq!(
			field.clean(Some(&serde_json::json!("John Doe"))).unwrap(),
			serde_json::json!("John Doe")
		);
		// Unconstrained fields keep whitespace as typed
		assert_eq!(
			field.clean(Some(&serde_json::json!("  a  "))).unwrap(),
			serde_json::json!("  a  ")
		);
	}

	#[rstest]
	fn test_charfield_strip() {
		let field = CharField::new("name".to_string()).stripped();
		assert_eq!(
			field.clean(Some(&serde_json::json!("  John  "))).unwrap(),
			serde_json::json!("John")
		);
	}

	#[rstest]
	fn test_charfield_length_bounds() {
		let field = CharField::new("name".to_string())
			.with_min_length(2)
			.with_max_length(5);

		assert!(field.clean(Some(&serde_json::json!("ab"))).is_ok());
		assert!(field.clean(Some(&serde_json::json!("abcde"))).is_ok());
		assert!(matches!(
			field.clean(Some(&serde_json::json!("a"))),
			Err(FieldError::Validation(_))
		));
		assert!(matches!(
			field.clean(Some(&serde_json::json!("abcdef"))),
			Err(FieldError::Validation(_))
		));
	}

	#[rstest]
	fn test_charfield_required() {
		let field = CharField::new("name".to_string()).required();
		assert!(matches!(field.clean(None), Err(FieldError::Required)));
		assert!(matches!(
			field.clean(Some(&serde_json::json!(""))),
			Err(FieldError::Required)
		));
	}

	#[rstest]
	fn test_charfield_optional_empty() {
		let field = CharField::new("name".to_string());
		assert_eq!(field.clean(None).unwrap(), serde_json::json!(""));
		assert_eq!(
			field.clean(Some(&serde_json::json!(""))).unwrap(),
			serde_json::json!("")
		);
	}

	#[rstest]
	fn test_charfield_rejects_non_string() {
		let field = CharField::new("name".to_string());
		assert!(matches!(
			field.clean(Some(&serde_json::json!(42))),
			Err(FieldError::Invalid(_))
		));
	}

	#[rstest]
	fn test_charfield_length_counts_chars_not_bytes() {
		let field = CharField::new("name".to_string()).with_max_length(4);
		assert!(field.clean(Some(&serde_json::json!("héllo"))).is_err());
		assert!(field.clean(Some(&serde_json::json!("héll"))).is_ok());
	}
}
