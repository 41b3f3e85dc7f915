//! Integer field for numeric input with bounded validation

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::RangeValidator;

/// Integer field driven by a number input.
///
/// Numeric inputs report their on-screen text, so `clean` accepts both
/// strings and integers. With a range attached, every change event runs
/// parse then range-check; a rejected value never reaches form state, so
/// the displayed value stays at the last accepted one while the
/// rejection message is surfaced for display.
#[derive(Debug, Clone)]
pub struct IntegerField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub range: Option<RangeValidator>,
}

impl IntegerField {
	/// Create a new IntegerField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::IntegerField;
	///
	/// let field = IntegerField::new("guests".to_string());
	/// assert_eq!(field.name, "guests");
	/// assert!(field.range.is_none());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::NumberInput,
			initial: None,
			range: None,
		}
	}

	/// Restrict accepted values to the inclusive range `[min, max]`
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::fields::IntegerField;
	/// use controlled_forms::FormField;
	///
	/// let field = IntegerField::new("guests".to_string()).with_range(0, 5);
	/// assert!(field.clean(Some(&serde_json::json!("5"))).is_ok());
	/// assert_eq!(
	///     field.clean(Some(&serde_json::json!("9"))).unwrap_err().to_string(),
	///     "9 is not a valid number!"
	/// );
	/// ```
	pub fn with_range(mut self, min: i64, max: i64) -> Self {
		self.range = Some(RangeValidator::new(min, max));
		self
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
	pub fn with_initial(mut self, initial: i64) -> Self {
		self.initial = Some(serde_json::json!(initial));
		self
	}

	fn invalid(&self, shown: impl std::fmt::Display) -> FieldError {
		match &self.range {
			Some(range) => FieldError::Invalid(range.rejection_message(shown)),
			None => FieldError::Invalid(format!("{} is not a valid number!", shown)),
		}
	}
}

impl FormField for IntegerField {
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
		serde_json::json!(0)
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let num = match value {
			None if self.required => return Err(FieldError::Required),
			None => return Ok(serde_json::Value::Null),
			Some(v) => {
				if let Some(n) = v.as_i64() {
					n
				} else if let Some(s) = v.as_str() {
					let s = s.trim();
					if s.is_empty() {
						if self.required {
							return Err(FieldError::Required);
						}
						// A ranged field must always hold a number in
						// range, so empty text is a rejection like any
						// other unparsable text.
						if self.range.is_some() {
							return Err(self.invalid(s));
						}
						return Ok(serde_json::Value::Null);
					}
					s.parse::<i64>().map_err(|_| self.invalid(s))?
				} else {
					return Err(FieldError::Invalid(
						"Expected a number or a string".to_string(),
					));
				}
			}
		};

		if let Some(range) = &self.range {
			range.validate(num)?;
		}

		Ok(serde_json::json!(num))
	}
}
