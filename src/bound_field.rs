//! Read-only field views for the rendering collaborator

use crate::field::{FormField, Widget};

/// A field paired with its current value and recorded rejection messages.
///
/// The presentation layer reads everything it needs to display a
/// controlled input from here; it never mutates form state through it.
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	value: Option<&'a serde_json::Value>,
	errors: &'a [String],
}

impl<'a> BoundField<'a> {
	pub fn new(
		field: &'a dyn FormField,
		value: Option<&'a serde_json::Value>,
		errors: &'a [String],
	) -> Self {
		Self {
			field,
			value,
			errors,
		}
	}

	pub fn name(&self) -> &str {
		self.field.name()
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	/// Current value, falling back to the field's initial value
	pub fn value(&self) -> Option<&serde_json::Value> {
		self.value.or_else(|| self.field.initial())
	}

	pub fn errors(&self) -> &[String] {
		self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// Which input attribute the renderer should drive
	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::{CharField, IntegerField};

	#[test]
	fn test_bound_field_basic() {
		let field = CharField::new("name".to_string()).with_label("Full Name");
		let value = serde_json::json!("John Doe");

		let bound = BoundField::new(&field, Some(&value), &[]);

		assert_eq!(bound.name(), "name");
		assert_eq!(bound.label(), Some("Full Name"));
		assert_eq!(bound.value(), Some(&value));
		assert!(!bound.has_errors());
		assert_eq!(bound.widget(), &Widget::TextInput);
	}

	#[test]
	fn test_bound_field_falls_back_to_initial() {
		let field = CharField::new("name".to_string()).with_initial(serde_json::json!("Ada"));
		let bound = BoundField::new(&field, None, &[]);
		assert_eq!(bound.value(), Some(&serde_json::json!("Ada")));
	}

	#[test]
	fn test_bound_field_with_errors() {
		let field = IntegerField::new("guests".to_string()).with_range(0, 5);
		let value = serde_json::json!(5);
		let errors = vec!["9 is not a valid number!".to_string()];

		let bound = BoundField::new(&field, Some(&value), &errors);

		assert!(bound.has_errors());
		assert_eq!(bound.errors().len(), 1);
		assert_eq!(bound.widget(), &Widget::NumberInput);
	}
}
