//! Reusable value validators backing the concrete field types

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Email address pattern.
//
// Validates addresses with:
// - A non-empty local part of common unquoted characters
// - Valid domain labels (no leading/trailing hyphens)
// - At least one label in the domain part
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that an integer lies in an inclusive range.
///
/// On failure the offending value is interpolated into the rejection
/// message, so the displayed text names exactly what the user typed.
///
/// # Examples
///
/// ```
/// use controlled_forms::validators::RangeValidator;
///
/// let validator = RangeValidator::new(0, 5);
/// assert!(validator.validate(3).is_ok());
/// assert_eq!(
///     validator.validate(9).unwrap_err().to_string(),
///     "9 is not a valid number!"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RangeValidator {
	min: i64,
	max: i64,
	/// Optional fixed error message overriding the default
	message: Option<String>,
}

impl RangeValidator {
	/// Creates a validator for the inclusive range `[min, max]`.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::validators::RangeValidator;
	///
	/// let validator = RangeValidator::new(0, 5);
	/// assert!(validator.validate(0).is_ok());
	/// assert!(validator.validate(5).is_ok());
	/// assert!(validator.validate(6).is_err());
	/// ```
	pub fn new(min: i64, max: i64) -> Self {
		Self {
			min,
			max,
			message: None,
		}
	}

	/// Sets a fixed error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::validators::RangeValidator;
	///
	/// let validator = RangeValidator::new(1, 10).with_message("Pick between 1 and 10");
	/// assert_eq!(
	///     validator.validate(0).unwrap_err().to_string(),
	///     "Pick between 1 and 10"
	/// );
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min(&self) -> i64 {
		self.min
	}

	pub fn max(&self) -> i64 {
		self.max
	}

	/// Checks the value, returning it unchanged when in range
	pub fn validate(&self, value: i64) -> FieldResult<i64> {
		if value < self.min || value > self.max {
			return Err(FieldError::Validation(self.rejection_message(value)));
		}
		Ok(value)
	}

	/// The message recorded when `shown` fails the range check
	pub fn rejection_message(&self, shown: impl std::fmt::Display) -> String {
		match &self.message {
			Some(m) => m.clone(),
			None => format!("{} is not a valid number!", shown),
		}
	}
}

/// Validates that a string value is a well-formed email address.
///
/// # Examples
///
/// ```
/// use controlled_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use controlled_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("Please enter a valid address");
	/// assert_eq!(
	///     validator.validate("bad").unwrap_err().to_string(),
	///     "Please enter a valid address"
	/// );
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let message = self
				.message
				.clone()
				.unwrap_or_else(|| "Enter a valid email address.".to_string());
			Err(FieldError::Invalid(message))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0)]
	#[case(3)]
	#[case(5)]
	fn test_range_accepts_in_range(#[case] value: i64) {
		let validator = RangeValidator::new(0, 5);
		assert_eq!(validator.validate(value).unwrap(), value);
	}

	#[rstest]
	#[case(-1)]
	#[case(6)]
	#[case(i64::MAX)]
	fn test_range_rejects_out_of_range(#[case] value: i64) {
		let validator = RangeValidator::new(0, 5);
		assert!(validator.validate(value).is_err());
	}

	#[rstest]
	fn test_range_default_message_interpolates_value() {
		let validator = RangeValidator::new(0, 5);
		assert_eq!(
			validator.validate(9).unwrap_err().to_string(),
			"9 is not a valid number!"
		);
		assert_eq!(validator.rejection_message("abc"), "abc is not a valid number!");
	}

	#[rstest]
	fn test_range_bounds_are_inclusive() {
		let validator = RangeValidator::new(-5, -1);
		assert!(validator.validate(-5).is_ok());
		assert!(validator.validate(-1).is_ok());
		assert!(validator.validate(0).is_err());
	}

	#[rstest]
	#[case("user@example.com")]
	#[case("first.last@sub.example.org")]
	#[case("user+tag@example.co")]
	fn test_email_accepts_valid(#[case] value: &str) {
		assert!(EmailValidator::new().validate(value).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("plain")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@-bad-.com")]
	fn test_email_rejects_invalid(#[case] value: &str) {
		assert!(EmailValidator::new().validate(value).is_err());
	}
}
