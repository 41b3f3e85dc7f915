//! Controlled form state management and validation
//!
//! A form owns the canonical mapping from field name to current value
//! for a set of controlled inputs, and is mutated through a single keyed
//! update entry point. Change events carry a caller-resolved payload
//! ([`FieldInput`]); each field's `clean` step validates and normalizes
//! the raw value before it is committed. A rejected value never reaches
//! form state: the last-accepted value stays authoritative and the
//! rejection message is surfaced for display.
//!
//! ```
//! use controlled_forms::{CharField, FieldInput, Form, IntegerField};
//! use serde_json::json;
//!
//! let mut form = Form::new();
//! form.add_field(Box::new(
//!     CharField::new("first_name".to_string()).with_initial(json!("John")),
//! ));
//! form.add_field(Box::new(IntegerField::new("guests".to_string()).with_range(0, 5)));
//!
//! form.update("first_name", FieldInput::Text("Johns".to_string())).unwrap();
//! form.update("guests", FieldInput::Text("9".to_string())).unwrap();
//!
//! assert_eq!(form.value("first_name"), Some(&json!("Johns")));
//! assert_eq!(form.value("guests"), Some(&json!(0)));
//! assert_eq!(form.field_errors("guests"), &["9 is not a valid number!"]);
//! ```

pub mod bound_field;
pub mod field;
pub mod fields;
pub mod form;
pub mod input;
pub mod validators;

pub use bound_field::BoundField;
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{BooleanField, CharField, ChoiceField, EmailField, IntegerField};
pub use form::{Form, FormError, FormResult, FormSnapshot, ValidationResult};
pub use input::FieldInput;
pub use validators::{EmailValidator, RangeValidator};
