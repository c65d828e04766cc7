//! Field configuration schema
//!
//! This module contains the data model consumed by renderers and validators:
//! - `types`: The `FieldConfig` tagged union and its variant structs
//! - `rules`: The validation sub-schema carried by input fields

pub mod rules;
pub mod types;


// Re-export commonly used types for convenience
pub use rules::{CustomFn, CustomValidator, ExpressionRule, Pattern, ValidationRules};
pub use types::{CheckboxField, FieldConfig, FieldKind, InputField, SelectField, SelectOption};
