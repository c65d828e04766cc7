/// Validation policy and JSON/YAML document loading.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Expression engine for serializable custom rules.
pub mod expression;

/// A set of extension traits for standard library types.
pub mod ext;

/// The field configuration schema.
pub mod field;

/// Ordered field configurations owned by a form.
pub mod form;

/// Reference validator executing field rules against candidate values.
pub mod validator;

pub use error::{Error, Result};
pub use field::{
    CheckboxField, CustomValidator, FieldConfig, FieldKind, InputField, Pattern,
    SelectField, SelectOption, ValidationRules,
};
pub use form::FormDefinition;
pub use validator::{ValidationFailure, ValidationReport, Validator};
