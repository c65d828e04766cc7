//! The field configuration tagged union

use crate::field::rules::ValidationRules;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Discriminant of a [`FieldConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text input
    Input,
    /// Choice among a fixed, ordered list of options
    Select,
    /// Boolean toggle
    Checkbox,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldKind::Input => "input",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
        };
        write!(f, "{s}")
    }
}

/// Configuration of one form field, discriminated by `kind`.
///
/// Attributes that only make sense for one kind live on that kind's struct, so
/// reaching `options` on an input or `validation` on a select does not compile.
///
/// ```compile_fail
/// use formfields::InputField;
///
/// let field = InputField::new("email", "Email");
/// let _ = &field.options;
/// ```
///
/// ```compile_fail
/// use formfields::SelectField;
///
/// let field = SelectField::new("plan", "Plan");
/// let _ = &field.validation;
/// ```
///
/// Narrowing on `kind` exposes the variant's own attributes:
///
/// ```
/// use formfields::{FieldConfig, SelectField};
///
/// let field: FieldConfig = SelectField::new("plan", "Plan").with_option("Free", "free").into();
/// match &field {
///     FieldConfig::Select(select) => assert_eq!(select.options.len(), 1),
///     FieldConfig::Input(_) | FieldConfig::Checkbox(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldConfig {
    Input(InputField),
    Select(SelectField),
    Checkbox(CheckboxField),
}

/// A text input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputField {
    /// Text displayed next to the control
    pub label: String,
    /// Key of the field's value in the form data record
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

/// A single-choice field over an ordered list of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectField {
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    /// Display order is the order of this list
    pub options: Vec<SelectOption>,
}

/// A boolean field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckboxField {
    pub label: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// One entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

impl InputField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { label: label.into(), name: name.into(), required: false, validation: None }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }
}

impl SelectField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { label: label.into(), name: name.into(), required: false, options: Vec::new() }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Appends an option after the existing ones.
    pub fn with_option(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.options.push(SelectOption::new(label, value));
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

impl CheckboxField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { label: label.into(), name: name.into(), required: false }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl FieldConfig {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldConfig::Input(_) => FieldKind::Input,
            FieldConfig::Select(_) => FieldKind::Select,
            FieldConfig::Checkbox(_) => FieldKind::Checkbox,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldConfig::Input(field) => &field.label,
            FieldConfig::Select(field) => &field.label,
            FieldConfig::Checkbox(field) => &field.label,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldConfig::Input(field) => &field.name,
            FieldConfig::Select(field) => &field.name,
            FieldConfig::Checkbox(field) => &field.name,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            FieldConfig::Input(field) => field.required,
            FieldConfig::Select(field) => field.required,
            FieldConfig::Checkbox(field) => field.required,
        }
    }

    pub fn as_input(&self) -> Option<&InputField> {
        match self {
            FieldConfig::Input(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectField> {
        match self {
            FieldConfig::Select(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&CheckboxField> {
        match self {
            FieldConfig::Checkbox(field) => Some(field),
            _ => None,
        }
    }
}

impl From<InputField> for FieldConfig {
    fn from(field: InputField) -> Self {
        FieldConfig::Input(field)
    }
}

impl From<SelectField> for FieldConfig {
    fn from(field: SelectField) -> Self {
        FieldConfig::Select(field)
    }
}

impl From<CheckboxField> for FieldConfig {
    fn from(field: CheckboxField) -> Self {
        FieldConfig::Checkbox(field)
    }
}
