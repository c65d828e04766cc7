//! Reference validator for field configurations
//!
//! Runs the checks an input field's rules describe against a candidate value,
//! in the order and accumulation mode of a [`ValidationPolicy`]:
//! - `failure`: The failure taxonomy reported to callers
//! - `report`: Per-field failures of a whole form

pub mod failure;
pub mod report;

pub use failure::ValidationFailure;
pub use report::ValidationReport;

use crate::{
    config::{FailureMode, Rule, ValidationPolicy},
    constants::{expression as expression_defaults, value_types, ERROR_MESSAGE_TEMPLATE, EXPRESSION_VALUE_KEY},
    expression::ExpressionEngine,
    field::{CustomValidator, ExpressionRule, FieldConfig, InputField, SelectField},
    form::FormDefinition,
};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Validates candidate values against field configurations.
pub struct Validator<'a> {
    engine: &'a dyn ExpressionEngine,
    policy: ValidationPolicy,
}

impl<'a> Validator<'a> {
    pub fn new(engine: &'a dyn ExpressionEngine, policy: ValidationPolicy) -> Self {
        Self { engine, policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Returns the first failure in policy order, regardless of the policy's mode.
    pub fn validate_input(
        &self,
        field: &InputField,
        value: &str,
    ) -> Result<(), ValidationFailure> {
        match self.policy.order.iter().find_map(|rule| self.check_rule(*rule, field, value)) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Runs the policy's rules and returns the failures its mode asks for.
    pub fn check_input(&self, field: &InputField, value: &str) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        for rule in &self.policy.order {
            if let Some(failure) = self.check_rule(*rule, field, value) {
                debug!("Field '{}' failed rule '{rule}': {failure}", field.name);
                failures.push(failure);
                if self.policy.mode == FailureMode::FirstFailure {
                    break;
                }
            }
        }
        failures
    }

    /// Validates a value taken from a form data record. `Value::Null` stands for absent.
    pub fn validate_field(&self, field: &FieldConfig, value: &Value) -> Vec<ValidationFailure> {
        match field {
            FieldConfig::Input(input) => match value {
                Value::Null => self.check_input(input, ""),
                Value::String(s) => self.check_input(input, s),
                _ => vec![ValidationFailure::TypeMismatch { expected: value_types::STRING }],
            },
            FieldConfig::Select(select) => match value {
                Value::Null => self.check_select(select, ""),
                Value::String(s) => self.check_select(select, s),
                _ => vec![ValidationFailure::TypeMismatch { expected: value_types::STRING }],
            },
            FieldConfig::Checkbox(checkbox) => {
                let checked = match value {
                    Value::Null => false,
                    Value::Bool(checked) => *checked,
                    _ => {
                        return vec![ValidationFailure::TypeMismatch {
                            expected: value_types::BOOLEAN,
                        }]
                    }
                };
                if checkbox.required && !checked {
                    vec![ValidationFailure::MissingValue]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Validates every field of `form` against the matching entry of `data`.
    ///
    /// A `data` that is not an object leaves every field absent.
    pub fn validate_form(&self, form: &FormDefinition, data: &Value) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in &form.fields {
            let value = data.get(field.name()).unwrap_or(&Value::Null);
            report.insert(field.name(), self.validate_field(field, value));
        }
        if !report.is_valid() {
            debug!(
                "Form validation failed for fields: {}",
                report.failed_fields().collect::<Vec<_>>().join(", ")
            );
        }
        report
    }

    fn check_select(&self, field: &SelectField, value: &str) -> Vec<ValidationFailure> {
        if field.has_value(value) {
            return Vec::new();
        }
        if value.is_empty() {
            if field.required {
                return vec![ValidationFailure::MissingValue];
            }
            return Vec::new();
        }
        vec![ValidationFailure::UnknownOption(value.to_string())]
    }

    fn check_rule(
        &self,
        rule: Rule,
        field: &InputField,
        value: &str,
    ) -> Option<ValidationFailure> {
        let rules = field.validation.as_ref();
        let length = value.chars().count();
        match rule {
            Rule::Required => {
                (field.required && value.is_empty()).then_some(ValidationFailure::MissingValue)
            }
            Rule::MinLength => rules?
                .min_length
                .filter(|&min| length < min)
                .map(|min| ValidationFailure::TooShort { min, actual: length }),
            Rule::MaxLength => rules?
                .max_length
                .filter(|&max| length > max)
                .map(|max| ValidationFailure::TooLong { max, actual: length }),
            Rule::Pattern => rules?
                .pattern
                .as_ref()
                .filter(|pattern| !pattern.is_match(value))
                .map(|pattern| ValidationFailure::PatternMismatch {
                    pattern: pattern.as_str().to_string(),
                }),
            Rule::Custom => rules?
                .custom
                .as_ref()
                .and_then(|custom| self.run_custom(custom, value))
                .map(ValidationFailure::CustomFailure),
        }
    }

    /// An empty message from a function counts as success.
    fn run_custom(&self, custom: &CustomValidator, value: &str) -> Option<String> {
        match custom {
            CustomValidator::Function(function) => {
                (**function)(value).filter(|message| !message.is_empty())
            }
            CustomValidator::Expression(rule) => self.evaluate_expression(rule, value),
        }
    }

    fn evaluate_expression(&self, rule: &ExpressionRule, value: &str) -> Option<String> {
        let mut context = Map::new();
        context.insert(EXPRESSION_VALUE_KEY.to_string(), Value::String(value.to_string()));
        let context = Value::Object(context);

        match self.engine.execute_expression(&rule.condition, &context) {
            Ok(true) => None,
            Ok(false) => {
                let message = self
                    .engine
                    .render(&rule.error_message, &context, Some(ERROR_MESSAGE_TEMPLATE))
                    .unwrap_or_else(|err| {
                        warn!("Failed to render custom error message: {err}");
                        rule.error_message.clone()
                    });
                if message.trim().is_empty() {
                    warn!("Custom rule '{}' rendered an empty message", rule.condition);
                    return Some(expression_defaults::INVALID_VALUE.to_string());
                }
                Some(message)
            }
            Err(err) => {
                warn!("Custom expression '{}' failed: {err}", rule.condition);
                Some(err.to_string())
            }
        }
    }
}
