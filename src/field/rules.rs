//! Validation rules attached to input fields

use crate::constants::expression;
use crate::error::Result;
use regex::Regex;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Signature of a stored custom validator.
///
/// Returns `Some(message)` when the value is rejected. Implementations must be
/// pure: the validator may call them any number of times, from any thread.
pub type CustomFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Rules applied to the string value of an input field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomValidator>,
}

impl ValidationRules {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Attaches a stored function as the custom rule.
    pub fn with_custom_fn<F>(mut self, custom: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(CustomValidator::Function(Arc::new(custom)));
        self
    }

    /// Attaches a serializable expression as the custom rule.
    pub fn with_custom_expression(
        mut self,
        condition: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        self.custom = Some(CustomValidator::Expression(ExpressionRule {
            condition: condition.into(),
            error_message: error_message.into(),
        }));
        self
    }

    /// Whether `minLength <= maxLength` holds (vacuously true when either is unset).
    pub fn has_consistent_bounds(&self) -> bool {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// A compiled regular expression that crosses the serialization boundary as its source.
///
/// Flags are written inline, e.g. `(?i)^[a-z]+$`. Two patterns are equal when
/// their sources are equal.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self(Regex::new(source)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl FromStr for Pattern {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source).map(Pattern).map_err(de::Error::custom)
    }
}

/// A custom rule expressed as a condition over `value`.
///
/// When `condition` evaluates falsy, `error_message` is rendered with `value`
/// in scope and reported as the failure reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpressionRule {
    #[serde(default = "get_default_condition")]
    pub condition: String,
    #[serde(default = "get_default_error_message")]
    pub error_message: String,
}

/// The `custom` rule of an input field.
#[derive(Clone)]
pub enum CustomValidator {
    /// A stored function. Cannot be serialized.
    Function(Arc<CustomFn>),
    /// An expression evaluated by an [`crate::expression::ExpressionEngine`].
    Expression(ExpressionRule),
}

impl CustomValidator {
    pub fn from_fn<F>(custom: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(custom))
    }
}

impl PartialEq for CustomValidator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Expression(a), Self::Expression(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(<fn>)"),
            Self::Expression(rule) => f.debug_tuple("Expression").field(rule).finish(),
        }
    }
}

impl Serialize for CustomValidator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Expression(rule) => rule.serialize(serializer),
            Self::Function(_) => Err(ser::Error::custom(
                "custom function validators cannot be serialized; use an expression rule",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CustomValidator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ExpressionRule::deserialize(deserializer).map(Self::Expression)
    }
}

pub fn get_default_condition() -> String {
    expression::DEFAULT_CONDITION.to_string()
}

fn get_default_error_message() -> String {
    expression::INVALID_VALUE.to_string()
}
