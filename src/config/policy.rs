//! Validation policy: which rules run, in which order, and how failures accumulate

use crate::config::loader::load_document;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;

/// One check of the input validation sub-contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// `required` and empty
    Required,
    MinLength,
    MaxLength,
    Pattern,
    /// The field's custom function or expression
    Custom,
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rule::Required => "required",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::Pattern => "pattern",
            Rule::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// Cheap structural checks first, custom logic last.
pub const DEFAULT_RULE_ORDER: &[Rule] =
    &[Rule::Required, Rule::MinLength, Rule::MaxLength, Rule::Pattern, Rule::Custom];

/// How many failures a single validation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Stop at the first failing rule.
    #[default]
    FirstFailure,
    /// Run every rule and report each failure in policy order.
    Collect,
}

/// Ordering and accumulation policy applied by [`crate::validator::Validator`].
///
/// Rules missing from `order` are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    #[serde(default = "get_default_rule_order")]
    pub order: Vec<Rule>,
    #[serde(default)]
    pub mode: FailureMode,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self { order: get_default_rule_order(), mode: FailureMode::default() }
    }
}

impl ValidationPolicy {
    pub fn with_order(mut self, order: impl IntoIterator<Item = Rule>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    pub fn with_mode(mut self, mode: FailureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Loads a policy document (`.json`, `.yaml` or `.yml`) and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let policy: ValidationPolicy = load_document(path)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.order.is_empty() {
            return Err(Error::ConfigValidation("order must list at least one rule".into()));
        }
        let mut seen = HashSet::new();
        for rule in &self.order {
            if !seen.insert(rule) {
                return Err(Error::ConfigValidation(format!(
                    "rule '{rule}' appears more than once in order"
                )));
            }
        }
        Ok(())
    }
}

fn get_default_rule_order() -> Vec<Rule> {
    DEFAULT_RULE_ORDER.to_vec()
}
