//! Ordered field configurations owned by one form

use crate::config::loader::{load_document, DocumentFormat};
use crate::error::{Error, Result};
use crate::field::FieldConfig;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A form's fields in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefinition {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl FormDefinition {
    pub fn new(fields: impl IntoIterator<Item = FieldConfig>) -> Self {
        Self { fields: fields.into_iter().collect() }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        DocumentFormat::Json.parse(content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        DocumentFormat::Yaml.parse(content)
    }

    /// Pretty-printed JSON. Fails if any field carries a custom function.
    pub fn to_json_string(&self) -> Result<String> {
        DocumentFormat::Json.render(self)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        DocumentFormat::Yaml.render(self)
    }

    /// Loads a definition from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_document(path)
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldConfig::name)
    }

    /// Fails with every violated consumer invariant.
    pub fn check(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::DefinitionCheck(issues))
        }
    }

    /// Invariants the schema leaves to its consumers: unique non-empty names,
    /// `minLength <= maxLength`, and non-empty selects with unique option values.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut names = HashSet::new();

        for (position, field) in self.fields.iter().enumerate() {
            let name = field.name();
            if name.is_empty() {
                issues.push(format!("field at position {position} has an empty name"));
            } else if !names.insert(name) {
                issues.push(format!("duplicate field name '{name}'"));
            }

            if field.label().trim().is_empty() {
                warn!("Field '{name}' has an empty label");
            }

            match field {
                FieldConfig::Input(input) => {
                    let bounds = input
                        .validation
                        .as_ref()
                        .filter(|rules| !rules.has_consistent_bounds())
                        .and_then(|rules| rules.min_length.zip(rules.max_length));
                    if let Some((min, max)) = bounds {
                        issues.push(format!(
                            "field '{name}': minLength {min} exceeds maxLength {max}"
                        ));
                    }
                }
                FieldConfig::Select(select) => {
                    if select.options.is_empty() {
                        issues.push(format!("field '{name}': select has no options"));
                    }
                    let mut values = HashSet::new();
                    for option in &select.options {
                        if !values.insert(option.value.as_str()) {
                            issues.push(format!(
                                "field '{name}': duplicate option value '{}'",
                                option.value
                            ));
                        }
                    }
                }
                FieldConfig::Checkbox(_) => {}
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{CheckboxField, InputField, SelectField, ValidationRules};

    fn signup() -> FormDefinition {
        FormDefinition::new([
            InputField::new("email", "Email").with_required(true).into(),
            SelectField::new("plan", "Plan")
                .with_option("Free", "free")
                .with_option("Pro", "pro")
                .into(),
            CheckboxField::new("tos", "Accept terms").with_required(true).into(),
        ])
    }

    #[test]
    fn well_formed_definition_passes_check() {
        assert!(signup().check().is_ok());
    }

    #[test]
    fn field_lookup_by_name() {
        let form = signup();
        assert_eq!(form.field("plan").map(FieldConfig::label), Some("Plan"));
        assert!(form.field("missing").is_none());
        assert_eq!(form.names().collect::<Vec<_>>(), vec!["email", "plan", "tos"]);
    }

    #[test]
    fn check_reports_every_issue() {
        let mut form = signup();
        form.fields.push(CheckboxField::new("email", "Email again").into());
        form.fields.push(
            InputField::new("zip", "Zip")
                .with_validation(ValidationRules::default().with_min_length(6).with_max_length(5))
                .into(),
        );
        form.fields.push(
            SelectField::new("size", "Size")
                .with_option("Small", "s")
                .with_option("Also small", "s")
                .into(),
        );
        form.fields.push(SelectField::new("color", "Color").into());
        form.fields.push(CheckboxField::new("", "Nameless").into());

        let issues = form.issues();
        assert_eq!(
            issues,
            vec![
                "duplicate field name 'email'".to_string(),
                "field 'zip': minLength 6 exceeds maxLength 5".to_string(),
                "field 'size': duplicate option value 's'".to_string(),
                "field 'color': select has no options".to_string(),
                "field at position 7 has an empty name".to_string(),
            ]
        );
        assert!(matches!(form.check(), Err(Error::DefinitionCheck(found)) if found == issues));
    }

    #[test]
    fn empty_label_is_not_an_issue() {
        let form = FormDefinition::new([CheckboxField::new("tos", " ").into()]);
        assert!(form.issues().is_empty());
    }

    #[test]
    fn empty_document_is_an_empty_form() {
        let form = FormDefinition::from_json_str("{}").unwrap();
        assert!(form.fields.is_empty());
    }

    #[test]
    fn rejects_unknown_top_level_keys() {
        assert!(FormDefinition::from_json_str(r#"{"fields": [], "title": "x"}"#).is_err());
    }

    #[test]
    fn custom_function_blocks_serialization() {
        let form = FormDefinition::new([InputField::new("x", "X")
            .with_validation(ValidationRules::default().with_custom_fn(|_| None))
            .into()]);
        assert!(matches!(form.to_json_string(), Err(Error::JSONParseError(_))));
    }
}
