use crate::validator::failure::ValidationFailure;
use indexmap::IndexMap;
use serde::Serialize;

/// Failures of a whole form, keyed by field name in form order.
///
/// Fields that passed are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    failures: IndexMap<String, Vec<ValidationFailure>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Records the failures of one field. An empty list records nothing.
    pub fn insert(&mut self, name: &str, failures: Vec<ValidationFailure>) {
        if failures.is_empty() {
            return;
        }
        self.failures.entry(name.to_string()).or_default().extend(failures);
    }

    pub fn failures_for(&self, name: &str) -> &[ValidationFailure] {
        self.failures.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn failed_fields(&self) -> impl Iterator<Item = &str> {
        self.failures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationFailure])> {
        self.failures.iter().map(|(name, failures)| (name.as_str(), failures.as_slice()))
    }

    /// Display messages per failed field, for consumers that only show text.
    pub fn messages(&self) -> IndexMap<String, Vec<String>> {
        self.failures
            .iter()
            .map(|(name, failures)| {
                (name.clone(), failures.iter().map(ToString::to_string).collect())
            })
            .collect()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<ValidationFailure>> {
        self.failures
    }
}
