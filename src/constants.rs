//! Constants used throughout the formfields crate

/// Document extensions accepted by the loaders, in order of preference
pub const DOCUMENT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Name the candidate value is bound to inside custom expressions
pub const EXPRESSION_VALUE_KEY: &str = "value";

/// Template name used when rendering custom error messages
pub const ERROR_MESSAGE_TEMPLATE: &str = "error_message";

/// Custom expression rule defaults
pub mod expression {
    pub const DEFAULT_CONDITION: &str = "true";
    pub const INVALID_VALUE: &str = "Invalid value";
}

/// Human readable names of the JSON shapes each field kind accepts
pub mod value_types {
    pub const STRING: &str = "string";
    pub const BOOLEAN: &str = "boolean";
}
