use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON processing failed. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("YAML processing failed. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Invalid pattern. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to evaluate expression. Original error: {0}")]
    ExpressionError(#[from] minijinja::Error),

    #[error("Unsupported document format '{extension}'. Expected one of: {expected}.")]
    UnsupportedFormat { extension: String, expected: String },

    /// Raised when a loaded policy document is structurally valid but unusable.
    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    /// Every consumer invariant a form definition violates.
    #[error("Form definition check failed: {}.", .0.join("; "))]
    DefinitionCheck(Vec<String>),

    /// Failures carrying extra context, such as which document could not be read.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error as the default error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
/// * `E` - The error type, [`Error`] unless overridden
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_check_joins_every_issue() {
        let err = Error::DefinitionCheck(vec![
            "duplicate field name 'email'".to_string(),
            "field 'zip': minLength 6 exceeds maxLength 5".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Form definition check failed: duplicate field name 'email'; field 'zip': minLength 6 exceeds maxLength 5."
        );
    }

    #[test]
    fn unsupported_format_names_expected_extensions() {
        let err = Error::UnsupportedFormat {
            extension: "toml".to_string(),
            expected: "json, yaml, yml".to_string(),
        };
        assert!(err.to_string().contains("'toml'"));
        assert!(err.to_string().contains("json, yaml, yml"));
    }

    #[test]
    fn invalid_pattern_converts_from_regex_error() {
        let regex_err = regex::Regex::new("[").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
