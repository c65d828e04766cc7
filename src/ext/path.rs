use std::path::Path;

/// Extension trait for Path to provide format detection helpers
pub trait PathExt {
    /// Returns the file extension lowercased, or `None` when the path has no
    /// extension or the extension is not valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use formfields::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("form.YAML").extension_lowercase().as_deref(), Some("yaml"));
    /// assert_eq!(Path::new("form").extension_lowercase(), None);
    /// ```
    fn extension_lowercase(&self) -> Option<String>;
}

impl PathExt for Path {
    fn extension_lowercase(&self) -> Option<String> {
        self.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_extension_lowercase() {
        assert_eq!(Path::new("a/b/form.Json").extension_lowercase().as_deref(), Some("json"));
    }

    #[test]
    fn test_extension_lowercase_missing() {
        assert_eq!(Path::new("a/b/form").extension_lowercase(), None);
        assert_eq!(Path::new(".hidden").extension_lowercase(), None);
    }
}
