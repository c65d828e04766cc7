use crate::error::Result;

/// Trait for engines that evaluate custom rule expressions.
pub trait ExpressionEngine {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Executes an expression and returns whether it evaluates to true.
    ///
    /// An empty expression is always true.
    ///
    /// # Arguments
    /// * `expr` - Expression to evaluate
    /// * `context` - Context variables for evaluation
    ///
    /// # Returns
    /// * `Result<bool>` - Whether the expression evaluates to true
    fn execute_expression(&self, expr: &str, context: &serde_json::Value)
        -> Result<bool>;
}
