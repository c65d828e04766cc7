use super::filters::*;
use crate::{error::Result, expression::interface::ExpressionEngine};
use minijinja::{AutoEscape, Environment};

/// MiniJinja-based expression engine.
pub struct MiniJinjaEngine {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinjaEngine instance with the custom filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Error messages are plain text, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("regex", regex_filter);
        env.add_filter("char_count", char_count);

        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine for MiniJinjaEngine {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        Ok(self.env.render_named_str(name, template, context)?)
    }

    fn execute_expression(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<bool> {
        // Only compile the expression if it's not empty
        if expr_str.trim().is_empty() {
            return Ok(true);
        }
        let expr = self.env.compile_expression(expr_str)?;
        Ok(expr.eval(context)?.is_true())
    }
}
