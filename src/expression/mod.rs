//! Expression evaluation for custom validation rules
//!
//! This module contains the components that let a `custom` rule cross the
//! serialization boundary as text instead of a stored function:
//! - `interface`: The engine trait the validator depends on
//! - `minijinja`: The default MiniJinja-backed engine
//! - `filters`: Extra filters registered on the default engine

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::ExpressionEngine;
pub use self::minijinja::MiniJinjaEngine;
