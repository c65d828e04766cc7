//! Configuration management for formfields
//!
//! This module contains the configuration system components:
//! - `policy`: The validation policy that orders and scopes rule checks
//! - `loader`: Format detection and JSON/YAML document loading

pub mod loader;
pub mod policy;

// Re-export commonly used types for convenience
pub use loader::{load_document, DocumentFormat};
pub use policy::{FailureMode, Rule, ValidationPolicy};
