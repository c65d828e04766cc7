/// Extension traits for built-in Rust types.
///
/// Each extension trait lives in its own file named after the type it extends:
/// - `path.rs` - Extensions for `std::path::Path`
pub mod path;

// Re-export all extension traits for convenience
pub use path::PathExt;
