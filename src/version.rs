// Version information for the Prism Media Node

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Prism Media Node {}", VERSION)
}
