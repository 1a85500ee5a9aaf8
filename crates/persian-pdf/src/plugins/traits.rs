//! Base plugin trait definition.

use crate::Result;

/// Base trait for everything registered in a
/// [`DocumentExtractorRegistry`](crate::plugins::DocumentExtractorRegistry).
///
/// # Thread Safety
///
/// Plugins must be `Send + Sync`; a parser and its registry may be shared
/// across threads.
pub trait Plugin: Send + Sync {
    /// Unique, whitespace-free name (kebab-case by convention), e.g. `"pdf-extractor"`.
    fn name(&self) -> &str;

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Called once on registration. A failing plugin is not registered.
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    /// Called when the plugin is removed from its registry.
    fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> &str {
        ""
    }
}
