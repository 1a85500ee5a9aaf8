//! Document extractor registration and lookup.

use crate::plugins::DocumentExtractor;
use crate::{PersianPdfError, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Validate a plugin name before registration.
///
/// # Rules
///
/// - Name cannot be empty
/// - Name cannot contain whitespace
fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PersianPdfError::validation("Plugin name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(PersianPdfError::validation(format!(
            "Plugin name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Registry of document extractors keyed by MIME type.
///
/// Each registry is owned by the parser that uses it; there is no process-wide
/// instance.
pub struct DocumentExtractorRegistry {
    extractors: HashMap<String, BTreeMap<i32, Arc<dyn DocumentExtractor>>>,
    name_index: HashMap<String, Vec<(String, i32)>>,
}

impl DocumentExtractorRegistry {
    /// Create a new empty extractor registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in extractors enabled by crate features.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();

        #[cfg(feature = "pdf")]
        registry.register(Arc::new(crate::extractors::PdfExtractor::new()))?;

        registry.register(Arc::new(crate::extractors::PlainTextExtractor::new()))?;

        Ok(registry)
    }

    /// Register a document extractor for all MIME types it supports.
    ///
    /// An extractor registered at the same priority as an existing one for a
    /// MIME type replaces it for that MIME type. Registering a name that is
    /// already present removes (and shuts down) the previous extractor first.
    pub fn register(&mut self, extractor: Arc<dyn DocumentExtractor>) -> Result<()> {
        let name = extractor.name().to_string();
        let priority = extractor.priority();
        let mime_types: Vec<String> = extractor.supported_mime_types().iter().map(|s| s.to_string()).collect();

        validate_plugin_name(&name)?;

        if self.name_index.contains_key(&name) {
            self.remove(&name)?;
        }

        extractor.initialize()?;

        let mut index_entries = Vec::new();

        for mime_type in &mime_types {
            let displaced = self
                .extractors
                .entry(mime_type.clone())
                .or_default()
                .insert(priority, Arc::clone(&extractor));

            if let Some(displaced) = displaced
                && !Arc::ptr_eq(&displaced, &extractor)
            {
                self.forget_entry(displaced.name(), mime_type, priority);
            }
            index_entries.push((mime_type.clone(), priority));
        }

        tracing::debug!(extractor = %name, priority, mime_types = ?mime_types, "registered extractor");
        self.name_index.insert(name, index_entries);

        Ok(())
    }

    /// Drop one `(mime_type, priority)` slot from a displaced extractor's index.
    fn forget_entry(&mut self, name: &str, mime_type: &str, priority: i32) {
        let Some(entries) = self.name_index.get_mut(name) else {
            return;
        };
        entries.retain(|(mime, prio)| !(mime == mime_type && *prio == priority));

        tracing::debug!(extractor = name, mime_type, priority, "extractor replaced");

        if entries.is_empty() {
            self.name_index.remove(name);
        }
    }

    /// Get the highest priority extractor for a MIME type.
    ///
    /// Exact matches win over `"type/*"` wildcard registrations.
    ///
    /// # Errors
    ///
    /// Returns `PersianPdfError::UnsupportedFormat` if no extractor handles `mime_type`.
    pub fn get(&self, mime_type: &str) -> Result<Arc<dyn DocumentExtractor>> {
        if let Some(priority_map) = self.extractors.get(mime_type)
            && let Some((_priority, extractor)) = priority_map.iter().next_back()
        {
            return Ok(Arc::clone(extractor));
        }

        let mut best_match: Option<(i32, Arc<dyn DocumentExtractor>)> = None;

        for (registered_mime, priority_map) in &self.extractors {
            let Some(prefix) = registered_mime.strip_suffix('*') else {
                continue;
            };
            if !registered_mime.ends_with("/*") || !mime_type.starts_with(prefix) {
                continue;
            }

            if let Some((priority, extractor)) = priority_map.iter().next_back() {
                let better = best_match.as_ref().is_none_or(|(current, _)| priority > current);
                if better {
                    best_match = Some((*priority, Arc::clone(extractor)));
                }
            }
        }

        best_match
            .map(|(_priority, extractor)| extractor)
            .ok_or_else(|| PersianPdfError::UnsupportedFormat(mime_type.to_string()))
    }

    /// Whether some extractor handles `mime_type`.
    pub fn supports(&self, mime_type: &str) -> bool {
        self.get(mime_type).is_ok()
    }

    /// List all registered extractor names.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.name_index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove an extractor from the registry, shutting it down.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let index_entries = match self.name_index.remove(name) {
            Some(entries) => entries,
            None => return Ok(()),
        };

        let mut extractor_to_shutdown: Option<Arc<dyn DocumentExtractor>> = None;

        for (mime_type, priority) in index_entries {
            let Some(priority_map) = self.extractors.get_mut(&mime_type) else {
                continue;
            };

            let owned = priority_map.get(&priority).is_some_and(|current| {
                extractor_to_shutdown
                    .as_ref()
                    .map_or(current.name() == name, |target| Arc::ptr_eq(current, target))
            });
            if !owned {
                continue;
            }

            if let Some(extractor) = priority_map.remove(&priority)
                && extractor_to_shutdown.is_none()
            {
                extractor_to_shutdown = Some(extractor);
            }

            if priority_map.is_empty() {
                self.extractors.remove(&mime_type);
            }
        }

        if let Some(extractor) = extractor_to_shutdown {
            extractor.shutdown()?;
        }

        Ok(())
    }
}

impl Default for DocumentExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
