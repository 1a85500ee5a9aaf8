//! Configuration loading and management.
//!
//! Configuration is optional: every field has a default and the per-call
//! [`ExtractionMode`] can always be passed explicitly. Files may be TOML, YAML
//! or JSON; [`ExtractionConfig::discover`] looks for `persian-pdf.toml` in the
//! current directory and its parents.

use crate::types::ExtractionMode;
use crate::{PersianPdfError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`ExtractionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "persian-pdf.toml";

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use persian_pdf::core::config::ExtractionConfig;
/// use persian_pdf::ExtractionMode;
///
/// let config: ExtractionConfig = toml::from_str(r#"mode = "advanced""#).unwrap();
/// assert_eq!(config.mode, ExtractionMode::Advanced);
/// assert!(config.language_detection.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Mode used when the caller does not pass one explicitly
    #[serde(default)]
    pub mode: ExtractionMode,

    #[serde(default)]
    pub language_detection: LanguageDetectionConfig,
}

/// Language detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetectionConfig {
    /// Run language detection in `Advanced` mode
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Minimum confidence (0.0-1.0) for a detection to count. The default of
    /// 0.0 accepts the detector's top guess unconditionally.
    #[serde(default)]
    pub min_confidence: f64,
}

impl Default for LanguageDetectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_confidence: 0.0,
        }
    }
}

fn default_true() -> bool {
    true
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `PersianPdfError::Validation` if the file can't be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config_file(path.as_ref())?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            PersianPdfError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config_file(path.as_ref())?;

        let config: Self = serde_yaml_ng::from_str(&content).map_err(|e| {
            PersianPdfError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config_file(path.as_ref())?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PersianPdfError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, choosing the format from the file extension.
    ///
    /// `.yaml`/`.yml` and `.json` are recognized; anything else is read as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Discover `persian-pdf.toml` in the current directory or its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(PersianPdfError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    fn validate(&self) -> Result<()> {
        let confidence = self.language_detection.min_confidence;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(PersianPdfError::validation(format!(
                "language_detection.min_confidence must be between 0.0 and 1.0, got {}",
                confidence
            )));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| PersianPdfError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.mode, ExtractionMode::Normal);
        assert!(config.language_detection.enabled);
        assert_eq!(config.language_detection.min_confidence, 0.0);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("persian-pdf.toml");

        fs::write(
            &config_path,
            r#"
mode = "advanced"

[language_detection]
enabled = false
        "#,
        )
        .unwrap();

        let config = ExtractionConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config.mode, ExtractionMode::Advanced);
        assert!(!config.language_detection.enabled);
        assert_eq!(config.language_detection.min_confidence, 0.0);
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");

        fs::write(
            &config_path,
            "mode: advanced\nlanguage_detection:\n  min_confidence: 0.5\n",
        )
        .unwrap();

        let config = ExtractionConfig::from_file(&config_path).unwrap();
        assert_eq!(config.mode, ExtractionMode::Advanced);
        assert!(config.language_detection.enabled);
        assert_eq!(config.language_detection.min_confidence, 0.5);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        fs::write(&config_path, r#"{"mode": "normal"}"#).unwrap();

        let config = ExtractionConfig::from_file(&config_path).unwrap();
        assert_eq!(config.mode, ExtractionMode::Normal);
    }

    #[test]
    fn test_invalid_mode_is_validation_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("persian-pdf.toml");
        fs::write(&config_path, r#"mode = "turbo""#).unwrap();

        let err = ExtractionConfig::from_toml_file(&config_path).unwrap_err();
        assert!(matches!(err, PersianPdfError::Validation { .. }));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("persian-pdf.toml");
        fs::write(&config_path, "[language_detection]\nmin_confidence = 2.0\n").unwrap();

        let err = ExtractionConfig::from_toml_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("min_confidence"));
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let err = ExtractionConfig::from_toml_file("/nonexistent/persian-pdf.toml").unwrap_err();
        assert!(matches!(err, PersianPdfError::Validation { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    #[serial]
    fn test_discover_config_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"mode = "advanced""#).unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();

        let result = std::panic::catch_unwind(|| {
            let config = ExtractionConfig::discover().unwrap();
            assert_eq!(config.unwrap().mode, ExtractionMode::Advanced);
        });

        std::env::set_current_dir(&original_dir).unwrap();

        if let Err(e) = result {
            std::panic::resume_unwind(e);
        }
    }
}
