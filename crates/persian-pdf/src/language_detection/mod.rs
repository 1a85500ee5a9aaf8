//! Language detection for extracted text.
//!
//! The orchestrator only needs a best-guess short language code, so the
//! collaborator contract is a single [`LanguageDetector::detect`] call. The
//! default implementation wraps `whatlang`.

use crate::core::config::LanguageDetectionConfig;

/// Anything that can name the language of a piece of text.
///
/// Implementations return an ISO 639-1 code (`"fa"`, `"ar"`, `"en"`, ...) or
/// `None` when no language can be determined.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detector that never recognizes a language.
///
/// Used when language detection is compiled out or disabled in config, which
/// makes `Advanced` mode skip character-run reversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDetector;

impl LanguageDetector for NoopDetector {
    fn detect(&self, _text: &str) -> Option<String> {
        None
    }
}

#[cfg(feature = "language-detection")]
pub use whatlang_detector::WhatlangDetector;

#[cfg(feature = "language-detection")]
mod whatlang_detector {
    use super::LanguageDetector;
    use crate::core::config::LanguageDetectionConfig;
    use whatlang::{Detector, Lang};

    /// `whatlang`-backed detector.
    ///
    /// Holds its own `whatlang::Detector`, so its lifetime is whatever the
    /// owner decides: one per call, or one shared by a long-lived
    /// [`TextExtractor`](crate::core::extractor::TextExtractor).
    ///
    /// # Example
    ///
    /// ```rust
    /// use persian_pdf::core::config::LanguageDetectionConfig;
    /// use persian_pdf::language_detection::{LanguageDetector, WhatlangDetector};
    ///
    /// let detector = WhatlangDetector::new(&LanguageDetectionConfig::default());
    /// let lang = detector.detect("The quick brown fox jumps over the lazy dog and keeps running.");
    /// assert_eq!(lang.as_deref(), Some("en"));
    /// ```
    pub struct WhatlangDetector {
        detector: Detector,
        min_confidence: f64,
        enabled: bool,
    }

    impl WhatlangDetector {
        pub fn new(config: &LanguageDetectionConfig) -> Self {
            Self {
                detector: Detector::new(),
                min_confidence: config.min_confidence,
                enabled: config.enabled,
            }
        }
    }

    impl Default for WhatlangDetector {
        fn default() -> Self {
            Self::new(&LanguageDetectionConfig::default())
        }
    }

    impl LanguageDetector for WhatlangDetector {
        fn detect(&self, text: &str) -> Option<String> {
            if !self.enabled || text.trim().is_empty() {
                return None;
            }

            let info = self.detector.detect(text)?;
            if info.confidence() < self.min_confidence {
                tracing::debug!(
                    lang = info.lang().code(),
                    confidence = info.confidence(),
                    min_confidence = self.min_confidence,
                    "language detection below confidence threshold"
                );
                return None;
            }

            Some(lang_to_iso639_1(info.lang()).to_string())
        }
    }

    /// Convert whatlang's `Lang` to an ISO 639-1 code.
    ///
    /// whatlang tags Persian as `Pes` (Iranian Persian), which maps to `fa`.
    pub(crate) fn lang_to_iso639_1(lang: Lang) -> &'static str {
        match lang {
            Lang::Eng => "en",
            Lang::Rus => "ru",
            Lang::Cmn => "zh",
            Lang::Spa => "es",
            Lang::Por => "pt",
            Lang::Ita => "it",
            Lang::Fra => "fr",
            Lang::Deu => "de",
            Lang::Ukr => "uk",
            Lang::Kat => "ka",
            Lang::Ara => "ar",
            Lang::Hin => "hi",
            Lang::Jpn => "ja",
            Lang::Heb => "he",
            Lang::Yid => "yi",
            Lang::Pol => "pl",
            Lang::Amh => "am",
            Lang::Jav => "jv",
            Lang::Kor => "ko",
            Lang::Nob => "nb",
            Lang::Dan => "da",
            Lang::Swe => "sv",
            Lang::Fin => "fi",
            Lang::Tur => "tr",
            Lang::Nld => "nl",
            Lang::Hun => "hu",
            Lang::Ces => "cs",
            Lang::Ell => "el",
            Lang::Bul => "bg",
            Lang::Bel => "be",
            Lang::Mar => "mr",
            Lang::Kan => "kn",
            Lang::Ron => "ro",
            Lang::Slv => "sl",
            Lang::Hrv => "hr",
            Lang::Srp => "sr",
            Lang::Mkd => "mk",
            Lang::Lit => "lt",
            Lang::Lav => "lv",
            Lang::Est => "et",
            Lang::Tam => "ta",
            Lang::Vie => "vi",
            Lang::Urd => "ur",
            Lang::Tha => "th",
            Lang::Guj => "gu",
            Lang::Uzb => "uz",
            Lang::Pan => "pa",
            Lang::Aze => "az",
            Lang::Ind => "id",
            Lang::Tel => "te",
            Lang::Pes => "fa",
            Lang::Mal => "ml",
            Lang::Ori => "or",
            Lang::Mya => "my",
            Lang::Nep => "ne",
            Lang::Sin => "si",
            Lang::Khm => "km",
            Lang::Tuk => "tk",
            Lang::Aka => "ak",
            Lang::Zul => "zu",
            Lang::Sna => "sn",
            Lang::Afr => "af",
            Lang::Lat => "la",
            Lang::Slk => "sk",
            Lang::Cat => "ca",
            Lang::Tgl => "tl",
            Lang::Hye => "hy",
            Lang::Epo => "eo",
            Lang::Ben => "bn",
            Lang::Cym => "cy",
        }
    }
}

/// Build the default detector for `config`.
///
/// With the `language-detection` feature this is a [`WhatlangDetector`];
/// without it, or when `config.enabled` is false, a [`NoopDetector`].
pub fn default_detector(config: &LanguageDetectionConfig) -> Box<dyn LanguageDetector> {
    if !config.enabled {
        return Box::new(NoopDetector);
    }

    #[cfg(feature = "language-detection")]
    {
        Box::new(WhatlangDetector::new(config))
    }

    #[cfg(not(feature = "language-detection"))]
    {
        tracing::warn!("language detection requested but the `language-detection` feature is disabled");
        Box::new(NoopDetector)
    }
}
