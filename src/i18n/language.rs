//! Language type: flexible, validated language representation.
//!
//! A `Language` can only be constructed through the registry, so holding one
//! is proof that the code is in the supported set.

use crate::engine::TranslateError;
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// A validated target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "hi", "ta")
    code: &'static str,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the supported set
    /// * `Err(TranslateError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, TranslateError> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(config) => Ok(Language { code: config.code }),
            None => Err(TranslateError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry, which cannot happen
    /// for a `Language` constructed via `from_code`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English display name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "हिन्दी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}
