//! Language registry: single source of truth for all supported languages.
//!
//! The registry holds the closed set of target languages the service accepts.
//! It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Metadata for a supported target language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "hi", "ta")
    pub code: &'static str,

    /// English display name (e.g., "Hindi", "Tamil")
    pub name: &'static str,

    /// Native name of the language (e.g., "हिन्दी", "தமிழ்")
    pub native_name: &'static str,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter, so it can be
/// read from any number of request handlers without synchronization.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is in the supported set
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages, in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Check whether a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The closed set of supported target languages.
///
/// Codes and display names are part of the response contract; existing
/// callers depend on these exact spellings.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
        },
        LanguageConfig {
            code: "te",
            name: "Telugu",
            native_name: "తెలుగు",
        },
        LanguageConfig {
            code: "bn",
            name: "Bengali",
            native_name: "বাংলা",
        },
        LanguageConfig {
            code: "ml",
            name: "Malayalam",
            native_name: "മലയാളം",
        },
        LanguageConfig {
            code: "gu",
            name: "Gujarati",
            native_name: "ગુજરાતી",
        },
        LanguageConfig {
            code: "pa",
            name: "Punjabi",
            native_name: "ਪੰਜਾਬੀ",
        },
        LanguageConfig {
            code: "mr",
            name: "Marathi",
            native_name: "मराठी",
        },
        LanguageConfig {
            code: "kn",
            name: "Kannada",
            native_name: "ಕನ್ನಡ",
        },
        LanguageConfig {
            code: "or",
            name: "Odia",
            native_name: "ଓଡ଼ିଆ",
        },
        LanguageConfig {
            code: "as",
            name: "Assamese",
            native_name: "অসমীয়া",
        },
        LanguageConfig {
            code: "ur",
            name: "Urdu",
            native_name: "اردو",
        },
        LanguageConfig {
            code: "ne",
            name: "Nepali",
            native_name: "नेपाली",
        },
        LanguageConfig {
            code: "si",
            name: "Sinhala",
            native_name: "සිංහල",
        },
    ]
}
