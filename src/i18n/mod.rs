//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related metadata lives here:
//!
//! - `registry`: single source of truth for the supported languages and their
//!   display names
//! - `language`: type-safe `Language` that can only be built from a
//!   registered code
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! let hindi = Language::from_code("hi")?;
//! let languages = LanguageRegistry::get().list_all();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
