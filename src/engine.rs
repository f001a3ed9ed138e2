//! Phrase substitution engine.
//!
//! Finds visible text segments in an HTML string with a naive `>text<`
//! delimiter scan, looks each one up in the target language's phrase table,
//! and replaces matches in place. This is a textual heuristic, not a markup
//! parser: it has no awareness of tag nesting, attributes containing `>` or
//! `<`, comments, or CDATA, and will mis-segment such input. Callers depend
//! on these exact semantics, so the known gaps are preserved rather than
//! fixed:
//!
//! - Replacement is by literal substring, so a key appearing multiple times
//!   is replaced everywhere on first encounter.
//! - A short phrase that also appears verbatim inside an already-substituted
//!   segment's replacement text can be re-matched on a later pass.
//! - No HTML-entity decoding or encoding is performed.
//!
//! The engine is pure and stateless per call; it reads the immutable phrase
//! table and is safe to invoke concurrently without synchronization.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::Language;
use crate::phrases::PhraseTable;

/// Failures the translation boundary can report.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The requested code is outside the supported set. Detected before any
    /// processing; maps to a client error.
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// Catch-all for unexpected failures during processing; maps to a server
    /// error carrying the description.
    #[error("translation failed: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Outcome of one substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// The working copy of the HTML after all replacements.
    pub html: String,

    /// Number of distinct lookup keys that produced at least one
    /// replacement, not the number of textual occurrences changed.
    pub count: usize,
}

/// Candidate segments are runs of non-`<` characters between `>` and `<`.
fn segment_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">([^<]+)<").expect("segment pattern is valid"))
}

/// Validate the target language code, then run the substitution pass.
///
/// This is the boundary operation: the only defined failure is
/// `UnsupportedLanguage`, reported before any processing occurs.
pub fn translate_page(html: &str, target_lang: &str) -> Result<SubstitutionResult, TranslateError> {
    let lang = Language::from_code(target_lang)?;
    Ok(substitute(html, lang))
}

/// Substitute known phrases of `lang` in `html`.
///
/// Total over arbitrary input: malformed markup simply yields fewer or odd
/// candidate segments, never an error.
pub fn substitute(html: &str, lang: Language) -> SubstitutionResult {
    let table = PhraseTable::get();
    let mut working = html.to_string();
    let mut count = 0;
    let mut seen: HashSet<&str> = HashSet::new();

    // Scan the original input; replacements apply to the working copy.
    for caps in segment_pattern().captures_iter(html) {
        let Some(segment) = caps.get(1) else {
            continue;
        };
        let key = segment.as_str().trim();

        // Guard against empty and residual nested-tag artifacts (the latter
        // is largely redundant given the scan pattern).
        if key.is_empty() || key.starts_with('<') {
            continue;
        }

        // Count distinct keys, not occurrences; re-matched occurrences of an
        // already-replaced key are no-ops anyway.
        if !seen.insert(key) {
            continue;
        }

        let Some(translated) = table.lookup(lang, key) else {
            continue;
        };
        if translated == key {
            continue;
        }

        let needle = format!(">{}<", key);
        if working.contains(&needle) {
            working = working.replace(&needle, &format!(">{}<", translated));
            count += 1;
        }
    }

    SubstitutionResult {
        html: working,
        count,
    }
}
