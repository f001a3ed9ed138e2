//! Page translation service.
//!
//! Accepts an HTML fragment and a target-language code, substitutes known
//! phrases from a static per-language table, and returns the modified HTML
//! with a count of substitutions. There is no real machine translation and
//! no HTML parsing; the text scan is a deliberate `>text<` heuristic.

pub mod config;
pub mod engine;
pub mod i18n;
pub mod phrases;
pub mod server;
