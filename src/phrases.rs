//! Static phrase tables used by the substitution engine.
//!
//! Each table maps an exact, whitespace-trimmed source phrase to its
//! translation. Tables are populated once at process start and immutable
//! thereafter; a missing entry means "no translation available", never an
//! error.
//!
//! Only `hi` and `ta` are seeded today. The remaining supported codes have no
//! table, so requests for them validate fine and pass every segment through
//! unchanged. Callers depend on that asymmetry.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::i18n::Language;

/// Per-language phrase tables, keyed by language code.
pub struct PhraseTable {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static PHRASES: OnceLock<PhraseTable> = OnceLock::new();

impl PhraseTable {
    /// Get the global phrase table instance.
    pub fn get() -> &'static PhraseTable {
        PHRASES.get_or_init(|| PhraseTable {
            tables: seed_tables(),
        })
    }

    /// Look up a trimmed source phrase for a target language.
    ///
    /// Returns `None` when the language has no table or the phrase is not in
    /// it; both mean the segment should pass through unchanged.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&'static str> {
        self.tables.get(lang.code())?.get(key).copied()
    }

    /// All source phrases known for a language, for diagnostics and tests.
    pub fn phrases_for(&self, lang: Language) -> Vec<&'static str> {
        self.tables
            .get(lang.code())
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default()
    }
}

fn seed_tables() -> HashMap<&'static str, HashMap<&'static str, &'static str>> {
    let mut tables = HashMap::new();

    let hi: HashMap<&'static str, &'static str> = HashMap::from([
        ("FIND THE PERFECT", "सही खोजें"),
        ("NCO CODE", "NCO कोड"),
        (
            "National Classification of Occupation",
            "राष्ट्रीय व्यवसाय वर्गीकरण",
        ),
        (
            "Classification of Occupation code for you",
            "आपके लिए व्यवसाय वर्गीकरण कोड",
        ),
        ("Try these examples", "इन उदाहरणों को आज़माएं"),
        (
            "I teach children in primary school",
            "मैं प्राथमिक स्कूल में बच्चों को पढ़ाता हूं",
        ),
        (
            "I develop mobile applications",
            "मैं मोबाइल एप्लिकेशन विकसित करता हूं",
        ),
        (
            "I install solar panels and fix inverters",
            "मैं सोलर पैनल लगाता हूं और इन्वर्टर ठीक करता हूं",
        ),
        ("Education Sector", "शिक्षा क्षेत्र"),
        ("Technology Sector", "प्रौद्योगिकी क्षेत्र"),
        ("Renewable Energy", "नवीकरणीय ऊर्जा"),
        ("Describe Your Job", "अपनी नौकरी का वर्णन करें"),
        ("Find My NCO Code", "मेरा NCO कोड खोजें"),
        ("Home", "होम"),
        ("About", "के बारे में"),
        ("Contact", "संपर्क"),
        ("English", "अंग्रेजी"),
    ]);
    tables.insert("hi", hi);

    let ta: HashMap<&'static str, &'static str> = HashMap::from([
        ("FIND THE PERFECT", "சரியானதைக் கண்டறியவும்"),
        ("NCO CODE", "NCO குறியீடு"),
        (
            "National Classification of Occupation",
            "தேசிய தொழில் வகைப்பாடு",
        ),
        (
            "Classification of Occupation code for you",
            "உங்களுக்கான தொழில் வகைப்பாட்டு குறியீடு",
        ),
        (
            "Try these examples",
            "இந்த எடுத்துக்காட்டுகளை முயற்சிக்கவும்",
        ),
        ("Home", "முகப்பு"),
        ("About", "பற்றி"),
        ("Contact", "தொடர்பு"),
        ("English", "ஆங்கிலம்"),
    ]);
    tables.insert("ta", ta);

    tables
}
