//! Localization and translation support
//!
//! UI text is embedded at compile time for English and German. Seeded data
//! never depends on the selected language.

use std::collections::HashMap;
use crate::error::{Result, ToolError};

/// Supported languages with their codes and names
pub const SUPPORTED_LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("de", "Deutsch", "German"),
];

// Embed all language files at compile time
const LANG_EN: &str = include_str!("languages/en.json");
const LANG_DE: &str = include_str!("languages/de.json");

/// Get the embedded JSON for a language code
fn get_language_json(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(LANG_EN),
        "de" => Some(LANG_DE),
        _ => None,
    }
}

/// Check if a language code is supported
pub fn is_language_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _, _)| *code == lang)
}

/// Translation manager
pub struct Translations {
    /// Current language code
    current_lang: String,
    /// Current language strings
    strings: HashMap<String, String>,
    /// English strings (fallback)
    english: HashMap<String, String>,
}

impl Translations {
    /// Create a new translations instance with English as default
    pub fn new() -> Result<Self> {
        let english = Self::load_language("en")?;
        Ok(Self {
            current_lang: "en".to_string(),
            strings: english.clone(),
            english,
        })
    }

    /// Create a translations instance for the given language
    pub fn for_language(lang: &str) -> Result<Self> {
        let mut tr = Self::new()?;
        tr.set_language(lang)?;
        Ok(tr)
    }

    /// Load a language from embedded JSON
    fn load_language(lang: &str) -> Result<HashMap<String, String>> {
        let json = get_language_json(lang)
            .ok_or_else(|| ToolError::LocalizationError(
                format!("Language '{}' not found", lang)
            ))?;

        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);

        serde_json::from_str(json)
            .map_err(|e| ToolError::LocalizationError(
                format!("Failed to parse language '{}': {}", lang, e)
            ))
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) -> Result<()> {
        if !is_language_supported(lang) {
            return Err(ToolError::LocalizationError(
                format!("Language '{}' is not supported", lang)
            ));
        }

        self.strings = Self::load_language(lang)?;
        self.current_lang = lang.to_string();
        Ok(())
    }

    /// Get a translated string by key
    /// Returns the key itself if not found
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Get a translated string with `{name}` placeholders filled in
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Get the current language code
    pub fn get_language(&self) -> &str {
        &self.current_lang
    }

    /// Get the English dictionary for iteration
    pub fn get_english_dictionary(&self) -> &HashMap<String, String> {
        &self.english
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new().expect("Failed to load default translations")
    }
}
