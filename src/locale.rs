//! UI string tables, embedded in the binary.
//!
//! Tables live in `assets/locale/<code>.txt` using the same `key = value`
//! syntax as the state file. Lookup order: requested language, then English,
//! then the key itself, so a missing translation never breaks the UI.

use rust_embed::RustEmbed;
use std::collections::HashMap;

pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(RustEmbed)]
#[folder = "assets/locale/"]
struct LocaleAssets;

pub struct LocaleBook {
    language: String,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl LocaleBook {
    /// Loads the table for a two-letter language code. An unknown code
    /// falls back to English for every key.
    pub fn load(language: &str) -> Self {
        LocaleBook {
            language: language.to_string(),
            strings: load_table(language),
            fallback: load_table(FALLBACK_LANGUAGE),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

fn load_table(language: &str) -> HashMap<String, String> {
    let Some(file) = LocaleAssets::get(&format!("{}.txt", language)) else {
        return HashMap::new();
    };
    let contents = String::from_utf8_lossy(&file.data);
    let mut strings = HashMap::new();
    for line in contents.lines() {
        if let Some((key, value)) = line.split_once('=') {
            strings.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    strings
}
