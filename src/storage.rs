//! Flat `key = value` state file for window geometry and the saved locale.
//!
//! Lines split on the first `=` with both sides trimmed; anything else is
//! skipped. A missing or unreadable file loads as an empty state, so a fresh
//! install just gets defaults.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct WindowConfig {
    path: PathBuf,
}

impl WindowConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WindowConfig { path: path.into() }
    }

    /// The default state file, `.robosim.cfg` in the user's home directory
    /// (current directory when no home is set).
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(".robosim.cfg")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_state(&contents),
            Err(_) => HashMap::new(),
        }
    }

    pub fn save(&self, state: &HashMap<String, String>) -> io::Result<()> {
        let mut lines: Vec<String> = state
            .iter()
            .map(|(key, value)| format!("{} = {}", key, value))
            .collect();
        lines.sort();
        lines.push(String::new());
        fs::write(&self.path, lines.join("\n"))
    }
}

fn parse_state(contents: &str) -> HashMap<String, String> {
    let mut state = HashMap::new();
    for line in contents.lines() {
        if let Some((key, value)) = line.split_once('=') {
            state.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    state
}

/// A view over the state map that reads and writes `prefix.key` pairs, so
/// each window keeps its own namespace in the shared file.
pub struct ScopedState<'a> {
    state: &'a mut HashMap<String, String>,
    prefix: String,
}

impl<'a> ScopedState<'a> {
    pub fn new(state: &'a mut HashMap<String, String>, prefix: &str) -> Self {
        ScopedState {
            state,
            prefix: format!("{}.", prefix),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.state
            .get(&format!("{}{}", self.prefix, key))
            .map(String::as_str)
    }

    pub fn get_i32(&self, key: &str) -> Option<i32> {
        self.get(key)?.parse().ok()
    }

    pub fn put(&mut self, key: &str, value: impl ToString) {
        self.state
            .insert(format!("{}{}", self.prefix, key), value.to_string());
    }
}
