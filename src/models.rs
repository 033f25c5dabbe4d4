//! Domain models that mirror the `words` table and get passed between the
//! store, the projection and the terminal shell. They stay plain data holders
//! so the other layers can focus on persistence and presentation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single persisted word/translation pair.
pub struct Entry {
    /// Primary key assigned by SQLite. Strictly increasing and never reused,
    /// so it doubles as the insertion order.
    pub id: i64,
    /// Lowercased source word.
    pub word: String,
    /// Lowercased translation.
    pub translation: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.translation)
    }
}

/// Request to store a new pair, produced by the shell when the user submits
/// the add form. The raw text is kept untouched; normalization happens inside
/// the store so every entry point behaves the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertCommand {
    pub word: String,
    pub translation: String,
}

impl InsertCommand {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

/// Case normalization applied to both columns before they are written.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}
