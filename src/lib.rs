pub mod checker;
pub mod cli;
pub mod config;

pub use checker::dictionary::{Dictionary, DictionaryError};
pub use checker::{CheckOptions, SpellChecker};
pub use config::Config;

use serde::{Deserialize, Serialize};

/// A token that failed the dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingError {
    /// Normalized form of the token
    pub word: String,
    /// Index of the token in the whitespace-split input, not a character offset
    pub position: usize,
    /// Closest dictionary words, best first; empty when nothing is close enough
    pub suggestions: Vec<String>,
}
