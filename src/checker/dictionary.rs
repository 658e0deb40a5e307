use fst::{Set, Streamer};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON dictionary {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build dictionary")]
    Fst(#[from] fst::Error),
}

/// Immutable set of known-correct words.
///
/// Entries are stored as given and are expected to be lowercase already. Words
/// iterate in lexicographic byte order, which is also the tie-break order for
/// suggestions at equal distance.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Build a dictionary from words in any order; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sorted_words: Vec<String> = words.into_iter().map(Into::into).collect();
        sorted_words.sort();
        sorted_words.dedup();

        let not_normalized = sorted_words
            .iter()
            .filter(|w| w.chars().any(char::is_uppercase) || w.trim() != w.as_str())
            .count();
        if not_normalized > 0 {
            log::warn!(
                "dictionary: {} entries are not lowercase/trimmed and will never match",
                not_normalized
            );
        }

        let set = Set::from_iter(sorted_words)?;
        log::debug!("dictionary: built with {} words", set.len());

        Ok(Self { set })
    }

    /// Load a dictionary file.
    ///
    /// `.json` files hold an array of strings. Anything else is a word list with
    /// one word per line; blank lines and `#` comments are skipped.
    pub fn load_from_path(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            let words: Vec<String> =
                serde_json::from_str(&content).map_err(|source| DictionaryError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            log::debug!("dictionary: read {} JSON entries from {}", words.len(), path.display());
            Self::from_words(words)
        } else {
            let words: Vec<&str> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect();
            log::debug!("dictionary: read {} lines from {}", words.len(), path.display());
            Self::from_words(words)
        }
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Visit every word in lexicographic order.
    pub fn for_each_word<F: FnMut(&str)>(&self, mut f: F) {
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            // Keys only ever come from `String`s
            if let Ok(word) = std::str::from_utf8(key) {
                f(word);
            }
        }
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary").field("words", &self.len()).finish()
    }
}
