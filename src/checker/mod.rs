pub mod dictionary;
pub mod distance;
pub mod suggestions;
pub mod tokenizer;

use crate::{Config, SpellingError};
use dictionary::Dictionary;
use rayon::prelude::*;
use regex::{NoExpand, RegexBuilder};
use suggestions::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SUGGESTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub max_distance: usize,
    pub max_suggestions: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl From<&Config> for CheckOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_distance: config.max_distance,
            max_suggestions: config.max_suggestions,
        }
    }
}

/// Checks text against a dictionary that is fixed for the checker's lifetime.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug)]
pub struct SpellChecker {
    dictionary: Dictionary,
    options: CheckOptions,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_options(dictionary, CheckOptions::default())
    }

    pub fn with_options(dictionary: Dictionary, options: CheckOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> CheckOptions {
        self.options
    }

    /// Report every token whose normalized form is not in the dictionary.
    ///
    /// Errors come back in token order. Tokens that normalize to nothing, such
    /// as bare punctuation, are never reported. See [`tokenizer::tokenize`] for
    /// how positions are numbered.
    pub fn check_spelling(&self, text: &str) -> Vec<SpellingError> {
        let tokens = tokenizer::tokenize(text);
        let token_count = tokens.len();

        let errors: Vec<SpellingError> = tokens
            .into_par_iter()
            .filter(|token| !token.normalized.is_empty())
            .filter(|token| !self.dictionary.contains(&token.normalized))
            .map(|token| SpellingError {
                suggestions: self.suggest(&token.normalized),
                word: token.normalized,
                position: token.position,
            })
            .collect();

        log::debug!(
            "check: {} tokens, {} misspelled",
            token_count,
            errors.len()
        );

        errors
    }

    /// Closest dictionary words for `word`, using this checker's options.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(
            word,
            &self.dictionary,
            self.options.max_distance,
            self.options.max_suggestions,
        )
    }

    /// Apply the best suggestion for each error to `text`.
    ///
    /// Errors are applied from the highest position down. Each one replaces the
    /// first case-insensitive occurrence of its word, which may sit in a
    /// different token than the one flagged. Errors without suggestions are
    /// left alone.
    pub fn correct(&self, text: &str, errors: &[SpellingError]) -> String {
        let mut ordered: Vec<&SpellingError> = errors.iter().collect();
        ordered.sort_by(|a, b| b.position.cmp(&a.position));

        let mut corrected = text.to_string();

        for error in ordered {
            let Some(best) = error.suggestions.first() else {
                continue;
            };

            let pattern = RegexBuilder::new(&regex::escape(&error.word))
                .case_insensitive(true)
                .build();

            match pattern {
                Ok(re) => {
                    corrected = re.replacen(&corrected, 1, NoExpand(best)).into_owned();
                }
                Err(e) => log::warn!("correct: cannot match {:?}: {}", error.word, e),
            }
        }

        corrected
    }
}
