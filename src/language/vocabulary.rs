use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::Language;
use crate::error::{Error, Result};
use crate::word_set::WordMode;

/// The pool word sets are drawn from.
///
/// Words are unique, non-empty and free of whitespace, and there are always
/// enough of them to fill the largest [`WordMode`] without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                if w.is_empty() || w.chars().any(char::is_whitespace) {
                    None
                } else {
                    Some(w.to_string())
                }
            })
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let required = WordMode::largest().count();
        if words.len() < required {
            return Err(Error::VocabularyTooSmall {
                found: words.len(),
                required,
            });
        }

        Ok(Self { words })
    }

    /// The bundled English list.
    pub fn builtin() -> Result<Self> {
        Self::new(Language::english()?.words)
    }

    /// Reads a plain word list: one word per line, blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = Self::parse(&text)?;
        tracing::info!(path = %path.display(), words = vocabulary.len(), "loaded vocabulary");
        Ok(vocabulary)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
