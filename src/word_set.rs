use std::ops::Index;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::Vocabulary;

/// How many words a session asks for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordMode {
    #[default]
    #[strum(serialize = "10")]
    #[value(name = "10")]
    Ten,
    #[strum(serialize = "25")]
    #[value(name = "25")]
    TwentyFive,
    #[strum(serialize = "50")]
    #[value(name = "50")]
    Fifty,
}

impl WordMode {
    pub const ALL: [WordMode; 3] = [WordMode::Ten, WordMode::TwentyFive, WordMode::Fifty];

    pub fn count(self) -> usize {
        match self {
            WordMode::Ten => 10,
            WordMode::TwentyFive => 25,
            WordMode::Fifty => 50,
        }
    }

    pub fn largest() -> Self {
        WordMode::Fifty
    }

    pub fn next(self) -> Self {
        match self {
            WordMode::Ten => WordMode::TwentyFive,
            WordMode::TwentyFive => WordMode::Fifty,
            WordMode::Fifty => WordMode::Ten,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WordMode::Ten => WordMode::Fifty,
            WordMode::TwentyFive => WordMode::Ten,
            WordMode::Fifty => WordMode::TwentyFive,
        }
    }
}

impl TryFrom<usize> for WordMode {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self> {
        WordMode::ALL
            .into_iter()
            .find(|m| m.count() == count)
            .ok_or(Error::InvalidMode(count))
    }
}

impl From<WordMode> for usize {
    fn from(mode: WordMode) -> usize {
        mode.count()
    }
}

/// The ordered target words of one session. Never mutated after creation;
/// a restart builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Shuffles the whole vocabulary (Fisher-Yates) and keeps the first
    /// `mode.count()` words.
    pub fn generate<R: Rng + ?Sized>(vocabulary: &Vocabulary, mode: WordMode, rng: &mut R) -> Self {
        let mut pool: Vec<&String> = vocabulary.words().iter().collect();
        pool.shuffle(rng);

        Self {
            words: pool.into_iter().take(mode.count()).cloned().collect(),
        }
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Index<usize> for WordSet {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.words[idx]
    }
}
