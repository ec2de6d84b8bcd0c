use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::countdown::DEFAULT_DURATION_SECS;
use crate::error::{Error, Result};
use crate::language::Vocabulary;
use crate::word_set::WordMode;

/// Startup defaults. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub mode: WordMode,
    pub duration_secs: u32,
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: WordMode::default(),
            duration_secs: DEFAULT_DURATION_SECS,
            vocabulary_path: None,
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<WordMode>,
    pub duration_secs: Option<u32>,
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(secs) = overrides.duration_secs {
            self.duration_secs = secs;
        }
        if overrides.vocabulary_path.is_some() {
            self.vocabulary_path = overrides.vocabulary_path;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(Error::InvalidDuration);
        }
        Ok(())
    }

    /// The configured word list, or the bundled one.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_path {
            Some(path) => Vocabulary::from_file(path),
            None => Vocabulary::builtin(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "wordrun") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("wordrun_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    fn load(&self) -> Result<Config> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice::<Config>(&bytes).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        let write_err = |source| Error::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data).map_err(write_err)
    }
}
