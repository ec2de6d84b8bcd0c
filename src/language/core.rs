use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

/// A word list bundled into the binary as `src/lang/<name>.json`.
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn builtin(name: &str) -> Result<Self> {
        read_language_from_file(&format!("{name}.json")).ok_or_else(|| Error::BuiltinVocabulary {
            name: name.to_string(),
        })
    }

    pub fn english() -> Result<Self> {
        Self::builtin("english")
    }
}

fn read_language_from_file(file_name: &str) -> Option<Language> {
    let file = LANG_DIR.get_file(file_name)?;
    let file_as_str = file.contents_utf8()?;
    parse_language(file_name, file_as_str)
}

/// The declared `size` must match the word count, otherwise the list was
/// edited by hand and is rejected.
fn parse_language(file_name: &str, json: &str) -> Option<Language> {
    let lang: Language = match from_str(json) {
        Ok(lang) => lang,
        Err(err) => {
            tracing::error!(file = file_name, %err, "unable to deserialize language json");
            return None;
        }
    };

    if lang.size as usize != lang.words.len() {
        tracing::error!(
            file = file_name,
            declared = lang.size,
            found = lang.words.len(),
            "language size does not match its word list"
        );
        return None;
    }
    Some(lang)
}
