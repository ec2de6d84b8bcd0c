// Library surface for the binary and the headless integration tests.
pub mod app;
pub mod config;
pub mod countdown;
pub mod error;
pub mod keymap;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod word_set;

pub use error::{Error, Result};
