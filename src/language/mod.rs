pub mod core;
pub mod vocabulary;

pub use core::Language;
pub use vocabulary::Vocabulary;
