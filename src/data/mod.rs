mod loader;

pub use loader::{load_into, load_quiz_from_json, parse_quiz, LoadError};
