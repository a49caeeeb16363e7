pub mod pool;
pub mod selector;
pub mod types;

pub use pool::{builtin_pool, find_word, BUILTIN_WORDS};
pub use selector::{select_word, select_word_with};
pub use types::{Difficulty, WordEntry};
