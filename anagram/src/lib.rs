pub mod histogram;
pub mod search;
pub mod words;

pub use histogram::Histogram;
pub use search::AnagramSearcher;
pub use words::{load_wordlist, Word, WordStore};
