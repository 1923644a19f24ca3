//! Error types for the stemmer.

use thiserror::Error;

/// An input that falls outside the words the stemmer accepts.
///
/// Empty words and words of two characters or fewer are never errors; they
/// are returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StemError {
    /// The word contains something other than ASCII letters and apostrophes.
    #[error("invalid character {ch:?} at byte {offset} of '{word}'")]
    InvalidCharacter {
        word: String,
        ch: char,
        offset: usize,
    },
}
