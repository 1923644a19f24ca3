//! Porter2 English stemmer.
//!
//! Reduces an English word to its stem by running an ordered series of
//! suffix rules, each gated by where its match starts relative to the word's
//! R1 and R2 regions.
//!
//! # Example
//!
//! ```
//! assert_eq!(porter2::stem("caresses"), "caress");
//! assert_eq!(porter2::stem("conditional"), "condit");
//! assert_eq!(porter2::stem("hopping"), "hop");
//! assert_eq!(porter2::stem("skis"), "ski");
//! ```
//!
//! Input is a single word of ASCII letters and apostrophes. Words of two
//! characters or fewer are returned as given.

mod error;
pub mod rules;
mod stemmer;
pub mod text;
mod trace;

pub use error::StemError;
pub use stemmer::Stemmer;
pub use trace::{LogSink, Phase, TraceEvent, TraceRecord, TraceSink};

/// Stems `word` with the default [`Stemmer`].
///
/// Words outside the stemmer's domain come back unchanged.
pub fn stem(word: &str) -> String {
    Stemmer::new().stem(word)
}

/// Stems `word` with the default [`Stemmer`], rejecting characters other than
/// ASCII letters and apostrophes.
///
/// ```
/// use porter2::{StemError, try_stem};
///
/// assert_eq!(try_stem("national").unwrap(), "nation");
/// assert!(matches!(
///     try_stem("route66"),
///     Err(StemError::InvalidCharacter { ch: '6', offset: 5, .. })
/// ));
/// ```
pub fn try_stem(word: &str) -> Result<String, StemError> {
    Stemmer::new().try_stem(word)
}
