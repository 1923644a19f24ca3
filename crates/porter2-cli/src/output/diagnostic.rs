//! Miette diagnostic wrapper for words the stemmer rejects.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use porter2::StemError;
use thiserror::Error;

use crate::input::{Entry, WordList};

/// A miette-compatible diagnostic pointing at the offending character.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot stem '{word}' on line {line}: {ch:?} is not a letter or apostrophe")]
#[diagnostic(
    code(porter2::invalid_word),
    help("word lists hold one ASCII word per line")
)]
pub struct WordDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("invalid character")]
    span: SourceSpan,

    word: String,
    line: usize,
    ch: char,
}

impl WordDiagnostic {
    /// Create a diagnostic for `entry` of `list` from the stemmer's error.
    pub fn from_stem_error(list: &WordList, entry: &Entry<'_>, err: &StemError) -> Self {
        let StemError::InvalidCharacter { word, ch, offset } = err;

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let start = (entry.offset + offset).min(list.content.len());
        let len = ch.len_utf8().min(list.content.len() - start);

        WordDiagnostic {
            src: NamedSource::new(list.name.clone(), list.content.clone()),
            span: (start, len).into(),
            word: word.clone(),
            line: entry.line,
            ch: *ch,
        }
    }
}
