//! Word lists read from files, stdin, or the command line.
//!
//! Each line holds one word; blank lines hold none. Surrounding whitespace is
//! ignored and entries keep their byte offset so diagnostics can point into
//! the source.

use std::fs::read_to_string;
use std::io::{read_to_string as read_all, stdin};
use std::path::Path;

use miette::{miette, IntoDiagnostic, Result};
use tracing::debug;

/// The raw contents of one word list.
pub struct WordList {
    /// Display name used in diagnostics.
    pub name: String,
    pub content: String,
}

/// One word of a [`WordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset of the word within the list's content.
    pub offset: usize,
    pub word: &'a str,
}

impl WordList {
    /// Builds a list from command-line words, one per line.
    pub fn from_args(words: &[String]) -> Self {
        Self {
            name: "<arguments>".to_string(),
            content: words.join("\n"),
        }
    }

    /// Reads a list from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            return Self::read_stdin();
        }
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read word list {}: {}", path.display(), e))?;
        debug!(path = %path.display(), bytes = content.len(), "read word list");
        Ok(Self {
            name: path.display().to_string(),
            content,
        })
    }

    /// Reads a list from stdin.
    pub fn read_stdin() -> Result<Self> {
        let content = read_all(stdin())
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read stdin: {}", e))?;
        Ok(Self {
            name: "<stdin>".to_string(),
            content,
        })
    }

    /// Every line of the list, trimmed. Blank lines yield an empty word so
    /// line numbers stay aligned across lists.
    pub fn lines(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        let mut line_start = 0;
        self.content
            .split_inclusive('\n')
            .enumerate()
            .map(move |(index, line)| {
                let start = line_start;
                line_start += line.len();
                let leading = line.len() - line.trim_start().len();
                Entry {
                    line: index + 1,
                    offset: start + leading,
                    word: line.trim(),
                }
            })
    }
}
