//! Verify command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use porter2::Stemmer;
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::StemmerOptions;
use crate::input::{Entry, WordList};
use crate::output::table::{format_mismatch_table, format_summary_table, Mismatch};
use crate::output::WordDiagnostic;

/// Arguments for the verify command.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// File with one input word per line.
    #[arg(long)]
    pub vocabulary: PathBuf,

    /// File with the expected stem on the same line as its word.
    #[arg(long)]
    pub expected: PathBuf,

    /// Exit with non-zero code if any stem differs.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Maximum number of mismatches to print.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    #[command(flatten)]
    pub options: StemmerOptions,
}

/// JSON output format for a verification run.
#[derive(Debug, Serialize)]
struct VerifyJson<'a> {
    total: usize,
    matched: usize,
    mismatches: &'a [Mismatch],
}

/// Outcome of comparing a vocabulary against its expected stems.
#[derive(Debug)]
struct Verification {
    total: usize,
    mismatches: Vec<Mismatch>,
}

/// Run the verify command.
pub fn run_verify(args: VerifyArgs) -> Result<i32> {
    let vocabulary = WordList::read(&args.vocabulary)?;
    let expected = WordList::read(&args.expected)?;
    let Verification { total, mismatches } =
        verify(args.options.stemmer(), &vocabulary, &expected)?;
    info!(total, mismatched = mismatches.len(), "verified vocabulary");

    if args.json {
        let json_output = serde_json::to_string_pretty(&VerifyJson {
            total,
            matched: total - mismatches.len(),
            mismatches: &mismatches,
        })
        .into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_summary_table(total, mismatches.len()));

        if mismatches.is_empty() {
            println!(
                "{}",
                "All stems match.".if_supports_color(Stream::Stdout, OwoColorize::green)
            );
        } else {
            let shown = &mismatches[..mismatches.len().min(args.limit)];
            println!(
                "\n{} (showing {} of {}):",
                "Mismatches".if_supports_color(Stream::Stdout, OwoColorize::red),
                shown.len(),
                mismatches.len()
            );
            println!("{}", format_mismatch_table(shown));
        }
    }

    if args.strict && !mismatches.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Pairs the two lists line by line and stems each vocabulary word.
///
/// Blank vocabulary lines are skipped; a blank expected line is the empty
/// stem.
fn verify(stemmer: Stemmer, vocabulary: &WordList, expected: &WordList) -> Result<Verification> {
    let words: Vec<Entry<'_>> = vocabulary.lines().collect();
    let stems: Vec<Entry<'_>> = expected.lines().collect();
    if last_word_line(&words) > stems.len() || last_word_line(&stems) > words.len() {
        return Err(miette!(
            "{} has {} lines but {} has {} lines",
            vocabulary.name,
            words.len(),
            expected.name,
            stems.len()
        ));
    }

    let mut total = 0;
    let mut mismatches = Vec::new();
    for (word, stem) in words.iter().zip(&stems) {
        if word.word.is_empty() {
            continue;
        }
        total += 1;
        let actual = match stemmer.try_stem(word.word) {
            Ok(actual) => actual,
            Err(e) => {
                let diagnostic = WordDiagnostic::from_stem_error(vocabulary, word, &e);
                return Err(diagnostic.into());
            }
        };
        if actual != stem.word {
            debug!(line = word.line, word = word.word, expected = stem.word, %actual, "mismatch");
            mismatches.push(Mismatch {
                line: word.line,
                word: word.word.to_string(),
                expected: stem.word.to_string(),
                actual,
            });
        }
    }

    Ok(Verification { total, mismatches })
}

/// Line number of the last non-blank entry, or 0.
fn last_word_line(entries: &[Entry<'_>]) -> usize {
    entries
        .iter()
        .rev()
        .find(|entry| !entry.word.is_empty())
        .map_or(0, |entry| entry.line)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_list(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    fn args(vocabulary: &NamedTempFile, expected: &NamedTempFile, strict: bool) -> VerifyArgs {
        VerifyArgs {
            vocabulary: vocabulary.path().to_path_buf(),
            expected: expected.path().to_path_buf(),
            strict,
            json: false,
            limit: 20,
            options: StemmerOptions::default(),
        }
    }

    fn list(content: &str) -> WordList {
        WordList {
            name: "list".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn empty_stems_pair_with_their_words() {
        let vocabulary = write_list(&["caresses", "''s", "ponies"]);
        let expected = write_list(&["caress", "", "poni"]);
        assert_eq!(run_verify(args(&vocabulary, &expected, true)).unwrap(), exitcode::OK);
    }

    #[test]
    fn blank_vocabulary_lines_are_skipped() {
        let verification = verify(
            Stemmer::new(),
            &list("caresses\n\nhopping\n"),
            &list("caress\n\nhop\n"),
        )
        .unwrap();
        assert_eq!(verification.total, 2);
        assert!(verification.mismatches.is_empty());
    }

    #[test]
    fn mismatches_keep_their_line() {
        let verification = verify(
            Stemmer::new(),
            &list("sky\n\nsized\nnational"),
            &list("sky\n\nsiz\nnation"),
        )
        .unwrap();
        assert_eq!(verification.total, 3);
        assert_eq!(verification.mismatches.len(), 1);
        let mismatch = &verification.mismatches[0];
        assert_eq!(mismatch.line, 3);
        assert_eq!(mismatch.expected, "siz");
        assert_eq!(mismatch.actual, "size");
    }

    #[test]
    fn trailing_blank_lines_do_not_count() {
        let verification = verify(Stemmer::new(), &list("ponies\n"), &list("poni\n\n\n")).unwrap();
        assert_eq!(verification.total, 1);
        assert!(verification.mismatches.is_empty());
    }

    #[test]
    fn missing_stems_are_an_error() {
        let err = verify(Stemmer::new(), &list("ponies\nskies\n"), &list("poni\n")).unwrap_err();
        assert_eq!(err.to_string(), "list has 2 lines but list has 1 lines");

        let err = verify(Stemmer::new(), &list("ponies\n"), &list("poni\nsky\n")).unwrap_err();
        assert_eq!(err.to_string(), "list has 1 lines but list has 2 lines");
    }

    #[test]
    fn strict_mode_fails_on_mismatch() {
        let vocabulary = write_list(&["generously", "hopping", "troubled"]);
        let expected = write_list(&["gener", "hop", "trouble"]);

        assert_eq!(run_verify(args(&vocabulary, &expected, false)).unwrap(), exitcode::OK);

        let mut strict = args(&vocabulary, &expected, true);
        strict.limit = 1;
        assert_eq!(run_verify(strict).unwrap(), exitcode::DATAERR);

        let mut json = args(&vocabulary, &expected, true);
        json.json = true;
        assert_eq!(run_verify(json).unwrap(), exitcode::DATAERR);
    }

    #[test]
    fn invalid_vocabulary_words_are_reported() {
        let vocabulary = write_list(&["cats", "route66"]);
        let expected = write_list(&["cat", "route"]);
        let err = run_verify(args(&vocabulary, &expected, false)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
