//! Stem command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use porter2::{LogSink, Stemmer};
use serde::Serialize;
use tracing::debug;

use crate::commands::StemmerOptions;
use crate::input::WordList;
use crate::output::WordDiagnostic;

/// Arguments for the stem command.
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Words to stem. Reads stdin when neither words nor --input are given.
    pub words: Vec<String>,

    /// File with one word per line (`-` for stdin). May be repeated.
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Print each word next to its stem.
    #[arg(long)]
    pub pairs: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log every rule that fires to stderr.
    #[arg(long)]
    pub trace: bool,

    #[command(flatten)]
    pub options: StemmerOptions,
}

/// JSON output format for one stemmed word.
#[derive(Debug, Serialize)]
struct StemJson<'a> {
    word: &'a str,
    stem: String,
}

/// Run the stem command.
pub fn run_stem(args: StemArgs) -> Result<i32> {
    let lists = word_lists(&args)?;
    let results = stem_lists(args.options.stemmer(), &lists, args.trace)?;
    debug!(lines = results.len(), lists = lists.len(), "stemmed");

    let output = render(&results, args.json, args.pairs)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(exitcode::OK)
}

fn word_lists(args: &StemArgs) -> Result<Vec<WordList>> {
    let mut lists = Vec::new();
    if !args.words.is_empty() {
        lists.push(WordList::from_args(&args.words));
    }
    for path in &args.inputs {
        lists.push(WordList::read(path)?);
    }
    if lists.is_empty() {
        lists.push(WordList::read_stdin()?);
    }
    Ok(lists)
}

/// Stems every line of `lists`. Blank lines stem to an empty string so the
/// output lines up with the input.
fn stem_lists(stemmer: Stemmer, lists: &[WordList], trace: bool) -> Result<Vec<StemJson<'_>>> {
    let mut results = Vec::new();
    for list in lists {
        for entry in list.lines() {
            let stemmed = if trace {
                stemmer.stem_traced(entry.word, &mut LogSink)
            } else {
                stemmer.try_stem(entry.word)
            };
            let stem = match stemmed {
                Ok(stem) => stem,
                Err(e) => {
                    let diagnostic = WordDiagnostic::from_stem_error(list, &entry, &e);
                    return Err(diagnostic.into());
                }
            };
            results.push(StemJson {
                word: entry.word,
                stem,
            });
        }
    }
    Ok(results)
}

fn render(results: &[StemJson<'_>], json: bool, pairs: bool) -> Result<String> {
    if json {
        let words: Vec<&StemJson<'_>> = results
            .iter()
            .filter(|result| !result.word.is_empty())
            .collect();
        return serde_json::to_string_pretty(&words).into_diagnostic();
    }

    let lines: Vec<String> = results
        .iter()
        .map(|result| {
            if pairs && !result.word.is_empty() {
                format!("{}\t{}", result.word, result.stem)
            } else {
                result.stem.clone()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
