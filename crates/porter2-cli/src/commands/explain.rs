//! Explain command implementation.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use porter2::{Stemmer, TraceRecord};
use serde::Serialize;

use crate::commands::StemmerOptions;
use crate::input::{Entry, WordList};
use crate::output::table::format_trace_table;
use crate::output::WordDiagnostic;

/// Arguments for the explain command.
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// The word to explain.
    pub word: String,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub options: StemmerOptions,
}

/// JSON output format for an explained word.
#[derive(Debug, Serialize)]
struct ExplainJson<'a> {
    word: &'a str,
    stem: &'a str,
    trace: &'a [TraceRecord],
}

/// Run the explain command.
pub fn run_explain(args: ExplainArgs) -> Result<i32> {
    let (stem, records) = explain(args.options.stemmer(), &args.word)?;

    if args.json {
        let json_output = serde_json::to_string_pretty(&ExplainJson {
            word: &args.word,
            stem: &stem,
            trace: &records,
        })
        .into_diagnostic()?;
        println!("{}", json_output);
        return Ok(exitcode::OK);
    }

    if records.is_empty() {
        println!("No rule applies.");
    } else {
        println!("{}", format_trace_table(&records));
    }
    println!(
        "{} -> {}",
        args.word,
        stem.if_supports_color(Stream::Stdout, OwoColorize::green)
    );

    Ok(exitcode::OK)
}

/// Stems `word` exactly as given, collecting the trace.
fn explain(stemmer: Stemmer, word: &str) -> Result<(String, Vec<TraceRecord>), WordDiagnostic> {
    let mut records = Vec::<TraceRecord>::new();
    match stemmer.stem_traced(word, &mut records) {
        Ok(stem) => Ok((stem, records)),
        Err(e) => {
            let list = WordList {
                name: "<argument>".to_string(),
                content: word.to_string(),
            };
            let entry = Entry {
                line: 1,
                offset: 0,
                word: &list.content,
            };
            Err(WordDiagnostic::from_stem_error(&list, &entry, &e))
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use porter2::Phase;

    use super::*;

    fn explain_args(word: &str, json: bool) -> ExplainArgs {
        ExplainArgs {
            word: word.to_string(),
            json,
            options: StemmerOptions::default(),
        }
    }

    #[test]
    fn explain_collects_each_rule() {
        let (stem, records) = explain(Stemmer::new(), "conditional").unwrap();
        assert_eq!(stem, "condit");
        let phases: Vec<Phase> = records.iter().map(|record| record.phase).collect();
        assert_eq!(phases, vec![Phase::Step2, Phase::Step4]);
    }

    #[test]
    fn label_covers_leading_whitespace() {
        let err = explain(Stemmer::new(), " route66").unwrap_err();
        let label = err.labels().unwrap().next().unwrap();
        assert_eq!(label.offset(), 0);
        assert_eq!(label.len(), 1);
    }

    #[test]
    fn label_points_at_invalid_character() {
        let err = explain(Stemmer::new(), "route66").unwrap_err();
        let label = err.labels().unwrap().next().unwrap();
        assert_eq!(label.offset(), 5);
    }

    #[test]
    fn run_explain_prints_table_or_json() {
        assert_eq!(run_explain(explain_args("hopefulness", false)).unwrap(), exitcode::OK);
        assert_eq!(run_explain(explain_args("hopefulness", true)).unwrap(), exitcode::OK);
        assert_eq!(run_explain(explain_args("by", false)).unwrap(), exitcode::OK);
        assert!(run_explain(explain_args("can't-stop", false)).is_err());
    }
}
