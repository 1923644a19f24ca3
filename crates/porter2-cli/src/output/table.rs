//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use porter2::TraceRecord;
use serde::Serialize;

/// A vocabulary word whose stem differs from the expected one.
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    /// Line of the word in the vocabulary file.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format the rules applied to one word, in order.
pub fn format_trace_table(records: &[TraceRecord]) -> Table {
    let mut table = new_table(vec!["Step", "Rule", "Result"]);
    for record in records {
        table.add_row(vec![
            record.phase.to_string(),
            record.rule.clone(),
            record.result.clone(),
        ]);
    }
    table
}

/// Format verification totals.
pub fn format_summary_table(total: usize, mismatched: usize) -> Table {
    let matched = total - mismatched;
    let accuracy = if total == 0 {
        "n/a".to_string()
    } else {
        format!("{:.2}%", matched as f64 * 100.0 / total as f64)
    };

    let mut table = new_table(vec!["Words", "Matched", "Mismatched", "Accuracy"]);
    table.add_row(vec![
        total.to_string(),
        matched.to_string(),
        mismatched.to_string(),
        accuracy,
    ]);
    table
}

/// Format mismatched words.
pub fn format_mismatch_table(mismatches: &[Mismatch]) -> Table {
    let mut table = new_table(vec!["Line", "Word", "Expected", "Actual"]);
    for mismatch in mismatches {
        table.add_row(vec![
            mismatch.line.to_string(),
            mismatch.word.clone(),
            mismatch.expected.clone(),
            mismatch.actual.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use porter2::Stemmer;

    use super::*;

    #[test]
    fn trace_table_lists_each_rule() {
        let mut records = Vec::<TraceRecord>::new();
        Stemmer::new()
            .stem_traced("conditional", &mut records)
            .unwrap();

        let rendered = format_trace_table(&records).to_string();
        assert!(rendered.contains("Step"));
        assert!(rendered.contains("tional"));
        assert!(rendered.contains("condit"));
    }

    #[test]
    fn summary_reports_accuracy() {
        let rendered = format_summary_table(4, 1).to_string();
        assert!(rendered.contains("75.00%"));
        assert!(format_summary_table(0, 0).to_string().contains("n/a"));
    }

    #[test]
    fn mismatch_table_shows_both_stems() {
        let rendered = format_mismatch_table(&[Mismatch {
            line: 7,
            word: "generously".to_string(),
            expected: "generous".to_string(),
            actual: "gener".to_string(),
        }])
        .to_string();
        assert!(rendered.contains("generously"));
        assert!(rendered.contains("gener"));
        assert!(rendered.contains('7'));
    }
}
