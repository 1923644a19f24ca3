//! Tests for trace sinks.

use porter2::{LogSink, Phase, Stemmer, TraceEvent, TraceRecord, TraceSink, stem};
use serde_json::json;

fn trace(word: &str) -> Vec<TraceRecord> {
    let mut records = Vec::new();
    Stemmer::new().stem_traced(word, &mut records).unwrap();
    records
}

fn render(records: &[TraceRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn record(phase: Phase, rule: &str, result: &str) -> TraceRecord {
    TraceRecord {
        phase,
        rule: rule.to_owned(),
        result: result.to_owned(),
    }
}

// =============================================================================
// Recorded Events
// =============================================================================

#[test]
fn records_rules_in_order() {
    assert_eq!(
        trace("hopefulness"),
        vec![
            record(Phase::Step2, "fulness", "hopeful"),
            record(Phase::Step3, "ful", "hope"),
        ]
    );
}

#[test]
fn records_step_1b_corrections() {
    assert_eq!(
        trace("troubled"),
        vec![
            record(Phase::Step1b, "ed", "troubl"),
            record(Phase::Step1b, "+e", "trouble"),
            record(Phase::Step5, "e", "troubl"),
        ]
    );
    assert_eq!(
        trace("hopping"),
        vec![
            record(Phase::Step1b, "ing", "hopp"),
            record(Phase::Step1b, "undouble", "hop"),
        ]
    );
    assert_eq!(
        trace("hoping"),
        vec![
            record(Phase::Step1b, "ing", "hop"),
            record(Phase::Step1b, "short +e", "hope"),
        ]
    );
}

#[test]
fn records_short_circuits() {
    assert_eq!(
        trace("is"),
        vec![record(Phase::ShortWord, "length <= 2", "is")]
    );
    assert_eq!(trace("dying"), vec![record(Phase::Exception, "dying", "die")]);
    assert_eq!(trace("sky"), vec![record(Phase::Invariant, "sky", "sky")]);
    assert_eq!(
        trace("proceeds"),
        vec![
            record(Phase::Step1a, "s", "proceed"),
            record(Phase::Invariant, "after 1a", "proceed"),
        ]
    );
}

#[test]
fn unchanged_word_records_nothing() {
    assert!(trace("consist").is_empty());
}

#[test]
fn rendered_trace() {
    insta::assert_snapshot!(render(&trace("conditional")), @r"
    2 tional condition
    4 ion condit
    ");
    insta::assert_snapshot!(render(&trace("generalizations")), @r"
    1a s generalization
    2 ization generalize
    3 alize general
    ");
}

// =============================================================================
// Sinks
// =============================================================================

#[test]
fn sinks_never_change_the_stem() {
    let stemmer = Stemmer::new();
    for word in ["caresses", "troubled", "dying", "proceeds", "is", "generously"] {
        let mut records = Vec::new();
        let traced = stemmer.stem_traced(word, &mut records).unwrap();
        let logged = stemmer.stem_traced(word, &mut LogSink).unwrap();
        assert_eq!(traced, stem(word));
        assert_eq!(logged, stem(word));
    }
}

#[test]
fn custom_sink_receives_borrowed_events() {
    #[derive(Default)]
    struct Phases(Vec<Phase>);

    impl TraceSink for Phases {
        fn record(&mut self, event: TraceEvent<'_>) {
            self.0.push(event.phase);
        }
    }

    let mut sink = Phases::default();
    let result = Stemmer::new().stem_traced("relational", &mut sink).unwrap();
    assert_eq!(result, "relat");
    assert_eq!(sink.0, vec![Phase::Step2, Phase::Step5]);
}

#[test]
fn unit_sink_is_disabled() {
    assert!(!().enabled());
    assert!(Vec::<TraceRecord>::new().enabled());
}

#[test]
fn records_serialize_with_step_names() {
    let records = trace("troubled");
    assert_eq!(
        serde_json::to_value(&records[0]).unwrap(),
        json!({ "phase": "1b", "rule": "ed", "result": "troubl" })
    );
    assert_eq!(
        serde_json::to_value(Phase::ShortWord).unwrap(),
        json!("short-word")
    );
}
