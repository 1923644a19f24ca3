//! Optional diagnostics for following a word through the stemmer.
//!
//! A [`TraceSink`] receives one [`TraceEvent`] per rule that changes the
//! word, in the order the rules fire. Sinks only observe; the returned stem
//! is the same whichever sink is used.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use tracing::{Level, debug, enabled};

use crate::text::Word;

/// The stage of the stemmer that produced a trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Words of two characters or fewer are returned as given.
    #[serde(rename = "short-word")]
    ShortWord,
    /// Whole-word override from the exception table.
    #[serde(rename = "exception")]
    Exception,
    /// Word left unchanged by the invariant tables.
    #[serde(rename = "invariant")]
    Invariant,
    #[serde(rename = "0")]
    Step0,
    #[serde(rename = "1a")]
    Step1a,
    #[serde(rename = "1b")]
    Step1b,
    #[serde(rename = "1c")]
    Step1c,
    #[serde(rename = "2")]
    Step2,
    #[serde(rename = "3")]
    Step3,
    #[serde(rename = "4")]
    Step4,
    #[serde(rename = "5")]
    Step5,
    /// Fragment restored to an overstemmed `gener-`/`commun-` word.
    #[serde(rename = "repair")]
    Repair,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::ShortWord => "short-word",
            Phase::Exception => "exception",
            Phase::Invariant => "invariant",
            Phase::Step0 => "0",
            Phase::Step1a => "1a",
            Phase::Step1b => "1b",
            Phase::Step1c => "1c",
            Phase::Step2 => "2",
            Phase::Step3 => "3",
            Phase::Step4 => "4",
            Phase::Step5 => "5",
            Phase::Repair => "repair",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A borrowed trace record, handed to a [`TraceSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent<'a> {
    pub phase: Phase,
    /// The suffix or table entry that fired.
    pub rule: &'a str,
    /// The word after the rule applied.
    pub result: &'a str,
}

/// An owned trace record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    pub phase: Phase,
    pub rule: String,
    pub result: String,
}

impl From<TraceEvent<'_>> for TraceRecord {
    fn from(event: TraceEvent<'_>) -> Self {
        Self {
            phase: event.phase,
            rule: event.rule.to_owned(),
            result: event.result.to_owned(),
        }
    }
}

impl Display for TraceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} {}", self.phase, self.rule, self.result)
    }
}

/// Receives trace events from the stemmer.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent<'_>);

    /// Whether this sink wants events at all. When false the stemmer skips
    /// rendering intermediate forms.
    fn enabled(&self) -> bool {
        true
    }
}

/// The no-op sink.
impl TraceSink for () {
    fn record(&mut self, _event: TraceEvent<'_>) {}

    fn enabled(&self) -> bool {
        false
    }
}

impl TraceSink for Vec<TraceRecord> {
    fn record(&mut self, event: TraceEvent<'_>) {
        self.push(event.into());
    }
}

/// Forwards trace events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: TraceEvent<'_>) {
        debug!(
            phase = %event.phase,
            rule = event.rule,
            result = event.result,
            "stemmer rule applied"
        );
    }

    fn enabled(&self) -> bool {
        enabled!(Level::DEBUG)
    }
}

/// Sends a plain-text event to `sink`.
pub(crate) fn emit<S: TraceSink + ?Sized>(sink: &mut S, phase: Phase, rule: &str, result: &str) {
    if sink.enabled() {
        sink.record(TraceEvent {
            phase,
            rule,
            result,
        });
    }
}

/// Sends an event carrying the current form of `word` to `sink`.
pub(crate) fn emit_word<S: TraceSink + ?Sized>(
    sink: &mut S,
    phase: Phase,
    rule: &str,
    word: &Word,
) {
    if sink.enabled() {
        let result = word.to_string();
        sink.record(TraceEvent {
            phase,
            rule,
            result: &result,
        });
    }
}
