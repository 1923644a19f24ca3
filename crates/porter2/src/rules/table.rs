//! Suffix rule records and the longest-match step driver.

use crate::text::{Gate, Word, ends_with_short_syllable};
use crate::trace::{Phase, TraceSink, emit_word};

/// Endings that take a silent `e` back after Step 1b removes `ed`/`ing`.
const SILENT_E_ENDINGS: &[&str] = &["at", "bl", "iz"];

/// What a matched suffix turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the suffix with a literal. An empty literal deletes it.
    Replace(&'static str),
    /// Replace the suffix only when the letter before it is one of
    /// `preceding`.
    ReplaceAfter {
        preceding: &'static [u8],
        with: &'static str,
    },
    /// Claim the match without changing the word, so no shorter suffix in
    /// the same step can fire.
    Keep,
    /// `ied`/`ies`: `i` after more than one letter, `ie` otherwise.
    PluralIes,
    /// A final `s` is deleted when some earlier letter, other than the one
    /// right before it, is a vowel.
    PluralS,
    /// `ed`/`ing` and their `-ly` forms: deleted after a stem containing a
    /// vowel, then the new ending is tidied.
    Verbal,
    /// A final `y` after a non-vowel that is not the first letter becomes
    /// `i`.
    FinalY,
    /// A final `e` is deleted in R2, or in R1 when not preceded by a short
    /// syllable.
    FinalE,
}

/// One entry of a step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub action: Action,
    /// Region the match has to start in.
    pub gate: Gate,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, action: Action, gate: Gate) -> Self {
        Self {
            suffix,
            action,
            gate,
        }
    }

    pub const fn replace(suffix: &'static str, with: &'static str, gate: Gate) -> Self {
        Self::new(suffix, Action::Replace(with), gate)
    }

    pub const fn delete(suffix: &'static str, gate: Gate) -> Self {
        Self::replace(suffix, "", gate)
    }
}

/// One ordered step of the stemmer: a named table of suffix rules.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub phase: Phase,
    pub rules: &'static [SuffixRule],
}

impl Step {
    /// Finds the rule whose suffix is the longest match for the end of
    /// `word`.
    pub fn longest_match(&self, word: &Word) -> Option<&'static SuffixRule> {
        self.rules
            .iter()
            .filter(|rule| word.ends_with(rule.suffix))
            .max_by_key(|rule| rule.suffix.len())
    }

    /// Applies this step to `word` and reports whether the word changed.
    ///
    /// Only the longest matching suffix is considered. If it starts outside
    /// its region, or its side condition fails, the step leaves the word
    /// alone rather than trying a shorter suffix.
    pub fn apply<S: TraceSink + ?Sized>(&self, word: &mut Word, sink: &mut S) -> bool {
        let Some(rule) = self.longest_match(word) else {
            return false;
        };
        let start = word.len() - rule.suffix.len();
        if !word.admits(start, rule.gate) {
            return false;
        }

        match rule.action {
            Action::Replace(with) => self.rewrite(word, start, with, rule, sink),
            Action::ReplaceAfter { preceding, with } => {
                let preceded = start
                    .checked_sub(1)
                    .and_then(|index| word.byte_at(index))
                    .is_some_and(|byte| preceding.contains(&byte));
                preceded && self.rewrite(word, start, with, rule, sink)
            }
            Action::Keep => false,
            Action::PluralIes => {
                let with = if start > 1 { "i" } else { "ie" };
                self.rewrite(word, start, with, rule, sink)
            }
            Action::PluralS => {
                let vowel_earlier = start
                    .checked_sub(1)
                    .is_some_and(|end| word.has_vowel_before(end));
                vowel_earlier && self.rewrite(word, start, "", rule, sink)
            }
            Action::Verbal => {
                if !word.has_vowel_before(start) {
                    return false;
                }
                self.rewrite(word, start, "", rule, sink);
                self.restore_ending(word, sink);
                true
            }
            Action::FinalY => {
                let after_consonant = start >= 2
                    && word
                        .letters()
                        .get(start - 1)
                        .is_some_and(|letter| !letter.is_vowel());
                after_consonant && self.rewrite(word, start, "i", rule, sink)
            }
            Action::FinalE => {
                let deletable = word.in_r2(start)
                    || !ends_with_short_syllable(&word.letters()[..start]);
                deletable && self.rewrite(word, start, "", rule, sink)
            }
        }
    }

    fn rewrite<S: TraceSink + ?Sized>(
        &self,
        word: &mut Word,
        start: usize,
        with: &str,
        rule: &SuffixRule,
        sink: &mut S,
    ) -> bool {
        word.replace_from(start, with);
        emit_word(sink, self.phase, rule.suffix, word);
        true
    }

    /// Tidies the stem left behind once `ed`/`ing` is gone: restore a silent
    /// `e` after `at`/`bl`/`iz`, undouble a final double, or restore the `e`
    /// of a short word.
    fn restore_ending<S: TraceSink + ?Sized>(&self, word: &mut Word, sink: &mut S) {
        if SILENT_E_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            word.push_str("e");
            emit_word(sink, self.phase, "+e", word);
        } else if word.ends_with_double() {
            word.truncate(word.len() - 1);
            emit_word(sink, self.phase, "undouble", word);
        } else if word.is_short() {
            word.push_str("e");
            emit_word(sink, self.phase, "short +e", word);
        }
    }
}
