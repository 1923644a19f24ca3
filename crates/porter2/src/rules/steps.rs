//! The step tables, in the order they run.
//!
//! Tables list longer suffixes first for readability; the driver picks the
//! longest match regardless of position.

use super::table::{Action, Step, SuffixRule};
use crate::text::{Gate, LI_ENDINGS};
use crate::trace::Phase;

/// Possessive apostrophes.
pub static STEP_0: Step = Step {
    phase: Phase::Step0,
    rules: &[
        SuffixRule::delete("'s'", Gate::Anywhere),
        SuffixRule::delete("'s", Gate::Anywhere),
        SuffixRule::delete("'", Gate::Anywhere),
    ],
};

/// Plurals.
pub static STEP_1A: Step = Step {
    phase: Phase::Step1a,
    rules: &[
        SuffixRule::replace("sses", "ss", Gate::Anywhere),
        SuffixRule::new("ied", Action::PluralIes, Gate::Anywhere),
        SuffixRule::new("ies", Action::PluralIes, Gate::Anywhere),
        SuffixRule::new("us", Action::Keep, Gate::Anywhere),
        SuffixRule::new("ss", Action::Keep, Gate::Anywhere),
        SuffixRule::new("s", Action::PluralS, Gate::Anywhere),
    ],
};

/// `-eed`, `-ed` and `-ing` verb endings.
pub static STEP_1B: Step = Step {
    phase: Phase::Step1b,
    rules: &[
        SuffixRule::replace("eedly", "ee", Gate::R1),
        SuffixRule::new("ingly", Action::Verbal, Gate::Anywhere),
        SuffixRule::new("edly", Action::Verbal, Gate::Anywhere),
        SuffixRule::replace("eed", "ee", Gate::R1),
        SuffixRule::new("ing", Action::Verbal, Gate::Anywhere),
        SuffixRule::new("ed", Action::Verbal, Gate::Anywhere),
    ],
};

/// Final `y` to `i`.
pub static STEP_1C: Step = Step {
    phase: Phase::Step1c,
    rules: &[SuffixRule::new("y", Action::FinalY, Gate::Anywhere)],
};

/// Derivational suffixes in R1.
pub static STEP_2: Step = Step {
    phase: Phase::Step2,
    rules: &[
        SuffixRule::replace("ational", "ate", Gate::R1),
        SuffixRule::replace("fulness", "ful", Gate::R1),
        SuffixRule::replace("iveness", "ive", Gate::R1),
        SuffixRule::replace("ization", "ize", Gate::R1),
        SuffixRule::replace("ousness", "ous", Gate::R1),
        SuffixRule::replace("biliti", "ble", Gate::R1),
        SuffixRule::replace("lessli", "less", Gate::R1),
        SuffixRule::replace("tional", "tion", Gate::R1),
        SuffixRule::replace("alism", "al", Gate::R1),
        SuffixRule::replace("aliti", "al", Gate::R1),
        SuffixRule::replace("ation", "ate", Gate::R1),
        SuffixRule::replace("entli", "ent", Gate::R1),
        SuffixRule::replace("fulli", "ful", Gate::R1),
        SuffixRule::replace("iviti", "ive", Gate::R1),
        SuffixRule::replace("ousli", "ous", Gate::R1),
        SuffixRule::replace("abli", "able", Gate::R1),
        SuffixRule::replace("alli", "al", Gate::R1),
        SuffixRule::replace("anci", "ance", Gate::R1),
        SuffixRule::replace("ator", "ate", Gate::R1),
        SuffixRule::replace("enci", "ence", Gate::R1),
        SuffixRule::replace("izer", "ize", Gate::R1),
        SuffixRule::replace("bli", "ble", Gate::R1),
        SuffixRule::new(
            "ogi",
            Action::ReplaceAfter {
                preceding: b"l",
                with: "og",
            },
            Gate::R1,
        ),
        SuffixRule::new(
            "li",
            Action::ReplaceAfter {
                preceding: LI_ENDINGS,
                with: "",
            },
            Gate::R1,
        ),
    ],
};

/// More derivational suffixes in R1; `ative` needs R2.
pub static STEP_3: Step = Step {
    phase: Phase::Step3,
    rules: &[
        SuffixRule::replace("ational", "ate", Gate::R1),
        SuffixRule::replace("tional", "tion", Gate::R1),
        SuffixRule::replace("alize", "al", Gate::R1),
        SuffixRule::delete("ative", Gate::R2),
        SuffixRule::replace("icate", "ic", Gate::R1),
        SuffixRule::replace("iciti", "ic", Gate::R1),
        SuffixRule::replace("ical", "ic", Gate::R1),
        SuffixRule::delete("ness", Gate::R1),
        SuffixRule::delete("ful", Gate::R1),
    ],
};

/// Residual suffixes deleted in R2.
pub static STEP_4: Step = Step {
    phase: Phase::Step4,
    rules: &[
        SuffixRule::delete("ement", Gate::R2),
        SuffixRule::delete("able", Gate::R2),
        SuffixRule::delete("ance", Gate::R2),
        SuffixRule::delete("ence", Gate::R2),
        SuffixRule::delete("ible", Gate::R2),
        SuffixRule::delete("ment", Gate::R2),
        SuffixRule::delete("ant", Gate::R2),
        SuffixRule::delete("ate", Gate::R2),
        SuffixRule::delete("ent", Gate::R2),
        SuffixRule::delete("ism", Gate::R2),
        SuffixRule::delete("iti", Gate::R2),
        SuffixRule::delete("ive", Gate::R2),
        SuffixRule::delete("ize", Gate::R2),
        SuffixRule::delete("ous", Gate::R2),
        SuffixRule::new(
            "ion",
            Action::ReplaceAfter {
                preceding: b"st",
                with: "",
            },
            Gate::R2,
        ),
        SuffixRule::delete("al", Gate::R2),
        SuffixRule::delete("er", Gate::R2),
        SuffixRule::delete("ic", Gate::R2),
    ],
};

/// Final `e` and `ll`.
pub static STEP_5: Step = Step {
    phase: Phase::Step5,
    rules: &[
        SuffixRule::new("e", Action::FinalE, Gate::R1),
        SuffixRule::new(
            "l",
            Action::ReplaceAfter {
                preceding: b"l",
                with: "",
            },
            Gate::R2,
        ),
    ],
};

/// Every step, in order. The stemmer checks the post-1a invariants between
/// [`STEP_1A`] and [`STEP_1B`].
pub static PIPELINE: [&Step; 8] = [
    &STEP_0, &STEP_1A, &STEP_1B, &STEP_1C, &STEP_2, &STEP_3, &STEP_4, &STEP_5,
];
