//! Whole-word exceptions and overstemming repairs.
//!
//! Lookups resolve with `match` and `const` tables so they need no runtime
//! initialization and can be shared across threads.

use crate::text::Word;

/// Result of looking a word up in the exception tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    /// The word stems to this literal.
    Stem(&'static str),
    /// The word is its own stem.
    Invariant,
}

/// Words left unchanged.
const INVARIANT_WORDS: &[&str] = &["sky", "news", "howe", "atlas", "cosmos", "bias", "andes"];

/// Words left unchanged once Step 1a has run.
const POST_STEP_1A_INVARIANTS: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Word shapes whose stems lose a fragment to the `gener`/`commun` region
/// prefixes, with the fragment to restore.
const REPAIRS: &[(&[&str], &str)] = &[
    (&["generate", "generates", "generated", "generating"], "at"),
    (&["general", "generally"], "al"),
    (&["generic", "generically"], "ic"),
    (&["generous", "generously"], "ous"),
    (&["community", "communities"], "iti"),
];

/// Looks `word` up in the override and invariant tables, overrides first.
pub fn lookup(word: &str) -> Option<Exception> {
    override_stem(word)
        .map(Exception::Stem)
        .or_else(|| INVARIANT_WORDS.contains(&word).then_some(Exception::Invariant))
}

/// Stems that replace the rule engine's output for specific words.
pub fn override_stem(word: &str) -> Option<&'static str> {
    match word {
        "skis" => Some("ski"),
        "skies" => Some("sky"),
        "dying" => Some("die"),
        "lying" => Some("lie"),
        "tying" => Some("tie"),
        "idly" => Some("idl"),
        "gently" => Some("gentl"),
        "ugly" => Some("ugli"),
        "early" => Some("earli"),
        "only" => Some("onli"),
        "singly" => Some("singl"),
        _ => None,
    }
}

/// Whether `word`, as left by Step 1a, stops the stemmer.
pub fn is_post_step_1a_invariant(word: &Word) -> bool {
    POST_STEP_1A_INVARIANTS
        .iter()
        .any(|invariant| word.spells(invariant))
}

/// Restores the fragment an overstemmed `gener-`/`commun-` word lost.
///
/// This is a backstop. The R1 prefix rule already keeps every fragment for
/// the standard step tables, so in the default pipeline the stem always ends
/// with it and nothing is appended.
///
/// Returns `None` when `surface` is not one of the repaired shapes or when
/// `stem` still ends with the fragment.
pub fn repair_overstemming(surface: &str, stem: &str) -> Option<String> {
    let (_, fragment) = REPAIRS.iter().find(|(forms, _)| forms.contains(&surface))?;
    if stem.ends_with(fragment) {
        return None;
    }
    Some(format!("{stem}{fragment}"))
}
