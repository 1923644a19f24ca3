//! Short syllables and short words.
//!
//! A short syllable is a vowel followed by a non-vowel other than `w`, `x`
//! or a semivowel `y`, and preceded by a non-vowel; or, at the very start of
//! the word, a vowel followed by any non-vowel. A word is short when it ends
//! in a short syllable and its R1 is empty.

use super::letter::{Letter, LetterClass};
use super::region::Regions;

/// Whether `letters` end in a short syllable.
pub fn ends_with_short_syllable(letters: &[Letter]) -> bool {
    match letters {
        [first, second] => first.is_vowel() && !second.is_vowel(),
        [.., before, vowel, last] => {
            !before.is_vowel() && vowel.is_vowel() && closes_short_syllable(*last)
        }
        _ => false,
    }
}

/// Whether a word with these letters and regions is short.
pub fn is_short(letters: &[Letter], regions: Regions) -> bool {
    regions.r1 >= letters.len() && ends_with_short_syllable(letters)
}

fn closes_short_syllable(letter: Letter) -> bool {
    match letter.class() {
        LetterClass::Vowel | LetterClass::Semivowel => false,
        LetterClass::Consonant => !matches!(letter.byte(), b'w' | b'x'),
    }
}
