//! The word state threaded through the stemming steps.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::classify::is_double;
use super::letter::Letter;
use super::region::{Gate, Regions, compute_regions};
use super::syllable::is_short;

/// A word being stemmed.
///
/// Holds the lowercased surface form alongside the working letters and the
/// current R1/R2 boundaries. Every mutation goes through
/// [`Word::replace_from`] or [`Word::truncate`], both of which recompute the
/// regions, so the boundaries always describe the current letters.
///
/// # Example
///
/// ```
/// use porter2::text::Word;
///
/// let word = Word::new("'beautiful");
/// assert_eq!(word.to_string(), "beautiful");
/// assert_eq!((word.r1(), word.r2()), (5, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    surface: String,
    letters: Vec<Letter>,
    regions: Regions,
}

impl Word {
    /// Normalizes `surface` into a working form and computes its regions.
    ///
    /// Lowercases ASCII letters, strips one leading apostrophe, and marks
    /// every `y` that begins the word or follows a vowel as a semivowel.
    pub fn new(surface: &str) -> Self {
        let surface = surface.to_ascii_lowercase();
        let body = surface.strip_prefix('\'').unwrap_or(&surface);
        let letters = mark_semivowels(body.bytes());
        let regions = compute_regions(&letters);
        Self {
            surface,
            letters,
            regions,
        }
    }

    /// The lowercased input this word was built from.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn regions(&self) -> Regions {
        self.regions
    }

    /// Start offset of R1.
    pub fn r1(&self) -> usize {
        self.regions.r1
    }

    /// Start offset of R2.
    pub fn r2(&self) -> usize {
        self.regions.r2
    }

    /// Whether a match starting at `offset` lies in R1.
    pub fn in_r1(&self, offset: usize) -> bool {
        self.regions.admits(offset, Gate::R1)
    }

    /// Whether a match starting at `offset` lies in R2.
    pub fn in_r2(&self, offset: usize) -> bool {
        self.regions.admits(offset, Gate::R2)
    }

    pub fn admits(&self, offset: usize, gate: Gate) -> bool {
        self.regions.admits(offset, gate)
    }

    /// Byte at `offset`, with semivowels written as `y`.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.letters.get(offset).copied().map(Letter::byte)
    }

    /// Whether the working letters end with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.letters
            .len()
            .checked_sub(suffix.len())
            .is_some_and(|start| {
                self.letters[start..]
                    .iter()
                    .zip(suffix.bytes())
                    .all(|(letter, byte)| letter.byte() == byte)
            })
    }

    /// Whether the working letters spell exactly `text`.
    pub fn spells(&self, text: &str) -> bool {
        self.letters.len() == text.len() && self.ends_with(text)
    }

    /// Whether any of the first `end` letters is a vowel.
    pub fn has_vowel_before(&self, end: usize) -> bool {
        self.letters
            .iter()
            .take(end)
            .any(|letter| letter.is_vowel())
    }

    /// Whether the word ends in one of the removable doubles.
    pub fn ends_with_double(&self) -> bool {
        match self.letters.as_slice() {
            [.., first, second] => is_double(first.byte(), second.byte()),
            _ => false,
        }
    }

    /// Whether the word is short: it ends in a short syllable and R1 is
    /// empty.
    pub fn is_short(&self) -> bool {
        is_short(&self.letters, self.regions)
    }

    /// Replaces everything from `start` onward with `replacement`.
    pub fn replace_from(&mut self, start: usize, replacement: &str) {
        self.letters.truncate(start);
        self.letters.extend(replacement.bytes().map(Letter::new));
        self.recompute_regions();
    }

    /// Appends `text` to the working letters.
    pub fn push_str(&mut self, text: &str) {
        self.replace_from(self.letters.len(), text);
    }

    /// Shortens the working letters to `len`.
    pub fn truncate(&mut self, len: usize) {
        self.letters.truncate(len);
        self.recompute_regions();
    }

    fn recompute_regions(&mut self) {
        self.regions = compute_regions(&self.letters);
        debug_assert!(
            self.regions.r1 <= self.regions.r2 && self.regions.r2 <= self.letters.len(),
            "region invariant violated for {self}: {:?}",
            self.regions
        );
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Classifies `bytes`, marking a `y` at the start of the word or after a
/// vowel as a semivowel.
fn mark_semivowels(bytes: impl Iterator<Item = u8>) -> Vec<Letter> {
    let mut letters = Vec::<Letter>::new();
    for byte in bytes {
        let starts_or_follows_vowel = letters.last().is_none_or(|prev| prev.is_vowel());
        let letter = if byte == b'y' && starts_or_follows_vowel {
            Letter::semivowel()
        } else {
            Letter::new(byte)
        };
        letters.push(letter);
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LetterClass;

    fn classes(word: &str) -> Vec<LetterClass> {
        Word::new(word).letters().iter().map(|l| l.class()).collect()
    }

    #[test]
    fn marks_initial_y_as_semivowel() {
        assert_eq!(
            classes("yes"),
            vec![
                LetterClass::Semivowel,
                LetterClass::Vowel,
                LetterClass::Consonant
            ]
        );
    }

    #[test]
    fn marks_y_after_vowel_as_semivowel() {
        let word = Word::new("saying");
        assert_eq!(word.letters()[2].class(), LetterClass::Semivowel);
        assert_eq!(word.to_string(), "saying");
    }

    #[test]
    fn y_after_consonant_stays_vowel() {
        let word = Word::new("happy");
        assert_eq!(word.letters()[4].class(), LetterClass::Vowel);
    }

    #[test]
    fn y_after_semivowel_is_a_vowel() {
        let word = Word::new("ayyo");
        assert_eq!(word.letters()[1].class(), LetterClass::Semivowel);
        assert_eq!(word.letters()[2].class(), LetterClass::Vowel);
    }

    #[test]
    fn strips_only_one_leading_apostrophe() {
        assert_eq!(Word::new("'tis").to_string(), "tis");
        assert_eq!(Word::new("''tis").to_string(), "'tis");
        assert_eq!(Word::new("'tis").surface(), "'tis");
    }

    #[test]
    fn lowercases_input() {
        let word = Word::new("Running");
        assert_eq!(word.to_string(), "running");
        assert_eq!(word.surface(), "running");
    }

    #[test]
    fn mutations_recompute_regions() {
        let mut word = Word::new("relational");
        assert_eq!((word.r1(), word.r2()), (3, 5));

        word.replace_from(3, "ate");
        assert_eq!(word.to_string(), "relate");
        assert_eq!((word.r1(), word.r2()), (3, 5));

        word.truncate(5);
        assert_eq!(word.to_string(), "relat");
        assert_eq!((word.r1(), word.r2()), (3, 5));

        word.truncate(2);
        assert_eq!(word.to_string(), "re");
        assert_eq!((word.r1(), word.r2()), (2, 2));
    }

    #[test]
    fn suffix_queries() {
        let word = Word::new("hopping");
        assert!(word.ends_with("ing"));
        assert!(word.ends_with("hopping"));
        assert!(!word.ends_with("shopping"));
        assert!(word.spells("hopping"));
        assert!(!word.spells("ping"));
        assert!(word.has_vowel_before(2));
        assert!(!word.has_vowel_before(1));
        assert_eq!(word.byte_at(0), Some(b'h'));
        assert_eq!(word.byte_at(7), None);
    }

    #[test]
    fn doubles() {
        assert!(Word::new("hopp").ends_with_double());
        assert!(!Word::new("fall").ends_with_double());
        assert!(!Word::new("a").ends_with_double());
    }
}
