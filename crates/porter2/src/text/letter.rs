use std::fmt::{Display, Formatter, Result as FmtResult};

use super::classify::is_vowel;

/// How a letter behaves in vowel/consonant patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
    /// A `y` at the start of the word or right after a vowel. It matches as
    /// a consonant but is still written as `y`.
    Semivowel,
}

/// One position of a working word: a lowercase ASCII byte and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    byte: u8,
    class: LetterClass,
}

impl Letter {
    /// Classifies `byte` with its default class.
    pub fn new(byte: u8) -> Self {
        let class = if is_vowel(byte) {
            LetterClass::Vowel
        } else {
            LetterClass::Consonant
        };
        Self { byte, class }
    }

    /// A `y` that behaves as a consonant.
    pub fn semivowel() -> Self {
        Self {
            byte: b'y',
            class: LetterClass::Semivowel,
        }
    }

    pub fn byte(self) -> u8 {
        self.byte
    }

    pub fn class(self) -> LetterClass {
        self.class
    }

    /// True only for [`LetterClass::Vowel`]; semivowels count as consonants.
    pub fn is_vowel(self) -> bool {
        self.class == LetterClass::Vowel
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", char::from(self.byte))
    }
}
