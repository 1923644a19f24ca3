//! Letter-level building blocks of the stemmer.
//!
//! This module classifies characters, normalizes raw input into a working
//! [`Word`], computes the R1/R2 regions, and decides whether a word ends in a
//! short syllable. Everything here is pure and shared by every rule step.

mod classify;
mod letter;
mod region;
mod syllable;
mod word;

pub use classify::{LI_ENDINGS, is_double, is_valid_li_ending, is_vowel, is_word_char};
pub use letter::{Letter, LetterClass};
pub use region::{Gate, Regions, compute_regions};
pub use syllable::{ends_with_short_syllable, is_short};
pub use word::Word;
