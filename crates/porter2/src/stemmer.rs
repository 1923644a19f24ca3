//! The stemming entry points.

use bon::Builder;

use crate::error::StemError;
use crate::rules::exceptions::{self, Exception};
use crate::rules::PIPELINE;
use crate::text::{Word, is_word_char};
use crate::trace::{Phase, TraceSink, emit, emit_word};

/// A configured Porter2 stemmer.
///
/// The rule tables are static, so a `Stemmer` is only its switches: it is
/// `Copy` and safe to share between threads.
///
/// # Example
///
/// ```
/// use porter2::Stemmer;
///
/// let stemmer = Stemmer::builder().exceptions(false).build();
///
/// assert_eq!(stemmer.stem("hopefulness"), "hope");
/// // Without the exception table these go through the plural rules.
/// assert_eq!(stemmer.stem("skis"), "skis");
/// assert_eq!(stemmer.stem("skies"), "ski");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Stemmer {
    /// Apply the whole-word override and invariant tables.
    #[builder(default = true)]
    exceptions: bool,

    /// Restore fragments lost from `gener-` and `commun-` words.
    ///
    /// A backstop: with the built-in tables the prefix rule for R1 already
    /// keeps these fragments, so turning it off does not change any stem.
    #[builder(default = true)]
    repair_overstemming: bool,
}

impl Default for Stemmer {
    fn default() -> Self {
        Stemmer::builder().build()
    }
}

impl Stemmer {
    /// Create a stemmer with every table enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exceptions(&self) -> bool {
        self.exceptions
    }

    pub fn repair_overstemming(&self) -> bool {
        self.repair_overstemming
    }

    /// Stems `word`.
    ///
    /// Words containing anything but ASCII letters and apostrophes are
    /// outside the stemmer's domain and come back unchanged; use
    /// [`Stemmer::try_stem`] to detect them.
    pub fn stem(&self, word: &str) -> String {
        self.try_stem(word).unwrap_or_else(|_| word.to_owned())
    }

    /// Stems `word`, rejecting characters other than ASCII letters and
    /// apostrophes.
    pub fn try_stem(&self, word: &str) -> Result<String, StemError> {
        self.stem_traced(word, &mut ())
    }

    /// Stems `word`, reporting every rule that changes it to `sink`.
    pub fn stem_traced<S: TraceSink + ?Sized>(
        &self,
        word: &str,
        sink: &mut S,
    ) -> Result<String, StemError> {
        if word.chars().count() <= 2 {
            emit(sink, Phase::ShortWord, "length <= 2", word);
            return Ok(word.to_owned());
        }
        validate(word)?;

        let mut word = Word::new(word);
        if self.exceptions {
            match exceptions::lookup(word.surface()) {
                Some(Exception::Stem(stem)) => {
                    emit(sink, Phase::Exception, word.surface(), stem);
                    return Ok(stem.to_owned());
                }
                Some(Exception::Invariant) => {
                    emit(sink, Phase::Invariant, word.surface(), word.surface());
                    return Ok(word.surface().to_owned());
                }
                None => {}
            }
        }

        for step in PIPELINE {
            step.apply(&mut word, sink);
            if step.phase == Phase::Step1a
                && self.exceptions
                && exceptions::is_post_step_1a_invariant(&word)
            {
                emit_word(sink, Phase::Invariant, "after 1a", &word);
                return Ok(word.to_string());
            }
        }

        let stem = word.to_string();
        if self.repair_overstemming {
            if let Some(repaired) = exceptions::repair_overstemming(word.surface(), &stem) {
                emit(sink, Phase::Repair, word.surface(), &repaired);
                return Ok(repaired);
            }
        }
        Ok(stem)
    }
}

fn validate(word: &str) -> Result<(), StemError> {
    match word.char_indices().find(|(_, ch)| !is_word_char(*ch)) {
        Some((offset, ch)) => Err(StemError::InvalidCharacter {
            word: word.to_owned(),
            ch,
            offset,
        }),
        None => Ok(()),
    }
}
