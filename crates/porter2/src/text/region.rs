//! R1 and R2 region boundaries.
//!
//! R1 is the region after the first non-vowel following a vowel, or the end
//! of the word if there is no such non-vowel. R2 applies the same rule inside
//! R1. Words beginning with one of [`R1_PREFIXES`] take R1 to start right
//! after the prefix instead.

use super::letter::Letter;

/// Prefixes that fix where R1 starts.
const R1_PREFIXES: &[&str] = &["gener", "commun", "arsen"];

/// Start offsets of R1 and R2 in a working word.
///
/// Always `r1 <= r2 <= len`, so R2 is a suffix of R1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

/// Where a suffix match has to begin for a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Anywhere,
    R1,
    R2,
}

impl Regions {
    /// Whether a match starting at `offset` lies inside the region `gate`
    /// names.
    pub fn admits(self, offset: usize, gate: Gate) -> bool {
        match gate {
            Gate::Anywhere => true,
            Gate::R1 => offset >= self.r1,
            Gate::R2 => offset >= self.r2,
        }
    }
}

/// Computes R1 and R2 for `letters` from scratch.
pub fn compute_regions(letters: &[Letter]) -> Regions {
    let r1 = prefix_region(letters).unwrap_or_else(|| region_after(letters, 0));
    let r2 = region_after(letters, r1);
    Regions { r1, r2 }
}

fn prefix_region(letters: &[Letter]) -> Option<usize> {
    R1_PREFIXES
        .iter()
        .find(|prefix| {
            letters.len() >= prefix.len()
                && letters
                    .iter()
                    .zip(prefix.bytes())
                    .all(|(letter, byte)| letter.byte() == byte)
        })
        .map(|prefix| prefix.len())
}

/// Offset just past the first vowel/non-vowel pair found at or after
/// `start`, or the word length if there is none.
fn region_after(letters: &[Letter], start: usize) -> usize {
    letters
        .get(start..)
        .and_then(|tail| {
            tail.windows(2).position(|pair| {
                matches!(pair, [first, second] if first.is_vowel() && !second.is_vowel())
            })
        })
        .map_or(letters.len(), |index| start + index + 2)
}
