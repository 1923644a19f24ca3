//! Character predicates.

/// Letters that act as vowels by default.
///
/// Whether a particular `y` is a vowel depends on where it sits in the word;
/// the normalizer reclassifies some of them as semivowels.
const VOWELS: &[u8] = b"aeiouy";

/// Consonants that form a removable double (`bb`, `dd`, ... `tt`).
const DOUBLES: &[u8] = b"bdfgmnprt";

/// Letters after which a final `li` may be deleted in Step 2.
pub const LI_ENDINGS: &[u8] = b"cdeghkmnrt";

/// Returns true for `a`, `e`, `i`, `o`, `u` and `y`.
pub fn is_vowel(byte: u8) -> bool {
    VOWELS.contains(&byte)
}

/// Returns true when `first` and `second` form one of the doubles
/// `bb dd ff gg mm nn pp rr tt`.
pub fn is_double(first: u8, second: u8) -> bool {
    first == second && DOUBLES.contains(&first)
}

/// Returns true for `c d e g h k m n r t`.
pub fn is_valid_li_ending(byte: u8) -> bool {
    LI_ENDINGS.contains(&byte)
}

/// Whether `ch` may appear in a stemmable word: an ASCII letter or an
/// apostrophe.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_include_y() {
        for byte in b"aeiouy" {
            assert!(is_vowel(*byte), "{} should be a vowel", char::from(*byte));
        }
        for byte in b"bcdfghjklmnpqrstvwxz'" {
            assert!(!is_vowel(*byte), "{} should not be a vowel", char::from(*byte));
        }
    }

    #[test]
    fn doubles_exclude_l_s_z() {
        assert!(is_double(b't', b't'));
        assert!(is_double(b'b', b'b'));
        assert!(!is_double(b'l', b'l'));
        assert!(!is_double(b's', b's'));
        assert!(!is_double(b'z', b'z'));
        assert!(!is_double(b't', b'p'));
    }

    #[test]
    fn li_endings() {
        assert!(is_valid_li_ending(b'c'));
        assert!(is_valid_li_ending(b't'));
        assert!(!is_valid_li_ending(b'l'));
        assert!(!is_valid_li_ending(b's'));
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('\''));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('4'));
        assert!(!is_word_char('é'));
    }
}
