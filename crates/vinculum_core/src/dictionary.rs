//! The glyph table that drives both the encoder and the decoder.
//!
//! Entries are ordered largest first. The encoder walks the table greedily, the
//! decoder walks it as a cursor that only ever moves forward, so the ordering
//! together with `max_repetitions` and `next` is the whole grammar.

use std::ops::Range;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub value: u32,
    pub max_repetitions: u8,
    pub chars: &'static str,
    /// Where the decoder continues once a run of this glyph has been consumed.
    pub next: usize,
}

impl Glyph {
    const fn new(value: u32, max_repetitions: u8, chars: &'static str, next: usize) -> Self {
        Self {
            value,
            max_repetitions,
            chars,
            next,
        }
    }

    /// Case-insensitive prefix match.
    pub fn matches(&self, input: &[u8]) -> bool {
        input.len() >= self.chars.len()
            && input[..self.chars.len()].eq_ignore_ascii_case(self.chars.as_bytes())
    }
}

#[rustfmt::skip]
pub const DICTIONARY: [Glyph; 15] = [
    Glyph::new(1000, 3, "M",  1),
    Glyph::new(900,  1, "CM", 5),
    Glyph::new(500,  1, "D",  4),
    Glyph::new(400,  1, "CD", 5),
    Glyph::new(100,  3, "C",  5),
    Glyph::new(90,   1, "XC", 9),
    Glyph::new(50,   1, "L",  8),
    Glyph::new(40,   1, "XL", 9),
    Glyph::new(10,   3, "X",  9),
    Glyph::new(9,    1, "IX", 13),
    Glyph::new(5,    1, "V",  12),
    Glyph::new(4,    1, "IV", 13),
    Glyph::new(1,    3, "I",  13),
    Glyph::new(6,    1, "S",  14),
    Glyph::new(1,    5, ".",  15),
];

/// Integer glyphs, `M` included.
pub const INTEGER: Range<usize> = 0..13;
/// Integer glyphs allowed after a vinculum, `M` excluded.
pub const POST_VINCULUM: Range<usize> = 1..13;
/// `S` and `.`
pub const TWELFTHS: Range<usize> = 13..15;

pub const VINCULUM: u8 = b'_';
pub const MINUS: u8 = b'-';

/// Whether `byte` can start a numeral body (after an optional sign).
pub fn is_glyph_start(byte: u8) -> bool {
    byte == VINCULUM
        || DICTIONARY
            .iter()
            .any(|glyph| glyph.chars.as_bytes()[0].eq_ignore_ascii_case(&byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_largest_first_per_section() {
        for range in [INTEGER, TWELFTHS] {
            let glyphs = &DICTIONARY[range];
            assert!(glyphs.windows(2).all(|w| w[0].value > w[1].value));
        }
    }

    #[test]
    fn next_only_moves_forward() {
        for (index, glyph) in DICTIONARY.iter().enumerate() {
            assert!(glyph.next > index, "{}", glyph.chars);
            assert!(glyph.next <= DICTIONARY.len());
        }
    }

    #[test]
    fn greedy_runs_stay_within_repetitions() {
        // after peeling glyph i - 1 the remainder is below its value
        for (index, glyph) in DICTIONARY.iter().enumerate() {
            let bound = match index {
                i if i == INTEGER.start => 3999 + 1,
                i if i == TWELFTHS.start => 11 + 1,
                i => DICTIONARY[i - 1].value,
            };
            let run = (bound - 1) / glyph.value;
            assert!(run <= glyph.max_repetitions as u32, "{}", glyph.chars);
        }
    }

    #[test]
    fn matches_ignores_case() {
        assert!(DICTIONARY[1].matches(b"cmx"));
        assert!(DICTIONARY[1].matches(b"Cm"));
        assert!(!DICTIONARY[1].matches(b"c"));
        assert!(DICTIONARY[14].matches(b"."));
    }

    #[test]
    fn glyph_starters() {
        for byte in *b"_MDCLXVISmdclxvis." {
            assert!(is_glyph_start(byte), "{}", byte as char);
        }
        for byte in *b"-NAZ 0" {
            assert!(!is_glyph_start(byte), "{}", byte as char);
        }
    }
}
