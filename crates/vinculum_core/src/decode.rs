use std::ops::Range;

use crate::{
    analysis::is_zero,
    dictionary::{DICTIONARY, INTEGER, MINUS, TWELFTHS, VINCULUM},
    Error, Fraction,
};

/// Largest value allowed between a vinculum and the twelfths: `CMXCIX`.
const POST_VINCULUM_MAX: u32 = 999;
/// Below this a vinculum isn't canonical: `_III_` is written `MMM`.
const VINCULUM_MIN: u32 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    PreSign,
    PreVinculumOrInt,
    InVinculumInt,
    PostVinculum,
    InPostVincInt,
    InBasicInt,
    InTwelfths,
    End,
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    negative: bool,
    vinculum: Option<u32>,
    int_part: u32,
    twelfths: u32,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            negative: false,
            vinculum: None,
            int_part: 0,
            twelfths: 0,
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        let found = self.peek() == Some(byte);
        if found {
            self.pos += 1;
        }
        found
    }

    /// Walks the dictionary forward from `glyphs.start`, consuming as long as
    /// the input keeps matching.
    fn section(&mut self, glyphs: Range<usize>) -> u32 {
        let (mut index, mut total) = (glyphs.start, 0);
        while index < glyphs.end {
            let glyph = &DICTIONARY[index];
            let mut run = 0;
            while run < glyph.max_repetitions && glyph.matches(self.rest()) {
                self.pos += glyph.chars.len();
                total += glyph.value;
                run += 1;
            }
            index = if run > 0 { glyph.next } else { index + 1 };
        }
        total
    }

    /// Why a vinculum didn't close right here.
    fn unclosed_vinculum(&self) -> Error {
        if self.rest().contains(&VINCULUM) {
            Error::InvalidSyntax
        } else {
            Error::NonTerminatedVinculum
        }
    }

    fn step(&mut self, state: State) -> Result<State, Error> {
        use State::*;
        let next = match state {
            PreSign => {
                self.negative = self.eat(MINUS);
                PreVinculumOrInt
            }

            PreVinculumOrInt => match self.peek() {
                None => return Err(Error::InvalidSyntax),
                Some(VINCULUM) => {
                    self.pos += 1;
                    InVinculumInt
                }
                Some(_) => InBasicInt,
            },

            InVinculumInt => {
                let value = self.section(INTEGER);
                match () {
                    _ if value == 0 && self.peek() == Some(VINCULUM) => {
                        return Err(Error::EmptyVinculum)
                    }
                    _ if value == 0 || !self.eat(VINCULUM) => {
                        return Err(self.unclosed_vinculum())
                    }
                    _ => {}
                }
                self.vinculum = Some(value);
                PostVinculum
            }

            PostVinculum => {
                self.int_part = self.vinculum.unwrap_or_default() * 1000;
                InPostVincInt
            }

            InPostVincInt => {
                let value = self.section(INTEGER);
                if value > POST_VINCULUM_MAX {
                    return Err(Error::MAfterVinculum);
                }
                self.int_part += value;
                InTwelfths
            }

            InBasicInt => {
                self.int_part = self.section(INTEGER);
                InTwelfths
            }

            InTwelfths => {
                self.twelfths = self.section(TWELFTHS);
                if self.pos != self.input.len() {
                    return Err(Error::InvalidSyntax);
                }
                End
            }

            End => End,
        };
        Ok(next)
    }

    fn finish(self) -> Result<Fraction, Error> {
        if matches!(self.vinculum, Some(v) if v < VINCULUM_MIN) {
            return Err(Error::InvalidSyntax);
        }
        if self.int_part == 0 && self.twelfths == 0 {
            return Err(Error::InvalidSyntax);
        }

        // bounded by the grammar: int_part <= 3_999_999, twelfths <= 11
        let (int_part, twelfths) = (self.int_part as i32, self.twelfths as i32);
        Ok(if self.negative {
            Fraction::new(-int_part, -twelfths)
        } else {
            Fraction::new(int_part, twelfths)
        })
    }
}

/// Parses a numeral; the result is always canonical.
///
/// Leading ASCII whitespace is skipped and letters are matched without regard
/// to case.
pub fn decode_fraction(numeral: &str) -> Result<Fraction, Error> {
    let numeral = numeral.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if numeral.is_empty() {
        return Err(Error::EmptyNumeral);
    }
    if is_zero(numeral) {
        return Ok(Fraction::ZERO);
    }

    let mut parser = Parser::new(numeral.as_bytes());
    let mut state = State::PreSign;
    while state != State::End {
        state = parser.step(state)?;
    }
    parser.finish()
}

pub fn decode_int(numeral: &str) -> Result<i32, Error> {
    match decode_fraction(numeral)? {
        Fraction {
            int_part,
            twelfths: 0,
        } => Ok(int_part),
        _ => Err(Error::UnexpectedTwelfths),
    }
}

pub fn decode_double(numeral: &str) -> Result<f64, Error> {
    decode_fraction(numeral)?.to_f64()
}

impl std::str::FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fraction(s)
    }
}
