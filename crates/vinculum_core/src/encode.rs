use std::ops::Range;

use crate::{
    buffer::{render_into, Numeral},
    dictionary::{DICTIONARY, INTEGER, MINUS, POST_VINCULUM, TWELFTHS, VINCULUM},
    limits::{BASIC_MAX, ZERO_NUMERAL},
    Error, Fraction,
};

/// Renders `fraction` as a canonical numeral, simplifying it first.
pub fn encode_fraction(fraction: Fraction) -> Result<Numeral, Error> {
    let Fraction {
        int_part,
        twelfths,
    } = fraction.simplify()?;

    let mut numeral = Numeral::new();
    if int_part == 0 && twelfths == 0 {
        numeral.push_str(ZERO_NUMERAL)?;
        return Ok(numeral);
    }

    if int_part < 0 || twelfths < 0 {
        numeral.push(MINUS)?;
    }
    let (int_part, twelfths) = (int_part.unsigned_abs(), twelfths.unsigned_abs());

    if int_part > BASIC_MAX as u32 {
        numeral.push(VINCULUM)?;
        peel(&mut numeral, int_part / 1000, INTEGER)?;
        numeral.push(VINCULUM)?;
        peel(&mut numeral, int_part % 1000, POST_VINCULUM)?;
    } else {
        peel(&mut numeral, int_part, INTEGER)?;
    }

    peel(&mut numeral, twelfths, TWELFTHS)?;
    Ok(numeral)
}

pub fn encode_int(value: i32) -> Result<Numeral, Error> {
    encode_fraction(Fraction::from_int(value))
}

pub fn encode_double(value: f64) -> Result<Numeral, Error> {
    encode_fraction(Fraction::from_f64(value)?)
}

pub fn encode_fraction_into(fraction: Fraction, out: &mut [u8]) -> Result<&str, Error> {
    render_into(out, || encode_fraction(fraction))
}

pub fn encode_int_into(value: i32, out: &mut [u8]) -> Result<&str, Error> {
    render_into(out, || encode_int(value))
}

pub fn encode_double_into(value: f64, out: &mut [u8]) -> Result<&str, Error> {
    render_into(out, || encode_double(value))
}

/// Greedy, largest glyph first.
fn peel(numeral: &mut Numeral, mut value: u32, glyphs: Range<usize>) -> Result<(), Error> {
    for glyph in &DICTIONARY[glyphs] {
        while value >= glyph.value {
            value -= glyph.value;
            numeral.push_str(glyph.chars)?;
        }
    }
    debug_assert_eq!(value, 0);
    Ok(())
}

#[test]
fn encode() {
    for (num, cmp) in [
        ("MMXIV", 2014),
        ("MCMXCIX", 1999),
        ("XXV", 25),
        ("MDCLXVI", 1666),
        ("MMMDCCCLXXXVIII", 3888),
        ("XLII", 42),
        ("-XLII", -42),
        ("MMMCMXCIX", 3999),
        ("_IV_", 4000),
        ("_IV_I", 4001),
        ("_MMMCMXCIX_CMXCIX", 3_999_999),
        ("-_MMMCMXCIX_CMXCIX", -3_999_999),
        ("_M_", 1_000_000),
        ("NULLA", 0),
    ] {
        assert_eq!(encode_int(cmp).unwrap(), num, "{cmp}");
    }
}

#[test]
fn encode_fractions() {
    for (num, (i, t)) in [
        ("_MMMCM_I...", (3_900_001, 3)),
        ("V.", (10, -59)),
        ("S", (0, 6)),
        ("-S.....", (0, -11)),
        ("-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....", (-3_888_888, -11)),
        ("NULLA", (1, -12)),
        ("I.", (0, 13)),
    ] {
        assert_eq!(encode_fraction(Fraction::new(i, t)).unwrap(), num, "({i}, {t})");
    }
}

#[test]
fn encode_rejects() {
    assert_eq!(encode_int(4_000_000), Err(Error::ValueOutOfRange));
    assert_eq!(encode_int(i32::MIN), Err(Error::ValueOutOfRange));
    assert_eq!(
        encode_fraction(Fraction::new(3_999_999, 12)),
        Err(Error::ValueOutOfRange)
    );
    assert_eq!(encode_double(f64::NAN), Err(Error::NotFiniteDouble));
    assert_eq!(encode_double(-4e6), Err(Error::ValueOutOfRange));
}

#[test]
fn encode_doubles() {
    assert_eq!(encode_double(1.5).unwrap(), "IS");
    assert_eq!(encode_double(-0.25).unwrap(), "-...");
    assert_eq!(encode_double(0.01).unwrap(), "NULLA");
}

#[test]
fn encode_into_buffers() {
    use crate::limits::{BASIC_NUMERAL_CAPACITY, EXTENDED_NUMERAL_CAPACITY};

    let mut out = [0xff; BASIC_NUMERAL_CAPACITY];
    assert_eq!(encode_int_into(-3888, &mut out), Ok("-MMMDCCCLXXXVIII"));
    assert_eq!(out[16], 0);

    let mut out = [0xff; EXTENDED_NUMERAL_CAPACITY];
    assert_eq!(
        encode_fraction_into(Fraction::new(-3_888_888, -11), &mut out),
        Ok("-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....")
    );

    let mut out = [0xff; BASIC_NUMERAL_CAPACITY];
    assert_eq!(
        encode_int_into(-3_888_888, &mut out),
        Err(Error::BufferTooSmall)
    );
    assert_eq!(out[0], 0);

    let mut out = [0xff; 8];
    assert_eq!(encode_double_into(f64::INFINITY, &mut out), Err(Error::NotFiniteDouble));
    assert_eq!(out[0], 0);
}
