use std::fmt::Write as _;

use crate::{
    buffer::{render_into, FractionText, Overline},
    dictionary::VINCULUM,
    Error, Fraction,
};

/// Draws the vinculum as a row of underscores above the letters it covers.
///
/// ```text
/// -_CXX_VIII   ->    ___
///                   -CXXVIII
/// ```
///
/// Numerals without a vinculum are copied as they are. Beyond being ASCII
/// only the underscores are inspected, the rest of the numeral isn't validated.
pub fn fmt_overline(numeral: &str, crlf: bool) -> Result<Overline, Error> {
    if !numeral.is_ascii() {
        return Err(Error::InvalidSyntax);
    }
    let mut out = Overline::new();

    let vinculum = numeral.as_bytes().iter().filter(|&&b| b == VINCULUM).count();
    let (prefix, covered, tail) = match vinculum {
        0 => {
            out.push_str(numeral)?;
            return Ok(out);
        }
        2 => {
            let (prefix, rest) = numeral.split_at(numeral.find('_').unwrap_or_default());
            let rest = &rest[1..];
            let (covered, tail) = rest.split_at(rest.find('_').unwrap_or_default());
            (prefix, covered, &tail[1..])
        }
        _ => return Err(Error::NonTerminatedVinculum),
    };

    for _ in 0..prefix.len() {
        out.push(b' ')?;
    }
    for _ in 0..covered.len() {
        out.push(VINCULUM)?;
    }
    out.push_str(if crlf { "\r\n" } else { "\n" })?;

    for part in [prefix, covered, tail] {
        out.push_str(part)?;
    }
    Ok(out)
}

/// Writes a fraction the way people read it: `-19, -11/12`, `1, 1/6`, `3/4`.
///
/// The twelfths are reduced to lowest terms and the sign is repeated on every
/// component that is shown.
pub fn fmt_fraction(fraction: Fraction) -> Result<FractionText, Error> {
    let Fraction {
        int_part,
        twelfths,
    } = fraction.simplify()?;

    let mut out = FractionText::new();
    let written = match (int_part, twelfths) {
        (0, 0) => write!(out, "0"),
        (int, 0) => write!(out, "{int}"),
        (0, t) => write!(out, "{}", Twelfths(t)),
        (int, t) => write!(out, "{int}, {}", Twelfths(t)),
    };
    written.map_err(|_| Error::BufferTooSmall)?;
    Ok(out)
}

pub fn fmt_overline_into<'o>(numeral: &str, crlf: bool, out: &'o mut [u8]) -> Result<&'o str, Error> {
    render_into(out, || fmt_overline(numeral, crlf))
}

pub fn fmt_fraction_into(fraction: Fraction, out: &mut [u8]) -> Result<&str, Error> {
    render_into(out, || fmt_fraction(fraction))
}

struct Twelfths(i32);

impl std::fmt::Display for Twelfths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let divisor = gcd(self.0.unsigned_abs(), 12) as i32;
        write!(f, "{}/{}", self.0 / divisor, 12 / divisor)
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[test]
fn overline() {
    for (num, crlf, cmp) in [
        ("-_CXX_VIII", true, " ___\r\n-CXXVIII"),
        ("_IV_", false, "__\nIV"),
        ("_MMMCM_I...", false, "_____\nMMMCMI..."),
        (
            "-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....",
            true,
            " _______________\r\n-MMMDCCCLXXXVIIIDCCCLXXXVIIIS.....",
        ),
        ("-XLII", true, "-XLII"),
        ("NULLA", false, "NULLA"),
        ("", false, ""),
    ] {
        assert_eq!(fmt_overline(num, crlf).unwrap(), cmp, "{num}");
    }
}

#[test]
fn overline_rejects() {
    for num in ["_IV", "IV_", "_I_V_", "___"] {
        assert_eq!(fmt_overline(num, false), Err(Error::NonTerminatedVinculum), "{num}");
    }
    for num in ["é_X_", "_Ⅻ_", "XLII\u{a0}"] {
        assert_eq!(fmt_overline(num, false), Err(Error::InvalidSyntax), "{num}");
    }
    let long = "X".repeat(60);
    assert_eq!(fmt_overline(&long, false), Err(Error::BufferTooSmall));

    let mut out = [0xff; 8];
    assert_eq!(fmt_overline_into("_I", true, &mut out), Err(Error::NonTerminatedVinculum));
    assert_eq!(out[0], 0);
}

#[test]
fn fractions() {
    for ((i, t), cmp) in [
        ((-19, -11), "-19, -11/12"),
        ((1, 2), "1, 1/6"),
        ((0, 0), "0"),
        ((42, 0), "42"),
        ((-42, 0), "-42"),
        ((0, 3), "1/4"),
        ((0, -4), "-1/3"),
        ((0, 6), "1/2"),
        ((0, 8), "2/3"),
        ((0, 9), "3/4"),
        ((0, 10), "5/6"),
        ((0, 5), "5/12"),
        ((0, 7), "7/12"),
        ((0, 1), "1/12"),
        ((10, -59), "5, 1/12"),
        ((-3_999_999, -11), "-3999999, -11/12"),
    ] {
        assert_eq!(fmt_fraction(Fraction::new(i, t)).unwrap(), cmp, "({i}, {t})");
    }
    assert_eq!(
        fmt_fraction(Fraction::new(4_000_000, 0)),
        Err(Error::ValueOutOfRange)
    );
}
