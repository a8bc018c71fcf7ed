//! Heap-allocating counterparts of the encoders and formatters.
//!
//! Each one renders on the stack first and only allocates once that has
//! succeeded, so an error never leaves anything behind on the heap.

use crate::{Error, Fraction};

fn duplicate(text: &str) -> Result<String, Error> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| Error::AllocationFailure)?;
    owned.push_str(text);
    Ok(owned)
}

pub fn encode_int(value: i32) -> Result<String, Error> {
    duplicate(&crate::encode_int(value)?)
}

pub fn encode_fraction(fraction: Fraction) -> Result<String, Error> {
    duplicate(&crate::encode_fraction(fraction)?)
}

pub fn encode_double(value: f64) -> Result<String, Error> {
    duplicate(&crate::encode_double(value)?)
}

pub fn fmt_overline(numeral: &str, crlf: bool) -> Result<String, Error> {
    duplicate(&crate::fmt_overline(numeral, crlf)?)
}

pub fn fmt_fraction(fraction: Fraction) -> Result<String, Error> {
    duplicate(&crate::fmt_fraction(fraction)?)
}

#[test]
fn owned_matches_stack() {
    assert_eq!(encode_int(42).as_deref(), Ok("XLII"));
    assert_eq!(encode_fraction(Fraction::new(10, -59)).as_deref(), Ok("V."));
    assert_eq!(encode_double(-1.5).as_deref(), Ok("-IS"));
    assert_eq!(fmt_overline("_IV_", true).as_deref(), Ok("__\r\nIV"));
    assert_eq!(fmt_fraction(Fraction::new(1, 2)).as_deref(), Ok("1, 1/6"));

    assert_eq!(encode_double(f64::NAN), Err(Error::NotFiniteDouble));
    assert_eq!(fmt_overline("_X", false), Err(Error::NonTerminatedVinculum));
}
