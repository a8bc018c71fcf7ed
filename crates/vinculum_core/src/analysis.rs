//! Cheap lexical checks that never fail; they don't validate the numeral.

use crate::{
    dictionary::{is_glyph_start, MINUS},
    limits::ZERO_NUMERAL,
};

/// `NULLA` or `-NULLA`, in any case.
pub fn is_zero(numeral: &str) -> bool {
    numeral
        .strip_prefix(MINUS as char)
        .unwrap_or(numeral)
        .eq_ignore_ascii_case(ZERO_NUMERAL)
}

/// `-1`, `0` or `1`, judged from the leading characters only.
pub fn sign(numeral: &str) -> i32 {
    if numeral.is_empty() || is_zero(numeral) {
        return 0;
    }
    match numeral.as_bytes() {
        [MINUS, next, ..] if is_glyph_start(*next) => -1,
        _ => 1,
    }
}

#[test]
fn zero() {
    for num in ["NULLA", "nulla", "-NULLA", "-NuLLa"] {
        assert!(is_zero(num), "{num}");
    }
    for num in ["", "-", "NULL", "NULLAE", "--NULLA", " NULLA", "I"] {
        assert!(!is_zero(num), "{num}");
    }
}

#[test]
fn signs() {
    for (num, cmp) in [
        ("", 0),
        ("NULLA", 0),
        ("-nulla", 0),
        ("-X", -1),
        ("-_IV_", -1),
        ("-s", -1),
        ("-.", -1),
        ("X", 1),
        ("-", 1),
        ("-Q", 1),
        ("--X", 1),
        ("garbage", 1),
    ] {
        assert_eq!(sign(num), cmp, "{num}");
    }
}
