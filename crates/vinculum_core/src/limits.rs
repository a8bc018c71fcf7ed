pub const BASIC_MAX: i32 = 3999;
pub const BASIC_MIN: i32 = -BASIC_MAX;

pub const EXTENDED_INT_MAX: i32 = 3_999_999;
pub const EXTENDED_INT_MIN: i32 = -EXTENDED_INT_MAX;

/// `EXTENDED_INT_MAX + 11/12`
pub const EXTENDED_MAX: f64 = EXTENDED_INT_MAX as f64 + 11.0 / 12.0;
pub const EXTENDED_MIN: f64 = -EXTENDED_MAX;

pub const ZERO_NUMERAL: &str = "NULLA";

// Capacities count a trailing NUL, so a C buffer of this size always fits.

/// `-MMMDCCCLXXXVIII`
pub const BASIC_NUMERAL_CAPACITY: usize = 17;
/// `-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....`
pub const EXTENDED_NUMERAL_CAPACITY: usize = 37;
/// ` _______________\r\n-MMMDCCCLXXXVIIIDCCCLXXXVIIIS.....`
pub const OVERLINE_CAPACITY: usize = 53;
/// `-3999999, -11/12`
pub const FRACTION_CAPACITY: usize = 17;
pub const ZERO_NUMERAL_CAPACITY: usize = ZERO_NUMERAL.len() + 1;

#[test]
fn capacities_fit_longest_outputs() {
    for (text, cap) in [
        ("-MMMDCCCLXXXVIII", BASIC_NUMERAL_CAPACITY),
        ("-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....", EXTENDED_NUMERAL_CAPACITY),
        (
            " _______________\r\n-MMMDCCCLXXXVIIIDCCCLXXXVIIIS.....",
            OVERLINE_CAPACITY,
        ),
        ("-3999999, -11/12", FRACTION_CAPACITY),
        ("NULLA", ZERO_NUMERAL_CAPACITY),
    ] {
        assert_eq!(text.len() + 1, cap, "{text}");
    }
}
