//! Conversion between numbers and roman numerals, extended with a vinculum
//! (`_IV_` = 4000) and a twelfths suffix (`S` = 6/12, `.` = 1/12).
//!
//! Nothing in here allocates except [`owned`].

pub mod analysis;
pub mod buffer;
pub mod dictionary;
mod decode;
mod encode;
mod error;
mod format;
mod fraction;
pub mod limits;
pub mod owned;
mod value;

pub use analysis::{is_zero, sign};
pub use buffer::{FractionText, Numeral, Overline, StackStr};
pub use decode::{decode_double, decode_fraction, decode_int};
pub use encode::{
    encode_double, encode_double_into, encode_fraction, encode_fraction_into, encode_int,
    encode_int_into,
};
pub use error::Error;
pub use format::{fmt_fraction, fmt_fraction_into, fmt_overline, fmt_overline_into};
pub use fraction::{double_to_fraction, fraction_to_double, simplify, Fraction};
pub use value::Value;
