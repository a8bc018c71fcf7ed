use crate::{buffer::Numeral, encode_double, encode_fraction, encode_int, Error, Fraction};

/// A number as typed by a person: `42`, `-3.25` or `10,-59` (int part, twelfths).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Fraction(Fraction),
    Double(f64),
}

impl Value {
    /// Whether `input` reads as a number rather than as a numeral.
    pub fn looks_numeric(input: &str) -> bool {
        let input = input.trim_start();
        let input = input.strip_prefix(['-', '+']).unwrap_or(input);
        input.starts_with(|c: char| c.is_ascii_digit())
    }

    pub fn encode(self) -> Result<Numeral, Error> {
        match self {
            Self::Int(value) => encode_int(value),
            Self::Fraction(fraction) => encode_fraction(fraction),
            Self::Double(value) => encode_double(value),
        }
    }

    pub fn to_fraction(self) -> Result<Fraction, Error> {
        match self {
            Self::Int(value) => Fraction::from_int(value).simplify(),
            Self::Fraction(fraction) => fraction.simplify(),
            Self::Double(value) => Fraction::from_f64(value),
        }
    }
}

impl std::str::FromStr for Value {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyNumeral);
        }

        if let Some((int_part, twelfths)) = s.split_once(',') {
            let int_part = int_part.trim().parse().map_err(|_| Error::InvalidSyntax)?;
            let twelfths = twelfths.trim().parse().map_err(|_| Error::InvalidSyntax)?;
            return Ok(Self::Fraction(Fraction::new(int_part, twelfths)));
        }

        if let Ok(value) = s.parse::<i32>() {
            return Ok(Self::Int(value));
        }

        // an integer that overflowed i32 is still a number, just out of range
        if s.parse::<i64>().is_ok() {
            return Err(Error::ValueOutOfRange);
        }

        match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Double(value)),
            Ok(_) => Err(Error::NotFiniteDouble),
            Err(_) => Err(Error::InvalidSyntax),
        }
    }
}
