use crate::{
    limits::{EXTENDED_INT_MAX, EXTENDED_MAX, EXTENDED_MIN},
    Error,
};

/// A value measured in whole units plus twelfths: `int_part + twelfths / 12`.
///
/// Any pair is accepted as input; [`Fraction::simplify`] yields the canonical
/// form where `|twelfths| <= 11` and both fields share a sign.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Display,
    serde::Deserialize,
    serde::Serialize,
)]
#[display(fmt = "({}, {})", int_part, twelfths)]
pub struct Fraction {
    pub int_part: i32,
    pub twelfths: i32,
}

impl Fraction {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(int_part: i32, twelfths: i32) -> Self {
        Self {
            int_part,
            twelfths,
        }
    }

    pub const fn from_int(int_part: i32) -> Self {
        Self::new(int_part, 0)
    }

    pub const fn is_zero(&self) -> bool {
        self.int_part == 0 && self.twelfths == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.int_part < 0 || self.twelfths < 0
    }

    /// Carries whole units out of the twelfths and aligns the signs.
    ///
    /// The rational value is preserved exactly.
    pub fn simplify(self) -> Result<Self, Error> {
        let twelfths = i64::from(self.twelfths);
        let mut int_part = i64::from(self.int_part) + twelfths / 12;
        let mut twelfths = twelfths % 12;

        match () {
            _ if int_part > 0 && twelfths < 0 => {
                int_part -= 1;
                twelfths += 12;
            }
            _ if int_part < 0 && twelfths > 0 => {
                int_part += 1;
                twelfths -= 12;
            }
            _ => {}
        }

        if int_part.abs() > i64::from(EXTENDED_INT_MAX) {
            return Err(Error::ValueOutOfRange);
        }

        // both fit: |int_part| <= EXTENDED_INT_MAX, |twelfths| <= 11
        Ok(Self::new(int_part as i32, twelfths as i32))
    }

    pub fn to_f64(self) -> Result<f64, Error> {
        let value = f64::from(self.int_part) + f64::from(self.twelfths) / 12.0;
        if (EXTENDED_MIN..=EXTENDED_MAX).contains(&value) {
            Ok(value)
        } else {
            Err(Error::ValueOutOfRange)
        }
    }

    /// Rounds to the nearest twelfth.
    ///
    /// Anything whose integer part fits the extended range is accepted; a
    /// rounding carry at the very edge is clamped back to `±11/12`.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NotFiniteDouble);
        }

        let int_part = value.trunc();
        if int_part.abs() > f64::from(EXTENDED_INT_MAX) {
            return Err(Error::ValueOutOfRange);
        }

        let int_part = int_part as i32;
        let mut twelfths = ((value - f64::from(int_part)) * 12.0).round() as i32;
        if int_part.abs() == EXTENDED_INT_MAX && twelfths.abs() == 12 {
            twelfths = twelfths.signum() * 11;
        }

        Self::new(int_part, twelfths).simplify()
    }
}

pub fn simplify(fraction: Fraction) -> Result<Fraction, Error> {
    fraction.simplify()
}

pub fn fraction_to_double(fraction: Fraction) -> Result<f64, Error> {
    fraction.to_f64()
}

pub fn double_to_fraction(value: f64) -> Result<Fraction, Error> {
    Fraction::from_f64(value)
}
