/// Everything that can go wrong while converting numerals.
///
/// The discriminants are stable; they double as status codes at the C boundary,
/// where `0` means success.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    NullNumeral = 1,
    NullBuffer = 2,
    NullDouble = 3,
    NullInt = 4,
    NullFraction = 5,
    EmptyNumeral = 6,

    ValueOutOfRange = 7,
    NotFiniteDouble = 8,

    InvalidSyntax = 9,
    NonTerminatedVinculum = 10,
    EmptyVinculum = 11,
    MAfterVinculum = 12,
    UnexpectedTwelfths = 13,

    AllocationFailure = 14,
    BufferTooSmall = 15,
}

impl Error {
    pub const ALL: [Self; 15] = [
        Self::NullNumeral,
        Self::NullBuffer,
        Self::NullDouble,
        Self::NullInt,
        Self::NullFraction,
        Self::EmptyNumeral,
        Self::ValueOutOfRange,
        Self::NotFiniteDouble,
        Self::InvalidSyntax,
        Self::NonTerminatedVinculum,
        Self::EmptyVinculum,
        Self::MAfterVinculum,
        Self::UnexpectedTwelfths,
        Self::AllocationFailure,
        Self::BufferTooSmall,
    ];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|err| err.code() == code)
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::NullNumeral => "the numeral is missing",
            Self::NullBuffer => "the output buffer is missing",
            Self::NullDouble => "the double output is missing",
            Self::NullInt => "the integer output is missing",
            Self::NullFraction => "the fraction is missing",
            Self::EmptyNumeral => "the numeral is empty",
            Self::ValueOutOfRange => "the value is outside the representable range",
            Self::NotFiniteDouble => "the double is not a finite number",
            Self::InvalidSyntax => "the numeral is not a valid roman numeral",
            Self::NonTerminatedVinculum => "the vinculum is missing its closing underscore",
            Self::EmptyVinculum => "the vinculum is empty",
            Self::MAfterVinculum => "thousands may not follow a vinculum",
            Self::UnexpectedTwelfths => "the numeral has a fractional part where an integer was expected",
            Self::AllocationFailure => "memory allocation failed",
            Self::BufferTooSmall => "the output buffer is too small",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for Error {}

#[test]
fn codes_round_trip() {
    for err in Error::ALL {
        assert_eq!(Error::from_code(err.code()), Some(err));
        assert!(!err.describe().is_empty());
    }
    assert_eq!(Error::from_code(0), None);
    assert_eq!(Error::from_code(16), None);
}
