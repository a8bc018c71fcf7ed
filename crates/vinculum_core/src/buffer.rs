use crate::{
    limits::{EXTENDED_NUMERAL_CAPACITY, FRACTION_CAPACITY, OVERLINE_CAPACITY},
    Error,
};

/// Fixed-capacity ASCII text living on the stack.
///
/// `N` counts a trailing NUL, so at most `N - 1` bytes are stored and the
/// contents always fit a C buffer of `N` bytes.
#[derive(Copy, Clone)]
pub struct StackStr<const N: usize> {
    buf: [u8; N],
    len: usize,
}

pub type Numeral = StackStr<EXTENDED_NUMERAL_CAPACITY>;
pub type Overline = StackStr<OVERLINE_CAPACITY>;
pub type FractionText = StackStr<FRACTION_CAPACITY>;

impl<const N: usize> StackStr<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        // only ASCII is ever pushed
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), Error> {
        debug_assert!(byte.is_ascii());
        if self.len + 1 >= N {
            return Err(Error::BufferTooSmall);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    pub(crate) fn push_str(&mut self, s: &str) -> Result<(), Error> {
        s.bytes().try_for_each(|b| self.push(b))
    }

    /// Writes the contents and a trailing NUL into `out`.
    ///
    /// When `out` is too small nothing but a leading NUL is written.
    pub fn copy_to<'o>(&self, out: &'o mut [u8]) -> Result<&'o str, Error> {
        if out.len() <= self.len {
            clear(out);
            return Err(Error::BufferTooSmall);
        }
        out[..self.len].copy_from_slice(&self.buf[..self.len]);
        out[self.len] = 0;
        Ok(std::str::from_utf8(&out[..self.len]).unwrap_or_default())
    }
}

/// Leaves `out` holding an empty C string.
pub fn clear(out: &mut [u8]) {
    if let Some(first) = out.first_mut() {
        *first = 0
    }
}

/// Renders into a stack buffer, then copies into `out`.
///
/// On any failure `out` holds an empty C string.
pub(crate) fn render_into<'o, const N: usize>(
    out: &'o mut [u8],
    render: impl FnOnce() -> Result<StackStr<N>, Error>,
) -> Result<&'o str, Error> {
    match render() {
        Ok(text) => text.copy_to(out),
        Err(err) => {
            clear(out);
            Err(err)
        }
    }
}

impl<const N: usize> Default for StackStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::fmt::Write for StackStr<N> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.push_str(s).map_err(|_| std::fmt::Error)
    }
}

impl<const N: usize> std::ops::Deref for StackStr<N> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for StackStr<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> std::fmt::Display for StackStr<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> std::fmt::Debug for StackStr<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq for StackStr<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for StackStr<N> {}

impl<const N: usize> PartialEq<str> for StackStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for StackStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> serde::Serialize for StackStr<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn keeps_room_for_the_terminator() {
        let mut s = StackStr::<4>::new();
        s.push_str("abc").unwrap();
        assert_eq!(s.push(b'd'), Err(Error::BufferTooSmall));
        assert_eq!(s, "abc");
        assert!(write!(s, "x").is_err());
    }

    #[test]
    fn copy_to_terminates() {
        let mut s = StackStr::<8>::new();
        write!(s, "-{}", 42).unwrap();

        let mut out = [0xff; 4];
        assert_eq!(s.copy_to(&mut out), Ok("-42"));
        assert_eq!(out, *b"-42\0");

        let mut out = [0xff; 3];
        assert_eq!(s.copy_to(&mut out), Err(Error::BufferTooSmall));
        assert_eq!(out[0], 0);

        assert_eq!(s.copy_to(&mut []), Err(Error::BufferTooSmall));
    }

    #[test]
    fn serializes_as_a_string() {
        let mut s = StackStr::<8>::new();
        s.push_str("XLII").unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""XLII""#);
    }
}
