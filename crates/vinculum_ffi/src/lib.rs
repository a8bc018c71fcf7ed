//! C interface to `vinculum_core`.
//!
//! Every fallible function returns `VINCULUM_OK` (`0`) or an error code (see
//! [`vinculum_describe`]). Outputs are left in a safe state on failure: text
//! buffers hold an empty string, integers are `0`, doubles are NaN, fractions
//! are `(0, 0)` and allocated strings are null.

use std::{
    borrow::Cow,
    ffi::{c_char, c_int, CStr},
    slice,
};

use vinculum_core::{buffer::clear, Error, Fraction};

mod alloc;
pub use alloc::*;

pub const VINCULUM_OK: c_int = 0;

fn status(result: Result<(), Error>) -> c_int {
    match result {
        Ok(()) => VINCULUM_OK,
        Err(err) => err.code(),
    }
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn numeral<'a>(ptr: *const c_char) -> Result<&'a str, Error> {
    if ptr.is_null() {
        return Err(Error::NullNumeral);
    }
    CStr::from_ptr(ptr).to_str().map_err(|_| Error::InvalidSyntax)
}

/// For the lexical helpers, which never fail.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn lossy<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    (!ptr.is_null()).then(|| CStr::from_ptr(ptr).to_string_lossy())
}

/// # Safety
/// `ptr` must be null or valid for writes of `capacity` bytes.
unsafe fn buffer<'a>(ptr: *mut c_char, capacity: usize, missing: Error) -> Result<&'a mut [u8], Error> {
    if ptr.is_null() {
        return Err(missing);
    }
    Ok(slice::from_raw_parts_mut(ptr.cast::<u8>(), capacity))
}

/// Stores `result` through `out`, or `fallback` when it failed.
unsafe fn store<T>(out: *mut T, result: Result<T, Error>, fallback: T) -> c_int {
    match result {
        Ok(value) => {
            *out = value;
            VINCULUM_OK
        }
        Err(err) => {
            *out = fallback;
            err.code()
        }
    }
}

/// # Safety
/// `out` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_int(value: i32, out: *mut c_char, capacity: usize) -> c_int {
    status(
        buffer(out, capacity, Error::NullNumeral)
            .and_then(|out| vinculum_core::encode_int_into(value, out).map(drop)),
    )
}

/// # Safety
/// `out` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_fraction(
    fraction: Fraction,
    out: *mut c_char,
    capacity: usize,
) -> c_int {
    status(
        buffer(out, capacity, Error::NullNumeral)
            .and_then(|out| vinculum_core::encode_fraction_into(fraction, out).map(drop)),
    )
}

/// # Safety
/// `out` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_double(value: f64, out: *mut c_char, capacity: usize) -> c_int {
    status(
        buffer(out, capacity, Error::NullNumeral)
            .and_then(|out| vinculum_core::encode_double_into(value, out).map(drop)),
    )
}

/// # Safety
/// `numeral` must be null or NUL-terminated, `out` null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_decode_int(numeral: *const c_char, out: *mut i32) -> c_int {
    if out.is_null() {
        return Error::NullInt.code();
    }
    store(out, self::numeral(numeral).and_then(vinculum_core::decode_int), 0)
}

/// # Safety
/// `numeral` must be null or NUL-terminated, `out` null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_decode_fraction(numeral: *const c_char, out: *mut Fraction) -> c_int {
    if out.is_null() {
        return Error::NullFraction.code();
    }
    store(
        out,
        self::numeral(numeral).and_then(vinculum_core::decode_fraction),
        Fraction::ZERO,
    )
}

/// # Safety
/// `numeral` must be null or NUL-terminated, `out` null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_decode_double(numeral: *const c_char, out: *mut f64) -> c_int {
    if out.is_null() {
        return Error::NullDouble.code();
    }
    store(
        out,
        self::numeral(numeral).and_then(vinculum_core::decode_double),
        f64::NAN,
    )
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_simplify(fraction: Fraction, out: *mut Fraction) -> c_int {
    if out.is_null() {
        return Error::NullFraction.code();
    }
    store(out, fraction.simplify(), Fraction::ZERO)
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_fraction_to_double(fraction: Fraction, out: *mut f64) -> c_int {
    if out.is_null() {
        return Error::NullDouble.code();
    }
    store(out, fraction.to_f64(), f64::NAN)
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_double_to_fraction(value: f64, out: *mut Fraction) -> c_int {
    if out.is_null() {
        return Error::NullFraction.code();
    }
    store(out, Fraction::from_f64(value), Fraction::ZERO)
}

/// # Safety
/// `numeral` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn vinculum_is_zero(numeral: *const c_char) -> bool {
    lossy(numeral).map_or(false, |s| vinculum_core::is_zero(&s))
}

/// # Safety
/// `numeral` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn vinculum_sign(numeral: *const c_char) -> c_int {
    lossy(numeral).map_or(0, |s| vinculum_core::sign(&s))
}

/// # Safety
/// `numeral` must be null or NUL-terminated, `out` null or valid for writes of
/// `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_fmt_overline(
    numeral: *const c_char,
    out: *mut c_char,
    capacity: usize,
    crlf: bool,
) -> c_int {
    let out = match buffer(out, capacity, Error::NullBuffer) {
        Ok(out) => out,
        Err(err) => return err.code(),
    };
    match self::numeral(numeral) {
        Ok(numeral) => status(vinculum_core::fmt_overline_into(numeral, crlf, out).map(drop)),
        Err(err) => {
            clear(out);
            err.code()
        }
    }
}

/// # Safety
/// `out` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_fmt_fraction(fraction: Fraction, out: *mut c_char, capacity: usize) -> c_int {
    status(
        buffer(out, capacity, Error::NullBuffer)
            .and_then(|out| vinculum_core::fmt_fraction_into(fraction, out).map(drop)),
    )
}

/// Copies the description of an error code, `0` included, into `out`.
///
/// A code that names no error is `InvalidSyntax`.
///
/// # Safety
/// `out` must be null or valid for writes of `capacity` bytes.
#[no_mangle]
pub unsafe extern "C" fn vinculum_describe(code: c_int, out: *mut c_char, capacity: usize) -> c_int {
    let out = match buffer(out, capacity, Error::NullBuffer) {
        Ok(out) => out,
        Err(err) => return err.code(),
    };
    let text = match code {
        VINCULUM_OK => "no error",
        code => match Error::from_code(code) {
            Some(err) => err.describe(),
            None => {
                clear(out);
                return Error::InvalidSyntax.code();
            }
        },
    };
    if capacity <= text.len() {
        clear(out);
        return Error::BufferTooSmall.code();
    }
    out[..text.len()].copy_from_slice(text.as_bytes());
    out[text.len()] = 0;
    VINCULUM_OK
}
