use std::{
    ffi::{c_char, c_void, CStr, CString},
    ptr,
    sync::atomic::{AtomicUsize, Ordering},
};

use vinculum_core::{limits::*, Error, Fraction};
use vinculum_ffi::*;

fn text(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap();
    std::str::from_utf8(&buf[..end]).unwrap()
}

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

#[test]
fn encodes_into_buffers() {
    let mut buf = [0xffu8; EXTENDED_NUMERAL_CAPACITY];
    let out = buf.as_mut_ptr().cast::<c_char>();
    unsafe {
        assert_eq!(vinculum_encode_int(42, out, buf.len()), VINCULUM_OK);
        assert_eq!(text(&buf), "XLII");

        let fraction = Fraction::new(3_900_001, 3);
        assert_eq!(vinculum_encode_fraction(fraction, out, buf.len()), VINCULUM_OK);
        assert_eq!(text(&buf), "_MMMCM_I...");

        assert_eq!(vinculum_encode_double(-1.5, out, buf.len()), VINCULUM_OK);
        assert_eq!(text(&buf), "-IS");

        assert_eq!(
            vinculum_encode_double(f64::NAN, out, buf.len()),
            Error::NotFiniteDouble.code()
        );
        assert_eq!(text(&buf), "");

        assert_eq!(
            vinculum_encode_int(42, ptr::null_mut(), 0),
            Error::NullNumeral.code()
        );
        assert_eq!(vinculum_encode_int(3888, out, 4), Error::BufferTooSmall.code());
        assert_eq!(buf[0], 0);
    }
}

#[test]
fn decodes_through_out_pointers() {
    let numeral = c("-XLII");
    let broken = c("IC");
    unsafe {
        let mut int = 7;
        assert_eq!(vinculum_decode_int(numeral.as_ptr(), &mut int), VINCULUM_OK);
        assert_eq!(int, -42);
        assert_eq!(
            vinculum_decode_int(broken.as_ptr(), &mut int),
            Error::InvalidSyntax.code()
        );
        assert_eq!(int, 0);
        assert_eq!(
            vinculum_decode_int(numeral.as_ptr(), ptr::null_mut()),
            Error::NullInt.code()
        );
        assert_eq!(
            vinculum_decode_int(ptr::null(), &mut int),
            Error::NullNumeral.code()
        );

        let mut fraction = Fraction::new(1, 1);
        let twelfths = c("vs.");
        assert_eq!(
            vinculum_decode_fraction(twelfths.as_ptr(), &mut fraction),
            VINCULUM_OK
        );
        assert_eq!(fraction, Fraction::new(5, 7));
        assert_eq!(
            vinculum_decode_fraction(broken.as_ptr(), &mut fraction),
            Error::InvalidSyntax.code()
        );
        assert_eq!(fraction, Fraction::ZERO);
        assert_eq!(
            vinculum_decode_fraction(twelfths.as_ptr(), ptr::null_mut()),
            Error::NullFraction.code()
        );

        let mut double = 0.0;
        assert_eq!(vinculum_decode_double(twelfths.as_ptr(), &mut double), VINCULUM_OK);
        assert_eq!(double, 5.0 + 7.0 / 12.0);
        assert_eq!(
            vinculum_decode_double(broken.as_ptr(), &mut double),
            Error::InvalidSyntax.code()
        );
        assert!(double.is_nan());
        assert_eq!(
            vinculum_decode_double(twelfths.as_ptr(), ptr::null_mut()),
            Error::NullDouble.code()
        );

        let invalid_utf8 = [0xffu8, 0];
        assert_eq!(
            vinculum_decode_int(invalid_utf8.as_ptr().cast(), &mut int),
            Error::InvalidSyntax.code()
        );
    }
}

#[test]
fn fraction_algebra() {
    unsafe {
        let mut fraction = Fraction::ZERO;
        assert_eq!(vinculum_simplify(Fraction::new(10, -59), &mut fraction), VINCULUM_OK);
        assert_eq!(fraction, Fraction::new(5, 1));
        assert_eq!(
            vinculum_simplify(Fraction::new(EXTENDED_INT_MAX, 12), &mut fraction),
            Error::ValueOutOfRange.code()
        );
        assert_eq!(fraction, Fraction::ZERO);

        let mut double = 0.0;
        assert_eq!(
            vinculum_fraction_to_double(Fraction::new(-19, -11), &mut double),
            VINCULUM_OK
        );
        assert_eq!(double, -19.0 - 11.0 / 12.0);

        assert_eq!(vinculum_double_to_fraction(3_999_999.9999, &mut fraction), VINCULUM_OK);
        assert_eq!(fraction, Fraction::new(3_999_999, 11));
        assert_eq!(
            vinculum_double_to_fraction(f64::INFINITY, &mut fraction),
            Error::NotFiniteDouble.code()
        );
        assert_eq!(
            vinculum_double_to_fraction(1.0, ptr::null_mut()),
            Error::NullFraction.code()
        );
        assert_eq!(
            vinculum_fraction_to_double(Fraction::ZERO, ptr::null_mut()),
            Error::NullDouble.code()
        );
    }
}

#[test]
fn lexical_helpers() {
    unsafe {
        assert!(vinculum_is_zero(c("-nulla").as_ptr()));
        assert!(!vinculum_is_zero(c("I").as_ptr()));
        assert!(!vinculum_is_zero(ptr::null()));

        assert_eq!(vinculum_sign(c("-_IV_").as_ptr()), -1);
        assert_eq!(vinculum_sign(c("IV").as_ptr()), 1);
        assert_eq!(vinculum_sign(c("NULLA").as_ptr()), 0);
        assert_eq!(vinculum_sign(ptr::null()), 0);
    }
}

#[test]
fn formats_into_buffers() {
    let mut buf = [0xffu8; OVERLINE_CAPACITY];
    let out = buf.as_mut_ptr().cast::<c_char>();
    unsafe {
        let numeral = c("-_CXX_VIII");
        assert_eq!(
            vinculum_fmt_overline(numeral.as_ptr(), out, buf.len(), true),
            VINCULUM_OK
        );
        assert_eq!(text(&buf), " ___\r\n-CXXVIII");

        assert_eq!(
            vinculum_fmt_overline(c("_X").as_ptr(), out, buf.len(), false),
            Error::NonTerminatedVinculum.code()
        );
        assert_eq!(text(&buf), "");
        assert_eq!(
            vinculum_fmt_overline(c("é_X_").as_ptr(), out, buf.len(), false),
            Error::InvalidSyntax.code()
        );
        assert_eq!(text(&buf), "");
        assert_eq!(
            vinculum_fmt_overline(ptr::null(), out, buf.len(), false),
            Error::NullNumeral.code()
        );
        assert_eq!(
            vinculum_fmt_overline(numeral.as_ptr(), ptr::null_mut(), 0, false),
            Error::NullBuffer.code()
        );

        assert_eq!(
            vinculum_fmt_fraction(Fraction::new(-19, -11), out, FRACTION_CAPACITY),
            VINCULUM_OK
        );
        assert_eq!(text(&buf), "-19, -11/12");
        assert_eq!(
            vinculum_fmt_fraction(Fraction::new(1, 2), ptr::null_mut(), 0),
            Error::NullBuffer.code()
        );

        assert_eq!(
            vinculum_describe(Error::MAfterVinculum.code(), out, buf.len()),
            VINCULUM_OK
        );
        assert_eq!(text(&buf), Error::MAfterVinculum.describe());
        assert_eq!(vinculum_describe(VINCULUM_OK, out, buf.len()), VINCULUM_OK);
        assert_eq!(text(&buf), "no error");
        assert_eq!(
            vinculum_describe(999, out, buf.len()),
            Error::InvalidSyntax.code()
        );
        assert_eq!(text(&buf), "");
        assert_eq!(
            vinculum_describe(-1, out, buf.len()),
            Error::InvalidSyntax.code()
        );
        assert_eq!(vinculum_describe(VINCULUM_OK, out, 3), Error::BufferTooSmall.code());
    }
}

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "C" fn failing_alloc(_: usize) -> *mut c_void {
    ptr::null_mut()
}

unsafe extern "C" fn never_free(_: *mut c_void) {
    unreachable!("nothing was allocated")
}

unsafe extern "C" fn counting_alloc(size: usize) -> *mut c_void {
    ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
    let block = vec![0u8; size].into_boxed_slice();
    Box::into_raw(block).cast()
}

unsafe extern "C" fn leaking_free(_: *mut c_void) {}

// The allocator is process-wide, so every allocating case lives in this one test.
#[test]
fn allocating_variants() {
    unsafe {
        let mut out = ptr::null_mut();
        assert_eq!(vinculum_encode_int_alloc(4000, &mut out), VINCULUM_OK);
        assert_eq!(CStr::from_ptr(out).to_str(), Ok("_IV_"));
        vinculum_free(out);

        assert_eq!(
            vinculum_encode_fraction_alloc(Fraction::new(0, -11), &mut out),
            VINCULUM_OK
        );
        assert_eq!(CStr::from_ptr(out).to_str(), Ok("-S....."));
        vinculum_free(out);

        assert_eq!(vinculum_encode_double_alloc(f64::NAN, &mut out), Error::NotFiniteDouble.code());
        assert!(out.is_null());

        assert_eq!(
            vinculum_fmt_overline_alloc(c("_IV_").as_ptr(), false, &mut out),
            VINCULUM_OK
        );
        assert_eq!(CStr::from_ptr(out).to_str(), Ok("__\nIV"));
        vinculum_free(out);

        assert_eq!(
            vinculum_fmt_overline_alloc(c("é_X_").as_ptr(), false, &mut out),
            Error::InvalidSyntax.code()
        );
        assert!(out.is_null());

        assert_eq!(
            vinculum_fmt_overline_alloc(ptr::null(), false, &mut out),
            Error::NullNumeral.code()
        );
        assert_eq!(
            vinculum_fmt_fraction_alloc(Fraction::new(0, 3), ptr::null_mut()),
            Error::NullBuffer.code()
        );
        assert_eq!(
            vinculum_encode_int_alloc(1, ptr::null_mut()),
            Error::NullNumeral.code()
        );

        vinculum_set_allocator(Some(failing_alloc), Some(never_free));
        assert_eq!(
            vinculum_fmt_fraction_alloc(Fraction::new(0, 3), &mut out),
            Error::AllocationFailure.code()
        );
        assert!(out.is_null());
        vinculum_free(out);

        vinculum_set_allocator(Some(counting_alloc), Some(leaking_free));
        assert_eq!(vinculum_encode_int_alloc(42, &mut out), VINCULUM_OK);
        assert_eq!(CStr::from_ptr(out).to_str(), Ok("XLII"));
        assert_eq!(ALLOCATIONS.load(Ordering::SeqCst), 1);
        assert_eq!(vinculum_encode_int_alloc(i32::MAX, &mut out), Error::ValueOutOfRange.code());
        assert_eq!(ALLOCATIONS.load(Ordering::SeqCst), 1);

        vinculum_set_allocator(None, None);
        assert_eq!(vinculum_fmt_fraction_alloc(Fraction::new(0, 3), &mut out), VINCULUM_OK);
        assert_eq!(CStr::from_ptr(out).to_str(), Ok("1/4"));
        vinculum_free(out);
    }
}
