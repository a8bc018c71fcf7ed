//! Variants that hand the caller a freshly allocated string.
//!
//! The text is rendered on the stack first; memory is only requested once that
//! succeeded. Strings must be released with [`vinculum_free`] under the same
//! allocator they were obtained with.

use std::{
    ffi::{c_char, c_int, c_void},
    ptr,
    sync::RwLock,
};

use vinculum_core::{Error, Fraction};

use crate::{numeral, status};

pub type AllocFn = unsafe extern "C" fn(size: usize) -> *mut c_void;
pub type FreeFn = unsafe extern "C" fn(ptr: *mut c_void);

extern "C" {
    fn malloc(size: usize) -> *mut c_void;
    fn free(ptr: *mut c_void);
}

#[derive(Copy, Clone)]
struct Allocator {
    alloc: AllocFn,
    free: FreeFn,
}

impl Allocator {
    const SYSTEM: Self = Self {
        alloc: malloc,
        free,
    };

    fn current() -> Self {
        *ALLOCATOR.read().unwrap_or_else(|err| err.into_inner())
    }
}

static ALLOCATOR: RwLock<Allocator> = RwLock::new(Allocator::SYSTEM);

/// Replaces the allocator used by the `_alloc` functions and [`vinculum_free`].
///
/// Passing null for either function restores `malloc`/`free`.
#[no_mangle]
pub extern "C" fn vinculum_set_allocator(alloc: Option<AllocFn>, free: Option<FreeFn>) {
    let allocator = match (alloc, free) {
        (Some(alloc), Some(free)) => Allocator { alloc, free },
        _ => Allocator::SYSTEM,
    };
    *ALLOCATOR.write().unwrap_or_else(|err| err.into_inner()) = allocator;
}

/// # Safety
/// `ptr` must be null or a string returned by one of the `_alloc` functions.
#[no_mangle]
pub unsafe extern "C" fn vinculum_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        (Allocator::current().free)(ptr.cast())
    }
}

unsafe fn duplicate(text: &str) -> Result<*mut c_char, Error> {
    let ptr = (Allocator::current().alloc)(text.len() + 1).cast::<u8>();
    if ptr.is_null() {
        return Err(Error::AllocationFailure);
    }
    ptr::copy_nonoverlapping(text.as_ptr(), ptr, text.len());
    *ptr.add(text.len()) = 0;
    Ok(ptr.cast())
}

/// Renders with `render`, then stores a heap copy through `out`.
unsafe fn allocate<T: AsRef<str>>(
    out: *mut *mut c_char,
    missing: Error,
    render: impl FnOnce() -> Result<T, Error>,
) -> c_int {
    if out.is_null() {
        return missing.code();
    }
    *out = ptr::null_mut();
    status(render().and_then(|text| {
        *out = duplicate(text.as_ref())?;
        Ok(())
    }))
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_int_alloc(value: i32, out: *mut *mut c_char) -> c_int {
    allocate(out, Error::NullNumeral, || vinculum_core::encode_int(value))
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_fraction_alloc(fraction: Fraction, out: *mut *mut c_char) -> c_int {
    allocate(out, Error::NullNumeral, || vinculum_core::encode_fraction(fraction))
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_encode_double_alloc(value: f64, out: *mut *mut c_char) -> c_int {
    allocate(out, Error::NullNumeral, || vinculum_core::encode_double(value))
}

/// # Safety
/// `numeral` must be null or NUL-terminated, `out` null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_fmt_overline_alloc(
    numeral: *const c_char,
    crlf: bool,
    out: *mut *mut c_char,
) -> c_int {
    allocate(out, Error::NullBuffer, || {
        vinculum_core::fmt_overline(self::numeral(numeral)?, crlf)
    })
}

/// # Safety
/// `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vinculum_fmt_fraction_alloc(fraction: Fraction, out: *mut *mut c_char) -> c_int {
    allocate(out, Error::NullBuffer, || vinculum_core::fmt_fraction(fraction))
}
