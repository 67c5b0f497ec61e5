// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Error rendering for FFI.

use std::ffi::{c_char, c_ulong};

use crate::{PackedError, Registry};

/// Renders a packed error code into `buf`, using the process-wide registry.
///
/// At most `len - 1` bytes are written, followed by a NUL byte. Nothing is
/// written if `buf` is NULL or `len` is 0.
///
/// Only the low 32 bits of `code` are significant: packed error codes are
/// 32-bit values, even where `unsigned long` is 64 bits wide.
///
/// # Safety
///
/// `buf` must point to at least `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn osslerr_error_string_n(code: c_ulong, buf: *mut c_char, len: usize) {
    if buf.is_null() || len == 0 {
        return;
    }
    let buf = unsafe { std::slice::from_raw_parts_mut(buf.cast::<u8>(), len) };
    Registry::global().error_string_n(PackedError::from(code as u32), buf);
}
