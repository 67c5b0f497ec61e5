// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! `OSSL_SERIALIZER` entry points for FFI.

use std::ffi::c_int;

/// Loads the `OSSL_SERIALIZER` error strings into the process-wide registry.
///
/// Returns 1 on success, 0 on failure.
#[no_mangle]
pub extern "C" fn osslerr_load_serializer_strings() -> c_int {
    match crate::serializer::load_strings() {
        Ok(()) => 1,
        Err(e) => {
            log::error!("cannot load the OSSL_SERIALIZER error strings: {e}");
            0
        }
    }
}
