// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Packed error codes.
//!
//! A packed error code carries a library identifier and a reason code in a
//! single `u32`:
//!
//! ```text
//!   31   30        23 22                     0
//!  +----+------------+-----------------------+
//!  | S  |  library   |        reason         |
//!  +----+------------+-----------------------+
//! ```
//!
//! When the `S` bit is set, the code is a system error and the remaining
//! 31 bits hold an `errno` value.

use std::ffi::c_int;

use crate::error::CodeError;
use crate::Library;

/// Offset of the library identifier.
pub const LIB_OFFSET: u32 = 23;

/// Mask of the library identifier, after shifting.
pub const LIB_MASK: u32 = 0xFF;

/// Mask of the reason code.
pub const REASON_MASK: u32 = 0x7F_FFFF;

/// Flag set on system errors.
pub const SYSTEM_FLAG: u32 = (i32::MAX as u32) + 1;

/// Mask of the `errno` value of a system error.
pub const SYSTEM_MASK: u32 = i32::MAX as u32;

/// A packed error code.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct PackedError(u32);

impl PackedError {
    /// Packs a library identifier and a reason code.
    pub fn pack(lib: c_int, reason: c_int) -> crate::Result<Self> {
        if lib < 0 || lib as u32 > LIB_MASK {
            return Err(CodeError::LibraryOutOfRange.into());
        }
        if reason < 0 || reason as u32 > REASON_MASK {
            return Err(CodeError::ReasonOutOfRange.into());
        }
        Ok(Self::pack_unchecked(lib as u32, reason as u32))
    }

    /// Packs a known library and a reason code.
    pub fn from_library(lib: Library, reason: c_int) -> crate::Result<Self> {
        Self::pack(lib.id(), reason)
    }

    /// Packs the code of a system error.
    pub fn system(errno: c_int) -> Self {
        Self(SYSTEM_FLAG | (errno as u32 & SYSTEM_MASK))
    }

    pub(crate) const fn pack_unchecked(lib: u32, reason: u32) -> Self {
        Self(((lib & LIB_MASK) << LIB_OFFSET) | (reason & REASON_MASK))
    }

    /// Returns true if the code is a system error.
    pub fn is_system_error(&self) -> bool {
        self.0 & SYSTEM_FLAG != 0
    }

    /// Returns the library identifier.
    ///
    /// System errors belong to [`Library::Sys`].
    pub fn library(&self) -> c_int {
        if self.is_system_error() {
            return Library::Sys.id();
        }
        ((self.0 >> LIB_OFFSET) & LIB_MASK) as c_int
    }

    /// Returns the reason code, or the `errno` value of a system error.
    pub fn reason(&self) -> c_int {
        if self.is_system_error() {
            return (self.0 & SYSTEM_MASK) as c_int;
        }
        (self.0 & REASON_MASK) as c_int
    }

    /// Returns the code under which the name of the library is registered.
    pub fn library_key(&self) -> Self {
        Self::pack_unchecked(self.library() as u32, 0)
    }

    /// Returns the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Instantiates a [`PackedError`] from its raw value.
impl std::convert::From<u32> for PackedError {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Implements `std::convert::Into<u32>` for [`PackedError`].
impl std::convert::From<PackedError> for u32 {
    fn from(e: PackedError) -> Self {
        e.0
    }
}

/// Implements [`std::fmt::Display`] for [`PackedError`].
impl std::fmt::Display for PackedError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}
