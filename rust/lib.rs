// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Root module.
//!
//! osslerr holds the reason codes of OpenSSL-style library modules and the
//! registry their human-readable descriptions are loaded into.
//!
//! ```
//! use osslerr::serializer::{self, SerializerReason};
//! use osslerr::Registry;
//!
//! serializer::load_strings().unwrap();
//! let code = SerializerReason::IncorrectPropertyQuery.packed();
//! assert_eq!(
//!     Registry::global().reason_error_string(code),
//!     Some("incorrect property query")
//! );
//! ```

#[macro_use]
pub mod error;
pub use error::Error;

/// A `Result` whose error is an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub mod library;
pub use library::Library;

pub mod packed;
pub use packed::PackedError;

pub mod registry;
pub use registry::{Registry, StringEntry};

#[macro_use]
pub mod reason;
pub use reason::{Reason, ReasonModule};

pub mod serializer;

#[cfg(feature = "ffi")]
pub mod ffi;

/// Initializes logging for tests.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
