// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! osslerr frontend module for foreign languages.
//!
//! The following APIs are defined:
//!
//!     * [`osslerr_load_serializer_strings`]: loads the `OSSL_SERIALIZER`
//!       error strings into the process-wide registry.
//!     * [`osslerr_error_string_n`]: renders a packed error code into a
//!       caller-supplied buffer.

pub(self) mod error;
pub(self) mod serializer;

pub use error::osslerr_error_string_n;
pub use serializer::osslerr_load_serializer_strings;
