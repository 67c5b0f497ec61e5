// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Defines [`Error`] struct and [`ErrorCode`] enum.
//!
//! When an operation of osslerr fails, an [`Error`] is returned, usually
//! through [`crate::Result`]. An [`Error`] is a chain of [`ErrorCode`],
//! where the first element of the chain is the most precise error, and the
//! last element is the most general one.
//!
//! For instance, a failure to reserve memory while loading the strings of
//! the `OSSL_SERIALIZER` module results in the following error:
//!
//! ```text
//! RegistryError::Memory          // The most precise error.
//!   -> ModuleError::LoadStrings  // The most general error.
//! ```
//!
//! Error codes that are being used by osslerr are defined in the [`code`]
//! module.

pub mod code;
pub use code::{CodeError, ErrorCode, ErrorKind, ModuleError, RegistryError};

/// An error.
/// An [`Error`] holds a chain of [`ErrorCode`].
pub struct Error(std::vec::Vec<ErrorCode>);

/// Instantiates an [`Error`] from an enum value.
impl<ErrorEnum: code::AllowedErrorCodeEnum> std::convert::From<ErrorEnum> for Error
where
    ErrorCode: std::convert::From<ErrorEnum>,
{
    fn from(e: ErrorEnum) -> Self {
        Self(vec![ErrorCode::from(e)])
    }
}

/// Instantiates an [`Error`] from an [`ErrorCode`].
impl std::convert::From<ErrorCode> for Error {
    fn from(e: ErrorCode) -> Self {
        Self(vec![e])
    }
}

/// Appends an [`Error`] into the chain, using the `>>` operator.
///
/// The `>>` operator is used to easily build a chain of error:
/// `child_error -> parent_error`, where `child_error` is more precise than
/// `parent_error`.
///
/// # Example
///
/// ```
/// use osslerr::error::{Error, ModuleError, RegistryError};
///
/// // Creates a new Error.
/// let e = Error::from(RegistryError::Memory);
/// // Appends a more general error.
/// let e = e >> ModuleError::LoadStrings;
/// assert_eq!(e.len(), 2);
/// ```
impl<ErrorEnum: code::AllowedErrorCodeEnum> std::ops::Shr<ErrorEnum> for Error
where
    ErrorCode: std::convert::From<ErrorEnum>,
{
    type Output = Self;

    fn shr(self, e: ErrorEnum) -> Self::Output {
        let mut n = Self(self.0);
        n.0.push(ErrorCode::from(e));
        n
    }
}

/// Appends an [`Error`] into the chain, using the `>>` operator.
impl std::ops::Shr<ErrorCode> for Error {
    type Output = Self;

    fn shr(self, e: ErrorCode) -> Self::Output {
        let mut n = Self(self.0);
        n.0.push(e);
        n
    }
}

/// Implements [`std::fmt::Display`] for [`Error`].
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Implements [`std::fmt::Debug`] for [`Error`].
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            for _ in 0..i {
                write!(f, "\t")?;
            }
            writeln!(f, "~>#{i}: {e}")?;
        }
        Ok(())
    }
}

/// Implements [`std::error::Error`] for [`Error`].
impl std::error::Error for Error {}

/// Wrap error enums to produce an [`Error`].
///
/// # Example
///
/// ```text
/// let e = errors!{RegistryError::Memory => ModuleError::LoadStrings};
/// ```
macro_rules! errors{
    { $( $e:expr ) => * } => {
        crate::Error::new()
        $(
            >> $e
        )*
    };
}

/// Unwrap a result, or return a new Error from an error enum.
///
/// This macro is used to unwrap and return a value, or to return a new
/// error chained with the one from the [`crate::Result`] enum.
///
/// # Example
///
/// ```text
///     // `load_strings` may return an error of type `RegistryError`.
///     // If so, returns the chain `RegistryError -> ModuleError::LoadStrings`.
///     unwrap_or!(registry.load_strings(table), ModuleError::LoadStrings);
/// ```
macro_rules! unwrap_or {
    ( $res:expr, $err:expr ) => {
        match $res {
            Ok(o) => o,
            Err(e) => Err(e >> $err)?,
        }
    };
}

/// Implements [`Error`].
impl Error {
    /// Instantiates an empty [`Error`].
    pub(crate) fn new() -> Error {
        Error(std::vec::Vec::<ErrorCode>::new())
    }

    /// Returns an iterator over the [`ErrorCode`] from the chain.
    pub fn iter(&self) -> std::slice::Iter<ErrorCode> {
        self.0.iter()
    }

    /// Returns the length of the chain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the emptiness of the chain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the most precise error of the chain.
    pub fn root(&self) -> Option<&ErrorCode> {
        self.0.first()
    }

    /// Verifies that two [`Error`] share the same error codes.
    pub fn is(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        for (i, ec) in self.0.iter().enumerate() {
            if !ec.is(&other.0[i]) {
                return false;
            }
        }
        true
    }
}

/// Implements operator>> between two [`ErrorCode`] to produce
/// an [`Error`].
impl std::ops::Shr<ErrorCode> for ErrorCode {
    type Output = Error;

    fn shr(self, e: ErrorCode) -> Self::Output {
        Error(vec![self, e])
    }
}
