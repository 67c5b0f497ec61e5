// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Defines [`ErrorCode`] enum and [`AllowedErrorCodeEnum`] trait.
//!
//! This module implements the structured errors returned by osslerr
//! itself, as opposed to the reason codes it registers on behalf of
//! library modules (see [`crate::reason`]).
//!
//! Errors are classified by type, also called kind. The [`ErrorKind`] enum
//! lists all error kinds. Each kind owns an enum listing its values.

/// An enum allowed in [`ErrorCode`].
pub trait AllowedErrorCodeEnum: Copy + Clone + Sized {}

/// Generates the definition of the [`ErrorKind`] enum, one enum per error
/// kind, the [`ErrorCode`] enum and implementations of the following traits:
///
///   * `std::convert::From<ErrorEnum>` for each error enum.
///   * `std::fmt::Display` for [`ErrorCode`].
///   * `std::convert::Into<ErrorKind>` for [`ErrorCode`].
///   * `std::convert::Into<(i32, i32)>` for [`ErrorCode`].
///
/// This macro accepts a variadic list of dictionaries ({}) as input.
/// Dictionaries MUST respect the following format:
///
/// ```text
///   {
///     kind: KIND = KIND_VALUE,
///     sym: SYM,
///     desc: ESTR,
///     values: [
///        VALUE_SYM = VALUE => VALUE_STR,
///        …
///     ],
///   },
///   …
/// ```
///
/// The key (`kind`, `sym`, etc.) must be in the right order, defined above.
///
/// `KIND` is the variant of [`ErrorKind`] and `KIND_VALUE` its integer value.
/// `SYM` is the name of the generated error enum.
/// `ESTR` is the string description of the error kind.
/// `values` is the list of the enum values.
/// `VALUE_SYM` is the enum value symbol and `VALUE` its integer value.
/// `VALUE_STR` is the string description of the enum value.
macro_rules! GenErrorCode {
    ( $( {kind: $kind:ident = $kval:expr, sym: $sym:ident, desc: $desc:expr, values: [$( $vsym:ident = $vval:expr => $vstr:expr,)*], },) *) => {
        /// Kind of an [`ErrorCode`].
        #[derive(Clone,Copy,Eq,PartialEq,Debug)]
        #[repr(i32)]
        pub enum ErrorKind {
            $(
                #[doc=$desc]
                $kind = $kval,
            )*
        }

        $(
            #[doc=$desc]
            #[derive(Clone,Copy,Eq,PartialEq,Debug)]
            #[repr(i32)]
            pub enum $sym {
                $(
                    #[doc=$vstr]
                    $vsym = $vval,
                )*
            }

            impl $sym {
                /// Returns the integer value of the error.
                pub fn value(self) -> i32 {
                    self as i32
                }

                /// Returns the string description of the error.
                pub fn description(self) -> &'static str {
                    match self {
                        $(
                            Self::$vsym => $vstr,
                        )*
                    }
                }
            }

            /// Implements `[std::convert::From<ErrorEnum>]` for [`ErrorCode`].
            impl std::convert::From<$sym> for ErrorCode {
                fn from(v: $sym) -> Self {
                    Self::$sym(v)
                }
            }

            /// Adds `ErrorEnum` to the list of [`AllowedErrorCodeEnum`] trait.
            impl AllowedErrorCodeEnum for $sym {}

            /// Implements comparison operator between [`ErrorCode`] and the current error enum.
            impl PartialEq<ErrorCode> for $sym {
                fn eq(&self, other: &ErrorCode) -> bool {
                    match other {
                        ErrorCode::$sym(ec) => ec == self,
                        #[allow(unreachable_patterns)]
                        _ => false,
                    }
                }
            }
        )*

        /// An error code.
        /// An error code holds one of the error enums listed in [`ErrorKind`].
        #[derive(Clone,Copy,Eq,PartialEq,Debug)]
        pub enum ErrorCode {
            $(
                #[doc=$desc]
                $sym($sym),
            )*
        }

        /// Implements `std::convert::Into<ErrorKind>` for [`ErrorCode`].
        impl std::convert::From<ErrorCode> for ErrorKind {
            fn from(ec: ErrorCode) -> Self {
                match ec {
                    $(
                        ErrorCode::$sym(_) => ErrorKind::$kind,
                    )*
                }
            }
        }

        /// Implements [`std::fmt::Display`] for [`ErrorCode`].
        impl std::fmt::Display for ErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match *self {
                    $(
                        ErrorCode::$sym(e) => write!(f, "{}: {}", $desc, e.description()),
                    )*
                }
            }
        }

        /// Implements [`std::convert::Into<(i32, i32)>`] for [`ErrorCode`].
        /// The first `i32` is the error kind, the second one is the error code.
        impl std::convert::From<ErrorCode> for (i32, i32) {
            fn from(ec: ErrorCode) -> Self {
                match ec {
                    $(
                        ErrorCode::$sym(e) => (ErrorKind::$kind as i32, e.value()),
                    )*
                }
            }
        }

    };
}

GenErrorCode!(
    {
        kind: Registry = 1,
        sym: RegistryError,
        desc: "registry error",
        values: [
            Memory = 1 => "memory allocation failed",
            LibrariesExhausted = 2 => "no dynamic library identifier left",
        ],
    },
    {
        kind: Code = 2,
        sym: CodeError,
        desc: "error code",
        values: [
            LibraryOutOfRange = 1 => "library identifier out of range",
            ReasonOutOfRange = 2 => "reason code out of range",
            UnknownLibrary = 3 => "unknown library",
            UnknownReason = 4 => "unknown reason code",
        ],
    },
    {
        kind: Module = 3,
        sym: ModuleError,
        desc: "module error",
        values: [
            LoadStrings = 1 => "failed to load the module error strings",
        ],
    },
);

impl<T: AllowedErrorCodeEnum> PartialEq<T> for ErrorCode
where
    ErrorCode: From<T>,
{
    fn eq(&self, other: &T) -> bool {
        *self == ErrorCode::from(*other)
    }
}

impl PartialEq<&ErrorCode> for ErrorCode {
    fn eq(&self, other: &&Self) -> bool {
        *self == **other
    }
}

impl PartialEq<ErrorCode> for &ErrorCode {
    fn eq(&self, other: &ErrorCode) -> bool {
        **self == *other
    }
}

impl ErrorCode {
    /// Verifies that two [`ErrorCode`] hold the same error value.
    pub fn is(&self, other: &Self) -> bool {
        *self == *other
    }
}
