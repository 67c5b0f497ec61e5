// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Module reason codes.
//!
//! Each library module declares its reason codes once, with
//! `gen_reason_module!`. The declaration produces:
//!
//!   * one `*_R_*` integer constant per reason.
//!   * a reason enum, convertible from and to its integer value.
//!   * a unit struct implementing [`ReasonModule`], holding the string table
//!     of the module.
//!
//! [`Reason`] gathers the reason enums of all modules into a single type.

use std::ffi::c_int;

use crate::error::CodeError;
use crate::registry::{Registry, StringEntry};
use crate::serializer::SerializerReason;
use crate::{Library, PackedError};

/// A library module owning a table of reason codes.
pub trait ReasonModule {
    /// The library namespace of the module.
    const LIBRARY: Library;

    /// The reason enum of the module.
    type Reason: Copy + std::convert::Into<Reason> + 'static;

    /// Returns all reasons of the module.
    fn reasons() -> &'static [Self::Reason];

    /// Returns the string table of the module.
    fn strings() -> &'static [StringEntry];

    /// Loads the strings of the module into a registry.
    ///
    /// Loading an already loaded table is a no-op.
    fn load_strings(registry: &Registry) -> crate::Result<()> {
        log::debug!(
            "loading {} error strings of {}",
            Self::reasons().len(),
            Self::LIBRARY
        );
        registry.load_strings_once(Self::strings())
    }

    /// Removes the strings of the module from a registry.
    fn unload_strings(registry: &Registry) -> crate::Result<()> {
        log::debug!("unloading error strings of {}", Self::LIBRARY);
        registry.unload_strings(Self::strings())
    }
}

/// Declares the reason codes of a library module.
///
/// ```text
///   gen_reason_module!(
///     MODULE, REASON, LIBRARY, DOC,
///     [
///       (VALUE_SYM, CONST_SYM, VALUE => VALUE_STR),
///       …
///     ]
///   );
/// ```
///
/// `MODULE` is the unit struct implementing [`ReasonModule`].
/// `REASON` is the reason enum and `LIBRARY` a variant of [`Library`].
/// `VALUE` must be unique within the module.
macro_rules! gen_reason_module {
    ( $module:ident, $reason:ident, $library:ident, $doc:expr, [ $( ($vsym:ident, $csym:ident, $value:literal => $vstr:expr) ),* $(,)? ] ) => {
        $(
            #[doc=$vstr]
            pub const $csym: ::std::ffi::c_int = $value;
        )*

        #[doc=$doc]
        #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
        #[repr(i32)]
        pub enum $reason {
            $(
                #[doc=$vstr]
                $vsym = $value,
            )*
        }

        impl $reason {
            /// All reasons of the module.
            pub const ALL: &'static [$reason] = &[
                $(
                    $reason::$vsym,
                )*
            ];

            /// Returns the reason code.
            pub fn value(self) -> ::std::ffi::c_int {
                self as ::std::ffi::c_int
            }

            /// Returns the description of the reason.
            pub fn description(self) -> &'static str {
                match self {
                    $(
                        Self::$vsym => $vstr,
                    )*
                }
            }

            /// Returns the packed error code of the reason.
            pub fn packed(self) -> $crate::PackedError {
                $crate::PackedError::pack_unchecked(
                    $crate::Library::$library as u32,
                    self as u32,
                )
            }
        }

        impl ::std::convert::TryFrom<::std::ffi::c_int> for $reason {
            type Error = $crate::Error;

            fn try_from(v: ::std::ffi::c_int) -> ::std::result::Result<Self, Self::Error> {
                match v {
                    $(
                        $value => Ok(Self::$vsym),
                    )*
                    _ => Err($crate::error::CodeError::UnknownReason.into()),
                }
            }
        }

        impl ::std::fmt::Display for $reason {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.description())
            }
        }

        #[doc=$doc]
        #[derive(Clone, Copy, Debug)]
        pub struct $module;

        impl $crate::reason::ReasonModule for $module {
            const LIBRARY: $crate::Library = $crate::Library::$library;

            type Reason = $reason;

            fn reasons() -> &'static [$reason] {
                $reason::ALL
            }

            fn strings() -> &'static [$crate::registry::StringEntry] {
                static STRINGS: &[$crate::registry::StringEntry] = &[
                    $(
                        $crate::registry::StringEntry::new(
                            $crate::PackedError::pack_unchecked(
                                $crate::Library::$library as u32,
                                $value,
                            ),
                            $vstr,
                        ),
                    )*
                ];
                STRINGS
            }
        }
    };
}

/// A reason code of any known module.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Reason {
    /// A reason of the `OSSL_SERIALIZER` library.
    Serializer(SerializerReason),
}

impl std::convert::From<SerializerReason> for Reason {
    fn from(r: SerializerReason) -> Self {
        Self::Serializer(r)
    }
}

impl Reason {
    /// Returns the library the reason belongs to.
    pub fn library(&self) -> Library {
        match self {
            Self::Serializer(_) => Library::OsslSerializer,
        }
    }

    /// Returns the reason code within its library.
    pub fn value(&self) -> c_int {
        match self {
            Self::Serializer(r) => r.value(),
        }
    }

    /// Returns the packed error code.
    pub fn packed(&self) -> PackedError {
        match self {
            Self::Serializer(r) => r.packed(),
        }
    }

    /// Returns the built-in description of the reason.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Serializer(r) => r.description(),
        }
    }

    /// Returns the description registered for the reason, if any.
    pub fn describe(&self, registry: &Registry) -> Option<&'static str> {
        registry.reason_error_string(self.packed())
    }
}

/// Decodes a packed error code into a known reason.
impl std::convert::TryFrom<PackedError> for Reason {
    type Error = crate::Error;

    fn try_from(code: PackedError) -> Result<Self, Self::Error> {
        if code.is_system_error() {
            return Err(errors! {CodeError::UnknownLibrary});
        }
        match Library::try_from(code.library())? {
            Library::OsslSerializer => Ok(SerializerReason::try_from(code.reason())?.into()),
            _ => Err(CodeError::UnknownLibrary.into()),
        }
    }
}

/// Implements [`std::fmt::Display`] for [`Reason`].
impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.library(), self.description())
    }
}

/// Loads the strings of all known modules into a registry.
pub fn load_all_strings(registry: &Registry) -> crate::Result<()> {
    <crate::serializer::Serializer as ReasonModule>::load_strings(registry)
}

#[cfg(test)]
mod test {
    use super::{load_all_strings, Reason};
    use crate::error::CodeError;
    use crate::serializer::SerializerReason;
    use crate::{Library, PackedError, Registry};

    /// Tests the conversion from a module reason.
    #[test]
    fn test_from_module_reason() {
        let r = Reason::from(SerializerReason::IncorrectPropertyQuery);
        assert_eq!(r.library(), Library::OsslSerializer);
        assert_eq!(r.value(), 100);
        assert_eq!(
            r.to_string(),
            "SERIALIZER routines: incorrect property query"
        );
    }

    /// Tests decoding packed codes.
    #[test]
    fn test_try_from_packed() {
        let code = PackedError::from_library(Library::OsslSerializer, 100).unwrap();
        assert_eq!(
            Reason::try_from(code).unwrap(),
            Reason::Serializer(SerializerReason::IncorrectPropertyQuery)
        );

        let code = PackedError::from_library(Library::OsslSerializer, 101).unwrap();
        let e = Reason::try_from(code).unwrap_err();
        assert_eq!(*e.root().unwrap(), CodeError::UnknownReason);

        let code = PackedError::from_library(Library::Prop, 100).unwrap();
        let e = Reason::try_from(code).unwrap_err();
        assert_eq!(*e.root().unwrap(), CodeError::UnknownLibrary);

        let e = Reason::try_from(PackedError::system(100)).unwrap_err();
        assert_eq!(*e.root().unwrap(), CodeError::UnknownLibrary);
    }

    /// Tests describing a reason through a registry.
    #[test]
    fn test_describe() {
        let registry = Registry::new();
        let r = Reason::from(SerializerReason::IncorrectPropertyQuery);
        assert_eq!(r.describe(&registry), None);
        load_all_strings(&registry).unwrap();
        assert_eq!(r.describe(&registry), Some("incorrect property query"));
    }
}
