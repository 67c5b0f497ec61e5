// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Reason codes of the `OSSL_SERIALIZER` library.
//!
//! The library is deprecated and only one reason is left:
//! [`OSSL_SERIALIZER_R_INCORRECT_PROPERTY_QUERY`], raised when a property
//! query given to a serializer fetch is malformed.

use crate::error::ModuleError;
use crate::reason::ReasonModule;
use crate::Registry;

gen_reason_module!(
    Serializer,
    SerializerReason,
    OsslSerializer,
    "Reason codes of the `OSSL_SERIALIZER` library.",
    [
        (IncorrectPropertyQuery, OSSL_SERIALIZER_R_INCORRECT_PROPERTY_QUERY, 100 => "incorrect property query"),
    ]
);

/// Loads the `OSSL_SERIALIZER` error strings into the process-wide registry.
///
/// Calling this function more than once is harmless: the strings are only
/// loaded the first time.
pub fn load_strings() -> crate::Result<()> {
    load_strings_into(Registry::global())
}

/// Loads the `OSSL_SERIALIZER` error strings into a registry.
pub fn load_strings_into(registry: &Registry) -> crate::Result<()> {
    unwrap_or!(Serializer::load_strings(registry), ModuleError::LoadStrings);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{
        load_strings, load_strings_into, Serializer, SerializerReason,
        OSSL_SERIALIZER_R_INCORRECT_PROPERTY_QUERY,
    };
    use crate::reason::ReasonModule;
    use crate::{Library, PackedError, Registry};

    /// Tests the value of the reason code.
    #[test]
    fn test_reason_code() {
        assert_eq!(OSSL_SERIALIZER_R_INCORRECT_PROPERTY_QUERY, 100);
        assert_eq!(SerializerReason::IncorrectPropertyQuery.value(), 100);
        assert_eq!(
            SerializerReason::try_from(100).unwrap(),
            SerializerReason::IncorrectPropertyQuery
        );
    }

    /// Tests that reason codes are unique within the library.
    #[test]
    fn test_reason_codes_unique() {
        let mut seen = std::collections::HashSet::new();
        for r in SerializerReason::ALL {
            assert!(seen.insert(r.value()));
        }
        let with_100 = SerializerReason::ALL
            .iter()
            .filter(|r| r.value() == 100)
            .count();
        assert_eq!(with_100, 1);
    }

    /// Tests the string table of the module.
    #[test]
    fn test_strings() {
        assert_eq!(Serializer::LIBRARY, Library::OsslSerializer);
        let strings = Serializer::strings();
        assert_eq!(strings.len(), Serializer::reasons().len());
        for (entry, reason) in strings.iter().zip(Serializer::reasons()) {
            assert_eq!(entry.code, reason.packed());
            assert_eq!(entry.text, reason.description());
            assert_eq!(
                crate::Reason::from(*reason).describe(&Registry::new()),
                None
            );
        }
        assert_eq!(
            strings[0].code,
            PackedError::from_library(Library::OsslSerializer, 100).unwrap()
        );
        assert_eq!(strings[0].text, "incorrect property query");
        assert_eq!(
            SerializerReason::IncorrectPropertyQuery.packed(),
            strings[0].code
        );
    }

    /// Tests that a lookup misses before registration.
    #[test]
    fn test_lookup_before_registration() {
        crate::init_test_logging();
        let registry = Registry::with_library_names();
        let code = SerializerReason::IncorrectPropertyQuery.packed();
        assert_eq!(registry.reason_error_string(code), None);
        assert_eq!(registry.lib_error_string(code), Some("SERIALIZER routines"));
    }

    /// Tests registration then lookup.
    #[test]
    fn test_register_then_lookup() {
        crate::init_test_logging();
        let registry = Registry::with_library_names();
        load_strings_into(&registry).unwrap();
        let code = PackedError::from_library(Library::OsslSerializer, 100).unwrap();
        assert_eq!(
            registry.reason_error_string(code),
            Some("incorrect property query")
        );
        assert_eq!(
            registry.error_string(code),
            "error:1D800064:SERIALIZER routines::incorrect property query"
        );
    }

    /// Tests that registering twice is the same as registering once.
    #[test]
    fn test_register_idempotent() {
        let once = Registry::new();
        load_strings_into(&once).unwrap();

        let twice = Registry::new();
        load_strings_into(&twice).unwrap();
        load_strings_into(&twice).unwrap();

        assert_eq!(once.len(), twice.len());
        let code = SerializerReason::IncorrectPropertyQuery.packed();
        assert_eq!(
            once.reason_error_string(code),
            twice.reason_error_string(code)
        );
    }

    /// Tests registration into the process-wide registry.
    #[test]
    fn test_register_global() {
        load_strings().unwrap();
        load_strings().unwrap();
        let code = SerializerReason::IncorrectPropertyQuery.packed();
        assert_eq!(
            Registry::global().reason_error_string(code),
            Some("incorrect property query")
        );
    }

    /// Tests unloading the module strings.
    #[test]
    fn test_unload() {
        let registry = Registry::new();
        load_strings_into(&registry).unwrap();
        Serializer::unload_strings(&registry).unwrap();
        assert!(registry.is_empty());
        load_strings_into(&registry).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
