// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Library namespaces.
//!
//! Every reason code lives in the namespace of one library. Two libraries
//! may use the same reason value without collision.

use std::ffi::c_int;

use crate::error::CodeError;

macro_rules! gen_library_enum {
    ( $name:ident, $doc:expr, $( ($sym:ident, $value:literal, $str:expr)$(,)? )* ) => {
        #[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
        #[doc=$doc]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc=$str]
                $sym = $value,
            )*
        }

        impl TryFrom<c_int> for $name {
            type Error = crate::Error;

            fn try_from(lib: c_int) -> Result<Self, Self::Error> {
                match lib {
                    $(
                        $value => Ok(Self::$sym),
                    )*
                    _ => Err(CodeError::UnknownLibrary.into()),
                }
            }
        }

        impl $name {
            /// All known libraries, in ascending identifier order.
            pub const ALL: &'static [$name] = &[
                $(
                    $name::$sym,
                )*
            ];

            /// Returns the human-readable name of the library.
            pub fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$sym => $str,
                    )*
                }
            }
        }
    };
}

gen_library_enum!(
    Library,
    "Library where an error can occur",
    (None, 1, "unknown library"),
    (Sys, 2, "system library"),
    (Bn, 3, "bignum routines"),
    (Rsa, 4, "rsa routines"),
    (Dh, 5, "Diffie-Hellman routines"),
    (Evp, 6, "digital envelope routines"),
    (Buf, 7, "memory buffer routines"),
    (Obj, 8, "object identifier routines"),
    (Pem, 9, "PEM routines"),
    (Dsa, 10, "dsa routines"),
    (X509, 11, "x509 certificate routines"),
    (Asn1, 13, "asn1 encoding routines"),
    (Conf, 14, "configuration file routines"),
    (Crypto, 15, "common libcrypto routines"),
    (Ec, 16, "elliptic curve routines"),
    (Ssl, 20, "SSL routines"),
    (Bio, 32, "BIO routines"),
    (Pkcs7, 33, "PKCS7 routines"),
    (X509v3, 34, "X509 V3 routines"),
    (Pkcs12, 35, "PKCS12 routines"),
    (Rand, 36, "random number generator"),
    (Dso, 37, "DSO support routines"),
    (Engine, 38, "engine routines"),
    (Ocsp, 39, "OCSP routines"),
    (Ui, 40, "UI routines"),
    (Comp, 41, "compression routines"),
    (Ecdsa, 42, "ECDSA routines"),
    (Ecdh, 43, "ECDH routines"),
    (OsslStore, 44, "STORE routines"),
    (Fips, 45, "FIPS routines"),
    (Cms, 46, "CMS routines"),
    (Ts, 47, "time stamp routines"),
    (Hmac, 48, "HMAC routines"),
    (Ct, 50, "CT routines"),
    (Async, 51, "ASYNC routines"),
    (Kdf, 52, "KDF routines"),
    (Sm2, 53, "SM2 routines"),
    (Ess, 54, "ESS routines"),
    (Prop, 55, "Property routines"),
    (Crmf, 56, "CRMF routines"),
    (Prov, 57, "Provider routines"),
    (Cmp, 58, "CMP routines"),
    (OsslSerializer, 59, "SERIALIZER routines"),
    (User, 128, "user defined routines"),
);

impl Library {
    /// Returns the library identifier.
    pub fn id(self) -> c_int {
        self as u8 as c_int
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Library;

    /// Tests the conversion from a library identifier.
    #[test]
    fn test_try_from() {
        assert_eq!(Library::try_from(59).unwrap(), Library::OsslSerializer);
        assert_eq!(Library::try_from(2).unwrap(), Library::Sys);
        assert!(Library::try_from(12).is_err());
        assert!(Library::try_from(0).is_err());
        assert!(Library::try_from(-1).is_err());
    }

    /// Tests that identifiers are unique and round-trip.
    #[test]
    fn test_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for lib in Library::ALL {
            assert!(seen.insert(lib.id()), "duplicate id {}", lib.id());
            assert_eq!(Library::try_from(lib.id()).unwrap(), *lib);
            assert!(!lib.name().is_empty());
        }
    }

    /// Tests library names.
    #[test]
    fn test_names() {
        assert_eq!(Library::OsslSerializer.name(), "SERIALIZER routines");
        assert_eq!(Library::Prop.to_string(), "Property routines");
    }
}
