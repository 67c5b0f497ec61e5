// Copyright (c) SandboxAQ. All rights reserved.
// SPDX-License-Identifier: AGPL-3.0-only

//! Error string registry.
//!
//! A [`Registry`] maps packed error codes to static descriptions. Library
//! names are registered under `(library, 0)`, reason strings under
//! `(library, reason)`. Reasons registered under library `0` are shared by
//! all libraries and are used as a fallback.
//!
//! The process-wide registry is reachable through [`Registry::global`]. It
//! is built once, on first use, with the names of all known libraries.

use std::collections::HashMap;
use std::ffi::c_int;
use std::sync::atomic::{AtomicI32, Ordering};
use std::collections::TryReserveError;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RegistryError;
use crate::{Library, PackedError};

/// An entry of an error string table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct StringEntry {
    /// The packed error code.
    pub code: PackedError,

    /// The description.
    pub text: &'static str,
}

impl StringEntry {
    /// Instantiates a new entry.
    pub const fn new(code: PackedError, text: &'static str) -> Self {
        Self { code, text }
    }
}

/// Process-wide registry.
static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// An error string registry.
#[derive(Debug)]
pub struct Registry {
    /// Descriptions, indexed by packed code.
    strings: RwLock<HashMap<PackedError, &'static str>>,

    /// Next dynamic library identifier.
    next_library: AtomicI32,
}

impl std::default::Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Instantiates an empty registry.
    pub fn new() -> Self {
        Self {
            strings: RwLock::new(HashMap::new()),
            next_library: AtomicI32::new(Library::User.id()),
        }
    }

    /// Instantiates a registry holding the names of all known libraries.
    pub fn with_library_names() -> Self {
        let names = Library::ALL
            .iter()
            .map(|lib| (PackedError::pack_unchecked(lib.id() as u32, 0), lib.name()))
            .collect::<HashMap<_, _>>();
        Self {
            strings: RwLock::new(names),
            next_library: AtomicI32::new(Library::User.id()),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            log::debug!("initializing the process-wide error string registry");
            Self::with_library_names()
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<PackedError, &'static str>> {
        self.strings.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes the write lock, recovering it if a writer panicked.
    ///
    /// Entries are inserted and removed one at a time, so a panicking
    /// writer never leaves a half-written entry behind.
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<PackedError, &'static str>> {
        if self.strings.is_poisoned() {
            log::warn!("error string registry lock is poisoned, recovering it");
        }
        self.strings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turns the outcome of the space reservation of a load into a result.
    fn reserved(outcome: Result<(), TryReserveError>, count: usize) -> crate::Result<()> {
        match outcome {
            Ok(()) => {
                log::debug!("loaded {count} error strings");
                Ok(())
            }
            Err(e) => {
                log::error!("cannot reserve {count} error strings: {e}");
                Err(RegistryError::Memory.into())
            }
        }
    }

    /// Loads a table of strings.
    ///
    /// Existing entries with the same code are replaced, so loading the same
    /// table twice leaves the registry unchanged.
    pub fn load_strings(&self, table: &[StringEntry]) -> crate::Result<()> {
        let outcome = {
            let mut strings = self.write();
            strings.try_reserve(table.len()).map(|()| {
                for entry in table {
                    strings.insert(entry.code, entry.text);
                }
            })
        };
        Self::reserved(outcome, table.len())
    }

    /// Loads a table of strings, unless its first entry is already present.
    pub fn load_strings_once(&self, table: &[StringEntry]) -> crate::Result<()> {
        let Some(first) = table.first() else {
            return Ok(());
        };
        if self.contains(first.code) {
            log::trace!("error strings for {} already loaded", first.code);
            return Ok(());
        }
        self.load_strings(table)
    }

    /// Removes a table of strings.
    pub fn unload_strings(&self, table: &[StringEntry]) -> crate::Result<()> {
        {
            let mut strings = self.write();
            for entry in table {
                strings.remove(&entry.code);
            }
        }
        log::debug!("unloaded {} error strings", table.len());
        Ok(())
    }

    /// Returns true if a description is registered for the exact code.
    pub fn contains(&self, code: PackedError) -> bool {
        self.read().contains_key(&code)
    }

    /// Returns the number of registered descriptions.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns the emptiness of the registry.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the name of the library of an error code.
    pub fn lib_error_string(&self, code: PackedError) -> Option<&'static str> {
        self.read().get(&code.library_key()).copied()
    }

    /// Returns the description of the reason of an error code.
    ///
    /// System errors have no registered reason.
    pub fn reason_error_string(&self, code: PackedError) -> Option<&'static str> {
        if code.is_system_error() {
            return None;
        }
        let strings = self.read();
        let reason = code.reason() as u32;
        let found = strings
            .get(&PackedError::pack_unchecked(code.library() as u32, reason))
            .or_else(|| strings.get(&PackedError::pack_unchecked(0, reason)))
            .copied();
        log::trace!("reason lookup for {code}: {found:?}");
        found
    }

    /// Renders an error code as `error:<code>:<library>::<reason>`.
    ///
    /// Unregistered parts are rendered as `lib(N)` and `reason(N)`.
    pub fn error_string(&self, code: PackedError) -> String {
        let lib = match self.lib_error_string(code) {
            Some(s) => s.to_string(),
            None => format!("lib({})", code.library()),
        };
        let reason = match self.reason_error_string(code) {
            Some(s) => s.to_string(),
            None => format!("reason({})", code.reason()),
        };
        format!("error:{code}:{lib}::{reason}")
    }

    /// Renders an error code into a buffer, as [`Registry::error_string`].
    ///
    /// The output is truncated to fit and always NUL-terminated, unless
    /// `buf` is empty. Returns the number of bytes written, NUL excluded.
    pub fn error_string_n(&self, code: PackedError, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let s = self.error_string(code);
        let n = s.len().min(room);
        buf[..n].copy_from_slice(&s.as_bytes()[..n]);
        buf[n] = 0;
        n
    }

    /// Allocates a dynamic library identifier.
    ///
    /// Identifiers are handed out from [`Library::User`] up to `0xFF`.
    pub fn allocate_library(&self) -> crate::Result<c_int> {
        self.next_library
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| {
                (id <= crate::packed::LIB_MASK as c_int).then_some(id + 1)
            })
            .map_err(|_| {
                log::error!("no dynamic library identifier left");
                crate::Error::from(RegistryError::LibrariesExhausted)
            })
    }
}
