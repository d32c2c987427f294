//! Persistence gateway for the game's registry values
//!
//! A [`ValueStore`] opens the one key it was built for; the returned
//! [`ValueKey`] writes named values into it and closes the key on drop.
//! Nothing here retries, creates keys or asks for more access than
//! "set value".

use crate::config::RegistryTarget;
use crate::utils::error::StoreError;

#[cfg(windows)]
mod windows_store;
#[cfg(windows)]
pub use windows_store::{RegistryKey, RegistryStore};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Opens the fixed settings key
pub trait ValueStore {
    type Key: ValueKey;

    /// Key path and value names this store was built with
    fn target(&self) -> &RegistryTarget;

    /// Open the key for writing values. Fails if the key does not exist.
    fn open(&self) -> StoreResult<Self::Key>;
}

/// Writes values into an open key
pub trait ValueKey {
    /// Write an 8-byte unsigned value (`REG_QWORD`)
    fn write_qword(&self, name: &str, value: u64) -> StoreResult<()>;

    /// Write a null-terminated string (`REG_SZ`), terminator included
    fn write_string(&self, name: &str, value: &str) -> StoreResult<()>;
}
