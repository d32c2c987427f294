use super::{StoreResult, ValueKey, ValueStore};
use crate::config::RegistryTarget;
use crate::utils::error::StoreError;
use std::io;
use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
use winreg::RegKey;

/// Settings store under `HKEY_CURRENT_USER`
#[derive(Debug, Clone)]
pub struct RegistryStore {
    target: RegistryTarget,
}

impl RegistryStore {
    pub fn new(target: RegistryTarget) -> Self {
        Self { target }
    }
}

/// Open settings key; closed when dropped
pub struct RegistryKey {
    key: RegKey,
}

fn os_error(err: &io::Error) -> StoreError {
    StoreError::new(err.raw_os_error().unwrap_or(-1))
}

impl ValueStore for RegistryStore {
    type Key = RegistryKey;

    fn target(&self) -> &RegistryTarget {
        &self.target
    }

    fn open(&self) -> StoreResult<RegistryKey> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        match hkcu.open_subkey_with_flags(self.target.key_path, KEY_SET_VALUE) {
            Ok(key) => {
                tracing::debug!(path = self.target.key_path, "Opened registry key");
                Ok(RegistryKey { key })
            }
            Err(e) => {
                tracing::warn!(path = self.target.key_path, error = %e, "Failed to open registry key");
                Err(os_error(&e))
            }
        }
    }
}

impl ValueKey for RegistryKey {
    fn write_qword(&self, name: &str, value: u64) -> StoreResult<()> {
        self.key.set_value(name, &value).map_err(|e| {
            tracing::warn!(name, error = %e, "QWORD write failed");
            os_error(&e)
        })
    }

    fn write_string(&self, name: &str, value: &str) -> StoreResult<()> {
        // winreg stores String as REG_SZ, UTF-16 with the terminator included
        self.key.set_value(name, &value.to_string()).map_err(|e| {
            tracing::warn!(name, error = %e, "String write failed");
            os_error(&e)
        })
    }
}
