use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::storage::KeyValueStore;

// browser local storage
//
// values are stored as the bare string (no json quoting) so that a preference written by an
// older build of the site is still read back
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
