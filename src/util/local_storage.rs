//! `window.localStorage` as a [`records::Storage`] backend.
//!
//! The storage handle is looked up on every call, so the backend is a unit
//! struct that can live inside a reactive signal. Outside the browser
//! (`csr` disabled) storage is reported as unavailable, which the record
//! store treats as an empty log.

use records::{Storage, StorageError};

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("localStorage unavailable: key={key}");
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("localStorage unavailable: key={key} bytes={}", value.len());
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Read(js_error_text(&e))),
    }
}

#[cfg(feature = "csr")]
fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
