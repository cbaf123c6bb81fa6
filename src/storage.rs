//! Browser Storage
//!
//! `window.localStorage` behind the core's key-value capability.

use my_list_core::{DomainError, DomainResult, KeyValueStorage};
use wasm_bindgen::JsValue;

/// localStorage of the current window, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_err(e: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", e))
}

impl BrowserStorage {
    fn local_storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_err)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_then_get() {
        let storage = BrowserStorage;
        storage.set("my-list-test", "[]").unwrap();
        assert_eq!(storage.get("my-list-test").unwrap().as_deref(), Some("[]"));
    }
}
