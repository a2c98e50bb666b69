//! Platform abstraction layer
//!
//! Browser/native differences for logging and the key/value store backing
//! best records. Simulation cores never touch this module; the persistence
//! layer and the shell do.

/// Initialize logging for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Initialize logging for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::builder().try_init();
}

/// Read a string value from LocalStorage.
#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Write a string value to LocalStorage. Failures are logged and dropped.
#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();
    if let Some(storage) = storage {
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
}

/// Native stub: nothing is persisted outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_get(_key: &str) -> Option<String> {
    None
}

/// Native stub: nothing is persisted outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_set(_key: &str, _value: &str) {}
