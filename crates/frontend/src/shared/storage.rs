//! `localStorage`-backed preference store.

use contracts::shared::preference::{PreferenceError, PreferenceStore};
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

fn get_local_storage() -> Result<web_sys::Storage, PreferenceError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PreferenceError::Unavailable)
}

/// Browser `localStorage`. Outside a browser every call reports
/// [`PreferenceError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, slot: &str) -> Result<Option<String>, PreferenceError> {
        get_local_storage()?
            .get_item(slot)
            .map_err(|_| PreferenceError::Unavailable)
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), PreferenceError> {
        get_local_storage()?
            .set_item(slot, value)
            .map_err(|e| PreferenceError::Rejected(format!("{:?}", e)))
    }
}

/// App-wide preference store handed to widgets through context.
#[derive(Clone)]
pub struct SharedPreferences(pub Arc<dyn PreferenceStore>);

impl SharedPreferences {
    pub fn local() -> Self {
        Self(Arc::new(LocalStorage))
    }
}

/// Store for a widget: the explicit one if given, else the app context,
/// else `localStorage`.
pub fn resolve_store(explicit: Option<Arc<dyn PreferenceStore>>) -> Arc<dyn PreferenceStore> {
    explicit
        .or_else(|| use_context::<SharedPreferences>().map(|prefs| prefs.0))
        .unwrap_or_else(|| Arc::new(LocalStorage))
}
