//! Browser Preferences
//!
//! `localStorage` persistence and the document-level theme attribute.

use activity_signup::{
    ClientError, ClientResult, PreferenceBackend, PreferenceStore, Theme, ThemeTarget,
    API_BASE_STORAGE_KEY,
};
use leptos::*;

/// Attribute on `<html>` the stylesheet keys its colours on
const THEME_ATTRIBUTE: &str = "data-theme";

/// Theme preference persisted in `localStorage` and applied to the document
pub type ThemePreferences = PreferenceStore<LocalStorageBackend, DocumentTheme>;

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> ClientResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| ClientError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| ClientError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
}

impl PreferenceBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> ClientResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> ClientResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}

/// API base override, if one was stored
pub fn stored_api_base() -> Option<String> {
    match LocalStorageBackend.load(API_BASE_STORAGE_KEY) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read API base override");
            None
        }
    }
}

/// The document root plus the reactive theme signal the toggle reads
#[derive(Clone, Copy, Debug)]
pub struct DocumentTheme {
    theme: RwSignal<Theme>,
}

impl DocumentTheme {
    pub fn new(theme: RwSignal<Theme>) -> Self {
        Self { theme }
    }
}

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl ThemeTarget for DocumentTheme {
    fn applied(&self) -> Option<Theme> {
        document_element()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = document_element() {
            if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                tracing::warn!(error = ?e, "Could not set theme attribute");
            }
        }
        // The toggle glyph is derived from this signal
        self.theme.set(theme);
    }
}
