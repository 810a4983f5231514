//! Theme Preference
//!
//! Light/dark preference persisted per browser profile and applied to the
//! document. Storage and the document are reached through traits so the
//! store can run against `localStorage` in the browser and in-memory fakes
//! in tests.

use std::fmt;
use std::str::FromStr;

use crate::error::ClientResult;

/// Storage key for the persisted theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Binary UI theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button. It shows the theme a click switches to:
    /// a sun while dark is active, a moon while light is active.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Tooltip for the toggle button
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored value is neither `light` nor `dark`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value persistence (browser `localStorage` or a fake)
pub trait PreferenceBackend {
    fn load(&self, key: &str) -> ClientResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> ClientResult<()>;
}

/// Where the active theme is shown (the document root and toggle button)
pub trait ThemeTarget {
    /// Theme currently applied, if any has been
    fn applied(&self) -> Option<Theme>;

    /// Apply `theme` to the page, including the toggle glyph
    fn apply(&self, theme: Theme);
}

/// Reads, persists and applies the theme preference
#[derive(Clone, Debug)]
pub struct PreferenceStore<B, T> {
    backend: B,
    target: T,
}

impl<B: PreferenceBackend, T: ThemeTarget> PreferenceStore<B, T> {
    pub fn new(backend: B, target: T) -> Self {
        Self { backend, target }
    }

    /// Persisted theme; light when nothing (or garbage) is stored
    pub fn get(&self) -> Theme {
        match self.backend.load(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored theme");
                Theme::default()
            }
        }
    }

    /// Persist `theme` and apply it to the page.
    ///
    /// A failed write is logged; the theme is still applied for this session.
    pub fn set(&self, theme: Theme) {
        if let Err(e) = self.backend.save(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "Could not persist theme");
        }
        self.target.apply(theme);
        tracing::debug!(theme = %theme, "Theme applied");
    }

    /// Flip the applied theme (not the stored one) and persist the result
    pub fn toggle(&self) -> Theme {
        let current = self.target.applied().unwrap_or_else(|| self.get());
        let next = current.flipped();
        self.set(next);
        next
    }

    /// Apply the stored theme at startup without rewriting storage
    pub fn initialize(&self) -> Theme {
        let theme = self.get();
        self.target.apply(theme);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default)]
    struct MemoryBackend {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryBackend {
        fn new() -> Self {
            Self::default()
        }
    }

    impl PreferenceBackend for MemoryBackend {
        fn load(&self, key: &str) -> ClientResult<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> ClientResult<()> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeDocument {
        applied: Rc<RefCell<Option<Theme>>>,
    }

    impl FakeDocument {
        fn glyph(&self) -> Option<&'static str> {
            self.applied.borrow().map(|t| t.toggle_glyph())
        }
    }

    impl ThemeTarget for FakeDocument {
        fn applied(&self) -> Option<Theme> {
            *self.applied.borrow()
        }

        fn apply(&self, theme: Theme) {
            *self.applied.borrow_mut() = Some(theme);
        }
    }

    struct BrokenBackend;

    impl PreferenceBackend for BrokenBackend {
        fn load(&self, _key: &str) -> ClientResult<Option<String>> {
            Err(ClientError::Storage("SecurityError".to_string()))
        }

        fn save(&self, _key: &str, _value: &str) -> ClientResult<()> {
            Err(ClientError::Storage("QuotaExceededError".to_string()))
        }
    }

    fn store() -> (PreferenceStore<MemoryBackend, FakeDocument>, MemoryBackend, FakeDocument) {
        let backend = MemoryBackend::new();
        let doc = FakeDocument::default();
        (PreferenceStore::new(backend.clone(), doc.clone()), backend, doc)
    }

    #[test]
    fn test_default_is_light() {
        let (store, _, _) = store();
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_invalid_value_is_light() {
        let (store, backend, _) = store();
        backend.save(THEME_STORAGE_KEY, "solarized").unwrap();
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_set_persists_and_applies() {
        let (store, backend, doc) = store();
        store.set(Theme::Dark);
        assert_eq!(
            backend.load(THEME_STORAGE_KEY).unwrap(),
            Some("dark".to_string())
        );
        assert_eq!(doc.applied(), Some(Theme::Dark));
        assert_eq!(doc.glyph(), Some("☀️"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let (store, backend, doc) = store();
        backend.save(THEME_STORAGE_KEY, "dark").unwrap();
        store.initialize();
        let starting_glyph = doc.glyph();

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(doc.glyph(), Some("🌙"));
        assert_eq!(store.toggle(), Theme::Dark);

        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(doc.glyph(), starting_glyph);
    }

    #[test]
    fn test_toggle_reads_applied_not_stored() {
        let (store, backend, doc) = store();
        doc.apply(Theme::Dark);
        backend.save(THEME_STORAGE_KEY, "light").unwrap();

        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn test_broken_storage_still_applies() {
        let doc = FakeDocument::default();
        let store = PreferenceStore::new(BrokenBackend, doc.clone());

        assert_eq!(store.initialize(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(doc.applied(), Some(Theme::Dark));
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("".parse::<Theme>().is_err());
    }
}
