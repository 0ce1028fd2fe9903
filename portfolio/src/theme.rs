use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// key of the persisted preference in the client-side store
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class applied to the portfolio root; styling for the whole tree keys off it.
    pub fn css_class(self) -> &'static str {
        self.as_str()
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// the raw persisted value
//
// an empty string counts as "nothing stored", while anything other than "dark" is an explicit
// light preference; this means a corrupted value never falls through to the system signal
pub struct ThemePreference;

impl ThemePreference {
    pub fn parse(stored: &str) -> Option<Theme> {
        match stored {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }
}

/// Persistent key-value store holding the user's explicit choice.
///
/// Implementations are best-effort and report their own failures; callers only
/// fall back to the in-memory theme.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, value: &str) -> Result<()>;
}

/// Read-only "prefers dark color scheme" signal from the host environment.
pub trait SystemThemeProbe {
    fn prefers_dark(&self) -> Result<bool>;
}

// startup resolution
//
// explicit stored preference wins, then the system signal, then light. this is only meant to be
// called once per page load
pub fn resolve_theme<S, P>(store: &S, probe: &P) -> Theme
where
    S: PreferenceStore + ?Sized,
    P: SystemThemeProbe + ?Sized,
{
    // an unreadable store counts as "nothing stored"
    let stored = store
        .load()
        .ok()
        .flatten()
        .as_deref()
        .and_then(ThemePreference::parse);

    if let Some(theme) = stored {
        debug!(%theme, "using stored theme preference");
        return theme;
    }

    let theme = match probe.prefers_dark() {
        Ok(true) => Theme::Dark,
        Ok(false) => Theme::Light,
        Err(err) => {
            warn!("system color scheme query failed, defaulting to light: {err:#}");
            Theme::Light
        }
    };

    debug!(%theme, "using system theme");
    theme
}

// flip the theme and persist the new value
//
// a failed write leaves the new theme in memory only, the returned theme is always the flipped one
pub fn toggle<S>(current: Theme, store: &S) -> Theme
where
    S: PreferenceStore + ?Sized,
{
    let next = current.flipped();
    let persisted = store.save(next.as_str()).is_ok();

    debug!(theme = %next, persisted, "theme toggled");
    next
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    #[test]
    fn test_stored_dark_wins_over_probe() {
        for ambient in [true, false] {
            let store = MemoryStore::with("dark");
            assert_eq!(resolve_theme(&store, &FixedProbe(ambient)), Theme::Dark);
        }
    }

    #[test]
    fn test_stored_light_wins_over_dark_probe() {
        let store = MemoryStore::with("light");
        assert_eq!(resolve_theme(&store, &FixedProbe(true)), Theme::Light);
    }

    #[test]
    fn test_absent_preference_follows_probe() {
        let store = MemoryStore::default();
        assert_eq!(resolve_theme(&store, &FixedProbe(true)), Theme::Dark);
        assert_eq!(resolve_theme(&store, &FixedProbe(false)), Theme::Light);
    }

    #[test]
    fn test_resolution_does_not_write() {
        let store = MemoryStore::default();
        resolve_theme(&store, &FixedProbe(true));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let store = MemoryStore::with("");
        assert_eq!(resolve_theme(&store, &FixedProbe(true)), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_is_light() {
        let store = MemoryStore::with("solarized");
        assert_eq!(resolve_theme(&store, &FixedProbe(true)), Theme::Light);
    }

    #[test]
    fn test_failures_degrade() {
        assert_eq!(resolve_theme(&BrokenStore, &FixedProbe(true)), Theme::Dark);
        assert_eq!(resolve_theme(&BrokenStore, &BrokenProbe), Theme::Light);
        assert_eq!(resolve_theme(&MemoryStore::default(), &BrokenProbe), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::default();

        let theme = toggle(Theme::Light, &store);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get().as_deref(), Some("dark"));

        let theme = toggle(theme, &store);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_writes_once() {
        let store = MemoryStore::default();
        toggle(Theme::Light, &store);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_resolution_skips_unreadable_store() {
        // the store reports its own failure, resolution just moves on to the system signal
        assert_eq!(resolve_theme(&BrokenStore, &FixedProbe(false)), Theme::Light);
        assert_eq!(resolve_theme(&BrokenStore, &FixedProbe(true)), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_broken_store() {
        assert_eq!(toggle(Theme::Light, &BrokenStore), Theme::Dark);
        assert_eq!(toggle(Theme::Dark, &BrokenStore), Theme::Light);
    }

    #[test]
    fn test_toggle_then_reload() {
        let store = MemoryStore::default();
        let theme = resolve_theme(&store, &FixedProbe(false));
        toggle(theme, &store);

        // the next page load sees the stored choice, not the system signal
        assert_eq!(resolve_theme(&store, &FixedProbe(false)), Theme::Dark);
    }

    #[test]
    fn test_theme_strings() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.css_class(), "light");
        assert_eq!(ThemePreference::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(ThemePreference::parse(Theme::Light.as_str()), Some(Theme::Light));
    }
}
